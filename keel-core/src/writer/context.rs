use crate::TableDef;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    #[default]
    None,
    SqlWith,
    SqlInsertInto,
    SqlInsertIntoColumns,
    SqlInsertIntoValues,
    SqlInsertIntoSelect,
    SqlInsertIntoOnConflict,
    SqlInsertIntoSet,
    SqlInsertIntoWhere,
    SqlInsertIntoReturning,
}

/// How model values reach the statement.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Values are bound as arguments and replaced by placeholders.
    #[default]
    Bind,
    /// Values are written as SQL literals.
    Inline,
    /// Every model value becomes `?`, nothing is bound.
    Template,
}

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub fragment: Fragment,
    pub mode: WriteMode,
    /// Descriptor of the bound model, used by named placeholders.
    pub table: Option<&'static TableDef>,
}

impl Context {
    pub fn new(fragment: Fragment, mode: WriteMode) -> Self {
        Self {
            fragment,
            mode,
            table: None,
        }
    }
    pub fn with_table(mut self, table: Option<&'static TableDef>) -> Self {
        self.table = table;
        self
    }
    pub fn is_template(&self) -> bool {
        self.mode == WriteMode::Template
    }
    pub fn switch_fragment(&self, fragment: Fragment) -> Context {
        Context { fragment, ..*self }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new(Fragment::None, WriteMode::Bind)
    }
}
