use std::borrow::Cow;

/// Name of a table, optionally qualified by schema and aliased.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub name: Cow<'static, str>,
    pub schema: Cow<'static, str>,
    pub alias: Cow<'static, str>,
}

impl TableRef {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
    pub fn with_schema(mut self, schema: impl Into<Cow<'static, str>>) -> Self {
        self.schema = schema.into();
        self
    }
    pub fn with_alias(mut self, alias: impl Into<Cow<'static, str>>) -> Self {
        self.alias = alias.into();
        self
    }
    pub fn has_alias(&self) -> bool {
        !self.alias.is_empty()
    }
    /// `schema.name`, ignoring the alias.
    pub fn qualified_name(&self) -> String {
        if self.schema.is_empty() {
            self.name.to_string()
        } else {
            format!("{}.{}", self.schema, self.name)
        }
    }
}
