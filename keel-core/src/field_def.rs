use crate::{InsertHook, InsertQuery, Result, TableRef};
use std::fmt::{self, Debug};

/// Column of a table descriptor, bound to a record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Column name.
    pub name: &'static str,
    /// Name of the Rust field.
    pub ident: &'static str,
    /// Position inside `TableDef::fields`.
    pub index: usize,
    /// The Rust type is an `Option`.
    pub nullable: bool,
    pub not_null: bool,
    /// A zero value is stored as NULL or DEFAULT.
    pub null_zero: bool,
    /// SQL expression the database uses when the column is omitted.
    pub sql_default: Option<&'static str>,
    pub primary_key: bool,
    pub auto_increment: bool,
}

impl FieldDef {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            ident: name,
            index: 0,
            nullable: false,
            not_null: false,
            null_zero: false,
            sql_default: None,
            primary_key: false,
            auto_increment: false,
        }
    }
    pub const fn ident(mut self, ident: &'static str) -> Self {
        self.ident = ident;
        self
    }
    pub const fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
    pub const fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }
    pub const fn null_zero(mut self) -> Self {
        self.null_zero = true;
        self
    }
    /// Also implies `null_zero`.
    pub const fn sql_default(mut self, expression: &'static str) -> Self {
        self.sql_default = Some(expression);
        self.null_zero = true;
        self
    }
    /// Also implies `not_null`.
    pub const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.not_null = true;
        self
    }
    /// Also implies `null_zero`.
    pub const fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self.null_zero = true;
        self
    }
    /// Column that is left out of the INSERT when its value is zero and the
    /// dialect cannot express `DEFAULT` in a value list.
    pub fn skip_when_zero(&self) -> bool {
        self.not_null && self.null_zero && self.sql_default.is_none()
    }
}

pub type InsertHookFn = for<'q, 'm> fn(&'q mut InsertQuery<'m>) -> Result<()>;

fn no_hook(_query: &mut InsertQuery<'_>) -> Result<()> {
    Ok(())
}

/// Lifecycle callbacks of a record type, cached in its descriptor.
#[derive(Clone, Copy)]
pub struct Hooks {
    pub before_insert: InsertHookFn,
    pub after_insert: InsertHookFn,
}

impl Hooks {
    pub fn of<E: InsertHook>() -> Self {
        Self {
            before_insert: E::before_insert,
            after_insert: E::after_insert,
        }
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Self {
            before_insert: no_hook,
            after_insert: no_hook,
        }
    }
}

impl Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks").finish_non_exhaustive()
    }
}

/// Table descriptor: the ordered fields of a record type and its keys.
///
/// Built once per type, usually by `#[derive(Entity)]` into a static.
#[derive(Debug)]
pub struct TableDef {
    pub table: TableRef,
    pub fields: Box<[FieldDef]>,
    /// Indexes into `fields`, in declaration order.
    pub primary_keys: Box<[usize]>,
    pub hooks: Hooks,
}

impl TableDef {
    pub fn new(table: TableRef, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        let fields: Box<[FieldDef]> = fields
            .into_iter()
            .enumerate()
            .map(|(index, field)| FieldDef { index, ..field })
            .collect();
        let primary_keys = fields
            .iter()
            .filter(|v| v.primary_key)
            .map(|v| v.index)
            .collect();
        Self {
            table,
            fields,
            primary_keys,
            hooks: Default::default(),
        }
    }
    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|v| v.name == name)
    }
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
    pub fn primary_keys(&self) -> impl Iterator<Item = &FieldDef> + Clone {
        self.primary_keys.iter().map(|i| &self.fields[*i])
    }
    /// Fields that are not part of the primary key.
    pub fn data_fields(&self) -> impl Iterator<Item = &FieldDef> + Clone {
        self.fields.iter().filter(|v| !v.primary_key)
    }
}
