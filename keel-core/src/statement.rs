use crate::{Value, truncate_long};
use std::fmt::{self, Display, Write};

/// Rendered SQL text together with its positional arguments.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub args: Vec<Value>,
}

impl Statement {
    pub fn new() -> Self {
        Default::default()
    }
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sql: String::with_capacity(capacity),
            args: Vec::new(),
        }
    }
    pub fn push(&mut self, c: char) {
        self.sql.push(c);
    }
    pub fn push_str(&mut self, value: &str) {
        self.sql.push_str(value);
    }
    pub fn len(&self) -> usize {
        self.sql.len()
    }
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
    pub fn as_str(&self) -> &str {
        &self.sql
    }
    /// Append an argument, returns its 1-based position.
    pub fn bind(&mut self, value: Value) -> usize {
        self.args.push(value);
        self.args.len()
    }
}

impl Write for Statement {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.sql.push_str(s);
        Ok(())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", truncate_long!(self.sql))
    }
}

impl From<&str> for Statement {
    fn from(value: &str) -> Self {
        Self {
            sql: value.into(),
            args: Vec::new(),
        }
    }
}

impl From<String> for Statement {
    fn from(value: String) -> Self {
        Self {
            sql: value,
            args: Vec::new(),
        }
    }
}
