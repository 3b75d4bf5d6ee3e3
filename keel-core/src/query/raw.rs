use crate::{AsValue, Context, InsertError, Result, SqlWriter, Statement, Value, separated_by};
use std::borrow::Cow;

/// Something that renders itself into a statement.
pub trait QueryAppender {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
    ) -> Result<()>;
}

/// Identifier argument, rendered quoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident(pub Cow<'static, str>);

impl Ident {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }
}

/// Trusted SQL argument, rendered verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Safe(pub Cow<'static, str>);

impl Safe {
    pub fn new(sql: impl Into<Cow<'static, str>>) -> Self {
        Self(sql.into())
    }
}

/// Argument substituted for a `?` placeholder of a [`Raw`] query.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Value(Value),
    Ident(Cow<'static, str>),
    Safe(Cow<'static, str>),
    Query(Raw),
}

impl<T: AsValue> From<T> for Arg {
    fn from(value: T) -> Self {
        Arg::Value(value.as_value())
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        Arg::Value(value)
    }
}

impl From<&'static str> for Arg {
    fn from(value: &'static str) -> Self {
        Arg::Value(value.into())
    }
}

impl From<Ident> for Arg {
    fn from(value: Ident) -> Self {
        Arg::Ident(value.0)
    }
}

impl From<Safe> for Arg {
    fn from(value: Safe) -> Self {
        Arg::Safe(value.0)
    }
}

impl From<Raw> for Arg {
    fn from(value: Raw) -> Self {
        Arg::Query(value)
    }
}

/// SQL text with arguments.
///
/// Placeholders:
/// - `?` takes the next positional argument;
/// - `?0`, `?1`, ... take the argument at that index;
/// - `?TableName`, `?TableAlias`, `?PKs` and `?Columns` expand from the
///   bound model;
/// - `\?` is a literal question mark.
///
/// A query without arguments leaves positional placeholders untouched.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Raw {
    pub query: Cow<'static, str>,
    pub args: Vec<Arg>,
}

impl Raw {
    pub fn new(query: impl Into<Cow<'static, str>>) -> Self {
        Self {
            query: query.into(),
            args: Vec::new(),
        }
    }
    pub fn arg(mut self, arg: impl Into<Arg>) -> Self {
        self.args.push(arg.into());
        self
    }
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.args.is_empty()
    }

    fn write_arg(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
        index: usize,
    ) -> Result<()> {
        let Some(arg) = self.args.get(index) else {
            return Err(InsertError::MissingArgument(self.query.to_string()).into());
        };
        match arg {
            Arg::Value(v) => writer.write_value(context, out, v),
            Arg::Ident(v) => writer.write_identifier_quoted(context, out, v),
            Arg::Safe(v) => out.push_str(v),
            Arg::Query(v) => v.write_query(writer, context, out)?,
        }
        Ok(())
    }

    /// Expand a named placeholder, returns false when the name is unknown.
    fn write_named(
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
        name: &str,
    ) -> bool {
        let Some(table) = context.table else {
            return false;
        };
        match name {
            "TableName" => {
                writer.write_table_ref(context, out, &table.table, false);
            }
            "TableAlias" => {
                let alias = if table.table.has_alias() {
                    &table.table.alias
                } else {
                    &table.table.name
                };
                writer.write_identifier_quoted(context, out, alias);
            }
            "PKs" => separated_by(
                out,
                table.primary_keys(),
                |out, v| writer.write_identifier_quoted(context, out, v.name),
                ", ",
            ),
            "Columns" => separated_by(
                out,
                table.fields.iter(),
                |out, v| writer.write_identifier_quoted(context, out, v.name),
                ", ",
            ),
            _ => return false,
        }
        true
    }
}

impl QueryAppender for Raw {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
    ) -> Result<()> {
        let query = self.query.as_ref();
        let mut position = 0;
        let mut next_arg = 0;
        let mut chars = query.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' if matches!(chars.peek(), Some((_, '?'))) => {
                    out.push_str(&query[position..i]);
                    chars.next();
                    out.push('?');
                    position = i + 2;
                }
                '?' => {
                    out.push_str(&query[position..i]);
                    let start = i + 1;
                    let rest = &query[start..];
                    let digits = rest.chars().take_while(char::is_ascii_digit).count();
                    if digits > 0 {
                        let index = rest[..digits].parse::<usize>().map_err(|e| {
                            crate::Error::new(e).context(format!(
                                "Invalid placeholder index in `{}`",
                                self.query
                            ))
                        })?;
                        self.write_arg(writer, context, out, index)?;
                        position = start + digits;
                    } else if rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
                        let len = rest
                            .chars()
                            .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
                            .count();
                        if !Self::write_named(writer, context, out, &rest[..len]) {
                            out.push('?');
                            out.push_str(&rest[..len]);
                        }
                        position = start + len;
                    } else if self.args.is_empty() {
                        out.push('?');
                        position = start;
                    } else {
                        self.write_arg(writer, context, out, next_arg)?;
                        next_arg += 1;
                        position = start;
                    }
                    while chars.peek().is_some_and(|(j, _)| *j < position) {
                        chars.next();
                    }
                }
                _ => {}
            }
        }
        out.push_str(&query[position..]);
        Ok(())
    }
}

impl From<&'static str> for Raw {
    fn from(value: &'static str) -> Self {
        Raw::new(value)
    }
}

impl From<String> for Raw {
    fn from(value: String) -> Self {
        Raw::new(value)
    }
}

/// Build a [`Raw`] query from SQL text followed by its arguments.
///
/// ```rust
/// use keel_core::raw;
/// let query = raw!("id = ? AND name = ?", 1, "John");
/// assert_eq!(query.args.len(), 2);
/// ```
#[macro_export]
macro_rules! raw {
    ($query:expr $(, $arg:expr)* $(,)?) => {
        $crate::Raw::new($query)$(.arg($arg))*
    };
}
