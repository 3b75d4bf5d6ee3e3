use crate::{Context, FieldDef, QueryAppender, Raw, Result, SqlWriter, Statement};

/// `RETURNING` columns requested by the caller.
///
/// Fields the database fills in on its own (skipped or defaulted during
/// rendering) are passed in as `implicit` and used only when nothing was
/// requested explicitly.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ReturningList {
    returning: Vec<Raw>,
}

impl ReturningList {
    pub fn add(&mut self, returning: Raw) {
        self.returning.push(returning);
    }
    pub fn is_explicit(&self) -> bool {
        !self.returning.is_empty()
    }

    /// A single argument-free `NULL` (or empty) entry suppresses the clause.
    pub fn is_suppressed(&self) -> bool {
        match self.returning.as_slice() {
            [single] if single.args.is_empty() => {
                matches!(single.query.as_ref(), "" | "null" | "NULL")
            }
            _ => false,
        }
    }

    pub fn has_returning(&self, implicit: &[&FieldDef]) -> bool {
        if self.is_suppressed() {
            return false;
        }
        !self.returning.is_empty() || !implicit.is_empty()
    }

    /// Render ` RETURNING ...`.
    pub fn write(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
        implicit: &[&FieldDef],
    ) -> Result<()> {
        out.push_str(" RETURNING ");
        if !self.returning.is_empty() {
            for (i, returning) in self.returning.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                returning.write_query(writer, context, out)?;
            }
            return Ok(());
        }
        for (i, field) in implicit.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            writer.write_identifier_quoted(context, out, field.name);
        }
        Ok(())
    }
}
