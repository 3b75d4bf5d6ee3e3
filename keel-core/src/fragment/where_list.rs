use crate::{Context, QueryAppender, Raw, Result, SqlWriter, Statement};

/// Conditions joined by `AND` / `OR`, each one parenthesized.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct WhereList {
    conditions: Vec<(Raw, &'static str)>,
}

impl WhereList {
    pub fn and(&mut self, condition: Raw) {
        self.conditions.push((condition, " AND "));
    }
    pub fn or(&mut self, condition: Raw) {
        self.conditions.push((condition, " OR "));
    }
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Render ` WHERE (a) AND (b)`, nothing when empty.
    pub fn write(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
    ) -> Result<()> {
        if self.conditions.is_empty() {
            return Ok(());
        }
        out.push_str(" WHERE ");
        for (i, (condition, separator)) in self.conditions.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push('(');
            condition.write_query(writer, context, out)?;
            out.push(')');
        }
        Ok(())
    }
}
