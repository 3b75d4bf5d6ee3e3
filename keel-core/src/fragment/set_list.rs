use crate::{Context, QueryAppender, Raw, Result, SqlWriter, Statement};

/// Assignments of the conflict action.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SetList {
    assignments: Vec<Raw>,
}

impl SetList {
    pub fn add(&mut self, assignment: Raw) {
        self.assignments.push(assignment);
    }
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn write(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
    ) -> Result<()> {
        for (i, assignment) in self.assignments.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            assignment.write_query(writer, context, out)?;
        }
        Ok(())
    }
}
