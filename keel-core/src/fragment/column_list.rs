use crate::{Context, FieldDef, InsertError, SqlWriter, Statement, TableDef, separated_by};
use std::borrow::Cow;

/// Explicit column selection.
///
/// `None` means every field of the model, an empty list is an explicit empty
/// selection.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct ColumnList {
    columns: Option<Vec<Cow<'static, str>>>,
}

impl ColumnList {
    pub fn add(&mut self, column: impl Into<Cow<'static, str>>) {
        self.columns.get_or_insert_default().push(column.into());
    }

    /// Remove columns from the selection, starting from every field of the
    /// table. `"*"` alone clears the selection.
    pub fn exclude(&mut self, table: &TableDef, columns: &[&str]) -> Result<(), InsertError> {
        let selected = self.columns.get_or_insert_with(|| {
            table
                .fields
                .iter()
                .map(|v| Cow::Borrowed(v.name))
                .collect()
        });
        if columns == ["*"] {
            selected.clear();
            return Ok(());
        }
        for column in columns {
            let Some(position) = selected.iter().position(|v| v == column) else {
                return Err(InsertError::UnknownColumn {
                    table: table.table.qualified_name(),
                    column: column.to_string(),
                });
            };
            selected.remove(position);
        }
        Ok(())
    }

    pub fn is_set(&self) -> bool {
        self.columns.is_some()
    }
    /// No column was requested, an explicitly cleared list counts as empty.
    pub fn is_empty(&self) -> bool {
        self.columns.as_ref().is_none_or(Vec::is_empty)
    }
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().flatten().map(|v| &**v)
    }

    fn resolve(
        &self,
        table: &'static TableDef,
        omit_primary_keys: bool,
    ) -> Result<Vec<&'static FieldDef>, InsertError> {
        let mut result = Vec::new();
        for name in self.names() {
            let Some(field) = table.field(name) else {
                return Err(InsertError::UnknownColumn {
                    table: table.table.qualified_name(),
                    column: name.to_string(),
                });
            };
            if omit_primary_keys && field.primary_key {
                continue;
            }
            result.push(field);
        }
        Ok(result)
    }

    /// Fields of the requested columns, every field when none was requested.
    pub fn fields(&self, table: &'static TableDef) -> Result<Vec<&'static FieldDef>, InsertError> {
        if self.is_empty() {
            return Ok(table.fields.iter().collect());
        }
        self.resolve(table, false)
    }

    /// Non key fields of the requested columns.
    pub fn data_fields(
        &self,
        table: &'static TableDef,
    ) -> Result<Vec<&'static FieldDef>, InsertError> {
        self.resolve(table, true)
    }

    pub fn write(&self, writer: &dyn SqlWriter, context: &mut Context, out: &mut Statement) {
        separated_by(
            out,
            self.names(),
            |out, v| writer.write_identifier_quoted(context, out, v),
            ", ",
        );
    }
}
