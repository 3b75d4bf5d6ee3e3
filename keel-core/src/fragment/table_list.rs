use crate::{
    Context, InsertError, QueryAppender, Raw, Result, SqlWriter, Statement, TableDef, TableRef,
};

#[derive(Debug, Clone, PartialEq)]
enum TableItem {
    Name(TableRef),
    Expr(Raw),
}

/// Tables named by the statement, besides the one of the bound model.
#[derive(Default, Debug, Clone)]
pub struct TableList {
    model_table: Option<Raw>,
    tables: Vec<TableItem>,
}

impl TableList {
    /// Add a table by name, `schema.name` is split on the first dot.
    pub fn add_name(&mut self, name: &str) {
        let table = match name.split_once('.') {
            Some((schema, name)) => TableRef::new(name.to_owned()).with_schema(schema.to_owned()),
            None => TableRef::new(name.to_owned()),
        };
        self.tables.push(TableItem::Name(table));
    }
    pub fn add_table(&mut self, table: TableRef) {
        self.tables.push(TableItem::Name(table));
    }
    pub fn add_expr(&mut self, expr: Raw) {
        self.tables.push(TableItem::Expr(expr));
    }
    /// Replace the rendering of the model table.
    pub fn set_model_table(&mut self, expr: Raw) {
        self.model_table = Some(expr);
    }
    pub fn len(&self) -> usize {
        self.tables.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// With a model table every added table is a source, otherwise the first
    /// one is the target.
    pub fn has_multi_tables(&self, model: Option<&TableDef>) -> bool {
        if self.model_table.is_some() || model.is_some() {
            self.tables.len() >= 1
        } else {
            self.tables.len() >= 2
        }
    }

    fn write_item(
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
        item: &TableItem,
        declare_alias: bool,
    ) -> Result<()> {
        match item {
            TableItem::Name(table) => writer.write_table_ref(context, out, table, declare_alias),
            TableItem::Expr(expr) => expr.write_query(writer, context, out)?,
        }
        Ok(())
    }

    /// Render the target table.
    pub fn write_first(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
        model: Option<&TableDef>,
        declare_alias: bool,
    ) -> Result<()> {
        if let Some(expr) = &self.model_table {
            return expr.write_query(writer, context, out);
        }
        if let Some(table) = model {
            writer.write_table_ref(context, out, &table.table, declare_alias);
            return Ok(());
        }
        let Some(first) = self.tables.first() else {
            return Err(InsertError::NoTable.into());
        };
        Self::write_item(writer, context, out, first, declare_alias)
    }

    /// Render the source tables of an insert from select.
    pub fn write_others(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
        model: Option<&TableDef>,
    ) -> Result<()> {
        let skip = if self.model_table.is_some() || model.is_some() {
            0
        } else {
            1
        };
        for (i, item) in self.tables.iter().skip(skip).enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            Self::write_item(writer, context, out, item, true)?;
        }
        Ok(())
    }
}
