use crate::{
    AsValue, ColumnList, Context, CustomValues, Driver, EntitySlice, ErrorContext, Executor,
    Feature, FieldAccessor, FieldDef, Fragment, InsertError, Model, QueryAppender, Raw, Result,
    ReturningList, RowLabeled, RowsAffected, SetList, SqlWriter, Statement, TableDef, TableList,
    TableRef, ValueMap, WhereList, WithList, WriteMode, stream::TryStreamExt,
};
use std::{borrow::Cow, mem};

/// Outcome of rendering an [`InsertQuery`].
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub statement: Statement,
    /// A `RETURNING` clause was rendered, the database answers with rows.
    pub returning: bool,
}

/// INSERT statement builder.
///
/// Mutators consume and return the builder so calls can be chained. Errors
/// detected while building (for example a missing model) are recorded and
/// returned by every later render or execution.
///
/// ```rust
/// use keel_core::{GenericSqlWriter, InsertQuery, ValueMap};
/// let mut row = ValueMap::new();
/// row.insert("name".into(), "Alice".into());
/// let query = InsertQuery::new().table("users").model_map(&mut row);
/// assert_eq!(
///     query.to_sql(&GenericSqlWriter::new()).unwrap(),
///     r#"INSERT INTO "users" ("name") VALUES ('Alice')"#,
/// );
/// ```
#[derive(Default, Debug)]
pub struct InsertQuery<'m> {
    model: Model<'m>,
    error: Option<InsertError>,
    with: WithList<'m>,
    tables: TableList,
    columns: ColumnList,
    values: CustomValues,
    where_list: WhereList,
    set: SetList,
    returning: ReturningList,
    on: Raw,
    ignore: bool,
    replace: bool,
}

impl<'m> InsertQuery<'m> {
    pub fn new() -> Self {
        Default::default()
    }

    fn set_error(&mut self, error: InsertError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    /// Descriptor needed by column level mutators, records an error when the
    /// model has none.
    fn require_table(&mut self) -> Option<&'static TableDef> {
        let table = self.model.table_def();
        if table.is_none() {
            let error = match self.model {
                Model::None => InsertError::NilModel,
                _ => InsertError::UnsupportedModel(self.model.kind()),
            };
            self.set_error(error);
        }
        table
    }

    /// Bind a single record.
    pub fn model<E: FieldAccessor>(mut self, entity: &'m mut E) -> Self {
        self.model = Model::Entity(entity);
        self
    }
    /// Bind a collection of records, inserted as one row each.
    pub fn model_entities<S: EntitySlice>(mut self, entities: &'m mut S) -> Self {
        self.model = Model::Entities(entities);
        self
    }
    /// Bind a column to value map, requires a [`table`](Self::table).
    pub fn model_map(mut self, map: &'m mut ValueMap) -> Self {
        self.model = Model::Map(map);
        self
    }
    /// Bind a slice of maps. INSERT rejects it when rendering.
    pub fn model_map_slice(mut self, maps: &'m mut [ValueMap]) -> Self {
        self.model = Model::MapSlice(maps);
        self
    }

    /// Pass the builder through `f`.
    pub fn apply(self, f: impl FnOnce(Self) -> Self) -> Self {
        f(self)
    }
    /// Apply `f` to a builder held by mutable reference, as hooks receive it.
    pub fn update(&mut self, f: impl FnOnce(Self) -> Self) {
        *self = f(mem::take(self));
    }

    /// Register a common table expression.
    pub fn with(
        mut self,
        name: impl Into<Cow<'static, str>>,
        query: impl QueryAppender + Send + 'm,
    ) -> Self {
        self.with.add(name, query);
        self
    }

    /// Target (or source) table by name, `schema.name` is accepted.
    pub fn table(mut self, name: &str) -> Self {
        self.tables.add_name(name);
        self
    }
    pub fn table_ref(mut self, table: TableRef) -> Self {
        self.tables.add_table(table);
        self
    }
    pub fn table_expr(mut self, expr: impl Into<Raw>) -> Self {
        self.tables.add_expr(expr.into());
        self
    }
    /// Replace how the model table is rendered.
    pub fn model_table_expr(mut self, expr: impl Into<Raw>) -> Self {
        self.tables.set_model_table(expr.into());
        self
    }

    pub fn column(mut self, column: impl Into<Cow<'static, str>>) -> Self {
        self.columns.add(column);
        self
    }
    /// Insert every model column except `column`. `"*"` removes all of them.
    pub fn exclude_column(mut self, column: &str) -> Self {
        let Some(table) = self.require_table() else {
            return self;
        };
        if let Err(e) = self.columns.exclude(table, &[column]) {
            self.set_error(e);
        }
        self
    }

    /// Override the value of a model column, or append a column that the
    /// model does not have.
    pub fn value(mut self, column: impl Into<Cow<'static, str>>, value: impl Into<Raw>) -> Self {
        let Some(table) = self.require_table() else {
            return self;
        };
        self.values.add(table, column, value.into());
        self
    }

    /// Filter of the conflict action, joined with `AND`.
    pub fn where_(mut self, condition: impl Into<Raw>) -> Self {
        self.where_list.and(condition.into());
        self
    }
    /// Filter of the conflict action, joined with `OR`.
    pub fn where_or(mut self, condition: impl Into<Raw>) -> Self {
        self.where_list.or(condition.into());
        self
    }

    /// Add a `RETURNING` column. `returning("NULL")` suppresses the clause.
    pub fn returning(mut self, returning: impl Into<Raw>) -> Self {
        self.returning.add(returning.into());
        self
    }

    /// `INSERT IGNORE INTO`.
    pub fn ignore(mut self) -> Self {
        self.ignore = true;
        self
    }
    /// `REPLACE INTO`, takes precedence over [`ignore`](Self::ignore).
    pub fn replace(mut self) -> Self {
        self.replace = true;
        self
    }

    /// Conflict clause, rendered after ` ON `.
    pub fn on(mut self, conflict: impl Into<Raw>) -> Self {
        self.on = conflict.into();
        self
    }
    /// Assignment of the conflict action.
    pub fn set(mut self, assignment: impl Into<Raw>) -> Self {
        self.set.add(assignment.into());
        self
    }

    pub fn model_ref(&self) -> &Model<'m> {
        &self.model
    }
    pub fn model_mut(&mut self) -> &mut Model<'m> {
        &mut self.model
    }
    /// Descriptor of the bound record type.
    pub fn table_def(&self) -> Option<&'static TableDef> {
        self.model.table_def()
    }
    /// Error recorded while building.
    pub fn error(&self) -> Option<&InsertError> {
        self.error.as_ref()
    }

    /// Render with bound arguments.
    pub fn build(&self, writer: &dyn SqlWriter) -> Result<Statement> {
        self.render(writer, WriteMode::Bind).map(|v| v.statement)
    }
    /// Render with literal values, for logging and debugging.
    pub fn to_sql(&self, writer: &dyn SqlWriter) -> Result<String> {
        self.render(writer, WriteMode::Inline)
            .map(|v| v.statement.sql)
    }
    /// Render with every model value replaced by `?`.
    pub fn template(&self, writer: &dyn SqlWriter) -> Result<String> {
        self.render(writer, WriteMode::Template)
            .map(|v| v.statement.sql)
    }

    /// Render the whole statement. Nothing is returned unless every clause
    /// rendered successfully.
    pub fn render(&self, writer: &dyn SqlWriter, mode: WriteMode) -> Result<Rendered> {
        let mut statement = Statement::with_capacity(128);
        let mut context = Context::new(Fragment::None, mode);
        let returning = self.write_insert(writer, &mut context, &mut statement)?;
        Ok(Rendered {
            statement,
            returning,
        })
    }

    fn write_insert(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
    ) -> Result<bool> {
        if let Some(error) = &self.error {
            return Err(error.clone().into());
        }
        let table = self.model.table_def();
        let context = &mut context.with_table(table);
        let mut implicit = Vec::new();

        self.with
            .write(writer, &mut context.switch_fragment(Fragment::SqlWith), out)?;

        let mut context = context.switch_fragment(Fragment::SqlInsertInto);
        writer.write_insert_verb(&mut context, out, self.replace, self.ignore);
        let declare_alias = !self.on.is_empty() && writer.has_feature(Feature::InsertTableAlias);
        self.tables
            .write_first(writer, &mut context, out, table, declare_alias)?;

        self.write_columns_values(writer, &mut context, out, table, &mut implicit)?;

        self.write_on(
            writer,
            &mut context.switch_fragment(Fragment::SqlInsertIntoOnConflict),
            out,
            table,
        )?;

        let returning = writer.has_feature(Feature::Returning)
            && self.returning.has_returning(&implicit);
        if returning {
            self.returning.write(
                writer,
                &mut context.switch_fragment(Fragment::SqlInsertIntoReturning),
                out,
                &implicit,
            )?;
        }
        Ok(returning)
    }

    fn write_columns_values(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
        table: Option<&'static TableDef>,
        implicit: &mut Vec<&'static FieldDef>,
    ) -> Result<()> {
        if self.tables.has_multi_tables(table) {
            if self.columns.is_set() {
                out.push_str(" (");
                self.columns.write(
                    writer,
                    &mut context.switch_fragment(Fragment::SqlInsertIntoColumns),
                    out,
                );
                out.push(')');
            }
            out.push_str(" SELECT * FROM ");
            return self.tables.write_others(
                writer,
                &mut context.switch_fragment(Fragment::SqlInsertIntoSelect),
                out,
                table,
            );
        }
        match &self.model {
            Model::Map(map) => {
                Self::write_map(writer, context, out, map);
                Ok(())
            }
            Model::MapSlice(..) => Err(InsertError::MapSliceUnsupported.into()),
            Model::None => Err(InsertError::NilModel.into()),
            Model::Entity(entity) => {
                let table = entity.table_def();
                let fields = self.effective_fields(writer, table, &**entity, implicit)?;
                self.write_fields(writer, context, out, &fields);
                out.push_str(" VALUES (");
                let mut context = context.switch_fragment(Fragment::SqlInsertIntoValues);
                self.write_row(writer, &mut context, out, &fields, &**entity, implicit)?;
                out.push(')');
                Ok(())
            }
            Model::Entities(entities) => {
                let table = entities.table_def();
                let Some(first) = entities.get(0) else {
                    return Err(InsertError::EmptySlice(table.table.qualified_name()).into());
                };
                let fields = self.effective_fields(writer, table, first, implicit)?;
                self.write_fields(writer, context, out, &fields);
                out.push_str(" VALUES (");
                let mut context = context.switch_fragment(Fragment::SqlInsertIntoValues);
                let rows = if context.is_template() {
                    1
                } else {
                    entities.len()
                };
                for i in 0..rows {
                    let Some(entity) = entities.get(i) else {
                        break;
                    };
                    if i > 0 {
                        out.push_str("), (");
                    }
                    self.write_row(writer, &mut context, out, &fields, entity, implicit)?;
                }
                out.push(')');
                Ok(())
            }
        }
    }

    fn write_map(writer: &dyn SqlWriter, context: &mut Context, out: &mut Statement, map: &ValueMap) {
        out.push_str(" (");
        for (i, column) in map.keys().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            writer.write_identifier_quoted(context, out, column);
        }
        out.push_str(") VALUES (");
        let mut context = context.switch_fragment(Fragment::SqlInsertIntoValues);
        for (i, value) in map.values().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            writer.write_value(&mut context, out, value);
        }
        out.push(')');
    }

    /// Fields to insert. Without explicit columns and without `DEFAULT`
    /// support, zero valued fields the database must fill are left out and
    /// read back through `RETURNING`.
    fn effective_fields(
        &self,
        writer: &dyn SqlWriter,
        table: &'static TableDef,
        first: &dyn FieldAccessor,
        implicit: &mut Vec<&'static FieldDef>,
    ) -> Result<Vec<&'static FieldDef>> {
        if writer.has_feature(Feature::DefaultPlaceholder) || !self.columns.is_empty() {
            return Ok(self.columns.fields(table)?);
        }
        let mut fields = Vec::with_capacity(table.fields.len());
        for field in table.fields.iter() {
            if field.skip_when_zero()
                && !self.values.is_overridden(field.name)
                && first.field_value(field).is_zero()
            {
                self.mark_returned(implicit, field);
                continue;
            }
            fields.push(field);
        }
        Ok(fields)
    }

    fn mark_returned(&self, implicit: &mut Vec<&'static FieldDef>, field: &'static FieldDef) {
        if self.returning.is_explicit() || implicit.iter().any(|v| v.index == field.index) {
            return;
        }
        implicit.push(field);
    }

    fn write_fields(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
        fields: &[&'static FieldDef],
    ) {
        let mut context = context.switch_fragment(Fragment::SqlInsertIntoColumns);
        out.push_str(" (");
        let columns = fields
            .iter()
            .map(|v| v.name)
            .chain(self.values.extras().iter().map(|(v, _)| v.as_ref()));
        for (i, column) in columns.enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            writer.write_identifier_quoted(&mut context, out, column);
        }
        out.push(')');
    }

    fn write_row(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
        fields: &[&'static FieldDef],
        entity: &dyn FieldAccessor,
        implicit: &mut Vec<&'static FieldDef>,
    ) -> Result<()> {
        for (i, field) in fields.iter().copied().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if let Some(value) = self.values.get_override(field.name) {
                value.write_query(writer, context, out)?;
                self.mark_returned(implicit, field);
                continue;
            }
            if context.is_template() {
                out.push('?');
                continue;
            }
            let value = entity.field_value(field);
            if field.null_zero && value.is_zero() {
                if let Some(default) = field.sql_default {
                    out.push_str(default);
                } else if writer.has_feature(Feature::DefaultPlaceholder) {
                    writer.write_default_placeholder(context, out);
                } else {
                    writer.write_value_none(context, out);
                }
                self.mark_returned(implicit, field);
            } else {
                writer.write_value(context, out, &value);
            }
        }
        for (i, (_, value)) in self.values.extras().iter().enumerate() {
            if i > 0 || !fields.is_empty() {
                out.push_str(", ");
            }
            value.write_query(writer, context, out)?;
        }
        Ok(())
    }

    fn write_on(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
        table: Option<&'static TableDef>,
    ) -> Result<()> {
        if self.on.is_empty() {
            return Ok(());
        }
        if !writer.has_feature(Feature::InsertOnConflict)
            && !writer.has_feature(Feature::InsertOnDuplicateKey)
        {
            log::warn!("The dialect declares neither `ON CONFLICT` nor `ON DUPLICATE KEY` support");
        }
        out.push_str(" ON ");
        self.on.write_query(writer, context, out)?;
        if !self.set.is_empty() {
            writer.write_conflict_set(context, out);
            self.set.write(
                writer,
                &mut context.switch_fragment(Fragment::SqlInsertIntoSet),
                out,
            )?;
        } else if !self.columns.is_empty() {
            let table = table.ok_or(InsertError::NilModel)?;
            let mut fields = self.columns.data_fields(table)?;
            if fields.is_empty() {
                fields = table.data_fields().collect();
            }
            let columns: Vec<&str> = fields.iter().map(|v| v.name).collect();
            writer.write_set_excluded(
                &mut context.switch_fragment(Fragment::SqlInsertIntoSet),
                out,
                &columns,
            );
        }
        self.where_list.write(
            writer,
            &mut context.switch_fragment(Fragment::SqlInsertIntoWhere),
            out,
        )
    }

    /// Render in bind mode and run the statement.
    ///
    /// Hooks of the model type run before rendering and after the database
    /// answered. When a `RETURNING` clause was rendered the returned rows are
    /// written back into the model, otherwise the generated id reported by
    /// the driver is (for dialects without `RETURNING` and tables with a
    /// single primary key).
    pub async fn exec<X: Executor>(&mut self, executor: &mut X) -> Result<RowsAffected> {
        self.before_insert()?;
        let writer = executor.driver().sql_writer();
        let writer = writer.as_dyn();
        let rendered = self.render(writer, WriteMode::Bind)?;
        log::debug!("[{}] {}", <X::Driver as Driver>::NAME, rendered.statement);
        let result = if rendered.returning {
            let rows: Vec<RowLabeled> = executor.fetch(rendered.statement).try_collect().await?;
            self.scan_rows(&rows).inspect_err(|e| {
                log::error!("Could not write the returned rows into the model: {e:#}")
            })?;
            RowsAffected {
                rows_affected: rows.len() as u64,
                last_affected_id: None,
            }
        } else {
            let result = executor.execute(rendered.statement).await?;
            self.try_last_insert_id(writer, &result)
                .inspect_err(|e| log::error!("Could not back-fill the inserted id: {e:#}"))?;
            result
        };
        self.after_insert()?;
        Ok(result)
    }

    /// Render in bind mode, run the statement and return the rows the
    /// database answered with, leaving the model untouched.
    pub async fn fetch<X: Executor>(&mut self, executor: &mut X) -> Result<Vec<RowLabeled>> {
        self.before_insert()?;
        let writer = executor.driver().sql_writer();
        let rendered = self.render(writer.as_dyn(), WriteMode::Bind)?;
        log::debug!("[{}] {}", <X::Driver as Driver>::NAME, rendered.statement);
        let rows = executor.fetch(rendered.statement).try_collect().await?;
        self.after_insert()?;
        Ok(rows)
    }

    fn before_insert(&mut self) -> Result<()> {
        if let Some(table) = self.model.table_def() {
            log::trace!("Running before_insert of `{}`", table.table.qualified_name());
            (table.hooks.before_insert)(self)?;
        }
        Ok(())
    }

    fn after_insert(&mut self) -> Result<()> {
        if let Some(table) = self.model.table_def() {
            log::trace!("Running after_insert of `{}`", table.table.qualified_name());
            (table.hooks.after_insert)(self)?;
        }
        Ok(())
    }

    /// Write row `i` into record `i` of the model, by column label.
    fn scan_rows(&mut self, rows: &[RowLabeled]) -> Result<()> {
        match &mut self.model {
            Model::Entity(entity) => {
                if let Some(row) = rows.first() {
                    scan_row(&mut **entity, row)?;
                }
            }
            Model::Entities(entities) => {
                let records = entities.len();
                for (i, row) in rows.iter().enumerate() {
                    let Some(entity) = entities.get_mut(i) else {
                        log::warn!(
                            "The database returned {} rows for {} records",
                            rows.len(),
                            records
                        );
                        break;
                    };
                    scan_row(entity, row)?;
                }
            }
            Model::Map(map) => {
                if let Some(row) = rows.first() {
                    for (label, value) in row.iter() {
                        map.insert(label.to_string(), value.clone());
                    }
                }
            }
            Model::None | Model::MapSlice(..) => {}
        }
        Ok(())
    }

    fn try_last_insert_id(&mut self, writer: &dyn SqlWriter, result: &RowsAffected) -> Result<()> {
        if writer.has_feature(Feature::Returning) {
            return Ok(());
        }
        let Some(table) = self.model.table_def() else {
            return Ok(());
        };
        let [pk] = &*table.primary_keys else {
            return Ok(());
        };
        let Some(mut id) = result.last_affected_id.filter(|v| *v != 0) else {
            return Ok(());
        };
        let pk = &table.fields[*pk];
        let context = || {
            format!(
                "While writing the generated id into `{}.{}`",
                table.table.qualified_name(),
                pk.name
            )
        };
        match &mut self.model {
            Model::Entity(entity) => {
                entity
                    .set_field_value(pk, id.as_value())
                    .with_context(context)?;
            }
            Model::Entities(entities) => {
                for i in 0..entities.len() {
                    if i > 0 {
                        id = id.wrapping_add(1);
                    }
                    if let Some(entity) = entities.get_mut(i) {
                        entity
                            .set_field_value(pk, id.as_value())
                            .with_context(context)?;
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }
}

fn scan_row(entity: &mut dyn FieldAccessor, row: &RowLabeled) -> Result<()> {
    let table = entity.table_def();
    for (label, value) in row.iter() {
        let Some(field) = table.field(label) else {
            return Err(InsertError::UnknownColumn {
                table: table.table.qualified_name(),
                column: label.to_string(),
            }
            .into());
        };
        entity
            .set_field_value(field, value.clone())
            .with_context(|| format!("While scanning column `{label}`"))?;
    }
    Ok(())
}

impl QueryAppender for InsertQuery<'_> {
    fn write_query(
        &self,
        writer: &dyn SqlWriter,
        context: &mut Context,
        out: &mut Statement,
    ) -> Result<()> {
        self.write_insert(writer, context, out).map(|_| ())
    }
}
