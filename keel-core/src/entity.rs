use crate::{FieldDef, InsertQuery, Result, TableDef, Value};

/// Dynamic access to the fields of a record, driven by its [`TableDef`].
///
/// Implemented by `#[derive(Entity)]`.
pub trait FieldAccessor: Send {
    fn table_def(&self) -> &'static TableDef;
    /// Current value of the field.
    fn field_value(&self, field: &FieldDef) -> Value;
    /// Write a value (usually coming back from the database) into the field.
    fn set_field_value(&mut self, field: &FieldDef, value: Value) -> Result<()>;
}

/// Insert lifecycle callbacks.
///
/// Both run only from [`InsertQuery::exec`]. An error aborts the execution and
/// is returned to the caller.
pub trait InsertHook {
    fn before_insert(_query: &mut InsertQuery<'_>) -> Result<()> {
        Ok(())
    }
    fn after_insert(_query: &mut InsertQuery<'_>) -> Result<()> {
        Ok(())
    }
}

/// A record type mapped to a table.
pub trait Entity: FieldAccessor + InsertHook + Sized {
    /// Static descriptor of the table.
    fn table() -> &'static TableDef;

    /// Start an INSERT with this record as the model.
    fn insert(&mut self) -> InsertQuery<'_> {
        InsertQuery::new().model(self)
    }
}

/// A homogeneous, ordered collection of records.
pub trait EntitySlice: Send {
    fn table_def(&self) -> &'static TableDef;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn get(&self, index: usize) -> Option<&dyn FieldAccessor>;
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn FieldAccessor>;
}

impl<E: Entity> EntitySlice for Vec<E> {
    fn table_def(&self) -> &'static TableDef {
        E::table()
    }
    fn len(&self) -> usize {
        self.as_slice().len()
    }
    fn get(&self, index: usize) -> Option<&dyn FieldAccessor> {
        self.as_slice().get(index).map(|v| v as &dyn FieldAccessor)
    }
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn FieldAccessor> {
        self.as_mut_slice().get_mut(index).map(|v| v as &mut dyn FieldAccessor)
    }
}

impl<E: Entity, const N: usize> EntitySlice for [E; N] {
    fn table_def(&self) -> &'static TableDef {
        E::table()
    }
    fn len(&self) -> usize {
        N
    }
    fn get(&self, index: usize) -> Option<&dyn FieldAccessor> {
        self.as_slice().get(index).map(|v| v as &dyn FieldAccessor)
    }
    fn get_mut(&mut self, index: usize) -> Option<&mut dyn FieldAccessor> {
        self.as_mut_slice().get_mut(index).map(|v| v as &mut dyn FieldAccessor)
    }
}
