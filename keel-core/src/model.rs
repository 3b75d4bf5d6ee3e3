use crate::{EntitySlice, FieldAccessor, TableDef, Value};
use std::{
    collections::BTreeMap,
    fmt::{self, Debug},
};

/// Column name to value record, used when no record type exists.
pub type ValueMap = BTreeMap<String, Value>;

/// The data bound to a statement.
#[derive(Default)]
pub enum Model<'m> {
    #[default]
    None,
    Entity(&'m mut dyn FieldAccessor),
    Entities(&'m mut dyn EntitySlice),
    Map(&'m mut ValueMap),
    MapSlice(&'m mut [ValueMap]),
}

impl<'m> Model<'m> {
    pub fn is_none(&self) -> bool {
        matches!(self, Model::None)
    }
    /// Descriptor of the bound record type, maps have none.
    pub fn table_def(&self) -> Option<&'static TableDef> {
        match self {
            Model::Entity(v) => Some(v.table_def()),
            Model::Entities(v) => Some(v.table_def()),
            Model::None | Model::Map(..) | Model::MapSlice(..) => None,
        }
    }
    pub fn kind(&self) -> &'static str {
        match self {
            Model::None => "none",
            Model::Entity(..) => "entity",
            Model::Entities(..) => "entity slice",
            Model::Map(..) => "map",
            Model::MapSlice(..) => "map slice",
        }
    }
}

impl Debug for Model<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Map(v) => f.debug_tuple("Map").field(v).finish(),
            Model::MapSlice(v) => f.debug_tuple("MapSlice").field(v).finish(),
            _ => f.write_str(self.kind()),
        }
    }
}
