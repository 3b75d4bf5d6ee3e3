use crate::{Raw, TableDef};
use std::{borrow::Cow, collections::BTreeMap};

/// Values supplied by the caller instead of the model.
///
/// A column of the model table overrides the field value of every record,
/// any other column is appended after the model columns.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct CustomValues {
    overrides: BTreeMap<Cow<'static, str>, Raw>,
    extras: Vec<(Cow<'static, str>, Raw)>,
}

impl CustomValues {
    pub fn add(&mut self, table: &TableDef, column: impl Into<Cow<'static, str>>, value: Raw) {
        let column = column.into();
        if table.has_field(&column) {
            self.overrides.insert(column, value);
        } else {
            self.extras.push((column, value));
        }
    }
    pub fn get_override(&self, column: &str) -> Option<&Raw> {
        self.overrides.get(column)
    }
    pub fn is_overridden(&self, column: &str) -> bool {
        self.overrides.contains_key(column)
    }
    pub fn extras(&self) -> &[(Cow<'static, str>, Raw)] {
        &self.extras
    }
}
