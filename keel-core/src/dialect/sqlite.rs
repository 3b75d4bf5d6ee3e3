use crate::{Context, Feature, FeatureSet, SqlWriter, Statement};
use std::fmt::Write;

/// SQLite writer. Lacks `DEFAULT` inside VALUES, zero valued generated
/// columns are left out and read back with `RETURNING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqliteSqlWriter {
    features: FeatureSet,
}

impl SqliteSqlWriter {
    pub const FEATURES: FeatureSet = FeatureSet::new(&[
        Feature::Cte,
        Feature::Returning,
        Feature::InsertTableAlias,
        Feature::InsertOnConflict,
    ]);

    pub const fn new() -> Self {
        Self {
            features: Self::FEATURES,
        }
    }
    pub const fn with_features(features: FeatureSet) -> Self {
        Self { features }
    }
}

impl Default for SqliteSqlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlWriter for SqliteSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    fn features(&self) -> FeatureSet {
        self.features
    }

    fn write_value_infinity(&self, _context: &mut Context, out: &mut Statement, negative: bool) {
        if negative {
            out.push('-');
        }
        out.push_str("1.0e+10000");
    }

    fn write_value_nan(&self, context: &mut Context, out: &mut Statement) {
        // Stored as NULL by SQLite anyway
        self.write_value_none(context, out);
    }

    fn write_value_blob(&self, _context: &mut Context, out: &mut Statement, value: &[u8]) {
        out.push_str("X'");
        for b in value {
            let _ = write!(out, "{:02X}", b);
        }
        out.push('\'');
    }
}
