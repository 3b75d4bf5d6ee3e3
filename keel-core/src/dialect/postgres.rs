use crate::{Context, Feature, FeatureSet, SqlWriter, Statement};
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostgresSqlWriter {
    features: FeatureSet,
}

impl PostgresSqlWriter {
    pub const FEATURES: FeatureSet = FeatureSet::new(&[
        Feature::Cte,
        Feature::Returning,
        Feature::DefaultPlaceholder,
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

impl Default for PostgresSqlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlWriter for PostgresSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    fn features(&self) -> FeatureSet {
        self.features
    }

    fn write_placeholder(&self, _context: &mut Context, out: &mut Statement, position: usize) {
        let mut buffer = itoa::Buffer::new();
        out.push('$');
        out.push_str(buffer.format(position));
    }

    fn write_value_infinity(&self, _context: &mut Context, out: &mut Statement, negative: bool) {
        out.push_str(if negative {
            "'-Infinity'::FLOAT8"
        } else {
            "'Infinity'::FLOAT8"
        });
    }

    fn write_value_nan(&self, _context: &mut Context, out: &mut Statement) {
        out.push_str("'NaN'::FLOAT8");
    }

    fn write_value_blob(&self, _context: &mut Context, out: &mut Statement, value: &[u8]) {
        out.push_str("'\\x");
        for b in value {
            let _ = write!(out, "{:02X}", b);
        }
        out.push('\'');
    }
}
