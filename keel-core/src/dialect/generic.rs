use crate::{Feature, FeatureSet, SqlWriter};

/// Fallback generic SQL writer (closest to PostgreSQL conventions, with `?`
/// placeholders). Its feature set is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericSqlWriter {
    features: FeatureSet,
}

impl GenericSqlWriter {
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

impl Default for GenericSqlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlWriter for GenericSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    fn features(&self) -> FeatureSet {
        self.features
    }
}
