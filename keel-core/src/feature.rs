use crate::{Error, Result};
use std::fmt::{self, Debug};

/// Dialect capability that changes the shape of the generated SQL.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// `WITH name AS (...)` common table expressions.
    Cte,
    /// `RETURNING <columns>` after INSERT.
    Returning,
    /// `DEFAULT` is accepted inside a VALUES list.
    DefaultPlaceholder,
    /// `INSERT INTO table AS alias`.
    InsertTableAlias,
    /// `ON CONFLICT ...` upsert clause. Checked only to warn, the clause is
    /// written as given.
    InsertOnConflict,
    /// `ON DUPLICATE KEY UPDATE` upsert clause.
    InsertOnDuplicateKey,
    /// `INSERT IGNORE`. Checked only to warn, `ignore` is always written.
    InsertIgnore,
}

impl Feature {
    pub const ALL: [Feature; 7] = [
        Feature::Cte,
        Feature::Returning,
        Feature::DefaultPlaceholder,
        Feature::InsertTableAlias,
        Feature::InsertOnConflict,
        Feature::InsertOnDuplicateKey,
        Feature::InsertIgnore,
    ];

    const fn bit(self) -> u32 {
        1 << self as u32
    }

    /// Snake case name, as used in configuration urls.
    pub fn name(&self) -> &'static str {
        match self {
            Feature::Cte => "cte",
            Feature::Returning => "returning",
            Feature::DefaultPlaceholder => "default_placeholder",
            Feature::InsertTableAlias => "insert_table_alias",
            Feature::InsertOnConflict => "insert_on_conflict",
            Feature::InsertOnDuplicateKey => "insert_on_duplicate_key",
            Feature::InsertIgnore => "insert_ignore",
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Feature::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::msg(format!("Unknown dialect feature `{name}`")))
    }
}

/// Immutable set of [`Feature`].
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureSet(u32);

impl FeatureSet {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn new(features: &[Feature]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < features.len() {
            bits |= features[i].bit();
            i += 1;
        }
        Self(bits)
    }
    pub const fn has(&self, feature: Feature) -> bool {
        self.0 & feature.bit() != 0
    }
    pub const fn with(self, feature: Feature) -> Self {
        Self(self.0 | feature.bit())
    }
    pub const fn without(self, feature: Feature) -> Self {
        Self(self.0 & !feature.bit())
    }
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn iter(&self) -> impl Iterator<Item = Feature> + '_ {
        Feature::ALL.into_iter().filter(|v| self.has(*v))
    }
}

impl FromIterator<Feature> for FeatureSet {
    fn from_iter<T: IntoIterator<Item = Feature>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), FeatureSet::with)
    }
}

impl Debug for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
