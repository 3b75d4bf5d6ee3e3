use crate::{Context, Feature, FeatureSet, SqlWriter, Statement};
use std::fmt::Write;

/// MySQL / MariaDB writer: backtick identifiers, `INSERT IGNORE` and
/// `ON DUPLICATE KEY UPDATE`, no `RETURNING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MySqlSqlWriter {
    features: FeatureSet,
}

impl MySqlSqlWriter {
    pub const FEATURES: FeatureSet = FeatureSet::new(&[
        Feature::Cte,
        Feature::DefaultPlaceholder,
        Feature::InsertOnDuplicateKey,
        Feature::InsertIgnore,
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

impl Default for MySqlSqlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlWriter for MySqlSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    fn features(&self) -> FeatureSet {
        self.features
    }

    fn write_identifier_quoted(&self, context: &mut Context, out: &mut Statement, value: &str) {
        out.push('`');
        self.write_escaped(context, out, value, '`', "``");
        out.push('`');
    }

    fn write_value_string(&self, _context: &mut Context, out: &mut Statement, value: &str) {
        out.push('\'');
        let mut position = 0;
        for (i, c) in value.char_indices() {
            let replace = match c {
                '\'' => "''",
                '\\' => "\\\\",
                _ => continue,
            };
            out.push_str(&value[position..i]);
            out.push_str(replace);
            position = i + 1;
        }
        out.push_str(&value[position..]);
        out.push('\'');
    }

    fn write_value_infinity(&self, _context: &mut Context, out: &mut Statement, negative: bool) {
        if negative {
            out.push('-');
        }
        out.push_str("1.0e+10000");
    }

    fn write_value_blob(&self, _context: &mut Context, out: &mut Statement, value: &[u8]) {
        out.push_str("X'");
        for b in value {
            let _ = write!(out, "{:02X}", b);
        }
        out.push('\'');
    }

    fn write_set_excluded(&self, context: &mut Context, out: &mut Statement, columns: &[&str]) {
        for (i, column) in columns.iter().enumerate() {
            out.push_str(if i == 0 { " " } else { ", " });
            self.write_identifier_quoted(context, out, column);
            out.push_str(" = VALUES(");
            self.write_identifier_quoted(context, out, column);
            out.push(')');
        }
    }
}
