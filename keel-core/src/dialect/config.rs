use crate::{
    Error, ErrorContext, Feature, FeatureSet, GenericSqlWriter, MySqlSqlWriter, PostgresSqlWriter,
    Result, SqlWriter, SqliteSqlWriter, truncate_long,
};
use url::Url;
use urlencoding::decode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Generic,
    Postgres,
    Sqlite,
    MySql,
}

impl Dialect {
    pub fn from_scheme(scheme: &str) -> Result<Self> {
        Ok(match scheme {
            "generic" => Dialect::Generic,
            "postgres" | "postgresql" => Dialect::Postgres,
            "sqlite" => Dialect::Sqlite,
            "mysql" | "mariadb" => Dialect::MySql,
            _ => {
                return Err(Error::msg(format!(
                    "Unknown dialect `{scheme}`, expected one of: generic, postgres, postgresql, sqlite, mysql, mariadb"
                )));
            }
        })
    }

    /// Features of the dialect before any override.
    pub fn features(&self) -> FeatureSet {
        match self {
            Dialect::Generic => GenericSqlWriter::FEATURES,
            Dialect::Postgres => PostgresSqlWriter::FEATURES,
            Dialect::Sqlite => SqliteSqlWriter::FEATURES,
            Dialect::MySql => MySqlSqlWriter::FEATURES,
        }
    }
}

/// Dialect and feature set a statement is rendered for.
///
/// Read from a url: the scheme selects the dialect and every query parameter
/// turns a feature on or off, for example
/// `sqlite://app.db?returning=false&default_placeholder=true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialectConfig {
    pub dialect: Dialect,
    pub features: FeatureSet,
}

impl DialectConfig {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            features: dialect.features(),
        }
    }

    pub fn from_url(url: &str) -> Result<Self> {
        let context = || format!("While reading the dialect from `{}`", truncate_long!(url));
        let decoded = decode(url).with_context(context)?;
        let parsed = Url::parse(&decoded).with_context(context)?;
        let dialect = Dialect::from_scheme(parsed.scheme()).with_context(context)?;
        let mut features = dialect.features();
        for (key, value) in parsed.query_pairs() {
            let feature = Feature::from_name(&key).with_context(context)?;
            let enabled = match value.to_ascii_lowercase().as_str() {
                "" | "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    let error = Error::msg(format!(
                        "Invalid value `{value}` for `{key}`, expected a boolean"
                    ))
                    .context(context());
                    log::error!("{:#}", error);
                    return Err(error);
                }
            };
            features = if enabled {
                features.with(feature)
            } else {
                features.without(feature)
            };
        }
        Ok(Self { dialect, features })
    }

    pub fn sql_writer(&self) -> Box<dyn SqlWriter> {
        match self.dialect {
            Dialect::Generic => Box::new(GenericSqlWriter::with_features(self.features)),
            Dialect::Postgres => Box::new(PostgresSqlWriter::with_features(self.features)),
            Dialect::Sqlite => Box::new(SqliteSqlWriter::with_features(self.features)),
            Dialect::MySql => Box::new(MySqlSqlWriter::with_features(self.features)),
        }
    }
}
