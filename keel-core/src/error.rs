use thiserror::Error;

/// Structural failures of an INSERT, detected before any I/O.
///
/// Carried inside `anyhow::Error`, recover it with `downcast_ref`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsertError {
    #[error("keel: Model(nil)")]
    NilModel,
    #[error("keel: Insert does not support a slice of maps")]
    MapSliceUnsupported,
    #[error("keel: Insert of an empty slice of `{0}`")]
    EmptySlice(String),
    #[error("keel: Insert requires a table, set one with `table` or bind a model")]
    NoTable,
    #[error("keel: Insert does not support a {0} model here")]
    UnsupportedModel(&'static str),
    #[error("keel: `{table}` does not have column `{column}`")]
    UnknownColumn { table: String, column: String },
    #[error("keel: query `{0}` has more placeholders than arguments")]
    MissingArgument(String),
}
