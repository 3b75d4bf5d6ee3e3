mod as_value;
mod dialect;
mod driver;
mod entity;
mod error;
mod executor;
mod feature;
mod field_def;
mod fragment;
mod model;
mod query;
mod query_result;
mod statement;
mod table_ref;
mod util;
mod value;
mod writer;

pub use ::anyhow::Context as ErrorContext;
pub use as_value::*;
pub use dialect::*;
pub use driver::*;
pub use entity::*;
pub use error::*;
pub use executor::*;
pub use feature::*;
pub use field_def::*;
pub use fragment::*;
pub use model::*;
pub use query::*;
pub use query_result::*;
pub use statement::*;
pub use table_ref::*;
pub use util::*;
pub use value::*;
pub use writer::*;
pub mod stream {
    pub use ::futures::stream::*;
}
pub use ::futures::future;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
