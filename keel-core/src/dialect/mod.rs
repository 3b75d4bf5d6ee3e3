mod config;
mod generic;
mod mysql;
mod postgres;
mod sqlite;

pub use config::*;
pub use generic::*;
pub use mysql::*;
pub use postgres::*;
pub use sqlite::*;
