mod insert;
mod raw;

pub use insert::*;
pub use raw::*;
