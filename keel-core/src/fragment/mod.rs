mod column_list;
mod custom_values;
mod returning_list;
mod set_list;
mod table_list;
mod where_list;
mod with_list;

pub use column_list::*;
pub use custom_values::*;
pub use returning_list::*;
pub use set_list::*;
pub use table_list::*;
pub use where_list::*;
pub use with_list::*;
