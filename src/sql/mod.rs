//! SQL for the product table: identifiers come from the static table description, values are always parameters.

mod builder;
mod table;
pub use builder::*;
pub use table::*;
