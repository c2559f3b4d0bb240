//! Filter resolver (verb module)
//!
//! Intersects a table's applicable filter columns with the globally
//! supplied filter values to produce WHERE-clause fragments.

mod resolve;

pub use resolve::resolve_filters;
