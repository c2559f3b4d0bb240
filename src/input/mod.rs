//! User input types (nouns)
//!
//! These types form the boundary with the out-of-scope input collector
//! (interactive prompts or a batch front-end). The core assumes the record
//! is complete and already validated.

mod filters;
mod record;

pub use filters::{FilterValues, RECOGNIZED_FILTER_COLUMNS};
pub use record::{OutputDatasetSpec, UserInputRecord, DEFAULT_REGION, DEFAULT_VIEW_PREFIX};
