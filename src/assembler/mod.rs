//! Config assembler (verb module)
//!
//! Merges the user input record with the catalog into the configuration
//! tree handed to the renderer.

mod assemble;

pub use assemble::{assemble, derive_dataset_key, DEFAULT_MONTHS_BACK};
