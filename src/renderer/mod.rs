//! tfvars renderer (verb module)
//!
//! Serializes a Config tree into terraform.tfvars text.

mod error;
mod render;

pub use error::RenderError;
pub use render::render;
