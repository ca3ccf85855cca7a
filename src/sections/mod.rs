//! Password analysis sections
//!
//! Each section measures a specific aspect of the password.

mod composition;
mod entropy;

pub use composition::{composition_section, Composition};
pub use entropy::entropy_section;
