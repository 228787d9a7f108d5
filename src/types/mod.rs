//! Type definitions for rhythmview

mod error;
mod profile;
mod rhythm;

pub use error::*;
pub use profile::extract_rhythm;
pub use rhythm::*;
