//! Browser-side services.
//!
//! # Services
//!
//! - [`analyze`] - Media upload to the `/analyze` endpoint
//! - [`preview`] - Local decoding of a file into a `data:` URL

pub mod analyze;
pub mod preview;

pub use analyze::*;
pub use preview::*;
