//! UI Components for the DeepScan widget.
//!
//! # Layout Components
//! - [`Header`] - Top bar
//! - [`Hero`] - Title and description
//! - [`Footer`] - Page footer
//!
//! # Widget Components
//! - [`UploadZone`] - Drag & drop / click-to-browse file acquisition
//! - [`PreviewPanel`] - Selected media plus Analyze / Reset controls
//! - [`ResultPanel`] - Verdict label and confidence bar

mod header;
mod hero;
mod upload;
mod preview;
mod result;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use preview::*;
pub use result::*;
pub use footer::*;
