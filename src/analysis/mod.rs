//! Content analysis pipeline for extracted text.
//!
//! Raw OCR output flows through:
//! - whitespace normalization ([`normalize`])
//! - lexical statistics and word frequencies ([`lexical`])
//! - heuristic content-type classification ([`classify`])
//! - plain-text report rendering ([`report`])
//!
//! Normalization runs first; statistics and classification both consume the
//! normalized text independently, and the report combines everything.

mod classify;
mod lexical;
mod normalize;
mod report;

pub use classify::{classify, ContentType};
pub use lexical::{analyze, TextStats};
pub use normalize::normalize;
pub use report::build_report;
