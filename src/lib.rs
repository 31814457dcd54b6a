//! OCR text extraction and content analysis for scanned images and PDFs.
//!
//! Given an image or PDF, extracts text via OCR and produces a plain-text
//! report combining basic statistics, a heuristic content-type label, word
//! frequencies, a preview, and the full extracted transcript.

pub mod analysis;
pub mod cli;
pub mod ocr;
pub mod processor;

pub use processor::{DocumentProcessor, ProcessError};
