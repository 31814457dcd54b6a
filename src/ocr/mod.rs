//! OCR and text extraction.
//!
//! Extracts text from scanned inputs using:
//! - Tesseract OCR (system binary) for recognition
//! - pdftoppm (Poppler) for rasterizing PDF pages at 300 DPI
//!
//! Recognition and rasterization are behind traits so orchestration can be
//! tested without the external tools installed.

mod engine;
mod extractor;
mod rasterize;

pub use engine::{OcrConfig, OcrEngine, OcrError, TesseractEngine};
pub use extractor::{InputKind, TextExtractor};
pub use rasterize::{PdfRasterizer, PopplerRasterizer};
