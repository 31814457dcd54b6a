//! Text extraction from supported input files.

use std::fmt::Write as _;
use std::path::Path;

use super::engine::{OcrConfig, OcrEngine, OcrError, TesseractEngine};
use super::rasterize::{PdfRasterizer, PopplerRasterizer};

/// Kind of input resolved from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// PDF document, rasterized page by page before recognition.
    Pdf,
    /// Single raster image.
    Image,
}

impl InputKind {
    /// Resolve the input kind from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdf" => Some(InputKind::Pdf),
            "jpg" | "jpeg" | "png" | "bmp" | "tiff" | "gif" => Some(InputKind::Image),
            _ => None,
        }
    }
}

/// Extracts text from images and PDFs through the OCR engine.
pub struct TextExtractor {
    engine: Box<dyn OcrEngine>,
    rasterizer: Box<dyn PdfRasterizer>,
    config: OcrConfig,
}

impl Default for TextExtractor {
    fn default() -> Self {
        let config = OcrConfig::default();
        Self {
            engine: Box::new(TesseractEngine::new(&config.language)),
            rasterizer: Box::new(PopplerRasterizer::new()),
            config,
        }
    }
}

impl TextExtractor {
    /// Create an extractor with the default Tesseract/Poppler collaborators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recognition engine.
    pub fn with_engine(mut self, engine: Box<dyn OcrEngine>) -> Self {
        self.engine = engine;
        self
    }

    /// Replace the PDF rasterizer.
    pub fn with_rasterizer(mut self, rasterizer: Box<dyn PdfRasterizer>) -> Self {
        self.rasterizer = rasterizer;
        self
    }

    /// Extract text from a single image file.
    pub fn extract_image(&self, path: &Path) -> Result<String, OcrError> {
        let img = image::open(path)
            .map_err(|e| OcrError::Image(format!("Failed to load image: {}", e)))?;
        // Recognition expects a 3-channel raster.
        let rgb = img.to_rgb8();
        let text = self.engine.recognize(&rgb)?;
        Ok(text.trim().to_string())
    }

    /// Extract text from a PDF by rasterizing pages and recognizing each in
    /// order. Every page gets a `--- Page N ---` header; a page whose
    /// recognition fails contributes an empty body but keeps its header.
    pub fn extract_pdf(&self, path: &Path) -> Result<String, OcrError> {
        let pages = self.rasterizer.rasterize(path, self.config.dpi)?;
        let total = pages.len();

        let mut text = String::new();
        for (i, page) in pages.iter().enumerate() {
            let page_num = i + 1;
            tracing::info!("Processing page {}/{}...", page_num, total);

            let page_text = match self.engine.recognize(page) {
                Ok(t) => t,
                Err(e) => {
                    tracing::warn!("Recognition failed for page {}: {}", page_num, e);
                    String::new()
                }
            };

            // Infallible for String.
            write!(text, "\n--- Page {} ---\n", page_num).unwrap();
            text.push_str(page_text.trim());
            text.push('\n');
        }

        Ok(text.trim().to_string())
    }

    /// Hints for each collaborator whose external tool is missing, suitable
    /// for showing to the user before extraction runs.
    pub fn availability_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if !self.engine.is_available() {
            warnings.push(self.engine.availability_hint());
        }
        if !self.rasterizer.is_available() {
            warnings.push(self.rasterizer.availability_hint());
        }
        warnings
    }
}
