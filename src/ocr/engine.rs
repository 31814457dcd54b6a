//! OCR recognition engine abstraction and the Tesseract implementation.

use std::path::Path;
use std::process::Command;

use image::RgbImage;
use tempfile::TempDir;
use thiserror::Error;

/// Errors from OCR recognition and PDF rasterization.
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Engine not available: {0}")]
    EngineNotAvailable(String),

    #[error("Recognition failed: {0}")]
    RecognitionFailed(String),

    #[error("Rasterization failed: {0}")]
    Rasterization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(String),
}

/// Configuration for text extraction.
#[derive(Debug, Clone)]
pub struct OcrConfig {
    /// Recognition language (e.g., "eng").
    pub language: String,
    /// Resolution for rasterizing PDF pages.
    pub dpi: u32,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: "eng".to_string(),
            dpi: 300,
        }
    }
}

/// A recognition engine that turns a decoded RGB raster into text.
pub trait OcrEngine: Send + Sync {
    /// Check if this engine can run (dependencies installed).
    fn is_available(&self) -> bool;

    /// Description of what is needed to make this engine available.
    fn availability_hint(&self) -> String;

    /// Recognize text in a decoded RGB image.
    fn recognize(&self, image: &RgbImage) -> Result<String, OcrError>;
}

/// Check if a binary is available in PATH.
pub fn check_binary(name: &str) -> bool {
    Command::new("which")
        .arg(name)
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Tesseract OCR via the system `tesseract` binary.
pub struct TesseractEngine {
    language: String,
}

impl TesseractEngine {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
        }
    }

    /// Run Tesseract on an image file.
    fn run_tesseract(&self, image_path: &Path) -> Result<String, OcrError> {
        let output = Command::new("tesseract")
            .arg(image_path)
            .arg("stdout")
            .args(["-l", &self.language])
            .output();

        match output {
            Ok(output) => {
                if output.status.success() {
                    Ok(String::from_utf8_lossy(&output.stdout).to_string())
                } else {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    Err(OcrError::RecognitionFailed(format!(
                        "tesseract failed: {}",
                        stderr
                    )))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(OcrError::EngineNotAvailable(
                "tesseract not found (install tesseract-ocr)".to_string(),
            )),
            Err(e) => Err(OcrError::Io(e)),
        }
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new("eng")
    }
}

impl OcrEngine for TesseractEngine {
    fn is_available(&self) -> bool {
        check_binary("tesseract")
    }

    fn availability_hint(&self) -> String {
        "Tesseract not installed. Install with: apt install tesseract-ocr".to_string()
    }

    fn recognize(&self, image: &RgbImage) -> Result<String, OcrError> {
        // Tesseract reads from disk, so round-trip the raster through a
        // scratch PNG.
        let temp_dir = TempDir::new()?;
        let image_path = temp_dir.path().join("input.png");
        image
            .save(&image_path)
            .map_err(|e| OcrError::Image(format!("Failed to write scratch image: {}", e)))?;

        self.run_tesseract(&image_path)
    }
}
