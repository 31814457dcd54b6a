//! PDF rasterization via pdftoppm (Poppler).

use std::path::{Path, PathBuf};
use std::process::Command;

use image::RgbImage;
use tempfile::TempDir;

use super::engine::OcrError;

/// A rasterizer that turns a PDF into an ordered sequence of page images.
pub trait PdfRasterizer: Send + Sync {
    /// Check if this rasterizer can run (dependencies installed).
    fn is_available(&self) -> bool;

    /// Description of what is needed to make this rasterizer available.
    fn availability_hint(&self) -> String;

    /// Rasterize every page of a PDF at the given resolution, in page order.
    fn rasterize(&self, pdf_path: &Path, dpi: u32) -> Result<Vec<RgbImage>, OcrError>;
}

/// Rasterizes PDFs with the system `pdftoppm` binary.
#[derive(Default)]
pub struct PopplerRasterizer;

impl PopplerRasterizer {
    pub fn new() -> Self {
        Self
    }

    /// Collect the page images pdftoppm wrote, in page-number order.
    /// pdftoppm names files page-01.png, page-02.png, ... (zero-padded),
    /// so a lexicographic sort is page order.
    fn collect_page_images(&self, dir: &Path) -> Result<Vec<PathBuf>, OcrError> {
        let mut images: Vec<_> = std::fs::read_dir(dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().map(|ext| ext == "png").unwrap_or(false))
            .collect();
        images.sort();
        Ok(images)
    }
}

impl PdfRasterizer for PopplerRasterizer {
    fn is_available(&self) -> bool {
        super::engine::check_binary("pdftoppm")
    }

    fn availability_hint(&self) -> String {
        "pdftoppm not installed. Install with: apt install poppler-utils".to_string()
    }

    fn rasterize(&self, pdf_path: &Path, dpi: u32) -> Result<Vec<RgbImage>, OcrError> {
        let temp_dir = TempDir::new()?;
        let temp_path = temp_dir.path();

        let status = Command::new("pdftoppm")
            .args(["-png", "-r", &dpi.to_string()])
            .arg(pdf_path)
            .arg(temp_path.join("page"))
            .status();

        match status {
            Ok(s) if s.success() => {}
            Ok(_) => {
                return Err(OcrError::Rasterization(
                    "pdftoppm failed to convert PDF".to_string(),
                ))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(OcrError::EngineNotAvailable(
                    "pdftoppm not found (install poppler-utils)".to_string(),
                ))
            }
            Err(e) => return Err(OcrError::Io(e)),
        }

        let image_paths = self.collect_page_images(temp_path)?;
        if image_paths.is_empty() {
            return Err(OcrError::Rasterization(
                "No images generated from PDF".to_string(),
            ));
        }

        let mut pages = Vec::with_capacity(image_paths.len());
        for path in &image_paths {
            let img = image::open(path)
                .map_err(|e| OcrError::Image(format!("Failed to load page image: {}", e)))?;
            pages.push(img.to_rgb8());
        }

        Ok(pages)
    }
}
