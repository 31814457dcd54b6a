//! End-to-end document processing: extraction, analysis, report output.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::analysis::{analyze, build_report, classify, normalize, ContentType, TextStats};
use crate::ocr::{InputKind, TextExtractor};

/// Terminal failures for a processing run. Extraction failures are not
/// listed here: they degrade to an empty transcript and the run continues.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("File {} does not exist", .0.display())]
    MissingInput(PathBuf),

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("Failed to write report to {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Processes one input file end-to-end and writes the analysis report.
#[derive(Default)]
pub struct DocumentProcessor {
    extractor: TextExtractor,
}

impl DocumentProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom extractor (e.g., with substitute collaborators).
    pub fn with_extractor(extractor: TextExtractor) -> Self {
        Self { extractor }
    }

    /// Process an input file and write the report.
    ///
    /// Returns the path the report was written to. The output path defaults
    /// to the input path with a `.txt` extension. Extraction failures are
    /// logged and produce the empty-transcript report rather than an error.
    pub fn process(
        &self,
        input_path: &Path,
        output_path: Option<&Path>,
    ) -> Result<PathBuf, ProcessError> {
        if !input_path.exists() {
            return Err(ProcessError::MissingInput(input_path.to_path_buf()));
        }

        let kind = InputKind::from_path(input_path).ok_or_else(|| {
            let ext = input_path
                .extension()
                .map(|e| format!(".{}", e.to_string_lossy()))
                .unwrap_or_else(|| "(none)".to_string());
            ProcessError::UnsupportedFileType(ext)
        })?;

        let output_path = match output_path {
            Some(path) => path.to_path_buf(),
            None => input_path.with_extension("txt"),
        };

        let raw_text = match kind {
            InputKind::Pdf => self.extractor.extract_pdf(input_path),
            InputKind::Image => self.extractor.extract_image(input_path),
        };
        let raw_text = match raw_text {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Extraction failed for {}: {}", input_path.display(), e);
                String::new()
            }
        };

        let text = normalize(&raw_text);
        let report = if text.is_empty() {
            // Analysis is skipped entirely for an empty transcript.
            build_report(&text, &TextStats::empty(), ContentType::GeneralText)
        } else {
            build_report(&text, &analyze(&text), classify(&text))
        };

        std::fs::write(&output_path, report).map_err(|source| ProcessError::WriteFailed {
            path: output_path.clone(),
            source,
        })?;

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use image::RgbImage;

    use crate::ocr::{OcrEngine, OcrError, PdfRasterizer};

    use super::*;

    /// Engine returning a fixed text, counting invocations.
    struct FixedEngine {
        text: String,
        calls: Arc<AtomicUsize>,
    }

    impl OcrEngine for FixedEngine {
        fn is_available(&self) -> bool {
            true
        }
        fn availability_hint(&self) -> String {
            "fixed".to_string()
        }
        fn recognize(&self, _image: &RgbImage) -> Result<String, OcrError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.clone())
        }
    }

    /// Rasterizer that must never run.
    struct UnreachableRasterizer {
        calls: Arc<AtomicUsize>,
    }

    impl PdfRasterizer for UnreachableRasterizer {
        fn is_available(&self) -> bool {
            true
        }
        fn availability_hint(&self) -> String {
            "unreachable".to_string()
        }
        fn rasterize(&self, _p: &Path, _d: u32) -> Result<Vec<RgbImage>, OcrError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(OcrError::Rasterization("should not be called".to_string()))
        }
    }

    fn stub_processor(text: &str, calls: Arc<AtomicUsize>) -> DocumentProcessor {
        let extractor = TextExtractor::new()
            .with_engine(Box::new(FixedEngine {
                text: text.to_string(),
                calls: calls.clone(),
            }))
            .with_rasterizer(Box::new(UnreachableRasterizer { calls }));
        DocumentProcessor::with_extractor(extractor)
    }

    fn write_png(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        RgbImage::new(2, 2).save(&path).unwrap();
        path
    }

    #[test]
    fn test_missing_input_fails_before_extraction() {
        let calls = Arc::new(AtomicUsize::new(0));
        let processor = stub_processor("text", calls.clone());

        let result = processor.process(Path::new("/nonexistent/scan.png"), None);
        assert!(matches!(result, Err(ProcessError::MissingInput(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.docx");
        std::fs::write(&path, b"data").unwrap();

        let calls = Arc::new(AtomicUsize::new(0));
        let processor = stub_processor("text", calls.clone());
        let result = processor.process(&path, None);

        assert!(matches!(result, Err(ProcessError::UnsupportedFileType(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_image_end_to_end_with_default_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "invoice.png");

        let calls = Arc::new(AtomicUsize::new(0));
        let processor = stub_processor("Invoice total: 100.00 payment due", calls);
        let output = processor.process(&input, None).unwrap();

        assert_eq!(output, dir.path().join("invoice.txt"));
        let report = std::fs::read_to_string(&output).unwrap();
        assert!(report.contains("Content Type: Financial Document/Invoice"));
        assert!(report.contains("Invoice total: 100.00 payment due"));
    }

    #[test]
    fn test_explicit_output_path() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "scan.png");
        let explicit = dir.path().join("out/report.txt");
        std::fs::create_dir_all(explicit.parent().unwrap()).unwrap();

        let calls = Arc::new(AtomicUsize::new(0));
        let processor = stub_processor("plain words here", calls);
        let output = processor.process(&input, Some(&explicit)).unwrap();

        assert_eq!(output, explicit);
        assert!(explicit.exists());
    }

    #[test]
    fn test_extraction_failure_degrades_to_empty_report() {
        let dir = tempfile::tempdir().unwrap();
        // A .png that is not decodable: extraction fails, the run continues.
        let input = dir.path().join("broken.png");
        std::fs::write(&input, b"not an image").unwrap();

        let calls = Arc::new(AtomicUsize::new(0));
        let processor = stub_processor("never used", calls);
        let output = processor.process(&input, None).unwrap();

        let report = std::fs::read_to_string(&output).unwrap();
        assert_eq!(report, "No text could be extracted from the file.");
    }

    #[test]
    fn test_write_failure_is_terminal() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_png(dir.path(), "scan.png");
        let bad_output = dir.path().join("missing-dir/report.txt");

        let calls = Arc::new(AtomicUsize::new(0));
        let processor = stub_processor("some text", calls);
        let result = processor.process(&input, Some(&bad_output));

        assert!(matches!(result, Err(ProcessError::WriteFailed { .. })));
    }
}
