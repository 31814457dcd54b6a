//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;
use console::style;

use crate::ocr::TextExtractor;
use crate::processor::DocumentProcessor;

#[derive(Parser)]
#[command(name = "ocrdigest")]
#[command(about = "Extract text from images and PDFs using OCR")]
#[command(version)]
pub struct Cli {
    /// Path to input file (JPG, JPEG, PNG, BMP, TIFF, GIF, or PDF)
    pub input_file: PathBuf,

    /// Output text file path (defaults to the input path with a .txt extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Where the report will be written: `-o` if given, otherwise the input
    /// path with a `.txt` extension.
    fn effective_output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input_file.with_extension("txt"))
    }
}

/// Parse arguments and process the input file.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let extractor = TextExtractor::new();
    for hint in extractor.availability_warnings() {
        eprintln!("{}", style(format!("Warning: {}", hint)).yellow());
    }

    let output_path = cli.effective_output_path();
    println!("Processing: {}", style(cli.input_file.display()).bold());
    println!(
        "Output will be saved to: {}",
        style(output_path.display()).bold()
    );

    let processor = DocumentProcessor::with_extractor(extractor);
    match processor.process(&cli.input_file, Some(&output_path)) {
        Ok(output_path) => {
            println!(
                "Successfully saved extracted text and analysis to: {}",
                style(output_path.display()).bold()
            );
            println!(
                "\n{}",
                style("OCR processing completed successfully!").green()
            );
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {}", style("Error:").red().bold(), err);
            eprintln!("\n{}", style("OCR processing failed.").red());
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path_replaces_extension() {
        let cli = Cli::parse_from(["ocrdigest", "docs/scan.pdf"]);
        assert_eq!(cli.effective_output_path(), PathBuf::from("docs/scan.txt"));
    }

    #[test]
    fn test_explicit_output_path_wins() {
        let cli = Cli::parse_from(["ocrdigest", "scan.pdf", "-o", "out/report.txt"]);
        assert_eq!(cli.effective_output_path(), PathBuf::from("out/report.txt"));
    }
}
