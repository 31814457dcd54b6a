//! ocrdigest - OCR text extraction and content analysis.
//!
//! Command-line tool that extracts text from scanned images and PDF
//! documents, then writes a plain-text analysis report.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Default to info so multi-page PDF progress is visible; RUST_LOG overrides.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ocrdigest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    ocrdigest::cli::run()
}
