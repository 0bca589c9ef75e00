use std::path::PathBuf;

use clap::Parser;

/// Download the documents referenced by the EDGAR company filing feed.
#[derive(Debug, Parser)]
#[command(name = "edgar-fetch", version, about)]
pub struct Args {
    /// Destination directory for downloaded documents.
    #[arg(long, default_value = "downloads")]
    pub dir: PathBuf,

    /// Number of filings to fetch (0 = all).
    #[arg(short = 'n', long = "count", default_value_t = 5)]
    pub count: usize,
}
