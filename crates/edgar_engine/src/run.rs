use std::path::PathBuf;

use engine_logging::{engine_info, engine_warn};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::download::download_document;
use crate::feed::{parse_feed, FeedError};
use crate::fetch::Fetcher;
use crate::persist::{ensure_output_dir, AtomicFileWriter, PersistError};
use crate::types::FetchError;

#[derive(Debug, Clone)]
pub struct RunSettings {
    pub feed_url: String,
    pub output_dir: PathBuf,
    /// Stop after this many successful downloads; 0 means process all entries.
    pub max_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub downloaded: usize,
    pub attempted: usize,
    pub total_entries: usize,
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("preparing output directory: {0}")]
    OutputDir(#[from] PersistError),
    #[error("fetching feed {url}: {source}")]
    FeedFetch { url: String, source: FetchError },
    #[error("parsing feed: {0}")]
    FeedParse(#[from] FeedError),
    #[error("cancelled")]
    Cancelled,
}

/// One batch pass: fetch the feed, then download each referenced document
/// in feed order until `max_count` successes.
///
/// Directory setup and the feed stage are fatal. A failing entry is logged
/// and skipped; it neither counts against `max_count` nor aborts the run.
pub async fn run(
    settings: &RunSettings,
    fetcher: &dyn Fetcher,
    cancel: &CancellationToken,
) -> Result<RunSummary, RunError> {
    ensure_output_dir(&settings.output_dir)?;

    let feed_body = tokio::select! {
        _ = cancel.cancelled() => return Err(RunError::Cancelled),
        result = fetcher.fetch(&settings.feed_url) => {
            result.map_err(|source| RunError::FeedFetch {
                url: settings.feed_url.clone(),
                source,
            })?
        }
    };

    let feed = parse_feed(&feed_body.bytes)?;
    engine_info!(
        "feed {} lists {} entries",
        settings.feed_url,
        feed.entries.len()
    );

    let writer = AtomicFileWriter::new(settings.output_dir.clone());
    let mut downloaded = 0usize;
    let mut attempted = 0usize;

    for entry in &feed.entries {
        if settings.max_count > 0 && downloaded >= settings.max_count {
            break;
        }

        let link = entry.link.href.as_str();
        attempted += 1;

        let result = tokio::select! {
            _ = cancel.cancelled() => return Err(RunError::Cancelled),
            result = download_document(fetcher, link, &writer) => result,
        };

        match result {
            Ok(path) => {
                engine_info!("saved {} -> {}", link, path.display());
                downloaded += 1;
            }
            Err(err) => {
                engine_warn!("skip {}: {}", link, err);
            }
        }
    }

    Ok(RunSummary {
        downloaded,
        attempted,
        total_entries: feed.entries.len(),
    })
}
