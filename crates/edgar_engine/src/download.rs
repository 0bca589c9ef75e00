use std::path::PathBuf;

use engine_logging::engine_debug;
use thiserror::Error;

use crate::fetch::Fetcher;
use crate::filename::document_filename;
use crate::persist::{AtomicFileWriter, PersistError};
use crate::types::FetchError;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("fetching {link}: {source}")]
    Fetch { link: String, source: FetchError },
    #[error("writing document: {0}")]
    Persist(#[from] PersistError),
}

/// Fetch one document and write its body under the writer's directory,
/// named by [`document_filename`]. Creates or replaces exactly one file.
pub async fn download_document(
    fetcher: &dyn Fetcher,
    link: &str,
    writer: &AtomicFileWriter,
) -> Result<PathBuf, DownloadError> {
    let output = fetcher
        .fetch(link)
        .await
        .map_err(|source| DownloadError::Fetch {
            link: link.to_string(),
            source,
        })?;

    let filename = document_filename(link);
    engine_debug!(
        "fetched {} ({} bytes) as {}",
        link,
        output.metadata.byte_len,
        filename
    );

    let path = writer.write(&filename, &output.bytes)?;
    Ok(path)
}
