//! Edgar engine: feed retrieval and filing download pipeline.
mod download;
mod feed;
mod fetch;
mod filename;
mod persist;
mod run;
mod types;

pub use download::{download_document, DownloadError};
pub use feed::{parse_feed, Entry, Feed, FeedError, Link};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use filename::document_filename;
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use run::{run, RunError, RunSettings, RunSummary};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
