//! `edgar-fetch`: batch download of the documents listed in an EDGAR
//! company filing feed.

mod args;

use clap::Parser;
use edgar_engine::{run, FetchSettings, ReqwestFetcher, RunSettings};
use engine_logging::{engine_info, LogDestination};
use tokio_util::sync::CancellationToken;

use crate::args::Args;

/// Company Atom feed listing the most recent filings.
const FEED_URL: &str =
    "https://www.sec.gov/cgi-bin/browse-edgar?action=getcompany&CIK=0001067983&output=atom";

/// EDGAR's fair-access policy requires every request to identify the
/// application and a contact point.
const IDENTIFICATION: &str = "edgar-fetch/0.1 (https://github.com/edgar-fetch; ops@edgar-fetch.dev)";

#[tokio::main]
async fn main() {
    engine_logging::initialize(LogDestination::Terminal);

    if let Err(err) = run_from_args().await {
        eprintln!("edgar-fetch error: {err:#}");
        std::process::exit(1);
    }
}

async fn run_from_args() -> anyhow::Result<()> {
    let args = Args::parse();

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let fetcher = ReqwestFetcher::new(FetchSettings {
        user_agent: IDENTIFICATION.to_string(),
        ..FetchSettings::default()
    });
    let settings = RunSettings {
        feed_url: FEED_URL.to_string(),
        output_dir: args.dir,
        max_count: args.count,
    };

    let summary = run(&settings, &fetcher, &cancel).await?;
    engine_info!(
        "downloaded {} of {} listed filings ({} attempted)",
        summary.downloaded,
        summary.total_entries,
        summary.attempted
    );
    Ok(())
}
