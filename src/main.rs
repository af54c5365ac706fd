//! Command-line front end for the sunder downloader.

use clap::Parser;
use reqwest::Url;
use sunder::{Download, DownloaderBuilder, Error};

#[derive(Parser, Debug)]
#[command(version, about = "Concurrent HTTP(S) file downloader")]
struct Args {
    /// URL of the file to download.
    url: String,

    /// Output filename. Derived from the URL when omitted.
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// Number of concurrent connections. Defaults to the number of
    /// logical CPUs.
    #[arg(short, long, value_name = "COUNT")]
    concurrency: Option<usize>,
}

/// Number of logical CPUs, clamped to at least 1.
fn detected_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(std::num::NonZeroUsize::get)
        .unwrap_or(1)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let url = Url::parse(&args.url)
        .map_err(|e| Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", args.url, e)))?;
    let download = match args.output.as_deref() {
        Some(filename) if !filename.is_empty() => Download::new(&url, filename),
        _ => Download::try_from(&url)?,
    };

    let concurrency = args.concurrency.unwrap_or_else(detected_parallelism);
    let downloader = DownloaderBuilder::new().parallelism(concurrency).build();

    let summary = downloader.download(&download).await?;
    println!(
        "Saved {} ({} bytes, {} parts)",
        summary.download().filename,
        summary.size(),
        summary.parts(),
    );

    Ok(())
}
