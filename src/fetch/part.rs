//! Ranged part fetching.

use crate::error::Result;
use crate::plan::PartSpec;
use crate::progress::ProgressSink;

use futures::StreamExt;
use reqwest::{header::RANGE, Url};
use reqwest_middleware::ClientWithMiddleware;
use std::path::Path;
use tokio::{
    fs::File,
    io::{AsyncWriteExt, BufWriter},
};
use tracing::debug;

use super::COPY_BUFFER_SIZE;

/// Fetch one byte range of the resource into its part file.
///
/// The part file is always created, even for an empty range, so the
/// merger finds every part it expects; an empty range issues no
/// request at all. Every chunk written is also reported to the shared
/// progress sink. Any transport or I/O error is fatal to the whole
/// transfer; there is no per-part retry.
pub async fn fetch_part(
    client: &ClientWithMiddleware,
    url: &Url,
    spec: PartSpec,
    path: &Path,
    sink: &ProgressSink,
) -> Result<()> {
    let mut file = BufWriter::with_capacity(COPY_BUFFER_SIZE, File::create(path).await?);
    if spec.is_empty() {
        file.flush().await?;
        return Ok(());
    }

    debug!("Fetching part {} ({})", spec.index, spec.range_header());
    let res = client
        .get(url.clone())
        .header(RANGE, spec.range_header())
        .send()
        .await?
        .error_for_status()?;

    let mut stream = res.bytes_stream();
    while let Some(item) = stream.next().await {
        let mut chunk = item?;
        sink.record(chunk.len() as u64);
        file.write_all_buf(&mut chunk).await?;
    }
    file.flush().await?;

    Ok(())
}
