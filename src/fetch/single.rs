//! Single-stream fetching.

use crate::error::Result;
use crate::progress::ProgressSink;

use futures::StreamExt;
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use std::path::Path;
use tokio::{
    fs::File,
    io::{AsyncWriteExt, BufWriter},
};
use tracing::debug;

use super::COPY_BUFFER_SIZE;

/// Fetch the whole resource with one unranged request, straight into
/// the destination file.
///
/// This is the fallback path for servers without byte-range support.
/// The sink is sized from the response's declared length, or left
/// unbounded when the server does not declare one. Returns the number
/// of bytes written.
pub async fn fetch_single(
    client: &ClientWithMiddleware,
    url: &Url,
    destination: &Path,
    sink: &ProgressSink,
) -> Result<u64> {
    debug!("Fetching {} in a single stream", url);
    let res = client.get(url.clone()).send().await?.error_for_status()?;
    sink.set_total(res.content_length());

    let mut file = BufWriter::with_capacity(COPY_BUFFER_SIZE, File::create(destination).await?);
    let mut size: u64 = 0;
    let mut stream = res.bytes_stream();
    while let Some(item) = stream.next().await {
        let mut chunk = item?;
        size += chunk.len() as u64;
        sink.record(chunk.len() as u64);
        file.write_all_buf(&mut chunk).await?;
    }
    file.flush().await?;

    Ok(size)
}
