//! The transfer request.
//!
//! This module contains the [`Download`] struct describing a single
//! resource to retrieve and the name to save it under. The filename can
//! be given explicitly or derived from the URL's final path segment.
//!
//! # Examples
//!
//! ```rust
//! use sunder::download::Download;
//! use std::convert::TryFrom;
//!
//! // Create from a URL string (filename extracted automatically).
//! let download = Download::try_from("https://example.com/file.zip")?;
//! assert_eq!(download.filename, "file.zip");
//!
//! // Create with a custom filename.
//! let url = reqwest::Url::parse("https://example.com/download")?;
//! let download = Download::new(&url, "custom-name.zip");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::Error;

use reqwest::Url;
use std::convert::TryFrom;

/// Represents a file to be downloaded.
///
/// The request is immutable once a transfer starts: the orchestrator
/// only ever reads it.
#[derive(Debug, Clone)]
pub struct Download {
    /// URL of the file to download.
    pub url: Url,
    /// File name used to save the file on disk.
    pub filename: String,
}

impl Download {
    /// Creates a new [`Download`].
    ///
    /// When using the [`Download::try_from`] method, the file name is
    /// automatically extracted from the URL.
    ///
    /// ## Example
    ///
    /// The following calls are equivalent, minus some extra URL
    /// validations performed by `try_from`:
    ///
    /// ```rust
    /// use sunder::download::Download;
    /// use reqwest::Url;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// Download::try_from("https://example.com/file-0.1.2.zip")?;
    /// Download::new(&Url::parse("https://example.com/file-0.1.2.zip")?, "file-0.1.2.zip");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(url: &Url, filename: &str) -> Self {
        Self {
            url: url.clone(),
            filename: String::from(filename),
        }
    }
}

impl TryFrom<&Url> for Download {
    type Error = crate::error::Error;

    fn try_from(value: &Url) -> Result<Self, Self::Error> {
        value
            .path_segments()
            .ok_or_else(|| {
                Error::InvalidUrl(format!(
                    "The url \"{}\" does not contain a valid path",
                    value
                ))
            })?
            .next_back()
            .filter(|filename| !filename.is_empty())
            .map(|filename| Download {
                url: value.clone(),
                filename: form_urlencoded::parse(filename.as_bytes())
                    .map(|(key, val)| [key, val].concat())
                    .collect(),
            })
            .ok_or_else(|| {
                Error::InvalidUrl(format!("The url \"{}\" does not contain a filename", value))
            })
    }
}

impl TryFrom<&str> for Download {
    type Error = crate::error::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Url::parse(value)
            .map_err(|e| {
                Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", value, e))
            })
            .and_then(|u| Download::try_from(&u))
    }
}
