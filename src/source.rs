//! Input sources
//!
//! Resolves the command line input to a document tree or pixel buffer.
//! URLs are fetched over HTTP; anything else is read from disk.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error, info};

use crate::config::{Config, FetchConfig};
use crate::document::{parse_html, Node};
use crate::error::{Error, Result};
use crate::raster::PixelBuffer;

/// Where an input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// `http://` and `https://` inputs are URLs; everything else is a path
    pub fn classify(input: &str) -> Self {
        let lower = input.trim_start().to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Url(input.trim().to_string())
        } else {
            Source::File(PathBuf::from(input))
        }
    }
}

/// Fetch a page body as text
pub async fn fetch_html(url: &str, config: &FetchConfig) -> Result<String> {
    debug!("Fetching HTML from URL: {}", url);
    let client = reqwest::Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent.clone())
        .build()?;
    let response = client.get(url).send().await?.error_for_status()?;
    debug!("Response status code: {}", response.status());
    let body = response.text().await?;
    debug!("Fetched {} bytes", body.len());
    Ok(body)
}

/// Read an HTML file
pub fn read_html(path: &Path) -> Result<String> {
    debug!("Reading HTML file: {}", path.display());
    fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and parse a document.
///
/// A failed fetch is logged and replaced by an empty document; a missing
/// or unreadable file is an error.
pub async fn load_document(source: &Source, config: &Config) -> Result<Node> {
    let html = match source {
        Source::Url(url) => match fetch_html(url, &config.fetch).await {
            Ok(html) => html,
            Err(e) => {
                error!("Error fetching HTML: {}", e);
                return Ok(Node::document(Vec::new()));
            }
        },
        Source::File(path) => read_html(path)?,
    };
    Ok(parse_html(&html))
}

/// Decode an image file and apply any configured resize
pub fn load_image(source: &Source, config: &Config) -> Result<PixelBuffer> {
    let path = match source {
        Source::File(path) => path,
        Source::Url(url) => {
            return Err(Error::InvalidOption(format!(
                "images must be local files, got URL {}",
                url
            )))
        }
    };
    let buffer = PixelBuffer::open(path)?;
    let resized = buffer.resized(config.resize.width, config.resize.height);
    if resized.width() != buffer.width() || resized.height() != buffer.height() {
        info!(
            "Image resized from {}x{} to {}x{}",
            buffer.width(),
            buffer.height(),
            resized.width(),
            resized.height()
        );
    }
    Ok(resized)
}
