//! Errors raised while loading input or configuration.
//!
//! The rendering core itself never fails; everything here comes from I/O,
//! decoding or malformed buffers handed to [`crate::raster::PixelBuffer::new`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("pixel buffer holds {actual} pixels, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
