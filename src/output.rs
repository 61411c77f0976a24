//! JSON output
//!
//! Machine-readable form of a rendering, for `--format json`. Each output
//! is tagged with its `kind`. `mode` is only present when a whole document
//! was reduced:
//!
//! ```json
//! {"kind": "document", "mode": "full", "fragments": [{"text": "HELLO\n", "style": "heading"}]}
//! {"kind": "image", "width": 640, "height": 480, "columns": 80, "rows": [{"cells": [...]}]}
//! ```

use serde::{Deserialize, Serialize};

use crate::document::{Fragment, ReduceMode};
use crate::raster::RenderedRow;

/// A finished rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderOutput {
    /// Reduced document
    Document {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        mode: Option<ReduceMode>,
        fragments: Vec<Fragment>,
    },

    /// Quantized image
    Image {
        /// Source width in pixels (after any resize)
        width: usize,
        /// Source height in pixels (after any resize)
        height: usize,
        /// Cells per row
        columns: usize,
        rows: Vec<RenderedRow>,
    },
}

/// Serialize an output to JSON
pub fn serialize_output(output: &RenderOutput) -> serde_json::Result<String> {
    serde_json::to_string(output)
}
