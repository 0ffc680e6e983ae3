//! Output handling for captured screenshots.
//!
//! The capture sequence produces a base64 PNG payload; an [`OutputTarget`]
//! decides what the decoded image becomes. [`Bytes`] hands back the raw
//! PNG, [`Base64`] keeps the wire encoding, and [`ToFile`] writes the
//! image to disk.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine as _;

use crate::error::Result;

/// Decode the base64 payload returned by `Page.captureScreenshot`.
pub(crate) fn decode_payload(payload: &str) -> Result<Vec<u8>> {
    Ok(B64.decode(payload)?)
}

/// Strategy for materializing a decoded screenshot.
pub trait OutputTarget {
    /// What the caller gets back for a completed capture.
    type Output;

    /// Turn the decoded PNG bytes into the target's output form.
    fn assemble(&self, png: Vec<u8>) -> Result<Self::Output>;
}

/// Returns the decoded PNG bytes unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bytes;

impl OutputTarget for Bytes {
    type Output = Vec<u8>;

    fn assemble(&self, png: Vec<u8>) -> Result<Vec<u8>> {
        Ok(png)
    }
}

/// Re-encodes the image as a base64 string, the form WebDriver screenshot
/// endpoints traffic in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64;

impl OutputTarget for Base64 {
    type Output = String;

    fn assemble(&self, png: Vec<u8>) -> Result<String> {
        Ok(B64.encode(png))
    }
}

/// Writes the image to a file and returns the path written.
#[derive(Debug, Clone)]
pub struct ToFile {
    path: PathBuf,
}

impl ToFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputTarget for ToFile {
    type Output = PathBuf;

    fn assemble(&self, png: Vec<u8>) -> Result<PathBuf> {
        std::fs::write(&self.path, png)?;
        Ok(self.path.clone())
    }
}
