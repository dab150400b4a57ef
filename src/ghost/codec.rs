//! Ghost domain: run <-> opaque blob codec.
//!
//! Layout: base64( [FORMAT_VERSION: u8] ++ deflate(json(run)) ). The version
//! byte rejects old-format blobs at decode time instead of misreading them.
//! serde_json writes floats with a shortest lossless representation, so the
//! textual round trip preserves every recorded value exactly.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;
use std::io::{Read, Write};
use thiserror::Error;

use crate::ghost::types::GhostRun;

pub const FORMAT_VERSION: u8 = 1;

#[derive(Debug, Error)]
pub enum GhostCodecError {
    #[error("blob is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("blob is empty")]
    Empty,
    #[error("unsupported ghost format version {0}")]
    UnsupportedVersion(u8),
    #[error("failed to compress ghost data: {0}")]
    Compress(#[source] std::io::Error),
    #[error("corrupt compressed stream: {0}")]
    Decompress(#[source] std::io::Error),
    #[error("malformed ghost data: {0}")]
    Serde(#[from] serde_json::Error),
}

pub fn encode(run: &GhostRun) -> Result<String, GhostCodecError> {
    let json = serde_json::to_vec(run)?;

    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json).map_err(GhostCodecError::Compress)?;
    let compressed = encoder.finish().map_err(GhostCodecError::Compress)?;

    let mut payload = Vec::with_capacity(compressed.len() + 1);
    payload.push(FORMAT_VERSION);
    payload.extend_from_slice(&compressed);
    Ok(BASE64.encode(payload))
}

/// Decode a persisted blob. Malformed input of any layer (base64, version,
/// deflate, json) surfaces as a distinct error; a partially-populated run is
/// never returned.
pub fn decode(blob: &str) -> Result<GhostRun, GhostCodecError> {
    let payload = BASE64.decode(blob.trim())?;
    let (&version, compressed) = payload.split_first().ok_or(GhostCodecError::Empty)?;
    if version != FORMAT_VERSION {
        return Err(GhostCodecError::UnsupportedVersion(version));
    }

    let mut json = Vec::new();
    DeflateDecoder::new(compressed)
        .read_to_end(&mut json)
        .map_err(GhostCodecError::Decompress)?;

    Ok(serde_json::from_slice(&json)?)
}
