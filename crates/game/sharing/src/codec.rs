//! Transport codec: canonical JSON, zlib-compressed, base64-armored.
//!
//! Optical codes have a finite data-density budget, so the canonical JSON is
//! deflated before armoring. The container is zlib and the alphabet is
//! standard base64 with padding; both are fixed by the payloads companion
//! apps already produce and scan.
use std::io::{Read, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

/// Errors produced while turning a value into a transport string.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("failed to serialize payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to compress payload: {0}")]
    Compress(#[from] std::io::Error),
}

/// Errors produced while turning a transport string back into a value.
///
/// The variants track which stage rejected the input; callers collapse all
/// of them into a single invalid-data outcome, the split exists for logs.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("input is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("failed to decompress payload: {0}")]
    Inflate(#[from] std::io::Error),

    #[error("decompressed payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encodes a serializable value into a scannable transport string.
pub fn encode<T: serde::Serialize>(value: &T) -> Result<String, EncodeError> {
    let json = serde_json::to_vec(value)?;
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&json)?;
    let compressed = encoder.finish()?;
    Ok(STANDARD.encode(compressed))
}

/// Decodes a transport string back into the canonical JSON value.
///
/// Inverse of [`encode`]: `decode(&encode(v)?)? == v` for any serializable
/// `v`. Shape checks against the export schema happen later, in
/// [`crate::schema`].
pub fn decode(data: &str) -> Result<serde_json::Value, DecodeError> {
    let compressed = STANDARD.decode(data)?;
    let mut decoder = ZlibDecoder::new(compressed.as_slice());
    let mut json = Vec::new();
    decoder.read_to_end(&mut json)?;
    Ok(serde_json::from_slice(&json)?)
}
