//! Structural validation of decoded payloads.
//!
//! Runs between the codec and the reconciler: a structurally broken payload
//! (producer bug, foreign QR code, corruption the codec happened to accept)
//! must be distinguishable from a well-formed payload referencing cards the
//! receiver doesn't have. Nothing here touches a deck.
use crate::dto::PlayerExportDto;

/// A decoded value whose shape does not match the export schema.
///
/// Raised for missing required fields, wrong primitive types, and enum values
/// outside the known game box / tree symbol / position sets.
#[derive(Debug, thiserror::Error)]
#[error("payload does not match the export schema: {0}")]
pub struct SchemaError(#[from] serde_json::Error);

/// Checks a decoded value against the versioned transport shape.
pub fn validate(value: serde_json::Value) -> Result<PlayerExportDto, SchemaError> {
    Ok(serde_json::from_value(value)?)
}
