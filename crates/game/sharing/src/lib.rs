//! Offline player transfer over a scannable code.
//!
//! A guest's forest travels to the host as a compact string rendered as a QR
//! code, not over a network. The pipeline is four stages, composed linearly
//! on export and inversely on import:
//!
//! ```text
//! export: Game + Player -> dto -> codec::encode -> String
//! import: String -> codec::decode -> schema::validate -> import reconciler
//!         -> Player | ImportError
//! ```
//!
//! The interesting part is the reconciler: the scanned payload references
//! cards by identity, and the receiving deck may not have them (expansion
//! disabled, copies already claimed). [`import::import_player`] resolves
//! everything it can in one pass and reports the complete remainder.
//!
//! Rendering the string as an image, camera capture, and per-frame dedup are
//! UI collaborator concerns; this crate is synchronous, does no I/O, and
//! returns every failure as a value.
pub mod codec;
pub mod dto;
pub mod export;
pub mod import;
pub mod schema;

pub use codec::{DecodeError, EncodeError};
pub use dto::{
    CaveDto, DwellerCardDto, ForestDto, PlayerDto, PlayerExportDto, WoodyPlantCardDto,
};
pub use export::{encode_player, export_player};
pub use import::{ImportError, ImportResult, UnavailableCards, import_player};
pub use schema::SchemaError;
