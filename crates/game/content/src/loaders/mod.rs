//! Content loaders for reading card sets from files.
//!
//! Loaders convert RON files into a [`crate::BlueprintRegistry`]; they exist
//! for playtest content and localized card sets, the builtin catalog never
//! touches the filesystem.

pub mod cards;

pub use cards::{CardSet, CardSetLoader};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
