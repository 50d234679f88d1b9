//! Card content: the shipped blueprint catalog and deck assembly.
//!
//! This crate houses the static card data and turns it into per-game decks:
//! - Builtin blueprint catalog (every printing the companion app knows about)
//! - Deck builder keyed on the enabled game boxes
//! - RON loader for external card sets (playtest content, translations)
//!
//! Content is consumed through the [`canopy_core::BlueprintOracle`] seam and
//! never appears in live game state itself.

pub mod builtin;
pub mod deck;
pub mod registry;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use deck::build_deck;
pub use registry::BlueprintRegistry;

#[cfg(feature = "loaders")]
pub use loaders::{CardSet, CardSetLoader};
