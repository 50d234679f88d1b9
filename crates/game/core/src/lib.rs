//! Catalog entities and live game state for the forest card game.
//!
//! `canopy-core` defines the canonical card types (woody plants, dwellers,
//! caves), the per-game [`Deck`] of available instances, and the live
//! [`Game`]/[`Player`] aggregates. The blueprint layer in [`catalog`] is the
//! seam through which content crates expose cards that may exist outside the
//! active deck (promos, solo variants); supporting crates depend on the types
//! re-exported here.
pub mod cards;
pub mod catalog;
pub mod deck;
pub mod game;

pub use cards::{Cave, DwellerCard, DwellerPosition, GameBox, TreeSymbol, WoodyPlantCard};
pub use catalog::{
    BlueprintOracle, CaveBlueprint, DwellerBlueprint, DwellerVariant, WoodyPlantBlueprint,
    WoodyPlantVariant,
};
pub use deck::Deck;
pub use game::{Forest, Game, Player};
