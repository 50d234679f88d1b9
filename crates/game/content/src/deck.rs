//! Deck assembly from blueprints and enabled game boxes.
use canopy_core::{Cave, Deck, DwellerCard, GameBox, WoodyPlantCard};

use crate::registry::BlueprintRegistry;

/// Expands the registry into the catalog instances of one game configuration.
///
/// Every variant printed in an enabled box contributes `count` identical
/// instances; blueprints flagged as not part of the deck are skipped (they
/// stay reachable through the blueprint oracle). Caves are always included.
pub fn build_deck(registry: &BlueprintRegistry, game_boxes: &[GameBox]) -> Deck {
    let enabled = |game_box: GameBox| game_boxes.contains(&game_box);

    let mut woody_plants: Vec<WoodyPlantCard> = Vec::new();
    for blueprint in registry.woody_plants() {
        if !blueprint.part_of_deck {
            continue;
        }
        for variant in &blueprint.variants {
            if enabled(variant.game_box) {
                for _ in 0..variant.count {
                    woody_plants.push(blueprint.instantiate(variant));
                }
            }
        }
    }

    let mut dwellers: Vec<DwellerCard> = Vec::new();
    for blueprint in registry.dwellers() {
        for variant in &blueprint.variants {
            if enabled(variant.game_box) {
                for _ in 0..variant.count {
                    dwellers.push(blueprint.instantiate(variant));
                }
            }
        }
    }

    let caves: Vec<Cave> = registry.caves().iter().map(|b| b.instantiate()).collect();

    Deck::new(woody_plants, dwellers, caves)
}
