//! Blueprint registry: the global card catalog.
use canopy_core::{BlueprintOracle, CaveBlueprint, DwellerBlueprint, WoodyPlantBlueprint};

/// Owns every blueprint the application knows about, deck-worthy or not.
///
/// The registry outlives any single game: decks are built from it per game
/// configuration, and the import fallback consults it for cards that are
/// intentionally absent from the active deck.
#[derive(Clone, Debug, Default)]
pub struct BlueprintRegistry {
    woody_plants: Vec<WoodyPlantBlueprint>,
    dwellers: Vec<DwellerBlueprint>,
    caves: Vec<CaveBlueprint>,
}

impl BlueprintRegistry {
    pub fn new(
        woody_plants: Vec<WoodyPlantBlueprint>,
        dwellers: Vec<DwellerBlueprint>,
        caves: Vec<CaveBlueprint>,
    ) -> Self {
        Self {
            woody_plants,
            dwellers,
            caves,
        }
    }

    /// The card catalog shipped with the application.
    pub fn builtin() -> Self {
        Self::new(
            crate::builtin::woody_plants(),
            crate::builtin::dwellers(),
            crate::builtin::caves(),
        )
    }

    pub fn woody_plants(&self) -> &[WoodyPlantBlueprint] {
        &self.woody_plants
    }

    pub fn dwellers(&self) -> &[DwellerBlueprint] {
        &self.dwellers
    }

    pub fn caves(&self) -> &[CaveBlueprint] {
        &self.caves
    }
}

impl BlueprintOracle for BlueprintRegistry {
    fn woody_plant(&self, name: &str) -> Option<&WoodyPlantBlueprint> {
        self.woody_plants.iter().find(|b| b.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_knows_its_promos() {
        let registry = BlueprintRegistry::builtin();

        let promo = registry.woody_plant("Ginkgo").unwrap();
        assert!(!promo.part_of_deck);

        let oak = registry.woody_plant("Oak").unwrap();
        assert!(oak.part_of_deck);

        assert!(registry.woody_plant("Baobab").is_none());
    }
}
