//! Card set loader.

use std::path::Path;

use canopy_core::{CaveBlueprint, DwellerBlueprint, WoodyPlantBlueprint};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::registry::BlueprintRegistry;

/// Card set structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSet {
    pub woody_plants: Vec<WoodyPlantBlueprint>,
    pub dwellers: Vec<DwellerBlueprint>,
    pub caves: Vec<CaveBlueprint>,
}

/// Loader for card sets from RON files.
pub struct CardSetLoader;

impl CardSetLoader {
    /// Load a card set from a RON file into a blueprint registry.
    pub fn load(path: &Path) -> LoadResult<BlueprintRegistry> {
        let content = read_file(path)?;
        let card_set: CardSet = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse card set RON: {}", e))?;

        Ok(BlueprintRegistry::new(
            card_set.woody_plants,
            card_set.dwellers,
            card_set.caves,
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use canopy_core::{BlueprintOracle, GameBox, TreeSymbol};

    use super::*;

    const SAMPLE_SET: &str = r#"
CardSet(
    woody_plants: [
        (
            name: "Oak",
            part_of_deck: true,
            variants: [
                (game_box: base, tree_symbol: Some(oak), count: 7),
            ],
        ),
        (
            name: "Ginkgo",
            part_of_deck: false,
            variants: [
                (game_box: base, tree_symbol: None, count: 1),
            ],
        ),
    ],
    dwellers: [
        (
            name: "Red Fox",
            position: bottom,
            variants: [
                (game_box: base, tree_symbol: None, count: 3),
            ],
        ),
    ],
    caves: [
        (name: "Cave"),
    ],
)
"#;

    #[test]
    fn loads_card_set_from_ron() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_SET.as_bytes()).unwrap();

        let registry = CardSetLoader::load(file.path()).unwrap();

        let oak = registry.woody_plant("Oak").unwrap();
        assert!(oak.part_of_deck);
        assert_eq!(
            oak.find_variant(GameBox::Base, Some(TreeSymbol::Oak)).unwrap().count,
            7
        );
        assert!(!registry.woody_plant("Ginkgo").unwrap().part_of_deck);
        assert_eq!(registry.dwellers().len(), 1);
        assert_eq!(registry.caves().len(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = CardSetLoader::load(Path::new("/nonexistent/cards.ron")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn malformed_ron_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"CardSet(woody_plants: [").unwrap();

        let err = CardSetLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse card set RON"));
    }
}
