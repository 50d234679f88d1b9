//! The set of catalog instances available in one game configuration.
use crate::cards::{Cave, DwellerCard, DwellerPosition, GameBox, TreeSymbol, WoodyPlantCard};

/// All card instances the current game can hand out.
///
/// Built once from the enabled game boxes before any player joins, then
/// treated as read-only: lookups return references into the deck and callers
/// clone what they keep. Decks hold at most a few hundred cards, so lookups
/// are linear scans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    pub woody_plants: Vec<WoodyPlantCard>,
    pub dwellers: Vec<DwellerCard>,
    pub caves: Vec<Cave>,
}

impl Deck {
    pub fn new(
        woody_plants: Vec<WoodyPlantCard>,
        dwellers: Vec<DwellerCard>,
        caves: Vec<Cave>,
    ) -> Self {
        Self {
            woody_plants,
            dwellers,
            caves,
        }
    }

    /// Exact-identity lookup for a woody plant.
    pub fn find_woody_plant(
        &self,
        name: &str,
        game_box: GameBox,
        tree_symbol: Option<TreeSymbol>,
    ) -> Option<&WoodyPlantCard> {
        self.woody_plants
            .iter()
            .find(|plant| plant.matches(name, game_box, tree_symbol))
    }

    /// Exact-identity lookup for a dweller.
    pub fn find_dweller(
        &self,
        name: &str,
        game_box: GameBox,
        tree_symbol: Option<TreeSymbol>,
        position: DwellerPosition,
    ) -> Option<&DwellerCard> {
        self.dwellers
            .iter()
            .find(|dweller| dweller.matches(name, game_box, tree_symbol, position))
    }

    /// Caves match by name alone.
    pub fn find_cave(&self, name: &str) -> Option<&Cave> {
        self.caves.iter().find(|cave| cave.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_deck() -> Deck {
        Deck::new(
            vec![
                WoodyPlantCard::new("Oak", GameBox::Base, Some(TreeSymbol::Oak)),
                WoodyPlantCard::new("Tree Sapling", GameBox::Base, None),
            ],
            vec![DwellerCard::new(
                "Red Fox",
                GameBox::Base,
                None,
                DwellerPosition::Bottom,
            )],
            vec![Cave::new("Cave")],
        )
    }

    #[test]
    fn woody_plant_lookup_requires_full_identity() {
        let deck = sample_deck();

        assert!(deck
            .find_woody_plant("Oak", GameBox::Base, Some(TreeSymbol::Oak))
            .is_some());
        // Same name, wrong symbol or box: different catalog entity.
        assert!(deck.find_woody_plant("Oak", GameBox::Base, None).is_none());
        assert!(deck
            .find_woody_plant("Oak", GameBox::Alpine, Some(TreeSymbol::Oak))
            .is_none());
        assert!(deck.find_woody_plant("Tree Sapling", GameBox::Base, None).is_some());
    }

    #[test]
    fn dweller_lookup_includes_position() {
        let deck = sample_deck();

        assert!(deck
            .find_dweller("Red Fox", GameBox::Base, None, DwellerPosition::Bottom)
            .is_some());
        assert!(deck
            .find_dweller("Red Fox", GameBox::Base, None, DwellerPosition::Top)
            .is_none());
    }

    #[test]
    fn cave_lookup_ignores_everything_but_name() {
        let deck = sample_deck();

        assert!(deck.find_cave("Cave").is_some());
        assert!(deck.find_cave("Bear Den").is_none());
    }
}
