//! Card blueprints and the oracle seam over them.
//!
//! A blueprint describes every printing of a card name across game boxes; a
//! deck is built by instantiating the variants of the enabled boxes. The
//! [`BlueprintOracle`] trait is the second tier of the import lookup: cards
//! flagged as not part of the deck (promos, solo variants) are absent from
//! every deck yet must still be importable.
use crate::cards::{Cave, DwellerCard, DwellerPosition, GameBox, TreeSymbol, WoodyPlantCard};

/// One printing of a woody plant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WoodyPlantVariant {
    pub game_box: GameBox,
    pub tree_symbol: Option<TreeSymbol>,
    /// Copies of this printing in the box.
    pub count: u8,
}

/// Every printing of a woody plant card name.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WoodyPlantBlueprint {
    pub name: String,
    /// `false` for promos and solo cards that are never dealt into a deck but
    /// remain legitimately importable.
    pub part_of_deck: bool,
    pub variants: Vec<WoodyPlantVariant>,
}

impl WoodyPlantBlueprint {
    pub fn new(
        name: impl Into<String>,
        part_of_deck: bool,
        variants: Vec<WoodyPlantVariant>,
    ) -> Self {
        Self {
            name: name.into(),
            part_of_deck,
            variants,
        }
    }

    pub fn find_variant(
        &self,
        game_box: GameBox,
        tree_symbol: Option<TreeSymbol>,
    ) -> Option<&WoodyPlantVariant> {
        self.variants
            .iter()
            .find(|variant| variant.game_box == game_box && variant.tree_symbol == tree_symbol)
    }

    /// Materializes a fresh catalog instance of one printing, with no
    /// dwellers attached.
    pub fn instantiate(&self, variant: &WoodyPlantVariant) -> WoodyPlantCard {
        WoodyPlantCard::new(self.name.clone(), variant.game_box, variant.tree_symbol)
    }
}

/// One printing of a dweller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DwellerVariant {
    pub game_box: GameBox,
    pub tree_symbol: Option<TreeSymbol>,
    pub count: u8,
}

/// Every printing of a dweller card name at one attachment position.
///
/// There is no part-of-deck escape hatch here: dwellers resolve against the
/// deck only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DwellerBlueprint {
    pub name: String,
    pub position: DwellerPosition,
    pub variants: Vec<DwellerVariant>,
}

impl DwellerBlueprint {
    pub fn new(
        name: impl Into<String>,
        position: DwellerPosition,
        variants: Vec<DwellerVariant>,
    ) -> Self {
        Self {
            name: name.into(),
            position,
            variants,
        }
    }

    pub fn instantiate(&self, variant: &DwellerVariant) -> DwellerCard {
        DwellerCard::new(
            self.name.clone(),
            variant.game_box,
            variant.tree_symbol,
            self.position,
        )
    }
}

/// A cave printing. Caves carry no box or symbol identity and start empty.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CaveBlueprint {
    pub name: String,
}

impl CaveBlueprint {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn instantiate(&self) -> Cave {
        Cave::new(self.name.clone())
    }
}

/// Read-only access to the global blueprint catalog.
///
/// Implemented by content crates; consumed by the import reconciler as the
/// fallback index for woody plants that are intentionally outside the deck.
pub trait BlueprintOracle {
    /// Blueprint for a woody plant card name, if the catalog knows it.
    fn woody_plant(&self, name: &str) -> Option<&WoodyPlantBlueprint>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instantiate_produces_empty_card_of_that_printing() {
        let blueprint = WoodyPlantBlueprint::new(
            "Oak",
            true,
            vec![
                WoodyPlantVariant {
                    game_box: GameBox::Base,
                    tree_symbol: Some(TreeSymbol::Oak),
                    count: 7,
                },
                WoodyPlantVariant {
                    game_box: GameBox::Alpine,
                    tree_symbol: Some(TreeSymbol::Oak),
                    count: 2,
                },
            ],
        );

        let variant = blueprint
            .find_variant(GameBox::Alpine, Some(TreeSymbol::Oak))
            .unwrap();
        let card = blueprint.instantiate(variant);

        assert_eq!(card.name, "Oak");
        assert_eq!(card.game_box, GameBox::Alpine);
        assert_eq!(card.dweller_count(), 0);
    }

    #[test]
    fn find_variant_requires_exact_symbol() {
        let blueprint = WoodyPlantBlueprint::new(
            "Tree Sapling",
            true,
            vec![WoodyPlantVariant {
                game_box: GameBox::Base,
                tree_symbol: None,
                count: 10,
            }],
        );

        assert!(blueprint.find_variant(GameBox::Base, None).is_some());
        assert!(blueprint
            .find_variant(GameBox::Base, Some(TreeSymbol::Oak))
            .is_none());
    }
}
