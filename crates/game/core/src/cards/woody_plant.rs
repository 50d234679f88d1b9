use std::collections::BTreeMap;

use crate::cards::{DwellerCard, DwellerPosition, GameBox, TreeSymbol};

/// A tree or shrub card that hosts dwellers on its four edges.
///
/// Identity is (name, game box, tree symbol); the dweller map is attached
/// state, not identity. Catalog instances start with no dwellers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WoodyPlantCard {
    pub name: String,
    pub game_box: GameBox,
    pub tree_symbol: Option<TreeSymbol>,
    pub dwellers: BTreeMap<DwellerPosition, Vec<DwellerCard>>,
}

impl WoodyPlantCard {
    pub fn new(
        name: impl Into<String>,
        game_box: GameBox,
        tree_symbol: Option<TreeSymbol>,
    ) -> Self {
        Self {
            name: name.into(),
            game_box,
            tree_symbol,
            dwellers: BTreeMap::new(),
        }
    }

    /// True when this card re-identifies the given identity triple.
    pub fn matches(
        &self,
        name: &str,
        game_box: GameBox,
        tree_symbol: Option<TreeSymbol>,
    ) -> bool {
        self.name == name && self.game_box == game_box && self.tree_symbol == tree_symbol
    }

    /// Returns a new snapshot with `dweller` appended at its declared position.
    ///
    /// The receiver is left untouched; it may be a catalog instance shared
    /// across import attempts.
    #[must_use]
    pub fn with_dweller(&self, dweller: DwellerCard) -> Self {
        let mut next = self.clone();
        next.dwellers.entry(dweller.position).or_default().push(dweller);
        next
    }

    /// Dwellers attached at `position`, in play order.
    pub fn dwellers_at(&self, position: DwellerPosition) -> &[DwellerCard] {
        self.dwellers.get(&position).map_or(&[], Vec::as_slice)
    }

    /// Total attached dwellers across all positions.
    pub fn dweller_count(&self) -> usize {
        self.dwellers.values().map(Vec::len).sum()
    }
}
