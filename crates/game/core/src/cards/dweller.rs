use crate::cards::{DwellerPosition, GameBox, TreeSymbol};

/// A card played onto one edge of a woody plant.
///
/// Identity is the full (name, game box, tree symbol, position) tuple: the
/// same creature printed for a different edge is a different catalog entity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DwellerCard {
    pub name: String,
    pub game_box: GameBox,
    pub tree_symbol: Option<TreeSymbol>,
    pub position: DwellerPosition,
}

impl DwellerCard {
    pub fn new(
        name: impl Into<String>,
        game_box: GameBox,
        tree_symbol: Option<TreeSymbol>,
        position: DwellerPosition,
    ) -> Self {
        Self {
            name: name.into(),
            game_box,
            tree_symbol,
            position,
        }
    }

    /// True when this card re-identifies the given identity tuple.
    pub fn matches(
        &self,
        name: &str,
        game_box: GameBox,
        tree_symbol: Option<TreeSymbol>,
        position: DwellerPosition,
    ) -> bool {
        self.name == name
            && self.game_box == game_box
            && self.tree_symbol == tree_symbol
            && self.position == position
    }
}
