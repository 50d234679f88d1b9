//! The shipped card catalog.
//!
//! Counts follow the physical boxes. Shrubs and saplings carry no tree
//! symbol; promos are flagged as not part of the deck so the deck builder
//! skips them while the import fallback can still materialize them.
use canopy_core::{
    CaveBlueprint, DwellerBlueprint, DwellerPosition, DwellerVariant, GameBox, TreeSymbol,
    WoodyPlantBlueprint, WoodyPlantVariant,
};

fn tree(name: &str, game_box: GameBox, symbol: TreeSymbol, count: u8) -> WoodyPlantBlueprint {
    WoodyPlantBlueprint::new(
        name,
        true,
        vec![WoodyPlantVariant {
            game_box,
            tree_symbol: Some(symbol),
            count,
        }],
    )
}

fn shrub(name: &str, game_box: GameBox, count: u8) -> WoodyPlantBlueprint {
    WoodyPlantBlueprint::new(
        name,
        true,
        vec![WoodyPlantVariant {
            game_box,
            tree_symbol: None,
            count,
        }],
    )
}

fn dweller(
    name: &str,
    position: DwellerPosition,
    game_box: GameBox,
    tree_symbol: Option<TreeSymbol>,
    count: u8,
) -> DwellerBlueprint {
    DwellerBlueprint::new(
        name,
        position,
        vec![DwellerVariant {
            game_box,
            tree_symbol,
            count,
        }],
    )
}

/// Every woody plant printing across the supported boxes.
pub fn woody_plants() -> Vec<WoodyPlantBlueprint> {
    vec![
        // Base box trees
        tree("Silver Fir", GameBox::Base, TreeSymbol::SilverFir, 6),
        tree("Beech", GameBox::Base, TreeSymbol::Beech, 6),
        tree("Birch", GameBox::Base, TreeSymbol::Birch, 6),
        tree("Oak", GameBox::Base, TreeSymbol::Oak, 7),
        tree("Linden", GameBox::Base, TreeSymbol::Linden, 6),
        tree("Sycamore", GameBox::Base, TreeSymbol::Sycamore, 6),
        tree("Horse Chestnut", GameBox::Base, TreeSymbol::HorseChestnut, 6),
        tree("Douglas Fir", GameBox::Base, TreeSymbol::DouglasFir, 6),
        shrub("Tree Sapling", GameBox::Base, 10),
        // Alpine
        tree("Larch", GameBox::Alpine, TreeSymbol::Larch, 4),
        tree("Spruce", GameBox::Alpine, TreeSymbol::Spruce, 4),
        tree("Swiss Pine", GameBox::Alpine, TreeSymbol::SwissPine, 4),
        // Woodland Edge shrubs
        shrub("Hazel", GameBox::WoodlandEdge, 3),
        shrub("Blackthorn", GameBox::WoodlandEdge, 3),
        shrub("Juniper", GameBox::WoodlandEdge, 3),
        // Promos: never dealt into a deck, still importable
        WoodyPlantBlueprint::new(
            "Ginkgo",
            false,
            vec![WoodyPlantVariant {
                game_box: GameBox::Base,
                tree_symbol: None,
                count: 1,
            }],
        ),
    ]
}

/// Every dweller printing across the supported boxes.
pub fn dwellers() -> Vec<DwellerBlueprint> {
    use DwellerPosition::{Bottom, Left, Right, Top};

    vec![
        // Base box
        dweller("Barn Owl", Top, GameBox::Base, None, 2),
        dweller("Great Spotted Woodpecker", Top, GameBox::Base, None, 3),
        dweller("Red Squirrel", Top, GameBox::Base, None, 3),
        dweller("Gall Wasp", Top, GameBox::Base, Some(TreeSymbol::Oak), 2),
        dweller("Red Fox", Bottom, GameBox::Base, None, 3),
        dweller("Fire Salamander", Bottom, GameBox::Base, None, 2),
        dweller("Wild Boar", Bottom, GameBox::Base, None, 3),
        dweller("Chanterelle", Bottom, GameBox::Base, None, 4),
        dweller("Blackberries", Left, GameBox::Base, None, 4),
        dweller("Wood Anemone", Left, GameBox::Base, None, 3),
        dweller("Peacock Butterfly", Right, GameBox::Base, None, 3),
        dweller("Violet Carpenter Bee", Right, GameBox::Base, None, 2),
        // Alpine
        dweller("Alpine Marmot", Bottom, GameBox::Alpine, None, 2),
        dweller("Golden Eagle", Top, GameBox::Alpine, None, 2),
        // Woodland Edge
        dweller("Hedgehog", Bottom, GameBox::WoodlandEdge, None, 2),
        dweller("Red-Backed Shrike", Top, GameBox::WoodlandEdge, None, 2),
    ]
}

/// Cave printings. One per game regardless of box selection.
pub fn caves() -> Vec<CaveBlueprint> {
    vec![CaveBlueprint::new("Cave")]
}
