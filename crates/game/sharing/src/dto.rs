//! Transport value types.
//!
//! DTOs are catalog entities stripped down to what re-identifies them on the
//! receiving side. They are created transiently at export, consumed at
//! import, and never mutated in between. Field names are camelCase on the
//! wire; unknown extra fields are tolerated on input for forward
//! compatibility.
use canopy_core::{DwellerPosition, GameBox, TreeSymbol};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DwellerCardDto {
    pub name: String,
    pub game_box: GameBox,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_symbol: Option<TreeSymbol>,
    pub position: DwellerPosition,
}

/// A woody plant with its dwellers flattened into one sequence; each dweller
/// carries its originating position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WoodyPlantCardDto {
    pub name: String,
    pub game_box: GameBox,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tree_symbol: Option<TreeSymbol>,
    pub dwellers: Vec<DwellerCardDto>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaveDto {
    pub name: String,
    pub card_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForestDto {
    pub woody_plants: Vec<WoodyPlantCardDto>,
    pub cave: CaveDto,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub name: String,
    pub forest: ForestDto,
}

/// Root transport object.
///
/// `app_version` and `game_boxes` are producer metadata for the receiving
/// side's compatibility checks; they carry no behavior on the producing side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerExportDto {
    pub app_version: String,
    pub game_boxes: Vec<GameBox>,
    pub player: PlayerDto,
}
