//! Shared card attribute enums.
//!
//! Serde spellings are part of the transport format consumed by companion
//! apps; renaming a variant here is a wire-format break.

/// Expansion box a card belongs to.
///
/// The enabled box set decides which catalog entities go into a game's deck,
/// and is stamped onto exported payloads as compatibility metadata.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GameBox {
    /// Core game
    #[default]
    Base,
    /// Alpine expansion
    Alpine,
    /// Woodland Edge expansion
    WoodlandEdge,
}

/// Tree suit printed on a card.
///
/// Part of card identity; two prints of the same card name with different
/// symbols are distinct catalog entities. Saplings and most dwellers carry no
/// symbol, which is why cards hold an `Option<TreeSymbol>`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TreeSymbol {
    Beech,
    Birch,
    DouglasFir,
    HorseChestnut,
    Linden,
    Oak,
    SilverFir,
    Sycamore,
    // Alpine expansion suits
    Larch,
    Spruce,
    SwissPine,
}

/// Edge of a woody plant a dweller card attaches to.
///
/// `Ord` so the per-position dweller map iterates in a fixed order, keeping
/// exports deterministic.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DwellerPosition {
    Top,
    Bottom,
    Left,
    Right,
}
