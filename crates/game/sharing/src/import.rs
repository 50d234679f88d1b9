//! Reconciles scanned payloads against the receiving game's catalog.
//!
//! One call is one complete run: decode, validate, then resolve every
//! reference against the deck in a single pass. Resolution never aborts on
//! the first miss; the receiver is told everything that is wrong at once.
//! A failed import leaves the game untouched; a successful one appends
//! exactly one player.
use canopy_core::{BlueprintOracle, Deck, Forest, Game, Player, WoodyPlantCard};
use tracing::warn;

use crate::codec;
use crate::dto::{CaveDto, DwellerCardDto, WoodyPlantCardDto};
use crate::schema;

/// Everything a payload referenced that the receiving deck could not supply.
///
/// Dwellers under a woody plant that itself failed to resolve are subsumed by
/// the parent entry and not listed separately.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnavailableCards {
    pub cave: Option<CaveDto>,
    pub dwellers: Vec<DwellerCardDto>,
    pub woody_plants: Vec<WoodyPlantCardDto>,
}

impl UnavailableCards {
    /// Total unresolved entries, for UI overflow counters.
    pub fn len(&self) -> usize {
        usize::from(self.cave.is_some()) + self.dwellers.len() + self.woody_plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Why an import was rejected.
///
/// Flat and mutually exclusive; every failure is user-recoverable by
/// re-scanning or adjusting the game configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    /// The string was not a decodable payload: bad base64, corrupt or
    /// truncated deflate stream, or malformed JSON.
    #[error("scanned data could not be decoded")]
    InvalidData,

    /// The payload decoded but its shape does not match the export schema.
    #[error("scanned data does not match the export schema")]
    InvalidSchema,

    /// Producer and receiver app versions are incompatible.
    ///
    /// Reserved: surfaced with its own user-facing message, but no check
    /// currently raises it. Whether to enforce version compatibility before
    /// card-level reconciliation is an open product decision.
    #[error("payload was produced by an incompatible app version")]
    AppVersionMismatch,

    /// Producer and receiver enabled different game box sets.
    ///
    /// Reserved, like [`ImportError::AppVersionMismatch`].
    #[error("payload was produced with a different game box selection")]
    GameBoxesMismatch,

    /// Structurally valid payload referencing cards this deck cannot supply
    /// (already claimed by other players, or their expansion is disabled).
    #[error("{} referenced cards are not available in this game", .0.len())]
    UnavailableCards(UnavailableCards),
}

pub type ImportResult = Result<Player, ImportError>;

/// Imports a scanned transport string into the receiving game.
///
/// On success the reconstructed player is appended to `game.players` under a
/// collision-free name and returned. On failure the game is left untouched
/// and the error classifies what went wrong; `blueprints` is the fallback
/// index for woody plants that are legitimately outside the deck.
pub fn import_player(
    game: &mut Game,
    blueprints: &dyn BlueprintOracle,
    encoded: &str,
) -> ImportResult {
    let decoded = match codec::decode(encoded) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "failed to decode exported player");
            return Err(ImportError::InvalidData);
        }
    };

    let export = match schema::validate(decoded) {
        Ok(dto) => dto,
        Err(err) => {
            warn!(error = %err, "exported player failed schema validation");
            return Err(ImportError::InvalidSchema);
        }
    };

    let forest_dto = &export.player.forest;
    let mut unavailable = UnavailableCards::default();

    let cave = match game.deck.find_cave(&forest_dto.cave.name) {
        // The payload's count is authoritative; the catalog instance only
        // provides identity.
        Some(cave) => Some(cave.with_card_count(forest_dto.cave.card_count)),
        None => {
            unavailable.cave = Some(forest_dto.cave.clone());
            None
        }
    };

    let mut woody_plants = Vec::with_capacity(forest_dto.woody_plants.len());
    for plant_dto in &forest_dto.woody_plants {
        let Some(mut plant) = resolve_woody_plant(&game.deck, blueprints, plant_dto) else {
            unavailable.woody_plants.push(plant_dto.clone());
            continue;
        };

        for dweller_dto in &plant_dto.dwellers {
            match game.deck.find_dweller(
                &dweller_dto.name,
                dweller_dto.game_box,
                dweller_dto.tree_symbol,
                dweller_dto.position,
            ) {
                Some(dweller) => plant = plant.with_dweller(dweller.clone()),
                None => unavailable.dwellers.push(dweller_dto.clone()),
            }
        }

        woody_plants.push(plant);
    }

    match cave {
        Some(cave) if unavailable.is_empty() => {
            let name = game.unique_player_name(&export.player.name);
            let player = Player::new(name, Forest::new(woody_plants, cave));
            game.add_player(player.clone());
            Ok(player)
        }
        _ => Err(ImportError::UnavailableCards(unavailable)),
    }
}

/// Two-tier woody plant lookup.
///
/// Primary index is the live deck. The fallback covers promos and solo cards:
/// blueprints explicitly flagged as not part of the deck may still be
/// materialized from the variant the payload names.
fn resolve_woody_plant(
    deck: &Deck,
    blueprints: &dyn BlueprintOracle,
    dto: &WoodyPlantCardDto,
) -> Option<WoodyPlantCard> {
    if let Some(plant) = deck.find_woody_plant(&dto.name, dto.game_box, dto.tree_symbol) {
        return Some(plant.clone());
    }

    let blueprint = blueprints.woody_plant(&dto.name)?;
    if blueprint.part_of_deck {
        // Deck-worthy card missing from the deck: genuinely unavailable.
        return None;
    }
    let variant = blueprint.find_variant(dto.game_box, dto.tree_symbol)?;
    Some(blueprint.instantiate(variant))
}
