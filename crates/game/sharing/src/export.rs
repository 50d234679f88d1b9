//! Projection of live players into transport DTOs.
//!
//! Pure and unvalidated: the producing side's own state is trusted. The
//! projection order is deterministic so identical state always yields an
//! identical payload: plants in tableau order, positions in
//! [`DwellerPosition`] order, dwellers in play order.
use canopy_core::{Cave, DwellerCard, DwellerPosition, Forest, Game, Player, WoodyPlantCard};

use crate::codec::{self, EncodeError};
use crate::dto::{
    CaveDto, DwellerCardDto, ForestDto, PlayerDto, PlayerExportDto, WoodyPlantCardDto,
};

/// Version stamped into every exported payload.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Projects a player and encodes the result into a transport string.
pub fn encode_player(game: &Game, player: &Player) -> Result<String, EncodeError> {
    codec::encode(&export_player(game, player))
}

/// Projects a live player into the versioned transport representation.
pub fn export_player(game: &Game, player: &Player) -> PlayerExportDto {
    PlayerExportDto {
        app_version: APP_VERSION.to_owned(),
        game_boxes: game.game_boxes.clone(),
        player: player_dto(player),
    }
}

fn player_dto(player: &Player) -> PlayerDto {
    PlayerDto {
        name: player.name.clone(),
        forest: forest_dto(&player.forest),
    }
}

fn forest_dto(forest: &Forest) -> ForestDto {
    ForestDto {
        woody_plants: forest.woody_plants.iter().map(woody_plant_dto).collect(),
        cave: cave_dto(&forest.cave),
    }
}

fn cave_dto(cave: &Cave) -> CaveDto {
    CaveDto {
        name: cave.name.clone(),
        card_count: cave.card_count,
    }
}

fn woody_plant_dto(plant: &WoodyPlantCard) -> WoodyPlantCardDto {
    WoodyPlantCardDto {
        name: plant.name.clone(),
        game_box: plant.game_box,
        tree_symbol: plant.tree_symbol,
        // Flatten the per-position grouping; the map key is the authoritative
        // position for each dweller.
        dwellers: plant
            .dwellers
            .iter()
            .flat_map(|(&position, dwellers)| {
                dwellers.iter().map(move |d| dweller_dto(d, position))
            })
            .collect(),
    }
}

fn dweller_dto(dweller: &DwellerCard, position: DwellerPosition) -> DwellerCardDto {
    DwellerCardDto {
        name: dweller.name.clone(),
        game_box: dweller.game_box,
        tree_symbol: dweller.tree_symbol,
        position,
    }
}

#[cfg(test)]
mod tests {
    use canopy_core::{Deck, GameBox, TreeSymbol};

    use super::*;

    fn sample_game_and_player() -> (Game, Player) {
        let game = Game::new(vec![GameBox::Base, GameBox::Alpine], Deck::default());

        let oak = WoodyPlantCard::new("Oak", GameBox::Base, Some(TreeSymbol::Oak))
            .with_dweller(DwellerCard::new(
                "Red Fox",
                GameBox::Base,
                None,
                DwellerPosition::Bottom,
            ))
            .with_dweller(DwellerCard::new(
                "Barn Owl",
                GameBox::Base,
                None,
                DwellerPosition::Top,
            ));
        let cave = Cave::new("Cave").with_card_count(9);
        let player = Player::new("Alex", Forest::new(vec![oak], cave));

        (game, player)
    }

    #[test]
    fn stamps_version_and_enabled_boxes() {
        let (game, player) = sample_game_and_player();
        let dto = export_player(&game, &player);

        assert_eq!(dto.app_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(dto.game_boxes, vec![GameBox::Base, GameBox::Alpine]);
        assert_eq!(dto.player.name, "Alex");
    }

    #[test]
    fn flattens_dwellers_with_positions_in_fixed_order() {
        let (game, player) = sample_game_and_player();
        let dto = export_player(&game, &player);

        let plant = &dto.player.forest.woody_plants[0];
        let flattened: Vec<_> = plant
            .dwellers
            .iter()
            .map(|d| (d.name.as_str(), d.position))
            .collect();
        // Top sorts before Bottom regardless of attachment order.
        assert_eq!(
            flattened,
            vec![
                ("Barn Owl", DwellerPosition::Top),
                ("Red Fox", DwellerPosition::Bottom),
            ]
        );
    }

    #[test]
    fn cave_reduces_to_name_and_count() {
        let (game, player) = sample_game_and_player();
        let dto = export_player(&game, &player);

        assert_eq!(dto.player.forest.cave.name, "Cave");
        assert_eq!(dto.player.forest.cave.card_count, 9);
    }

    #[test]
    fn projection_is_deterministic() {
        let (game, player) = sample_game_and_player();
        assert_eq!(
            encode_player(&game, &player).unwrap(),
            encode_player(&game, &player).unwrap()
        );
    }
}
