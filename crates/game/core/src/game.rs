//! Live game state: players and their forests.
use crate::cards::{Cave, GameBox, WoodyPlantCard};
use crate::deck::Deck;

/// One player's tableau: their woody plants and their cave.
///
/// Holds clones of deck instances, so two players referring to "the same"
/// physical card compare equal by value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Forest {
    pub woody_plants: Vec<WoodyPlantCard>,
    pub cave: Cave,
}

impl Forest {
    pub fn new(woody_plants: Vec<WoodyPlantCard>, cave: Cave) -> Self {
        Self { woody_plants, cave }
    }
}

/// A participant in a scoring session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    /// Unique within the owning [`Game`]'s player list.
    pub name: String,
    pub forest: Forest,
}

impl Player {
    pub fn new(name: impl Into<String>, forest: Forest) -> Self {
        Self {
            name: name.into(),
            forest,
        }
    }
}

/// A scoring session: enabled boxes, the deck they produce, and the players.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    pub game_boxes: Vec<GameBox>,
    pub deck: Deck,
    pub players: Vec<Player>,
}

impl Game {
    pub fn new(game_boxes: Vec<GameBox>, deck: Deck) -> Self {
        Self {
            game_boxes,
            deck,
            players: Vec::new(),
        }
    }

    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name == name)
    }

    /// Derives a player name not yet taken in this game.
    ///
    /// Returns `base` unchanged when free, otherwise appends `" (1)"`,
    /// `" (2)"`, ... until no collision remains.
    pub fn unique_player_name(&self, base: &str) -> String {
        let mut name = base.to_owned();
        let mut counter = 1;
        while self.players.iter().any(|player| player.name == name) {
            name = format!("{base} ({counter})");
            counter += 1;
        }
        name
    }
}
