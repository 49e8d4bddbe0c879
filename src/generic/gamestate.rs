use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Player;

/// Phase of a game. `Won` and `Draw` are terminal.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Won { winner: Player },
    Draw,
    InProgress { next_player: Player },
}

impl GameState {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GameState::InProgress { .. })
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_in_progress()
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameState::Won { winner } => Some(*winner),
            _ => None,
        }
    }
}

impl Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameState::Won { winner } => write!(f, "won by {}", winner),
            GameState::Draw => write!(f, "draw"),
            GameState::InProgress { next_player } => {
                write!(f, "in progress, {} to move", next_player)
            }
        }
    }
}
