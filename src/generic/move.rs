use crate::Player;
use serde::{Deserialize, Serialize};

/// Linear board index, row-major: 0 is top-left, 8 is bottom-right.
pub type Position = usize;
pub type Coordinates = (usize, usize);

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub position: Position,
    pub player: Player,
}

impl Move {
    pub fn new(position: Position, player: Player) -> Self {
        Self { position, player }
    }
}
