mod board;
mod cell;
mod engine;
mod error;
mod gamestate;
mod line_checker;
mod r#move;
mod player;

pub use board::{Board, Line};
pub use cell::Cell;
pub use engine::{new_game, GameEngine};
pub use error::{BoardError, InvalidMove};
pub use gamestate::GameState;
pub use line_checker::{find_winner, has_winning_line, line_winner};
pub use player::Player;
pub use r#move::{Coordinates, Move, Position};
