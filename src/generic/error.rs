use thiserror::Error;

/// Rejections raised by the board itself.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("the cell is already occupied")]
    CellOccupied,
    #[error("position {position} is outside the board")]
    OutOfRange { position: usize },
    #[error("expected a 3x3 grid, got {rows}x{columns}")]
    WrongShape { rows: usize, columns: usize },
}

/// Reasons a submitted move is refused. None of them change the game.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("position {position} is not between 0 and 8")]
    InvalidPosition { position: isize },
    #[error("position {position} is already taken")]
    CellOccupied { position: usize },
    #[error("the game is already over")]
    GameOver,
}
