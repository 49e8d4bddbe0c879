use log::{debug, info};

use crate::{has_winning_line, Board, BoardError, Cell, GameState, InvalidMove, Move, Player};

/// Starts a fresh game: empty board, X to move.
pub fn new_game() -> GameEngine {
    GameEngine::new()
}

/// Owns one board and the turn order for a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    state: GameState,
    moves: Vec<Move>,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    pub const FIRST_PLAYER: Player = Player::ALL[0];

    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Self::FIRST_PLAYER,
            state: GameState::InProgress {
                next_player: Self::FIRST_PLAYER,
            },
            moves: Vec::new(),
        }
    }

    /// Throws the current game away and starts over.
    pub fn reset(&mut self) {
        debug!("resetting game after {} moves", self.moves.len());
        *self = Self::new();
    }

    pub fn phase(&self) -> GameState {
        self.state
    }

    /// The player to move, or the winner once the game is won.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Cells in row-major order, index 0 is top-left.
    pub fn render_view(&self) -> [Cell; Board::CELLS] {
        self.board.cells()
    }

    /// Places the current player's mark at `position` (0..=8) and advances
    /// the game.
    ///
    /// A rejected move leaves board, turn and phase untouched; the caller
    /// may simply ask for another one.
    pub fn submit_move(&mut self, position: isize) -> Result<GameState, InvalidMove> {
        if self.state.is_terminal() {
            debug!("rejected move at {}: game is {}", position, self.state);
            return Err(InvalidMove::GameOver);
        }

        let index = usize::try_from(position)
            .ok()
            .filter(|index| *index < Board::CELLS)
            .ok_or_else(|| {
                debug!("rejected move at {}: outside the board", position);
                InvalidMove::InvalidPosition { position }
            })?;

        let player = self.current_player;
        self.board
            .place(index, player)
            .map_err(|err| {
                debug!("rejected move by {} at {}: {}", player, index, err);
                match err {
                    BoardError::CellOccupied => InvalidMove::CellOccupied { position: index },
                    BoardError::OutOfRange { .. } => InvalidMove::InvalidPosition { position },
                }
            })?;
        self.moves.push(Move::new(index, player));
        debug!("{} placed a mark at {}", player, index);

        // a win on the last free cell is still a win, so check it first
        self.state = if has_winning_line(&self.board, player) {
            info!("{} won after {} moves", player, self.moves.len());
            GameState::Won { winner: player }
        } else if self.board.is_full() {
            info!("game ended in a draw");
            GameState::Draw
        } else {
            self.current_player = player.other();
            GameState::InProgress {
                next_player: self.current_player,
            }
        };

        Ok(self.state)
    }
}
