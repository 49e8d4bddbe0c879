use itertools::Itertools;
use ndarray::{s, Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::{BoardError, Cell, Coordinates, Player, Position};

/// One row, column or diagonal of the board.
pub type Line<'a> = ArrayView1<'a, Cell>;

/// The 3x3 grid. Knows nothing about turns or winners.
///
/// Serialized as the bare `Array2`; deserializing rejects any other shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "Array2<Cell>", into = "Array2<Cell>")]
pub struct Board {
    data: Array2<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Array2<Cell>> for Board {
    type Error = BoardError;

    fn try_from(data: Array2<Cell>) -> Result<Self, Self::Error> {
        let (rows, columns) = data.dim();
        if (rows, columns) != Self::SIZE {
            return Err(BoardError::WrongShape { rows, columns });
        }
        Ok(Self { data })
    }
}

impl From<Board> for Array2<Cell> {
    fn from(board: Board) -> Self {
        board.data
    }
}

impl Board {
    pub const SIZE: Coordinates = (3, 3);
    pub const CELLS: usize = Self::SIZE.0 * Self::SIZE.1;

    pub fn new() -> Self {
        Self {
            data: Array2::from_elem((Self::SIZE.0, Self::SIZE.1), Cell::Empty),
        }
    }

    /// Converts a linear index into (row, column).
    /// Example: 5 -> (1, 2)
    pub fn coordinates_of(position: Position) -> Option<Coordinates> {
        if position >= Self::CELLS {
            return None;
        }
        Some((position / Self::SIZE.1, position % Self::SIZE.1))
    }

    /// Puts `player`'s mark on an empty cell.
    pub fn place(&mut self, position: Position, player: Player) -> Result<(), BoardError> {
        let coordinates =
            Self::coordinates_of(position).ok_or(BoardError::OutOfRange { position })?;
        let cell = &mut self.data[coordinates];
        if !cell.is_empty() {
            return Err(BoardError::CellOccupied);
        }
        *cell = Cell::from(player);
        Ok(())
    }

    pub fn get(&self, position: Position) -> Result<Cell, BoardError> {
        Self::coordinates_of(position)
            .map(|coordinates| self.data[coordinates])
            .ok_or(BoardError::OutOfRange { position })
    }

    pub fn is_full(&self) -> bool {
        self.data.iter().all(|cell| !cell.is_empty())
    }

    pub fn occupied_count(&self) -> usize {
        self.data.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn empty_positions(&self) -> Vec<Position> {
        (0..Self::SIZE.0)
            .cartesian_product(0..Self::SIZE.1)
            .filter(|&coordinates| self.data[coordinates].is_empty())
            .map(|(row, column)| row * Self::SIZE.1 + column)
            .collect()
    }

    /// Row-major copy of the grid.
    pub fn cells(&self) -> [Cell; Self::CELLS] {
        let mut cells = [Cell::Empty; Self::CELLS];
        for (target, cell) in cells.iter_mut().zip(self.data.iter()) {
            *target = *cell;
        }
        cells
    }

    pub fn rows(&self) -> impl Iterator<Item = Line<'_>> {
        self.data.rows().into_iter()
    }

    pub fn columns(&self) -> impl Iterator<Item = Line<'_>> {
        self.data.columns().into_iter()
    }

    /// Main diagonal (0, 4, 8) followed by the anti-diagonal (2, 4, 6).
    pub fn diagonals(&self) -> [Line<'_>; 2] {
        [
            self.data.diag(),
            self.data.slice(s![.., ..;-1]).into_diag(),
        ]
    }

    /// All 8 lines: rows, then columns, then diagonals.
    pub fn lines(&self) -> impl Iterator<Item = Line<'_>> {
        self.rows().chain(self.columns()).chain(self.diagonals())
    }
}
