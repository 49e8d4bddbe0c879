use crate::{Board, Cell, Line, Player};

/// Returns the player holding every cell of the line.
///
/// Empty cells never match, so a blank line has no owner.
pub fn line_winner(line: Line<'_>) -> Option<Player> {
    let first = line.get(0)?.owner()?;
    line.iter()
        .all(|cell| *cell == Cell::from(first))
        .then_some(first)
}

/// Checks whether `player` owns a full row, column or diagonal,
/// looking at all 8 lines of the board.
pub fn has_winning_line(board: &Board, player: Player) -> bool {
    board
        .lines()
        .any(|line| line_winner(line) == Some(player))
}

/// Checks if the board contains a winner
///
/// the first player that is found to have won is returned, looking at
/// rows, then columns, then diagonals.
///
/// Usage:
/// ```
/// use tictactoe::{find_winner, Board, Player};
///
/// // O X X
/// // O O O <-- O wins
/// // X . X
/// let mut board = Board::new();
/// for (position, player) in [
///     (1, Player::X), (0, Player::O), (2, Player::X), (3, Player::O),
///     (6, Player::X), (4, Player::O), (8, Player::X), (5, Player::O),
/// ] {
///     board.place(position, player).unwrap();
/// }
///
/// assert_eq!(find_winner(&board), Some(Player::O));
/// ```
pub fn find_winner(board: &Board) -> Option<Player> {
    board.lines().find_map(line_winner)
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn board_from(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for (position, player) in marks {
            board
                .place(*position, *player)
                .unwrap_or_else(|e| panic!("could not place {} at {}: {}", player, position, e));
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner() {
        let board = Board::new();
        assert_eq!(find_winner(&board), None);
        assert!(!has_winning_line(&board, Player::X));
        assert!(!has_winning_line(&board, Player::O));
    }

    #[test]
    fn every_line_wins() {
        let lines = [
            [0, 1, 2],
            [3, 4, 5],
            [6, 7, 8],
            [0, 3, 6],
            [1, 4, 7],
            [2, 5, 8],
            [0, 4, 8],
            [2, 4, 6],
        ];
        for (line, player) in lines.iter().cartesian_product(Player::ALL) {
            let marks: Vec<_> = line.iter().map(|position| (*position, player)).collect();
            let board = board_from(&marks);
            assert!(
                has_winning_line(&board, player),
                "line {:?} was not detected for {}",
                line,
                player
            );
            assert!(!has_winning_line(&board, player.other()));
            assert_eq!(find_winner(&board), Some(player));
        }
    }

    #[test]
    fn mixed_line_has_no_winner() {
        // X X O
        let board = board_from(&[(0, Player::X), (1, Player::X), (2, Player::O)]);
        assert_eq!(board.rows().next().and_then(line_winner), None);
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn partial_line_has_no_winner() {
        // X X .
        let board = board_from(&[(0, Player::X), (1, Player::X)]);
        assert!(!has_winning_line(&board, Player::X));
    }
}
