//! Plain-text front end: prints the board, reads moves numbered 1-9.

mod args;

pub use args::ConsoleArgs;

use std::io::{self, BufRead, Write};

use itertools::Itertools;
use log::{debug, warn};

use crate::{Board, Cell, GameEngine, GameState, InvalidMove, Player};

pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    args: ConsoleArgs,
    engine: GameEngine,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, args: ConsoleArgs) -> Self {
        Self {
            input,
            output,
            args,
            engine: GameEngine::new(),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Plays one game to the end, or until the input runs dry.
    pub fn run(&mut self) -> io::Result<GameState> {
        self.print_welcome()?;

        loop {
            self.print_board()?;
            let player = self.engine.current_player();
            writeln!(self.output, "\nPlayer {}'s turn", self.symbol(player))?;
            if self.args.show_hints {
                self.print_hints()?;
            }

            let Some(state) = self.read_move()? else {
                warn!("input closed before the game ended");
                return Ok(self.engine.phase());
            };

            match state {
                GameState::InProgress { .. } => continue,
                GameState::Won { winner } => {
                    self.print_board()?;
                    writeln!(self.output, "\nPlayer {} wins!", self.symbol(winner))?;
                }
                GameState::Draw => {
                    self.print_board()?;
                    writeln!(self.output, "\nIt's a tie!")?;
                }
            }
            self.output.flush()?;
            return Ok(state);
        }
    }

    /// Prompts until the engine accepts a move. `None` on end of input.
    fn read_move(&mut self) -> io::Result<Option<GameState>> {
        loop {
            write!(self.output, "Enter your move (1-9): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let Ok(choice) = line.trim().parse::<isize>() else {
                debug!("could not parse {:?} as a move", line.trim());
                writeln!(self.output, "Please enter a valid number!")?;
                continue;
            };

            match self.engine.submit_move(choice.saturating_sub(1)) {
                Ok(state) => return Ok(Some(state)),
                Err(InvalidMove::InvalidPosition { .. }) => {
                    writeln!(self.output, "Please enter a number between 1 and 9!")?
                }
                Err(InvalidMove::CellOccupied { .. }) => {
                    writeln!(self.output, "That position is already taken!")?
                }
                Err(InvalidMove::GameOver) => return Ok(Some(self.engine.phase())),
            }
        }
    }

    fn print_welcome(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to Tic Tac Toe!")?;
        writeln!(
            self.output,
            "Enter moves using numbers 1-9 (left to right, top to bottom)"
        )?;
        writeln!(self.output, "Example board with positions:")?;
        let guide = (1..=Board::CELLS)
            .chunks(Board::SIZE.1)
            .into_iter()
            .map(|mut row| row.join(" | "))
            .join(&format!("\n{}\n", Self::RULE));
        writeln!(self.output, "{}", guide)?;
        writeln!(self.output, "\nLet's begin!\n")
    }

    fn print_board(&mut self) -> io::Result<()> {
        let rendered = self
            .engine
            .render_view()
            .chunks(Board::SIZE.1)
            .map(|row| {
                let row = row.iter().map(|cell| self.cell_symbol(*cell)).join(" | ");
                format!("{}\n{}\n", row, Self::RULE)
            })
            .collect::<String>();
        write!(self.output, "{}", rendered)
    }

    fn print_hints(&mut self) -> io::Result<()> {
        let free = self
            .engine
            .board()
            .empty_positions()
            .iter()
            .map(|position| position + 1)
            .join(", ");
        writeln!(self.output, "Free positions: {}", free)
    }

    const RULE: &'static str = "---------";

    fn symbol(&self, player: Player) -> char {
        self.args.symbol(player)
    }

    fn cell_symbol(&self, cell: Cell) -> char {
        cell.owner()
            .map_or(ConsoleArgs::EMPTY_SYMBOL, |player| self.symbol(player))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    fn run_with(input: &str, args: ConsoleArgs) -> (GameState, String) {
        let mut output = Vec::new();
        let state = {
            let mut console = Console::new(Cursor::new(input.to_string()), &mut output, args);
            let state = console.run().expect("writing to a vec never fails");
            assert_eq!(
                console.engine().phase(),
                state,
                "console reported {} but the engine is {}",
                state,
                console.engine().phase()
            );
            state
        };
        (state, String::from_utf8(output).unwrap())
    }

    #[test]
    fn top_row_win() {
        let (state, output) = run_with("1\n4\n2\n5\n3\n", ConsoleArgs::new());
        assert_eq!(state, GameState::Won { winner: Player::X });
        assert!(output.starts_with("Welcome to Tic Tac Toe!\n"));
        assert!(output.contains("1 | 2 | 3\n---------\n4 | 5 | 6\n---------\n7 | 8 | 9\n"));
        assert!(output.contains("X | X | X\n---------\nO | O |  \n---------\n"));
        assert!(output.ends_with("\nPlayer X wins!\n"), "got {}", output);
    }

    #[test]
    fn bad_input_reprompts() {
        let (state, output) = run_with("abc\n0\n10\n5\n5\n1\n", ConsoleArgs::new());
        assert_eq!(state, GameState::InProgress { next_player: Player::X });
        assert!(output.contains("Please enter a valid number!"));
        assert_eq!(
            output.matches("Please enter a number between 1 and 9!").count(),
            2
        );
        assert!(output.contains("That position is already taken!"));
        assert!(output.contains("Player O's turn"));
    }

    #[test]
    fn engine_tracks_accepted_moves() {
        let mut output = Vec::new();
        let mut console = Console::new(Cursor::new("5\nx\n5\n9\n"), &mut output, ConsoleArgs::new());
        console.run().unwrap();
        let positions: Vec<_> = console.engine().moves().iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![4, 8]);
        assert_eq!(console.engine().board().occupied_count(), 2);
    }

    #[test]
    fn draw() {
        let (state, output) = run_with("1\n2\n3\n4\n5\n7\n6\n9\n8\n", ConsoleArgs::new());
        assert_eq!(state, GameState::Draw);
        assert!(output.ends_with("\nIt's a tie!\n"));
    }

    #[test]
    fn custom_symbols_and_hints() {
        let args = ConsoleArgs {
            symbol_x: '#',
            symbol_o: '@',
            show_hints: true,
        };
        let (_, output) = run_with("5\n", args);
        assert!(output.contains("Player #'s turn"));
        assert!(output.contains("Free positions: 1, 2, 3, 4, 5, 6, 7, 8, 9"));
        assert!(output.contains("Free positions: 1, 2, 3, 4, 6, 7, 8, 9"));
        assert!(output.contains("  | # |  \n"));
        assert!(output.contains("Player @'s turn"));
    }
}
