use log::warn;

use crate::Player;

/// Display settings for the console, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleArgs {
    pub symbol_x: char,
    pub symbol_o: char,
    pub show_hints: bool,
}

impl Default for ConsoleArgs {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleArgs {
    const DEFAULT_SYMBOL_X: char = 'X';
    const DEFAULT_SYMBOL_O: char = 'O';
    const DEFAULT_SHOW_HINTS: bool = false;

    pub fn new() -> Self {
        Self {
            symbol_x: Self::DEFAULT_SYMBOL_X,
            symbol_o: Self::DEFAULT_SYMBOL_O,
            show_hints: Self::DEFAULT_SHOW_HINTS,
        }
    }

    // loads environment variables or uses default values if not set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let symbol = |key: &str, default: char| {
            lookup(key)
                .and_then(|value| value.trim().chars().next())
                .unwrap_or(default)
        };
        let show_hints = lookup("TICTACTOE_SHOW_HINTS")
            .map(|value| matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(Self::DEFAULT_SHOW_HINTS);

        let args = Self {
            symbol_x: symbol("TICTACTOE_SYMBOL_X", Self::DEFAULT_SYMBOL_X),
            symbol_o: symbol("TICTACTOE_SYMBOL_O", Self::DEFAULT_SYMBOL_O),
            show_hints,
        };

        // both marks must be visible and tell apart on the board
        let [x, o] = Player::ALL.map(|player| args.symbol(player));
        if x == o || x == Self::EMPTY_SYMBOL || o == Self::EMPTY_SYMBOL {
            warn!("symbols {:?} and {:?} are ambiguous, using defaults", x, o);
            return Self {
                show_hints,
                ..Self::new()
            };
        }
        args
    }

    /// Glyph printed for an empty cell.
    pub const EMPTY_SYMBOL: char = ' ';

    pub fn symbol(&self, player: Player) -> char {
        match player {
            Player::X => self.symbol_x,
            Player::O => self.symbol_o,
        }
    }
}
