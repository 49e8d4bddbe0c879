use std::io;

use log::info;
use tictactoe::{Console, ConsoleArgs};

fn main() -> io::Result<()> {
    env_logger::init();

    let args = ConsoleArgs::from_env();
    info!("Starting console with {:?}", args);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), args);
    let result = console.run()?;

    info!("Game finished: {}", result);
    Ok(())
}
