//! Commands Module
//!
//! Everything between a line of user input and the text printed back:
//! tokenizing, the command table, the handlers, and the dispatcher.
//!
//! # Commands
//! - `help` - List commands
//! - `exit` - Leave the REPL
//! - `map` / `mapb` - Page forward / back through location areas
//! - `explore <area>` - List Pokémon in an area
//! - `catch <pokemon>` - Try to catch a Pokémon
//! - `inspect <pokemon>` - Show a caught Pokémon
//! - `pokedex` - List caught Pokémon
//! - `cache` - Show response cache statistics

pub mod dispatcher;
pub mod handlers;
pub mod input;
pub mod table;

pub use dispatcher::{Dispatcher, Reply};
pub use handlers::CATCH_THRESHOLD;
pub use input::clean_input;
pub use table::{CommandKind, CommandSpec, CommandTable};
