//! Pokedex - An interactive explorer for the PokeAPI
//!
//! Pages through location areas, explores them, and catches Pokémon.
//! Responses are memoized in an in-memory cache whose entries expire
//! through a periodic background sweep.

pub mod cache;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod repl;
pub mod session;
pub mod tasks;

pub use cache::ExpiringCache;
pub use commands::{CommandTable, Dispatcher};
pub use config::Config;
pub use error::{PokedexError, Result};
pub use registry::CaughtRegistry;
pub use session::Session;
