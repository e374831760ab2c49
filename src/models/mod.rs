//! Data models
//!
//! PokeAPI response DTOs and the caught Pokémon record built from them.

pub mod pokemon;
pub mod responses;

// Re-export commonly used types
pub use pokemon::Pokemon;
pub use responses::{
    LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter, PokemonResponse,
    PokemonStat, PokemonType,
};
