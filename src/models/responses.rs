//! Response DTOs for the PokeAPI
//!
//! Only the fields the commands read are declared; serde ignores the rest.

use serde::Deserialize;

/// A `{ name, url }` reference, used all over the PokeAPI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of location areas (GET /location-area/?offset=N&limit=M)
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    pub count: u32,
    /// URL of the next page, null on the last page
    pub next: Option<String>,
    /// URL of the previous page, null on the first page
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// A single location area (GET /location-area/{name})
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// A single Pokémon (GET /pokemon/{name})
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    pub name: String,
    pub height: u32,
    pub weight: u32,
    /// Drives the catch roll; some entries carry null
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
