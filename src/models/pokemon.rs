//! Caught Pokémon record
//!
//! The immutable snapshot saved in the registry after a successful catch.

use std::collections::BTreeMap;

use crate::models::responses::PokemonResponse;

/// A caught Pokémon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub name: String,
    pub height: u32,
    pub weight: u32,
    /// Base stat value by stat name
    pub stats: BTreeMap<String, u32>,
    /// Type names in slot order
    pub types: Vec<String>,
}

impl From<PokemonResponse> for Pokemon {
    fn from(response: PokemonResponse) -> Self {
        let mut types = response.types;
        types.sort_by_key(|t| t.slot);

        Self {
            name: response.name,
            height: response.height,
            weight: response.weight,
            stats: response
                .stats
                .into_iter()
                .map(|s| (s.stat.name, s.base_stat))
                .collect(),
            types: types.into_iter().map(|t| t.kind.name).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_orders_types_by_slot() {
        let json = r#"{
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "base_experience": 64,
            "stats": [
                {"base_stat": 45, "stat": {"name": "hp"}},
                {"base_stat": 49, "stat": {"name": "attack"}}
            ],
            "types": [
                {"slot": 2, "type": {"name": "poison"}},
                {"slot": 1, "type": {"name": "grass"}}
            ]
        }"#;
        let response: PokemonResponse = serde_json::from_str(json).unwrap();
        let pokemon = Pokemon::from(response);

        assert_eq!(pokemon.name, "bulbasaur");
        assert_eq!(pokemon.stats.get("hp"), Some(&45));
        assert_eq!(pokemon.stats.get("attack"), Some(&49));
        assert_eq!(pokemon.types, vec!["grass", "poison"]);
    }
}
