//! Client Module
//!
//! HTTP access to the remote PokeAPI, with response memoization through the
//! expiring cache.

pub mod poke_api;

pub use poke_api::PokeApiClient;
