//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror. The cache and registry
//! never fail; everything here comes from fetching, decoding, or parsing
//! user input.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for command execution.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The request could not be sent or its body could not be read
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote API answered with a non-success status
    #[error("response failed with status code: {status}")]
    Status { url: String, status: u16 },

    /// The response body was not the expected JSON
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// A command was invoked without a required argument
    #[error("missing argument, usage: {0}")]
    MissingArgument(&'static str),

    /// An argument that cannot name a PokeAPI resource
    #[error("invalid name: {0}")]
    InvalidArgument(String),

    /// The first word of the input names no command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
