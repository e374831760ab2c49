//! Session state
//!
//! The mutable state threaded through every command: pagination cursors,
//! the response cache, the caught registry, the API client, and the random
//! source for catch rolls.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cache::ExpiringCache;
use crate::client::PokeApiClient;
use crate::config::Config;
use crate::error::Result;
use crate::registry::CaughtRegistry;

/// State owned by the dispatcher for the lifetime of the REPL.
#[derive(Debug)]
pub struct Session {
    /// URL of the previous location page, `None` on the first page
    pub previous_page: Option<String>,
    /// URL of the next location page, `None` past the last page
    pub next_page: Option<String>,
    cache: ExpiringCache,
    registry: CaughtRegistry,
    client: PokeApiClient,
    rng: StdRng,
}

impl Session {
    /// Creates a session positioned before the first location page.
    ///
    /// Must be called from within a tokio runtime; the cache starts its
    /// sweep task here.
    pub fn new(client: PokeApiClient, cache: ExpiringCache) -> Self {
        Self {
            previous_page: None,
            next_page: Some(client.location_areas_url(0)),
            cache,
            registry: CaughtRegistry::new(),
            client,
            rng: StdRng::from_entropy(),
        }
    }

    /// Builds the client and cache described by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = PokeApiClient::new(&config.api_base_url, config.page_size, config.timeout())?;
        let cache = ExpiringCache::new(config.cache_retention());
        Ok(Self::new(client, cache))
    }

    /// Replaces the random source, for reproducible catch rolls.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn with_seed(self, seed: u64) -> Self {
        self.with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn cache(&self) -> &ExpiringCache {
        &self.cache
    }

    pub fn registry(&self) -> &CaughtRegistry {
        &self.registry
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    /// Rolls a number in `0..upper`; an `upper` of zero is treated as one.
    pub fn roll(&mut self, upper: u32) -> u32 {
        self.rng.gen_range(0..upper.max(1))
    }

    /// Stops background work owned by the session.
    pub async fn shutdown(self) {
        self.cache.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn session() -> Session {
        let client =
            PokeApiClient::new("http://localhost:1", 20, Duration::from_secs(1)).unwrap();
        Session::new(client, ExpiringCache::new(Duration::from_secs(60)))
    }

    #[tokio::test]
    async fn test_new_session_starts_on_first_page() {
        let session = session();

        assert_eq!(session.previous_page, None);
        assert_eq!(
            session.next_page.as_deref(),
            Some("http://localhost:1/location-area/?offset=0&limit=20")
        );
        assert!(session.registry().is_empty().await);
        session.shutdown().await;
    }

    #[tokio::test]
    async fn test_roll_stays_in_range() {
        let mut session = session().with_seed(7);

        for _ in 0..100 {
            assert!(session.roll(10) < 10);
        }
        assert_eq!(session.roll(0), 0);
        session.shutdown().await;
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = Config::default();
        let session = Session::from_config(&config).unwrap();

        assert_eq!(session.client().base_url(), "https://pokeapi.co/api/v2");
        assert_eq!(session.cache().retention(), Duration::from_secs(5));
        session.shutdown().await;
    }
}
