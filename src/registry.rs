//! Caught-Pokémon Registry
//!
//! Permanent, in-memory record of every Pokémon caught this session, keyed
//! by name. Shares the locking store used by the response cache with
//! eviction disabled.

use tracing::info;

use crate::cache::KeyedStore;
use crate::models::Pokemon;

/// Registry of caught Pokémon.
#[derive(Debug, Clone)]
pub struct CaughtRegistry {
    store: KeyedStore<Pokemon>,
}

impl CaughtRegistry {
    pub fn new() -> Self {
        Self {
            store: KeyedStore::permanent(),
        }
    }

    /// Records a catch. A later catch of the same species replaces the
    /// whole record.
    pub async fn save(&self, pokemon: Pokemon) {
        info!(name = %pokemon.name, "Saving caught pokemon");
        self.store.put(pokemon.name.clone(), pokemon).await;
    }

    pub async fn get(&self, name: &str) -> Option<Pokemon> {
        self.store.get(name).await
    }

    /// Returns every caught Pokémon, in no particular order.
    pub async fn list_all(&self) -> Vec<Pokemon> {
        self.store.values().await
    }

    pub async fn len(&self) -> usize {
        self.store.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.store.is_empty().await
    }
}

impl Default for CaughtRegistry {
    fn default() -> Self {
        Self::new()
    }
}
