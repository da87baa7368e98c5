//! Local caching module for offline data access.
//!
//! `CacheStore` persists sign records (one JSON file per name) and the
//! historical-event list under a cache directory, and publishes sign
//! snapshots on a watch channel after every write. `seed` holds the initial
//! reference data written on first open.

pub mod seed;
pub mod store;

pub use store::CacheStore;

use anyhow::Result;

/// Write the initial reference data into an empty store. No-op when the
/// store already has rows, so repeated opens never clobber fetched data.
pub fn seed_if_empty(store: &CacheStore) -> Result<()> {
    if store.sign_count() == 0 {
        store.upsert_signs(&seed::initial_signs())?;
    }
    if store.event_count() == 0 {
        store.insert_events(&seed::initial_events())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_if_empty_populates_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::open(dir.path().to_path_buf()).unwrap();

        seed_if_empty(&store).unwrap();
        assert_eq!(store.sign_count(), 12);
        assert_eq!(store.event_count(), 9);

        // A modified row survives a second seeding pass.
        let mut aries = store.get_sign("Aries").unwrap().unwrap();
        aries.personality = "Rewritten.".to_string();
        store.upsert_sign(&aries).unwrap();

        seed_if_empty(&store).unwrap();
        assert_eq!(
            store.get_sign("Aries").unwrap().unwrap().personality,
            "Rewritten."
        );
    }
}
