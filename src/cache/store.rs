use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::models::{HistoricalEvent, ZodiacSign};

/// File name prefix for per-sign records.
const SIGN_FILE_PREFIX: &str = "sign_";

/// File holding the full historical-event list.
const EVENTS_FILE: &str = "events.json";

/// Persistent key-value store for zodiac data.
///
/// Sign records live one JSON file per name; historical events live in a
/// single list file. The store is constructed explicitly and injected where
/// needed - there is no process-wide instance.
///
/// Every successful sign write publishes a fresh snapshot on a watch
/// channel, so consumers can observe cache contents reactively.
pub struct CacheStore {
    cache_dir: PathBuf,
    // Serializes sign writes against clear, so an upsert can't resurrect
    // rows a later clear already removed.
    write_lock: Mutex<()>,
    signs_tx: watch::Sender<Vec<ZodiacSign>>,
}

impl CacheStore {
    /// Open (or create) a store rooted at `cache_dir`.
    pub fn open(cache_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&cache_dir)
            .with_context(|| format!("Failed to create cache dir: {}", cache_dir.display()))?;

        let store = Self {
            cache_dir,
            write_lock: Mutex::new(()),
            signs_tx: watch::channel(Vec::new()).0,
        };
        let snapshot = store.read_all_signs();
        store.signs_tx.send_replace(snapshot);
        Ok(store)
    }

    fn sign_path(&self, name: &str) -> PathBuf {
        self.cache_dir.join(format!("{SIGN_FILE_PREFIX}{name}.json"))
    }

    fn events_path(&self) -> PathBuf {
        self.cache_dir.join(EVENTS_FILE)
    }

    fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read cache file: {}", path.display()))?;
        let value = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cache file: {}", path.display()))?;
        Ok(Some(value))
    }

    fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
        let contents = serde_json::to_string_pretty(value)?;
        // Write-then-rename: an abandoned write never leaves a half-written
        // record behind.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, contents)
            .with_context(|| format!("Failed to write cache file: {}", tmp.display()))?;
        fs::rename(&tmp, path)
            .with_context(|| format!("Failed to commit cache file: {}", path.display()))?;
        Ok(())
    }

    // ===== Signs =====

    /// Look up one sign by exact name.
    pub fn get_sign(&self, name: &str) -> Result<Option<ZodiacSign>> {
        Self::load_json(&self.sign_path(name))
    }

    /// Insert or replace one sign, keyed by its name.
    pub fn upsert_sign(&self, sign: &ZodiacSign) -> Result<()> {
        {
            let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
            Self::save_json(&self.sign_path(&sign.name), sign)?;
        }
        debug!(sign = %sign.name, "cached sign record");
        self.publish_signs();
        Ok(())
    }

    /// Insert or replace a batch of signs.
    pub fn upsert_signs(&self, signs: &[ZodiacSign]) -> Result<()> {
        {
            let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
            for sign in signs {
                Self::save_json(&self.sign_path(&sign.name), sign)?;
            }
        }
        debug!(count = signs.len(), "cached sign batch");
        self.publish_signs();
        Ok(())
    }

    /// All cached signs, ordered by name ascending.
    pub fn all_signs(&self) -> Result<Vec<ZodiacSign>> {
        Ok(self.read_all_signs())
    }

    pub fn sign_count(&self) -> usize {
        self.read_all_signs().len()
    }

    /// Delete every cached sign row. Idempotent.
    pub fn clear_signs(&self) -> Result<()> {
        {
            let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
            for path in self.sign_files() {
                fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
            }
        }
        debug!("cleared cached signs");
        self.publish_signs();
        Ok(())
    }

    /// Subscribe to sign snapshots. The receiver sees the current snapshot
    /// immediately and a new one after every successful write or clear.
    pub fn watch_signs(&self) -> watch::Receiver<Vec<ZodiacSign>> {
        self.signs_tx.subscribe()
    }

    fn sign_files(&self) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(&self.cache_dir) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries
            .flatten()
            .map(|e| e.path())
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(SIGN_FILE_PREFIX) && n.ends_with(".json"))
            })
            .collect();
        files.sort();
        files
    }

    fn read_all_signs(&self) -> Vec<ZodiacSign> {
        let mut signs: Vec<ZodiacSign> = self
            .sign_files()
            .iter()
            .filter_map(|path| match Self::load_json::<ZodiacSign>(path) {
                Ok(sign) => sign,
                Err(e) => {
                    // Corrupt row reads as missing rather than failing the
                    // whole listing.
                    warn!(path = %path.display(), error = %e, "skipping unreadable sign record");
                    None
                }
            })
            .collect();
        signs.sort_by(|a, b| a.name.cmp(&b.name));
        signs
    }

    fn publish_signs(&self) {
        self.signs_tx.send_replace(self.read_all_signs());
    }

    // ===== Historical events =====

    /// Replace the stored event list.
    pub fn insert_events(&self, events: &[HistoricalEvent]) -> Result<()> {
        Self::save_json(&self.events_path(), &events)?;
        debug!(count = events.len(), "cached historical events");
        Ok(())
    }

    /// All stored events, ordered by date ascending.
    pub fn all_events(&self) -> Result<Vec<HistoricalEvent>> {
        let mut events: Vec<HistoricalEvent> =
            Self::load_json(&self.events_path())?.unwrap_or_default();
        events.sort_by_key(|e| e.date);
        Ok(events)
    }

    pub fn event_count(&self) -> usize {
        self.all_events().map(|e| e.len()).unwrap_or(0)
    }

    /// Delete the stored event list. Idempotent.
    pub fn clear_events(&self) -> Result<()> {
        let path = self.events_path();
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::seed;
    use chrono::NaiveDate;

    fn store() -> (tempfile::TempDir, CacheStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CacheStore::open(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    fn sample_sign(name: &str) -> ZodiacSign {
        ZodiacSign {
            name: name.to_string(),
            symbol: "♈".to_string(),
            date_range: "Mar 21 - Apr 19".to_string(),
            personality: "Bold.".to_string(),
            ruling_planet: "Mars".to_string(),
            element: "Fire".to_string(),
            strengths: vec!["Courageous".to_string()],
            weaknesses: vec!["Impatient".to_string()],
            compatibilities: vec![],
            daily_horoscope: None,
        }
    }

    #[test]
    fn test_get_missing_sign_is_none() {
        let (_dir, store) = store();
        assert!(store.get_sign("Aries").unwrap().is_none());
    }

    #[test]
    fn test_upsert_then_get_round_trip() {
        let (_dir, store) = store();
        let sign = sample_sign("Aries");
        store.upsert_sign(&sign).unwrap();
        assert_eq!(store.get_sign("Aries").unwrap(), Some(sign));
    }

    #[test]
    fn test_upsert_replaces_by_name() {
        let (_dir, store) = store();
        store.upsert_sign(&sample_sign("Aries")).unwrap();

        let mut updated = sample_sign("Aries");
        updated.personality = "Updated.".to_string();
        store.upsert_sign(&updated).unwrap();

        assert_eq!(store.sign_count(), 1);
        assert_eq!(
            store.get_sign("Aries").unwrap().unwrap().personality,
            "Updated."
        );
    }

    #[test]
    fn test_sign_keys_are_case_sensitive() {
        let (_dir, store) = store();
        store.upsert_sign(&sample_sign("Aries")).unwrap();
        assert!(store.get_sign("aries").unwrap().is_none());
    }

    #[test]
    fn test_all_signs_ordered_by_name() {
        let (_dir, store) = store();
        store.upsert_sign(&sample_sign("Virgo")).unwrap();
        store.upsert_sign(&sample_sign("Aries")).unwrap();
        store.upsert_sign(&sample_sign("Leo")).unwrap();

        let names: Vec<String> = store
            .all_signs()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["Aries", "Leo", "Virgo"]);
    }

    #[test]
    fn test_clear_signs_is_idempotent_and_leaves_events() {
        let (_dir, store) = store();
        store.upsert_sign(&sample_sign("Aries")).unwrap();
        store.insert_events(&seed::initial_events()).unwrap();

        store.clear_signs().unwrap();
        store.clear_signs().unwrap();

        assert_eq!(store.sign_count(), 0);
        assert!(store.event_count() > 0);
    }

    #[test]
    fn test_corrupt_sign_file_is_skipped() {
        let (dir, store) = store();
        store.upsert_sign(&sample_sign("Aries")).unwrap();
        fs::write(dir.path().join("sign_Leo.json"), "{not json").unwrap();

        let signs = store.all_signs().unwrap();
        assert_eq!(signs.len(), 1);
        assert_eq!(signs[0].name, "Aries");
    }

    #[test]
    fn test_events_sorted_by_date() {
        let (_dir, store) = store();
        let events = vec![
            HistoricalEvent {
                date: NaiveDate::from_ymd_opt(2015, 12, 12).unwrap(),
                title: "Paris Agreement".to_string(),
                description: String::new(),
            },
            HistoricalEvent {
                date: NaiveDate::from_ymd_opt(1990, 8, 2).unwrap(),
                title: "Invasion of Kuwait".to_string(),
                description: String::new(),
            },
        ];
        store.insert_events(&events).unwrap();

        let stored = store.all_events().unwrap();
        assert_eq!(stored[0].title, "Invasion of Kuwait");
        assert_eq!(stored[1].title, "Paris Agreement");
    }

    #[test]
    fn test_watch_publishes_on_write_and_clear() {
        let (_dir, store) = store();
        let rx = store.watch_signs();
        assert!(rx.borrow().is_empty());

        store.upsert_sign(&sample_sign("Aries")).unwrap();
        assert_eq!(rx.borrow().len(), 1);

        store.clear_signs().unwrap();
        assert!(rx.borrow().is_empty());
    }

    #[test]
    fn test_reopen_sees_persisted_rows() {
        let (dir, store) = store();
        store.upsert_sign(&sample_sign("Aries")).unwrap();
        drop(store);

        let reopened = CacheStore::open(dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.sign_count(), 1);
        assert!(!reopened.watch_signs().borrow().is_empty());
    }
}
