//! Offline-first data access coordinator.
//!
//! Single read path for zodiac signs and historical events: prefer the local
//! cache, refresh from the remote source when the cached record is missing
//! or incomplete, and degrade to last-good cached data when the remote is
//! unreachable. The cache stays the durable source of truth for offline use.
//!
//! No collaborator failure escapes the public methods here - every one has
//! a defined fallback value (None, empty list, or the last cached snapshot).

use futures::Stream;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::api::ZodiacApi;
use crate::cache::CacheStore;
use crate::models::{HistoricalEvent, Resource, ZodiacSign, CANONICAL_SIGN_NAMES};

/// Shown alongside stale data when a refresh failed but the cache has rows.
const OFFLINE_WITH_DATA_MSG: &str = "Using offline data. Network unavailable.";

/// Shown when a refresh failed and the cache is empty.
const OFFLINE_NO_DATA_MSG: &str = "No data available. Please check your connection.";

/// Coordinates the local `CacheStore` and a remote `ZodiacApi` behind one
/// read API. Constructed by the composition root with both collaborators
/// injected.
pub struct ZodiacRepository<A: ZodiacApi> {
    api: A,
    store: CacheStore,
}

impl<A: ZodiacApi> ZodiacRepository<A> {
    pub fn new(api: A, store: CacheStore) -> Self {
        Self { api, store }
    }

    /// Direct access to the underlying store, for composition-root wiring.
    pub fn store(&self) -> &CacheStore {
        &self.store
    }

    /// Look up one sign, cache first.
    ///
    /// A cached record with non-empty personality is returned immediately
    /// with no remote call. Anything else (missing row, partial seed) goes
    /// to the remote; a successful payload is cached and returned, and a
    /// failed fetch falls back to whatever the cache held.
    pub async fn sign_by_name(&self, name: &str) -> Option<ZodiacSign> {
        let local = match self.store.get_sign(name) {
            Ok(local) => local,
            Err(e) => {
                warn!(sign = name, error = %e, "cache read failed, treating as miss");
                None
            }
        };

        if let Some(sign) = &local {
            if sign.is_complete() {
                debug!(sign = name, "returning cached sign");
                return local;
            }
        }

        match self.api.fetch_sign_detail(name).await {
            Ok(dto) => {
                let sign: ZodiacSign = dto.into();
                if let Err(e) = self.store.upsert_sign(&sign) {
                    warn!(sign = name, error = %e, "failed to cache fetched sign");
                }
                debug!(sign = name, "fetched sign from remote");
                Some(sign)
            }
            Err(e) => {
                debug!(sign = name, error = %e, "remote fetch failed, falling back to cache");
                local
            }
        }
    }

    /// Look up one sign, remote first, ignoring any cached record.
    ///
    /// Used where up-to-date per-call content (the daily horoscope text)
    /// matters more than latency. The fresh payload is cached; on remote
    /// failure the cached record, if any, is the fallback.
    pub async fn fresh_sign_by_name(&self, name: &str) -> Option<ZodiacSign> {
        match self.api.fetch_sign_detail(name).await {
            Ok(dto) => {
                let sign: ZodiacSign = dto.into();
                if let Err(e) = self.store.upsert_sign(&sign) {
                    warn!(sign = name, error = %e, "failed to cache fresh sign");
                }
                debug!(sign = name, "fetched fresh sign from remote");
                Some(sign)
            }
            Err(e) => {
                debug!(sign = name, error = %e, "fresh fetch failed, falling back to cache");
                match self.store.get_sign(name) {
                    Ok(local) => local,
                    Err(e) => {
                        warn!(sign = name, error = %e, "cache fallback read failed");
                        None
                    }
                }
            }
        }
    }

    /// All signs as a tri-state stream.
    ///
    /// Emission order: Loading with the current cache snapshot (None when
    /// empty), Success with that same snapshot so consumers render
    /// immediately, then one refresh attempt across the twelve canonical
    /// names. At least one successful fetch yields a further Success with
    /// the refreshed set; total failure yields an Error carrying the
    /// last-good snapshot, or None when the cache is empty.
    ///
    /// One-shot per consumer: the refresh is not retried automatically.
    pub fn all_signs(&self) -> impl Stream<Item = Resource<Vec<ZodiacSign>>> + '_ {
        async_stream::stream! {
            let cached = match self.store.all_signs() {
                Ok(signs) => signs,
                Err(e) => {
                    warn!(error = %e, "cache listing failed, starting empty");
                    Vec::new()
                }
            };

            yield Resource::Loading {
                data: (!cached.is_empty()).then(|| cached.clone()),
            };
            yield Resource::Success { data: cached };

            debug!("refreshing all signs from remote");
            let refreshed = self.refresh_all().await;
            if refreshed.is_empty() {
                let fallback = self
                    .store
                    .all_signs()
                    .ok()
                    .filter(|signs| !signs.is_empty());
                let message = if fallback.is_some() {
                    OFFLINE_WITH_DATA_MSG
                } else {
                    OFFLINE_NO_DATA_MSG
                };
                warn!("sign refresh failed for every name");
                yield Resource::Error {
                    message: message.to_string(),
                    data: fallback,
                };
            } else {
                debug!(count = refreshed.len(), "sign refresh complete");
                yield Resource::Success { data: refreshed };
            }
        }
    }

    /// Fetch-or-reuse every canonical sign through the cache-first path.
    /// Names that fail both remote and cache are dropped, not fatal.
    pub async fn refresh_all(&self) -> Vec<ZodiacSign> {
        let mut signs = Vec::with_capacity(CANONICAL_SIGN_NAMES.len());
        for name in CANONICAL_SIGN_NAMES {
            if let Some(sign) = self.sign_by_name(name).await {
                signs.push(sign);
            }
        }
        signs
    }

    /// The full cached event set, date ascending. Empty on storage failure.
    pub async fn historical_events(&self) -> Vec<HistoricalEvent> {
        match self.store.all_events() {
            Ok(events) => events,
            Err(e) => {
                warn!(error = %e, "failed to read historical events");
                Vec::new()
            }
        }
    }

    /// Delete every cached sign row. Idempotent; storage failures are
    /// logged, never raised.
    pub async fn clear_cache(&self) {
        if let Err(e) = self.store.clear_signs() {
            warn!(error = %e, "failed to clear sign cache");
        }
    }

    /// Reactive view of cache contents, updated on every successful write.
    pub fn watch_signs(&self) -> watch::Receiver<Vec<ZodiacSign>> {
        self.store.watch_signs()
    }
}
