//! Mock remote source simulating the zodiac backend.
//!
//! Serves canned JSON payloads after a fixed artificial delay so the
//! loading states of the read path are actually exercised. Unrecognized
//! names get a not-found error, matching a 404 from a real backend.

use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::debug;

use super::dto::ZodiacSignDto;
use super::payloads::{HOROSCOPE_VARIATIONS, SIGN_DETAILS};
use super::{ApiError, ZodiacApi};
use crate::models::CANONICAL_SIGN_NAMES;

/// Simulated network latency. Long enough that loading states are visible.
const NETWORK_DELAY_MS: u64 = 1500;

pub struct MockRemoteApi {
    delay: Duration,
}

impl MockRemoteApi {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(NETWORK_DELAY_MS),
        }
    }

    /// Override the simulated latency. Tests pass `Duration::ZERO`.
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockRemoteApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZodiacApi for MockRemoteApi {
    async fn fetch_sign_names(&self) -> Result<Vec<String>, ApiError> {
        tokio::time::sleep(self.delay).await;
        Ok(CANONICAL_SIGN_NAMES.iter().map(|s| s.to_string()).collect())
    }

    async fn fetch_sign_detail(&self, name: &str) -> Result<ZodiacSignDto, ApiError> {
        tokio::time::sleep(self.delay).await;

        // Exact-case match against the fixed table, like a real path lookup.
        let Some(dto) = SIGN_DETAILS.get(name) else {
            debug!(sign = name, "mock backend: unknown sign");
            return Err(ApiError::NotFound(name.to_string()));
        };

        let mut dto = dto.clone();
        // Random pick per call simulates daily content updates.
        let horoscope = HOROSCOPE_VARIATIONS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(HOROSCOPE_VARIATIONS[0]);
        dto.daily_horoscope = Some(horoscope.to_string());

        debug!(sign = name, "mock backend: served sign detail");
        Ok(dto)
    }
}
