//! Remote source interface and its mock implementation.
//!
//! `ZodiacApi` is the seam the coordinator depends on: fetch the list of
//! sign names, or the detail payload for one sign. The shipped
//! implementation is `MockRemoteApi`, which simulates a backend with canned
//! payloads and artificial latency.

pub mod dto;
pub mod error;
pub mod mock;
mod payloads;

use async_trait::async_trait;

pub use dto::{CompatibilityDto, ZodiacSignDto};
pub use error::ApiError;
pub use mock::MockRemoteApi;

/// Remote zodiac backend.
#[async_trait]
pub trait ZodiacApi: Send + Sync {
    /// All sign names the backend knows about.
    async fn fetch_sign_names(&self) -> Result<Vec<String>, ApiError>;

    /// Full detail payload for one sign. `ApiError::NotFound` for names
    /// outside the fixed table.
    async fn fetch_sign_detail(&self, name: &str) -> Result<ZodiacSignDto, ApiError>;
}
