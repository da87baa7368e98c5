//! starsign - offline-first zodiac data core.
//!
//! The pieces a birth-date app builds its screens on:
//!
//! - [`repository::ZodiacRepository`]: the single read path for sign data
//!   and historical events, cache first with background remote refresh and
//!   graceful offline fallback
//! - [`cache::CacheStore`]: the durable local store, seedable from the
//!   bundled reference data
//! - [`api::MockRemoteApi`]: a simulated backend with canned payloads and
//!   artificial latency behind the [`api::ZodiacApi`] seam
//! - [`calc`]: pure calculators for age periods, sign-from-date lookup,
//!   milestone days, birthday events, and planetary ages
//!
//! Typical wiring at the composition root:
//!
//! ```no_run
//! use starsign::api::MockRemoteApi;
//! use starsign::cache::{self, CacheStore};
//! use starsign::config::Config;
//! use starsign::repository::ZodiacRepository;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::load()?;
//! let store = CacheStore::open(config.cache_dir()?)?;
//! cache::seed_if_empty(&store)?;
//! let repo = ZodiacRepository::new(MockRemoteApi::new(), store);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod calc;
pub mod config;
pub mod models;
pub mod repository;

pub use models::{Compatibility, HistoricalEvent, Resource, ZodiacSign, CANONICAL_SIGN_NAMES};
pub use repository::ZodiacRepository;
