//! Domain models for zodiac data.
//!
//! - `ZodiacSign`, `Compatibility`: the twelve signs and their directed
//!   compatibility ratings
//! - `HistoricalEvent`: dated reference events
//! - `Resource`: tri-state Loading/Success/Error wrapper used by the
//!   reactive read path

pub mod event;
pub mod resource;
pub mod sign;

pub use event::HistoricalEvent;
pub use resource::Resource;
pub use sign::{Compatibility, ZodiacSign, CANONICAL_SIGN_NAMES};
