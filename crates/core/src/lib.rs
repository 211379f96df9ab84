//! Domain types and helpers shared by the storage and HTTP layers.

pub mod error;
pub mod journal;
pub mod media;
pub mod params;
pub mod types;
