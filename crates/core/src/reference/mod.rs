//! Static fee reference data, embedded at build time.
//!
//! Each table is a plain slice searched linearly. Fallback records live
//! outside the keyed tables, so no real broker or symbol can collide
//! with a reserved key.

pub mod assets;
pub mod brokers;
pub mod suggestions;
