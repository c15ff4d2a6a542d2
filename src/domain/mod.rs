//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Record types as decoded from the backend, plus pure helpers
//! - `client.rs` — Sub-client with HTTP methods
//! - `state.rs` — App-owned state containers with update methods (where needed)

pub mod analytics;
pub mod ask;
pub mod coin;
pub mod mover;
pub mod prediction;
pub mod price;
pub mod subscription;
