//! `br-core` — foundational types for the brownian robot simulator.
//!
//! This crate is a dependency of every other `br-*` crate.  It has no `br-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`vec2`]        | `Vec2` planar point / displacement type               |
//! | [`time`]        | `Step`, `SimClock`                                    |
//! | [`rng`]         | `SimRng` (seedable, injectable randomness)            |
//! | [`error`]       | `BrError`, `BrResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to the plain data types.    |

pub mod error;
pub mod rng;
pub mod time;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{BrError, BrResult};
pub use rng::SimRng;
pub use time::{SimClock, Step};
pub use vec2::Vec2;
