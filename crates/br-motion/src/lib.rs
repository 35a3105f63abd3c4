//! `br-motion` — the motion engine: agent state and the per-step update rule.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`agent`]   | `Agent` — position, heading, radius, speed                        |
//! | [`arena`]   | `Arena`, `Wall`, `WallHits` — the square boundary constraint      |
//! | [`policy`]  | `CollisionPolicy` trait, `RandomReversal`, `SpecularReflection`   |
//! | [`engine`]  | `MotionEngine<P>` — one discrete time step                        |
//!
//! # Movement model
//!
//! Each step:
//!
//! 1. Candidate position `p' = position + (speed·cos θ, speed·sin θ) · Δt`.
//! 2. Each axis is clamped independently to `[radius, size - radius]`; any
//!    clamp counts as a collision (corners clamp both axes).
//! 3. On collision the [`CollisionPolicy`] picks a new heading.  The default
//!    [`RandomReversal`] turns the agent around by `π + δ`, `δ ~ U[-π/2, π/2]`,
//!    whichever wall was struck.
//! 4. The clamped position is committed.
//!
//! The engine itself never allocates and never fails: every real input has a
//! well-defined result.  Parameter validation belongs to the caller
//! (`br-sim`'s `RunBuilder`).

pub mod agent;
pub mod arena;
pub mod engine;
pub mod policy;


pub use agent::{normalize_heading, Agent};
pub use arena::{Arena, Wall, WallHits};
pub use engine::MotionEngine;
pub use policy::{CollisionPolicy, RandomReversal, SpecularReflection};
