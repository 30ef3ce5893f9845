//! `wn-core` — foundational types for the `warenav` simulation core.
//!
//! This crate is a dependency of every other `wn-*` crate.  It intentionally
//! has no `wn-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                          |
//! |-------------|---------------------------------------------------|
//! | [`ids`]     | `EntityId`, `CellIdx`                             |
//! | [`cell`]    | `GridCoord`, Manhattan distance, planar neighbors |
//! | [`point`]   | `WorldPoint`, floor-to-cell                       |
//! | [`entity`]  | `EntitySnapshot` (read-only target-entity view)   |
//! | [`time`]    | `Tick`, `SimClock`, `SimConfig`                   |
//! | [`rng`]     | `ModelRng` (per-model), `SimRng` (global)         |
//! | [`model`]   | `ModelKind` enum                                  |
//! | [`error`]   | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cell;
pub mod entity;
pub mod error;
pub mod ids;
pub mod model;
pub mod point;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::GridCoord;
pub use entity::EntitySnapshot;
pub use error::{CoreError, CoreResult};
pub use ids::{CellIdx, EntityId};
pub use model::ModelKind;
pub use point::WorldPoint;
pub use rng::{ModelRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};
