//! `wn-sim` — tick loop orchestrator for the warenav simulation core.
//!
//! # Tick loop
//!
//! ```text
//! for each external tick (Δt):
//!   ① Motion     — advance the robot along its current path, bounded by
//!                  speed and rotation_speed.
//!   ② Detection  — every detection_interval_ticks: snapshot entities,
//!                  rebuild occupancy, compose the sensor field, run BOTH
//!                  models, keep the active model's detections.
//!   ③ Planning   — if the robot is idle and the active model detected
//!                  something, plan to the first detection's approach cell
//!                  and start moving.
//! ```
//!
//! Motion always runs before detection within a tick, so the two never touch
//! shared state concurrently; planning is synchronous and completes inside
//! the tick.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                |
//! |------------|-------------------------------------------------------|
//! | `parallel` | Runs the two model evaluations on Rayon's thread pool.|
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wn_grid::AStarPlanner;
//! use wn_sim::{NoopObserver, SimBuilder, StaticWarehouse};
//!
//! let warehouse = StaticWarehouse::new(20, entities);
//! let mut sim = SimBuilder::new(config, warehouse, AStarPlanner).build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod observer;
pub mod warehouse;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use driver::Sim;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use warehouse::{StaticWarehouse, Warehouse};
