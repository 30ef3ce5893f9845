//! `wn-grid` — occupancy grid, sensor field, and grid pathfinding.
//!
//! # Crate layout
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`grid`]    | `OccupancyGrid` (dense `size³` bool volume)         |
//! | [`field`]   | `SensorField` (synthetic scalar sensor input)       |
//! | [`planner`] | `Planner` trait, `Path`, `AStarPlanner`             |
//! | [`error`]   | `GridError`, `GridResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod error;
pub mod field;
pub mod grid;
pub mod planner;


pub use error::{GridError, GridResult};
pub use field::SensorField;
pub use grid::OccupancyGrid;
pub use planner::{AStarPlanner, Path, Planner};
