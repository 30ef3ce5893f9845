//! The Warehouse collaborator seam.

use wn_core::EntitySnapshot;

/// Source of truth for the warehouse volume and its target entities.
///
/// The rendering/scene side owns the entities and may move or respawn them on
/// its own schedule; the driver pulls a fresh by-value snapshot once per
/// detection pass and rebuilds occupancy from it.  The core never mutates
/// anything behind this trait.
pub trait Warehouse {
    /// Edge length of the cubic grid, in cells.
    fn grid_size(&self) -> usize;

    /// Current by-value snapshots of every target entity.
    fn entities(&self) -> Vec<EntitySnapshot>;
}

/// A warehouse with a fixed entity list.
///
/// Sufficient for demos and tests; interactive deployments implement
/// [`Warehouse`] over their live scene instead.
pub struct StaticWarehouse {
    size: usize,
    entities: Vec<EntitySnapshot>,
}

impl StaticWarehouse {
    pub fn new(size: usize, entities: Vec<EntitySnapshot>) -> Self {
        Self { size, entities }
    }

    /// Replace the entity list (e.g. a test moving a box between passes).
    pub fn set_entities(&mut self, entities: Vec<EntitySnapshot>) {
        self.entities = entities;
    }
}

impl Warehouse for StaticWarehouse {
    fn grid_size(&self) -> usize {
        self.size
    }

    fn entities(&self) -> Vec<EntitySnapshot> {
        self.entities.clone()
    }
}
