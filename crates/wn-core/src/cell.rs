//! Grid cell coordinates and neighborhood model.
//!
//! `GridCoord` is stored as signed `i32` so neighbor arithmetic can step off
//! the grid edge without wrapping; `in_bounds` is the cheap rejection check
//! callers apply before indexing.

/// An integer cell coordinate in the `size³` warehouse volume.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Planar neighbor offsets: ±x and ±z, no vertical movement.
///
/// The planner steps through this table in order; keeping it a named constant
/// makes a vertical-move variant a one-line extension.
pub const PLANAR_NEIGHBORS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl GridCoord {
    #[inline]
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Manhattan distance over all three axes.
    ///
    /// Admissible and consistent as an A* heuristic given unit-cost
    /// axis-aligned moves.
    #[inline]
    pub fn manhattan(self, other: GridCoord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }

    /// `true` iff every component lies in `[0, size)`.
    #[inline]
    pub fn in_bounds(self, size: usize) -> bool {
        let s = size as i32;
        (0..s).contains(&self.x) && (0..s).contains(&self.y) && (0..s).contains(&self.z)
    }

    /// The cell one planar step away.  May be out of bounds; callers filter
    /// with [`in_bounds`](Self::in_bounds).
    #[inline]
    pub fn step(self, dx: i32, dz: i32) -> GridCoord {
        GridCoord { x: self.x + dx, y: self.y, z: self.z + dz }
    }

    /// Iterator over the four planar neighbors (unfiltered).
    #[inline]
    pub fn planar_neighbors(self) -> impl Iterator<Item = GridCoord> {
        PLANAR_NEIGHBORS.into_iter().map(move |(dx, dz)| self.step(dx, dz))
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
