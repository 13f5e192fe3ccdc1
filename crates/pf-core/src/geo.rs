//! Continuous world coordinates and distance.
//!
//! Venue maps use a flat local coordinate system (pixels or metres from the
//! map origin), so plain Euclidean distance is exact — no geodesic math.
//! Coordinates are `f64`: the grids are small and the target-reassignment
//! threshold (`2 × cell_size`) is a hard compare boundary, so the extra
//! precision over `f32` is worth the eight bytes.

/// A point in continuous world space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

impl WorldPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other` in world units.
    #[inline]
    pub fn distance_to(self, other: WorldPoint) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}
