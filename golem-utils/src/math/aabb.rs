//! Axis aligned bounding boxes.

use crate::math::Vector3;

/// An axis aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vector3<f64>,
    /// Maximum corner
    pub max: Vector3<f64>,
}

impl Aabb {
    /// Creates a box from two corners.
    #[must_use]
    pub const fn new(min: Vector3<f64>, max: Vector3<f64>) -> Self {
        Self { min, max }
    }

    /// The box of an entity standing at `pos` with the given dimensions.
    #[must_use]
    pub fn of_entity(pos: Vector3<f64>, width: f64, height: f64) -> Self {
        let half = width / 2.0;
        Self::new(
            Vector3::new(pos.x - half, pos.y, pos.z - half),
            Vector3::new(pos.x + half, pos.y + height, pos.z + half),
        )
    }

    /// Returns true if the two boxes overlap with non-zero volume.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }
}
