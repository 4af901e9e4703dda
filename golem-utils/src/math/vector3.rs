//! Generic three component vector.

use std::ops::Add;

/// A three component vector, used for positions and velocities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector3<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
}

impl<T> Vector3<T> {
    /// Creates a new vector.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy + Add<Output = T>> Vector3<T> {
    /// Component-wise addition.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Adds the given offsets to each component.
    #[must_use]
    pub fn offset(&self, x: T, y: T, z: T) -> Self {
        Self::new(self.x + x, self.y + y, self.z + z)
    }
}

impl Vector3<f64> {
    /// Squared length in the horizontal (x/z) plane.
    #[must_use]
    pub fn horizontal_distance_sqr(&self) -> f64 {
        self.x * self.x + self.z * self.z
    }

    /// Converts to the containing block coordinates.
    #[must_use]
    pub fn floor(&self) -> Vector3<i32> {
        Vector3::new(
            self.x.floor() as i32,
            self.y.floor() as i32,
            self.z.floor() as i32,
        )
    }
}
