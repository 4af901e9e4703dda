//! Small math types shared across the workspace.

pub mod aabb;
pub mod vector3;

pub use aabb::Aabb;
pub use vector3::Vector3;
