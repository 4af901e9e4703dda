//! # Golem Core
//!
//! The Enderite Golem entity and the small slice of entity plumbing it
//! needs: synced entity data, attributes, NBT persistence, the anger
//! tracker, the damage-state classifier and the AI goal tables.
//!
//! The surrounding game engine is reached only through the traits in
//! [`level`]; world simulation, pathfinding and rendering stay on the
//! host side.

pub mod config;
pub mod entity;
pub mod interaction;
pub mod item;
pub mod level;
pub mod sound;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{ConfigError, GolemConfig};
pub use entity::golem::EnderiteGolem;
