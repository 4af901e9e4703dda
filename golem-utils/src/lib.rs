//! # Golem Utils
//!
//! Shared building blocks for the golem crates: vector math, block
//! positions, resource locations, the Java-compatible random source and
//! lock aliases.

pub mod locks;
pub mod math;
pub mod random;
pub mod types;

pub use types::{BlockPos, ResourceLocation};
