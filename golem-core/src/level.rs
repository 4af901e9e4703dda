//! Interfaces the host engine implements for the golem.
//!
//! The golem never owns the world. It reads block and entity state and
//! pushes events, sounds and damage back through these traits.

use golem_utils::BlockPos;
use golem_utils::math::{Aabb, Vector3};
use uuid::Uuid;

use crate::entity::damage::DamageSource;
use crate::entity::event::EntityEvent;
use crate::entity::EntityRef;
use crate::sound::SoundEvent;

/// The world the golem lives in.
pub trait Level {
    /// True on an observing client, false on the authoritative server.
    fn is_client_side(&self) -> bool;

    /// Looks up a loaded, living entity by UUID.
    ///
    /// Must return `None` for entities that are dead or dying as well as
    /// unloaded ones; the golem forgets a persistent anger target exactly
    /// when this lookup fails.
    fn get_entity(&self, uuid: Uuid) -> Option<EntityRef>;

    /// Sends an entity event to every observer of `entity_id`.
    fn broadcast_entity_event(&self, entity_id: i32, event: EntityEvent);

    /// Plays a sound at the entity's position.
    fn play_sound(&self, entity_id: i32, sound: SoundEvent, volume: f32, pitch: f32);

    /// Whether mobs drop their anger when the player they are angry at dies.
    fn forgive_dead_players(&self) -> bool {
        true
    }
}

/// Read access to blocks, used for spawn checks.
pub trait LevelReader {
    /// Whether an entity can stand on top of the block at `pos`.
    fn entity_can_stand_on(&self, pos: BlockPos) -> bool;

    /// Whether the block at `pos` lets a mob spawn inside it: no collision,
    /// not a redstone source and not harmful.
    fn is_valid_empty_spawn_block(&self, pos: BlockPos) -> bool;

    /// Whether the block at `pos` holds any fluid.
    fn has_fluid(&self, pos: BlockPos) -> bool;

    /// Whether no other entity collides with the given box.
    fn is_unobstructed(&self, bounding_box: &Aabb) -> bool;
}

/// Something the golem can hit.
pub trait AttackTarget {
    /// Identity of the target.
    fn entity_ref(&self) -> EntityRef;

    /// Runs the host damage pipeline; returns true if damage was taken.
    fn hurt(&mut self, source: &DamageSource, amount: f32) -> bool;

    /// The target's knockback resistance attribute; 0 for non-living targets.
    fn knockback_resistance(&self) -> f64 {
        0.0
    }

    /// Adds to the target's velocity.
    fn add_delta_movement(&mut self, delta: Vector3<f64>);
}
