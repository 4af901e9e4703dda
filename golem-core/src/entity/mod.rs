//! Entity system
//!
//! The parts of the entity framework the golem relies on: identity, synced
//! data, attributes, damage sources, entity events and NBT helpers, plus the
//! golem itself.

pub mod anger;
pub mod attributes;
pub mod crackiness;
pub mod damage;
pub mod entity_data;
pub mod event;
pub mod goals;
pub mod golem;
pub mod nbt;

pub use entity_data::{EntityData, EntityDataAccessor, EntityDataValue, IntoEntityData};

use golem_utils::math::Vector3;
use uuid::Uuid;

/// Coarse entity categories the golem's rules care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A player.
    Player,
    /// A creeper; an enemy the golem leaves alone.
    Creeper,
    /// Any other hostile mob.
    Monster,
    /// Iron golems, snow golems and the like.
    Golem,
    /// Passive mobs.
    Animal,
    /// Non-mob entities such as items or projectiles.
    Other,
}

impl EntityKind {
    /// Hostile mobs, creepers included.
    #[must_use]
    pub const fn is_enemy(self) -> bool {
        matches!(self, Self::Monster | Self::Creeper)
    }

    /// Any mob that is not a player.
    #[must_use]
    pub const fn is_mob(self) -> bool {
        !matches!(self, Self::Player | Self::Other)
    }
}

/// A handle to another entity: its UUID and what kind it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRef {
    /// Entity UUID
    pub uuid: Uuid,
    /// Entity kind
    pub kind: EntityKind,
}

impl EntityRef {
    /// Convenience constructor.
    #[must_use]
    pub const fn new(uuid: Uuid, kind: EntityKind) -> Self {
        Self { uuid, kind }
    }
}

/// Core entity trait
pub trait Entity {
    /// Get the entity's network ID
    fn entity_id(&self) -> i32;

    /// Get the entity's UUID
    fn uuid(&self) -> Uuid;

    /// Get the entity's kind
    fn kind(&self) -> EntityKind;

    /// Get the entity's position
    fn position(&self) -> Vector3<f64>;

    /// Get the entity's velocity/delta movement
    fn delta_movement(&self) -> Vector3<f64>;

    /// Get the entity's synchronized data
    fn entity_data(&self) -> &EntityData;

    /// Handle for referring to this entity from others.
    fn entity_ref(&self) -> EntityRef {
        EntityRef {
            uuid: self.uuid(),
            kind: self.kind(),
        }
    }
}

/// State shared by every entity.
pub struct BaseEntity {
    /// Network entity ID
    pub entity_id: i32,

    /// Entity UUID
    pub uuid: Uuid,

    /// Entity position
    pub position: Vector3<f64>,

    /// Entity velocity/delta movement
    pub delta_movement: Vector3<f64>,

    /// Synchronized entity data
    pub entity_data: EntityData,
}

impl BaseEntity {
    /// Creates a new base entity with the default synced fields defined.
    #[must_use]
    pub fn new(entity_id: i32, uuid: Uuid, position: Vector3<f64>) -> Self {
        let mut entity_data = EntityData::new(entity_id);

        entity_data.define(EntityDataAccessor::SHARED_FLAGS, 0u8);
        entity_data.define(EntityDataAccessor::AIR_SUPPLY, 300i32);
        entity_data.define(EntityDataAccessor::SILENT, false);
        entity_data.define(EntityDataAccessor::NO_GRAVITY, false);

        Self {
            entity_id,
            uuid,
            position,
            delta_movement: Vector3::default(),
            entity_data,
        }
    }
}

/// A trait for living entities that can take damage, heal, and die.
pub trait LivingEntity: Entity {
    /// Gets the current health of the entity.
    fn get_health(&self) -> f32;

    /// Sets the health of the entity, clamped between 0 and max health.
    fn set_health(&mut self, health: f32);

    /// Gets the maximum health of the entity.
    fn get_max_health(&self) -> f32;

    /// Heals the entity by the specified amount.
    fn heal(&mut self, amount: f32) {
        let current_health = self.get_health();
        if current_health > 0.0 {
            self.set_health(current_health + amount);
        }
    }

    /// Returns true if the entity is dead or dying (health <= 0).
    fn is_dead_or_dying(&self) -> bool {
        self.get_health() <= 0.0
    }
}
