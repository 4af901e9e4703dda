//! In-memory host implementations for unit tests.

use std::cell::RefCell;
use std::sync::Arc;

use golem_utils::BlockPos;
use golem_utils::math::{Aabb, Vector3};
use rustc_hash::{FxHashMap, FxHashSet};
use uuid::Uuid;

use crate::config::GolemConfig;
use crate::entity::damage::DamageSource;
use crate::entity::event::EntityEvent;
use crate::entity::golem::EnderiteGolem;
use crate::entity::{EntityKind, EntityRef};
use crate::level::{AttackTarget, Level, LevelReader};
use crate::sound::SoundEvent;

pub const GOLEM_UUID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0001);
pub const PLAYER_UUID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0002);
pub const ZOMBIE_UUID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0003);
pub const SECOND_ZOMBIE_UUID: Uuid = Uuid::from_u128(0x0000_0000_0000_4000_8000_0000_0000_0004);

/// A golem with the default config, a fixed UUID and a fixed seed.
pub fn golem() -> EnderiteGolem {
    golem_with(GolemConfig::default())
}

pub fn golem_with(config: GolemConfig) -> EnderiteGolem {
    EnderiteGolem::with_seed(
        1,
        GOLEM_UUID,
        Vector3::new(0.5, 64.0, 0.5),
        Arc::new(config),
        42,
    )
}

pub fn player() -> EntityRef {
    EntityRef::new(PLAYER_UUID, EntityKind::Player)
}

pub fn zombie() -> EntityRef {
    EntityRef::new(ZOMBIE_UUID, EntityKind::Monster)
}

pub fn second_zombie() -> EntityRef {
    EntityRef::new(SECOND_ZOMBIE_UUID, EntityKind::Monster)
}

/// Records everything the golem sends to the world.
pub struct TestLevel {
    client_side: bool,
    forgive_dead_players: bool,
    entities: FxHashMap<Uuid, EntityRef>,
    events: RefCell<Vec<(i32, EntityEvent)>>,
    sounds: RefCell<Vec<(SoundEvent, f32, f32)>>,
}

impl TestLevel {
    fn new(client_side: bool) -> Self {
        Self {
            client_side,
            forgive_dead_players: true,
            entities: FxHashMap::default(),
            events: RefCell::new(Vec::new()),
            sounds: RefCell::new(Vec::new()),
        }
    }

    pub fn server() -> Self {
        Self::new(false)
    }

    pub fn client() -> Self {
        Self::new(true)
    }

    pub fn with_entity(mut self, entity: EntityRef) -> Self {
        self.entities.insert(entity.uuid, entity);
        self
    }

    pub fn without_forgiveness(mut self) -> Self {
        self.forgive_dead_players = false;
        self
    }

    pub fn events(&self) -> Vec<(i32, EntityEvent)> {
        self.events.borrow().clone()
    }

    pub fn sounds(&self) -> Vec<(SoundEvent, f32, f32)> {
        self.sounds.borrow().clone()
    }
}

impl Level for TestLevel {
    fn is_client_side(&self) -> bool {
        self.client_side
    }

    fn get_entity(&self, uuid: Uuid) -> Option<EntityRef> {
        self.entities.get(&uuid).copied()
    }

    fn broadcast_entity_event(&self, entity_id: i32, event: EntityEvent) {
        self.events.borrow_mut().push((entity_id, event));
    }

    fn play_sound(&self, _entity_id: i32, sound: SoundEvent, volume: f32, pitch: f32) {
        self.sounds.borrow_mut().push((sound, volume, pitch));
    }

    fn forgive_dead_players(&self) -> bool {
        self.forgive_dead_players
    }
}

/// A target that records hits.
pub struct TestTarget {
    pub entity: EntityRef,
    pub accepts_damage: bool,
    pub knockback_resistance: f64,
    pub delta: Vector3<f64>,
    pub hits: Vec<f32>,
}

impl TestTarget {
    pub fn new(entity: EntityRef) -> Self {
        Self {
            entity,
            accepts_damage: true,
            knockback_resistance: 0.0,
            delta: Vector3::default(),
            hits: Vec::new(),
        }
    }
}

impl AttackTarget for TestTarget {
    fn entity_ref(&self) -> EntityRef {
        self.entity
    }

    fn hurt(&mut self, _source: &DamageSource, amount: f32) -> bool {
        if self.accepts_damage {
            self.hits.push(amount);
        }
        self.accepts_damage
    }

    fn knockback_resistance(&self) -> f64 {
        self.knockback_resistance
    }

    fn add_delta_movement(&mut self, delta: Vector3<f64>) {
        self.delta = self.delta.add(&delta);
    }
}

/// Flat ground at `ground_y` with optional extra blocks, fluids and entities.
pub struct TestReader {
    pub ground_y: i32,
    pub solid: FxHashSet<BlockPos>,
    pub fluid: FxHashSet<BlockPos>,
    pub entities: Vec<Aabb>,
}

impl TestReader {
    pub fn flat(ground_y: i32) -> Self {
        Self {
            ground_y,
            solid: FxHashSet::default(),
            fluid: FxHashSet::default(),
            entities: Vec::new(),
        }
    }
}

impl LevelReader for TestReader {
    fn entity_can_stand_on(&self, pos: BlockPos) -> bool {
        pos.y() == self.ground_y || self.solid.contains(&pos)
    }

    fn is_valid_empty_spawn_block(&self, pos: BlockPos) -> bool {
        pos.y() > self.ground_y && !self.solid.contains(&pos)
    }

    fn has_fluid(&self, pos: BlockPos) -> bool {
        self.fluid.contains(&pos)
    }

    fn is_unobstructed(&self, bounding_box: &Aabb) -> bool {
        !self.entities.iter().any(|other| other.intersects(bounding_box))
    }
}
