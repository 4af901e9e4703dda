//! The Enderite Golem.
//!
//! A neutral golem: it defends against hostile mobs, remembers who hurt it
//! for a while, can be repaired with its repair material and never turns on
//! players when a player built it.

mod combat;
mod persistence;
mod repair;
mod spawn;
mod sync;

pub use combat::roll_attack_damage;
pub use sync::{GolemFlags, SyncedDataAdapter};

use std::sync::Arc;

use golem_utils::math::{Aabb, Vector3};
use golem_utils::random::{LegacyRandom, Random};
use uuid::Uuid;

use super::anger::AngerTracker;
use super::attributes::{Attribute, AttributeMap, AttributeSupplier};
use super::crackiness::Crackiness;
use super::event::EntityEvent;
use super::{BaseEntity, Entity, EntityData, EntityKind, EntityRef, LivingEntity};
use crate::config::GolemConfig;
use crate::level::Level;
use crate::sound::SoundEvent;

/// Bounding box width.
pub const WIDTH: f64 = 1.4;
/// Bounding box height.
pub const HEIGHT: f64 = 2.7;
/// Eye height, 85% of the box height.
pub const EYE_HEIGHT: f64 = 2.295;

/// Horizontal speed (squared) above which sprint particles may appear.
const SPRINT_PARTICLE_SPEED_SQR: f64 = 2.500_000_3E-7;

/// Builds the golem's attributes from its config.
#[must_use]
pub fn create_attributes(config: &GolemConfig) -> AttributeMap {
    AttributeSupplier::mob()
        .add(Attribute::MaxHealth, config.max_health)
        .add(Attribute::MovementSpeed, config.movement_speed)
        .add(Attribute::KnockbackResistance, config.knockback_resistance)
        .add(Attribute::AttackDamage, config.attack_damage)
        .build()
}

/// An Enderite Golem instance.
pub struct EnderiteGolem {
    base: BaseEntity,
    config: Arc<GolemConfig>,
    attributes: AttributeMap,
    health: f32,
    player_created: bool,
    attack_animation_tick: i32,
    offer_flower_tick: i32,
    anger: AngerTracker,
    target: Option<EntityRef>,
    last_hurt_by_mob: Option<EntityRef>,
    random: LegacyRandom,
}

impl EnderiteGolem {
    /// Creates a golem with a fresh UUID.
    #[must_use]
    pub fn new(entity_id: i32, position: Vector3<f64>, config: Arc<GolemConfig>) -> Self {
        let uuid = Uuid::new_v4();
        let seed = uuid.as_u64_pair().1;
        Self::with_seed(entity_id, uuid, position, config, seed)
    }

    /// Creates a golem with a known UUID and random seed.
    #[must_use]
    pub fn with_seed(
        entity_id: i32,
        uuid: Uuid,
        position: Vector3<f64>,
        config: Arc<GolemConfig>,
        seed: u64,
    ) -> Self {
        let attributes = create_attributes(&config);
        let health = attributes.get(Attribute::MaxHealth) as f32;

        let mut base = BaseEntity::new(entity_id, uuid, position);
        sync::define_synced_data(&mut base.entity_data, health);

        Self {
            base,
            config,
            attributes,
            health,
            player_created: false,
            attack_animation_tick: 0,
            offer_flower_tick: 0,
            anger: AngerTracker::new(),
            target: None,
            last_hurt_by_mob: None,
            random: LegacyRandom::from_seed(seed),
        }
    }

    /// The golem's configuration.
    #[must_use]
    pub fn config(&self) -> &GolemConfig {
        &self.config
    }

    /// The golem's attributes.
    #[must_use]
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Base melee damage.
    #[must_use]
    pub fn attack_damage(&self) -> f32 {
        self.attributes.get(Attribute::AttackDamage) as f32
    }

    /// Walking speed.
    #[must_use]
    pub fn movement_speed(&self) -> f64 {
        self.attributes.get(Attribute::MovementSpeed)
    }

    /// Whether a player built this golem.
    #[must_use]
    pub fn is_player_created(&self) -> bool {
        self.player_created
    }

    /// Marks the golem as player-built, replicating the change.
    pub fn set_player_created(&mut self, player_created: bool) {
        self.player_created = player_created;
        self.write_synced_data(&self.base.entity_data);
    }

    /// Ticks left in the attack swing animation.
    #[must_use]
    pub fn attack_animation_tick(&self) -> i32 {
        self.attack_animation_tick
    }

    /// Ticks left holding out a flower.
    #[must_use]
    pub fn offer_flower_tick(&self) -> i32 {
        self.offer_flower_tick
    }

    /// Current damage state.
    #[must_use]
    pub fn crackiness(&self) -> Crackiness {
        Crackiness::by_fraction(self.health / self.get_max_health())
    }

    /// The entity currently being attacked.
    #[must_use]
    pub fn target(&self) -> Option<EntityRef> {
        self.target
    }

    /// Sets the attack target. The host's target goals call this.
    pub fn set_target(&mut self, target: Option<EntityRef>) {
        self.target = target;
    }

    /// The last mob or player that hurt the golem.
    #[must_use]
    pub fn last_hurt_by_mob(&self) -> Option<EntityRef> {
        self.last_hurt_by_mob
    }

    /// The persistent anger state.
    #[must_use]
    pub fn anger(&self) -> &AngerTracker {
        &self.anger
    }

    /// Mutable access to the persistent anger state.
    pub fn anger_mut(&mut self) -> &mut AngerTracker {
        &mut self.anger
    }

    /// True if the golem may attack `entity` and holds a grudge against it.
    #[must_use]
    pub fn is_angry_at(&self, entity: &EntityRef) -> bool {
        self.can_attack_type(entity.kind) && self.anger.is_angry_at(entity.uuid)
    }

    /// Restarts the anger countdown.
    pub fn start_persistent_anger_timer(&mut self) {
        let range = self.config.anger_time();
        self.anger.start_timer(range, &mut self.random);
        log::debug!(
            "Golem {} angry at {:?} for {} ticks",
            self.base.uuid,
            self.anger.target(),
            self.anger.remaining_ticks()
        );
    }

    /// Drops the grudge, the attack target and the last attacker.
    pub fn stop_being_angry(&mut self) {
        if self.anger.target().is_some() {
            log::debug!("Golem {} calmed down", self.base.uuid);
        }
        self.last_hurt_by_mob = None;
        self.anger.stop_being_angry();
        self.target = None;
    }

    /// Points the grudge at the current target if it is someone new.
    fn sync_anger_target(&mut self) {
        if let Some(target) = self.target
            && self.anger.target() != Some(target.uuid)
        {
            self.anger.set_target(Some(target.uuid));
            self.start_persistent_anger_timer();
        }
    }

    /// Per-tick anger bookkeeping on the authoritative side.
    ///
    /// Anger does not decay while the golem is chasing a player.
    pub fn update_persistent_anger(&mut self, level: &dyn Level) {
        let live_target = self
            .target
            .filter(|target| level.get_entity(target.uuid).is_some());

        if live_target.is_none()
            && let Some(grudge) = self.anger.target()
            && level
                .get_entity(grudge)
                .is_some_and(|entity| entity.kind.is_mob())
        {
            self.stop_being_angry();
            return;
        }

        self.sync_anger_target();

        let chasing_player = live_target.is_some_and(|target| target.kind == EntityKind::Player);
        if self.anger.is_angry() && !chasing_player {
            self.anger.tick();
            if !self.anger.is_angry() {
                self.stop_being_angry();
            }
        }
    }

    /// Forgives a player who died while the golem was angry at them.
    pub fn player_died(&mut self, level: &dyn Level, player: Uuid) {
        if level.forgive_dead_players() && self.anger.target() == Some(player) {
            self.stop_being_angry();
        }
    }

    /// Per-tick update driven by the host.
    pub fn ai_step(&mut self, level: &dyn Level) {
        if self.attack_animation_tick > 0 {
            self.attack_animation_tick -= 1;
        }

        if self.offer_flower_tick > 0 {
            self.offer_flower_tick -= 1;
        }

        if !level.is_client_side() {
            self.update_persistent_anger(level);
        }
    }

    /// Reacts to an entity event received from the server.
    pub fn handle_entity_event(&mut self, level: &dyn Level, code: u8) {
        match EntityEvent::try_from(code) {
            Ok(EntityEvent::Attack) => {
                self.attack_animation_tick = self.config.attack_animation_ticks;
                level.play_sound(self.base.entity_id, SoundEvent::IronGolemAttack, 1.0, 1.0);
            }
            Ok(EntityEvent::OfferFlower) => {
                self.offer_flower_tick = self.config.offer_flower_ticks;
            }
            Ok(EntityEvent::StopOfferFlower) => {
                self.offer_flower_tick = 0;
            }
            Err(code) => log::trace!("Golem ignoring entity event {code}"),
        }
    }

    /// Starts or stops holding out a flower and tells observers.
    pub fn offer_flower(&mut self, level: &dyn Level, offer: bool) {
        let event = if offer {
            self.offer_flower_tick = self.config.offer_flower_ticks;
            EntityEvent::OfferFlower
        } else {
            self.offer_flower_tick = 0;
            EntityEvent::StopOfferFlower
        };
        level.broadcast_entity_event(self.base.entity_id, event);
    }

    /// Golems do not run out of air.
    #[must_use]
    pub fn decrease_air_supply(&self, air: i32) -> i32 {
        air
    }

    /// Whether to spawn a sprint particle this tick.
    pub fn can_spawn_sprint_particle(&mut self) -> bool {
        self.base.delta_movement.horizontal_distance_sqr() > SPRINT_PARTICLE_SPEED_SQR
            && self.random.next_i32_bounded(5) == 0
    }

    /// Where a leash attaches, relative to the entity position.
    #[must_use]
    pub fn leash_offset(&self) -> Vector3<f64> {
        Vector3::new(0.0, 0.875 * EYE_HEIGHT, WIDTH * 0.4)
    }

    /// The golem's collision box at its current position.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        Aabb::of_entity(self.base.position, WIDTH, HEIGHT)
    }

    /// Moves the golem.
    pub fn set_position(&mut self, position: Vector3<f64>) {
        self.base.position = position;
    }

    /// Sets the golem's velocity.
    pub fn set_delta_movement(&mut self, delta: Vector3<f64>) {
        self.base.delta_movement = delta;
    }

    /// Sound played when hurt.
    #[must_use]
    pub const fn hurt_sound(&self) -> SoundEvent {
        SoundEvent::IronGolemHurt
    }

    /// Sound played on death.
    #[must_use]
    pub const fn death_sound(&self) -> SoundEvent {
        SoundEvent::IronGolemDeath
    }

    /// Plays a footstep.
    pub fn play_step_sound(&self, level: &dyn Level) {
        level.play_sound(self.base.entity_id, SoundEvent::IronGolemStep, 1.0, 1.0);
    }
}

impl Entity for EnderiteGolem {
    fn entity_id(&self) -> i32 {
        self.base.entity_id
    }

    fn uuid(&self) -> Uuid {
        self.base.uuid
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Golem
    }

    fn position(&self) -> Vector3<f64> {
        self.base.position
    }

    fn delta_movement(&self) -> Vector3<f64> {
        self.base.delta_movement
    }

    fn entity_data(&self) -> &EntityData {
        &self.base.entity_data
    }
}

impl LivingEntity for EnderiteGolem {
    fn get_health(&self) -> f32 {
        self.health
    }

    fn set_health(&mut self, health: f32) {
        if health.is_nan() {
            log::warn!("Ignoring NaN health for golem {}", self.base.uuid);
            return;
        }
        self.health = health.clamp(0.0, self.get_max_health());
        self.write_synced_data(&self.base.entity_data);
    }

    fn get_max_health(&self) -> f32 {
        self.attributes.get(Attribute::MaxHealth) as f32
    }
}
