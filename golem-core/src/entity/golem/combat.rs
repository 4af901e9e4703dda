//! Melee attacks, taking damage and target selection rules.

use golem_utils::math::Vector3;
use golem_utils::random::Random;

use super::EnderiteGolem;
use crate::entity::damage::DamageSource;
use crate::entity::event::EntityEvent;
use crate::entity::{Entity, EntityKind, EntityRef, LivingEntity};
use crate::level::{AttackTarget, Level};
use crate::sound::SoundEvent;

/// Upward knockback applied to a hit target before resistance.
const ATTACK_LIFT: f64 = 0.4;

/// Rolls melee damage: half the base value plus a random share of it.
///
/// Values below one skip the roll and deal exactly `base`.
pub fn roll_attack_damage<R: Random + ?Sized>(base: f32, random: &mut R) -> f32 {
    let whole = base as i32;
    if whole > 0 {
        base / 2.0 + random.next_i32_bounded(whole) as f32
    } else {
        base
    }
}

impl EnderiteGolem {
    /// Swings at `target`. Returns true if the target took damage.
    pub fn do_hurt_target(&mut self, level: &dyn Level, target: &mut dyn AttackTarget) -> bool {
        self.attack_animation_tick = self.config.attack_animation_ticks;
        level.broadcast_entity_event(self.base.entity_id, EntityEvent::Attack);

        let damage = roll_attack_damage(self.attack_damage(), &mut self.random);
        let source = DamageSource::mob_attack(self.entity_ref());
        let hit = target.hurt(&source, damage);
        if hit {
            let resistance = (1.0 - target.knockback_resistance()).max(0.0);
            target.add_delta_movement(Vector3::new(0.0, ATTACK_LIFT * resistance, 0.0));
            log::trace!(
                "Golem {} hit {:?} for {damage}",
                self.base.uuid,
                target.entity_ref()
            );
        }

        level.play_sound(self.base.entity_id, SoundEvent::IronGolemAttack, 1.0, 1.0);
        hit
    }

    /// Takes damage. Returns true if health was reduced.
    pub fn hurt(&mut self, level: &dyn Level, source: &DamageSource, amount: f32) -> bool {
        if level.is_client_side() || self.is_dead_or_dying() || amount.is_nan() || amount <= 0.0 {
            return false;
        }

        let before = self.crackiness();
        self.set_health(self.health - amount);

        if let Some(attacker) = source.attacker()
            && attacker.uuid != self.base.uuid
            && attacker.kind != EntityKind::Other
        {
            self.last_hurt_by_mob = Some(attacker);
            if self.can_attack_type(attacker.kind) {
                self.target = Some(attacker);
            }
        }

        if self.is_dead_or_dying() {
            self.die(level, source);
        } else {
            let pitch = self.voice_pitch();
            level.play_sound(self.base.entity_id, self.hurt_sound(), 1.0, pitch);
        }

        if self.crackiness() != before {
            level.play_sound(self.base.entity_id, SoundEvent::IronGolemDamage, 1.0, 1.0);
        }
        true
    }

    fn die(&mut self, level: &dyn Level, source: &DamageSource) {
        log::debug!(
            "Golem {} died to {:?} from {:?}",
            self.base.uuid,
            source.kind(),
            source.attacker()
        );
        let pitch = self.voice_pitch();
        level.play_sound(self.base.entity_id, self.death_sound(), 1.0, pitch);
        self.stop_being_angry();
    }

    /// Pitch jittered around 1.0 by up to 0.2 either way.
    pub(super) fn voice_pitch(&mut self) -> f32 {
        (self.random.next_f32() - self.random.next_f32()) * 0.2 + 1.0
    }

    /// Whether the golem may ever target entities of `kind`.
    #[must_use]
    pub fn can_attack_type(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Creeper => false,
            EntityKind::Player => !self.player_created,
            _ => true,
        }
    }

    /// Called when another entity pushes into the golem.
    pub fn do_push(&mut self, other: &EntityRef) {
        if other.kind.is_enemy()
            && other.kind != EntityKind::Creeper
            && self.random.next_i32_bounded(20) == 0
        {
            self.target = Some(*other);
        }
    }
}
