//! Saving and loading golem state.

use simdnbt::owned::{NbtCompound, NbtTag};

use super::EnderiteGolem;
use crate::entity::nbt::{nbt_bool, nbt_f32, put_bool};
use crate::entity::anger::AngerTracker;
use crate::entity::{EntityKind, LivingEntity};
use crate::level::Level;

const PLAYER_CREATED_TAG: &str = "PlayerCreated";
const HEALTH_TAG: &str = "Health";

impl EnderiteGolem {
    /// Writes the golem-specific fields.
    pub fn add_additional_save_data(&self, nbt: &mut NbtCompound) {
        put_bool(nbt, PLAYER_CREATED_TAG, self.player_created);
        self.anger.write_nbt(nbt);
    }

    /// Reads the golem-specific fields. Missing or malformed values fall
    /// back to a calm, naturally spawned golem.
    pub fn read_additional_save_data(&mut self, nbt: &NbtCompound, level: &dyn Level) {
        let player_created = match nbt.get(PLAYER_CREATED_TAG) {
            None => false,
            Some(tag) => nbt_bool(tag).unwrap_or_else(|| {
                log::warn!("Ignoring malformed {PLAYER_CREATED_TAG} tag: {tag:?}");
                false
            }),
        };
        self.set_player_created(player_created);
        self.read_persistent_anger_save_data(nbt, level);
    }

    fn read_persistent_anger_save_data(&mut self, nbt: &NbtCompound, level: &dyn Level) {
        self.anger = AngerTracker::read_nbt(nbt);

        let Some(uuid) = self.anger.target() else {
            return;
        };
        if level.is_client_side() {
            self.anger.set_target(None);
            return;
        }

        // The grudge target may not be loaded yet; the UUID is kept either way.
        if let Some(entity) = level.get_entity(uuid)
            && (entity.kind.is_mob() || entity.kind == EntityKind::Player)
        {
            self.target = Some(entity);
            self.last_hurt_by_mob = Some(entity);
        }
    }

    /// Saves the whole golem: health plus the golem-specific fields.
    #[must_use]
    pub fn save(&self) -> NbtCompound {
        let mut nbt = NbtCompound::new();
        nbt.insert(HEALTH_TAG, NbtTag::Float(self.health));
        self.add_additional_save_data(&mut nbt);
        nbt
    }

    /// Restores a golem saved with [`Self::save`].
    pub fn load(&mut self, nbt: &NbtCompound, level: &dyn Level) {
        match nbt.get(HEALTH_TAG).map(|tag| (tag, nbt_f32(tag))) {
            None => {}
            Some((_, Some(health))) if !health.is_nan() => self.set_health(health),
            Some((tag, _)) => log::warn!("Ignoring malformed {HEALTH_TAG} tag: {tag:?}"),
        }
        self.read_additional_save_data(nbt, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::damage::DamageSource;
    use crate::entity::nbt::uuid_to_nbt;
    use crate::test_support::{TestLevel, golem, player, zombie};

    #[test]
    fn test_save_layout() {
        let level = TestLevel::server();
        let zombie = zombie();
        let mut golem = golem();
        golem.set_player_created(true);
        golem.hurt(&level, &DamageSource::mob_attack(zombie), 20.0);
        golem.ai_step(&TestLevel::server().with_entity(zombie));

        let nbt = golem.save();
        assert_eq!(nbt.get("PlayerCreated"), Some(&NbtTag::Byte(1)));
        assert_eq!(nbt.get("Health"), Some(&NbtTag::Float(80.0)));
        assert_eq!(nbt.get("AngryAt"), Some(&uuid_to_nbt(zombie.uuid)));
        assert_eq!(
            nbt.get("AngerTime"),
            Some(&NbtTag::Int(golem.anger().remaining_ticks()))
        );
    }

    #[test]
    fn test_round_trip_restores_target() {
        let zombie = zombie();
        let level = TestLevel::server().with_entity(zombie);
        let mut golem = golem();
        golem.hurt(&level, &DamageSource::mob_attack(zombie), 60.0);
        golem.ai_step(&level);
        let nbt = golem.save();

        let mut loaded = crate::test_support::golem();
        loaded.load(&nbt, &level);
        assert!((loaded.get_health() - 40.0).abs() < f32::EPSILON);
        assert!(!loaded.is_player_created());
        assert_eq!(loaded.anger(), golem.anger());
        assert_eq!(loaded.target(), Some(zombie));
        assert_eq!(loaded.last_hurt_by_mob(), Some(zombie));
    }

    #[test]
    fn test_unloaded_target_keeps_grudge() {
        let player = player();
        let mut nbt = NbtCompound::new();
        nbt.insert("AngerTime", NbtTag::Int(300));
        nbt.insert("AngryAt", uuid_to_nbt(player.uuid));

        let mut golem = golem();
        golem.load(&nbt, &TestLevel::server());
        assert_eq!(golem.anger().target(), Some(player.uuid));
        assert_eq!(golem.anger().remaining_ticks(), 300);
        assert_eq!(golem.target(), None);
    }

    #[test]
    fn test_client_drops_target_uuid() {
        let player = player();
        let mut nbt = NbtCompound::new();
        nbt.insert("AngerTime", NbtTag::Int(300));
        nbt.insert("AngryAt", uuid_to_nbt(player.uuid));

        let mut golem = golem();
        golem.load(&nbt, &TestLevel::client().with_entity(player));
        assert_eq!(golem.anger().remaining_ticks(), 300);
        assert_eq!(golem.anger().target(), None);
        assert_eq!(golem.target(), None);
    }

    #[test]
    fn test_malformed_data_defaults() {
        let mut nbt = NbtCompound::new();
        nbt.insert("PlayerCreated", NbtTag::String("yes".into()));
        nbt.insert("AngerTime", NbtTag::String("long".into()));
        nbt.insert("AngryAt", NbtTag::IntArray(vec![1, 2]));
        nbt.insert("Health", NbtTag::Float(f32::NAN));

        let mut golem = golem();
        golem.set_player_created(true);
        golem.load(&nbt, &TestLevel::server());

        assert!(!golem.is_player_created());
        assert!((golem.get_health() - 100.0).abs() < f32::EPSILON);
        assert_eq!(golem.anger(), &AngerTracker::new());
    }

    #[test]
    fn test_empty_compound_is_fresh_golem() {
        let mut golem = golem();
        golem.load(&NbtCompound::new(), &TestLevel::server());
        assert!(!golem.is_player_created());
        assert!((golem.get_health() - 100.0).abs() < f32::EPSILON);
        assert!(!golem.anger().is_angry());
    }

    #[test]
    fn test_health_is_clamped_on_load() {
        let mut nbt = NbtCompound::new();
        nbt.insert("Health", NbtTag::Float(400.0));
        let mut golem = golem();
        golem.load(&nbt, &TestLevel::server());
        assert!((golem.get_health() - 100.0).abs() < f32::EPSILON);
    }
}
