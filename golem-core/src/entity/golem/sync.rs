//! Replication of golem state to observers.
//!
//! Domain state lives in plain fields on the golem. This module is the only
//! place that knows how it maps onto synced entity data slots.

use bitflags::bitflags;

use super::EnderiteGolem;
use crate::entity::{EntityData, EntityDataAccessor, EntityDataValue, LivingEntity};

bitflags! {
    /// Bits of the golem flags byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct GolemFlags: u8 {
        /// Built by a player rather than spawned naturally.
        const PLAYER_CREATED = 0x01;
    }
}

/// Defines the golem's synced slots on a fresh entity.
pub(super) fn define_synced_data(data: &mut EntityData, health: f32) {
    data.define(EntityDataAccessor::MOB_FLAGS, 0u8);
    data.define(EntityDataAccessor::HEALTH, health);
    data.define(EntityDataAccessor::GOLEM_FLAGS, GolemFlags::empty().bits());
}

/// Moves state between an entity and its synced data.
pub trait SyncedDataAdapter {
    /// Writes the current state into `data`. Unchanged values stay clean.
    fn write_synced_data(&self, data: &EntityData);

    /// Applies values received from the authoritative side.
    fn apply_synced_data(&mut self, values: &[(u8, EntityDataValue)]);
}

impl SyncedDataAdapter for EnderiteGolem {
    fn write_synced_data(&self, data: &EntityData) {
        // Bits we do not know about are kept as they are.
        let mut flags = GolemFlags::from_bits_retain(
            data.get(EntityDataAccessor::GOLEM_FLAGS).unwrap_or_default(),
        );
        flags.set(GolemFlags::PLAYER_CREATED, self.player_created);

        data.set(EntityDataAccessor::GOLEM_FLAGS, flags.bits());
        data.set(EntityDataAccessor::HEALTH, self.health);
    }

    fn apply_synced_data(&mut self, values: &[(u8, EntityDataValue)]) {
        for (id, value) in values {
            if *id == EntityDataAccessor::GOLEM_FLAGS.id() {
                if let Some(bits) = value.get::<u8>() {
                    self.base.entity_data.set(EntityDataAccessor::GOLEM_FLAGS, bits);
                    self.player_created =
                        GolemFlags::from_bits_retain(bits).contains(GolemFlags::PLAYER_CREATED);
                }
            } else if *id == EntityDataAccessor::HEALTH.id() {
                if let Some(health) = value.get::<f32>()
                    && !health.is_nan()
                {
                    self.health = health.clamp(0.0, self.get_max_health());
                    self.base.entity_data.set(EntityDataAccessor::HEALTH, self.health);
                }
            } else {
                log::trace!("Golem ignoring synced slot {id}");
            }
        }
    }
}
