//! Repairing the golem with its repair material.

use super::EnderiteGolem;
use crate::entity::LivingEntity;
use crate::interaction::{InteractContext, InteractionResult};
use crate::level::Level;
use crate::sound::SoundEvent;

impl EnderiteGolem {
    /// Handles a player right-clicking the golem.
    #[allow(clippy::float_cmp)]
    pub fn mob_interact(
        &mut self,
        level: &dyn Level,
        ctx: &mut InteractContext<'_>,
    ) -> InteractionResult {
        if !ctx.item_stack.is(&self.config.repair_item) {
            return InteractionResult::Pass;
        }

        let before = self.get_health();
        self.heal(self.config.repair_heal_amount);
        if self.get_health() == before {
            return InteractionResult::Pass;
        }

        let pitch = self.voice_pitch();
        level.play_sound(self.base.entity_id, SoundEvent::IronGolemRepair, 1.0, pitch);

        if !ctx.has_infinite_materials {
            ctx.item_stack.shrink(1);
        }

        log::debug!(
            "Golem {} repaired by {} to {}",
            self.base.uuid,
            ctx.player.uuid,
            self.get_health()
        );
        InteractionResult::sided_success(level.is_client_side())
    }

    /// Convenience wrapper: true if the interaction repaired the golem.
    pub fn try_repair(&mut self, level: &dyn Level, ctx: &mut InteractContext<'_>) -> bool {
        self.mob_interact(level, ctx).consumes_action()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::damage::DamageSource;
    use crate::item::{ItemStack, items};
    use crate::test_support::{TestLevel, golem, player};

    fn context(stack: &mut ItemStack, infinite: bool) -> InteractContext<'_> {
        InteractContext {
            player: player(),
            item_stack: stack,
            has_infinite_materials: infinite,
        }
    }

    #[test]
    fn test_repair_heals_and_consumes() {
        let level = TestLevel::server();
        let mut golem = golem();
        golem.hurt(&level, &DamageSource::generic(), 40.0);

        let mut stack = ItemStack::new(items::IRON_INGOT, 3);
        let result = golem.mob_interact(&level, &mut context(&mut stack, false));

        assert_eq!(result, InteractionResult::Consume);
        assert!((golem.get_health() - 85.0).abs() < f32::EPSILON);
        assert_eq!(stack.count(), 2);
        let (sound, volume, pitch) = level.sounds().last().copied().unwrap();
        assert_eq!(sound, SoundEvent::IronGolemRepair);
        assert!((volume - 1.0).abs() < f32::EPSILON);
        assert!((0.8..=1.2).contains(&pitch));
    }

    #[test]
    fn test_repair_caps_at_max() {
        let level = TestLevel::server();
        let mut golem = golem();
        golem.hurt(&level, &DamageSource::generic(), 10.0);

        let mut stack = ItemStack::new(items::IRON_INGOT, 1);
        assert!(golem.try_repair(&level, &mut context(&mut stack, false)));
        assert!((golem.get_health() - 100.0).abs() < f32::EPSILON);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_full_health_passes() {
        let level = TestLevel::server();
        let mut golem = golem();
        let mut stack = ItemStack::new(items::IRON_INGOT, 1);

        let result = golem.mob_interact(&level, &mut context(&mut stack, false));
        assert_eq!(result, InteractionResult::Pass);
        assert_eq!(stack.count(), 1);
        assert!(level.sounds().is_empty());
    }

    #[test]
    fn test_wrong_item_passes() {
        let level = TestLevel::server();
        let mut golem = golem();
        golem.hurt(&level, &DamageSource::generic(), 40.0);

        let mut stack = ItemStack::new(items::POPPY, 1);
        let result = golem.mob_interact(&level, &mut context(&mut stack, false));
        assert_eq!(result, InteractionResult::Pass);
        assert_eq!(stack.count(), 1);
        assert!((golem.get_health() - 60.0).abs() < f32::EPSILON);

        let mut empty = ItemStack::empty();
        assert!(!golem.try_repair(&level, &mut context(&mut empty, false)));
    }

    #[test]
    fn test_infinite_materials_keep_stack() {
        let level = TestLevel::server();
        let mut golem = golem();
        golem.hurt(&level, &DamageSource::generic(), 40.0);

        let mut stack = ItemStack::new(items::IRON_INGOT, 1);
        assert!(golem.try_repair(&level, &mut context(&mut stack, true)));
        assert_eq!(stack.count(), 1);
    }

    #[test]
    fn test_client_side_reports_success() {
        let mut golem = golem();
        golem.set_health(50.0);

        let mut stack = ItemStack::new(items::IRON_INGOT, 1);
        let result = golem.mob_interact(&TestLevel::client(), &mut context(&mut stack, false));
        assert_eq!(result, InteractionResult::Success);
    }
}
