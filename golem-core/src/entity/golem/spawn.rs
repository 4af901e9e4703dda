//! Spawn placement checks.

use golem_utils::BlockPos;

use super::EnderiteGolem;
use crate::entity::Entity;
use crate::level::LevelReader;

impl EnderiteGolem {
    /// Whether the golem fits where it stands: solid ground below, two free
    /// blocks of headroom and nothing else occupying its box.
    #[must_use]
    pub fn check_spawn_obstruction(&self, reader: &dyn LevelReader) -> bool {
        let base = BlockPos::containing(self.position());

        if !reader.entity_can_stand_on(base.below()) {
            return false;
        }

        for height in 1..3 {
            let pos = base.above(height);
            if !reader.is_valid_empty_spawn_block(pos) || reader.has_fluid(pos) {
                return false;
            }
        }

        reader.is_valid_empty_spawn_block(base)
            && !reader.has_fluid(base)
            && reader.is_unobstructed(&self.bounding_box())
    }
}
