//! Sound events played by the golem.

/// A sound the golem asks the host to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    /// Melee swing.
    IronGolemAttack,
    /// Crackiness got worse.
    IronGolemDamage,
    /// Took damage.
    IronGolemHurt,
    /// Died.
    IronGolemDeath,
    /// Repaired with an item.
    IronGolemRepair,
    /// Footstep.
    IronGolemStep,
}
