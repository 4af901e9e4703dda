//! Damage sources.

use super::EntityRef;

/// What kind of damage is being dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageKind {
    /// Melee hit from a mob.
    MobAttack,
    /// Melee hit from a player.
    PlayerAttack,
    /// Damage with no particular cause.
    Generic,
}

/// Where a piece of damage came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageSource {
    kind: DamageKind,
    attacker: Option<EntityRef>,
}

impl DamageSource {
    /// Creates a source of the given kind.
    #[must_use]
    pub const fn new(kind: DamageKind, attacker: Option<EntityRef>) -> Self {
        Self { kind, attacker }
    }

    /// Melee damage from a mob.
    #[must_use]
    pub const fn mob_attack(attacker: EntityRef) -> Self {
        Self::new(DamageKind::MobAttack, Some(attacker))
    }

    /// Melee damage from a player.
    #[must_use]
    pub const fn player_attack(attacker: EntityRef) -> Self {
        Self::new(DamageKind::PlayerAttack, Some(attacker))
    }

    /// Damage without an attacker.
    #[must_use]
    pub const fn generic() -> Self {
        Self::new(DamageKind::Generic, None)
    }

    /// The kind of damage.
    #[must_use]
    pub const fn kind(&self) -> DamageKind {
        self.kind
    }

    /// The entity responsible, if any.
    #[must_use]
    pub const fn attacker(&self) -> Option<EntityRef> {
        self.attacker
    }
}
