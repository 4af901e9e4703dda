//! Entity attributes and the supplier that builds a mob's defaults.

use rustc_hash::FxHashMap;

/// An attribute a living entity can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Maximum health
    MaxHealth,
    /// Walking speed
    MovementSpeed,
    /// Fraction of knockback ignored, 0 to 1
    KnockbackResistance,
    /// Base melee damage
    AttackDamage,
    /// Extra melee knockback
    AttackKnockback,
    /// Range at which targets are tracked
    FollowRange,
    /// Armor points
    Armor,
}

impl Attribute {
    /// Value used when an entity has no explicit base value.
    #[must_use]
    pub const fn default_value(self) -> f64 {
        match self {
            Self::MaxHealth => 20.0,
            Self::MovementSpeed => 0.7,
            Self::FollowRange => 32.0,
            Self::KnockbackResistance
            | Self::AttackDamage
            | Self::AttackKnockback
            | Self::Armor => 0.0,
        }
    }

    /// Allowed range of the attribute's value.
    #[must_use]
    pub const fn range(self) -> (f64, f64) {
        match self {
            Self::MaxHealth => (1.0, 1024.0),
            Self::MovementSpeed => (0.0, 1024.0),
            Self::KnockbackResistance => (0.0, 1.0),
            Self::AttackDamage => (0.0, 2048.0),
            Self::AttackKnockback => (0.0, 5.0),
            Self::FollowRange => (0.0, 2048.0),
            Self::Armor => (0.0, 30.0),
        }
    }

    fn sanitize(self, value: f64) -> f64 {
        let (min, max) = self.range();
        if value.is_nan() {
            min
        } else {
            value.clamp(min, max)
        }
    }
}

/// Base attribute values of one entity.
#[derive(Debug, Clone, Default)]
pub struct AttributeMap {
    base: FxHashMap<Attribute, f64>,
}

impl AttributeMap {
    /// Current value of `attribute`, falling back to its default.
    #[must_use]
    pub fn get(&self, attribute: Attribute) -> f64 {
        self.base
            .get(&attribute)
            .copied()
            .unwrap_or_else(|| attribute.default_value())
    }

    /// Sets the base value, clamped into the attribute's range.
    pub fn set_base(&mut self, attribute: Attribute, value: f64) {
        self.base.insert(attribute, attribute.sanitize(value));
    }
}

/// Builder for the attribute defaults of an entity type.
#[derive(Debug, Clone, Default)]
pub struct AttributeSupplier {
    map: AttributeMap,
}

impl AttributeSupplier {
    /// Attributes every living entity has.
    #[must_use]
    pub fn living() -> Self {
        Self::default()
            .add(Attribute::MaxHealth, Attribute::MaxHealth.default_value())
            .add(Attribute::KnockbackResistance, 0.0)
            .add(Attribute::MovementSpeed, Attribute::MovementSpeed.default_value())
            .add(Attribute::Armor, 0.0)
    }

    /// Attributes every mob has.
    #[must_use]
    pub fn mob() -> Self {
        Self::living()
            .add(Attribute::FollowRange, 16.0)
            .add(Attribute::AttackKnockback, 0.0)
    }

    /// Adds or overrides an attribute.
    #[must_use]
    pub fn add(mut self, attribute: Attribute, value: f64) -> Self {
        self.map.set_base(attribute, value);
        self
    }

    /// Finishes the supplier.
    #[must_use]
    pub fn build(self) -> AttributeMap {
        self.map
    }
}

#[cfg(test)]
mod tests {
    use super::{Attribute, AttributeSupplier};

    #[test]
    fn test_mob_defaults_with_overrides() {
        let map = AttributeSupplier::mob()
            .add(Attribute::MaxHealth, 100.0)
            .add(Attribute::AttackDamage, 15.0)
            .build();

        assert!((map.get(Attribute::MaxHealth) - 100.0).abs() < f64::EPSILON);
        assert!((map.get(Attribute::FollowRange) - 16.0).abs() < f64::EPSILON);
        assert!((map.get(Attribute::AttackDamage) - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_values_are_clamped() {
        let map = AttributeSupplier::mob()
            .add(Attribute::KnockbackResistance, 3.0)
            .add(Attribute::AttackDamage, f64::NAN)
            .build();

        assert!((map.get(Attribute::KnockbackResistance) - 1.0).abs() < f64::EPSILON);
        assert!(map.get(Attribute::AttackDamage).abs() < f64::EPSILON);
    }
}
