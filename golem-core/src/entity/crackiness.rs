//! Damage-state classification.
//!
//! A golem shows more cracks the lower its health fraction is. The state is
//! derived from health on demand and never stored.

/// How damaged a golem looks, from pristine to badly cracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Crackiness {
    /// At or above 75% health.
    None,
    /// Below 75% health.
    Low,
    /// Below 50% health.
    Medium,
    /// Below 25% health.
    High,
}

/// States ordered by ascending threshold.
const BY_DAMAGE: [(Crackiness, f32); 4] = [
    (Crackiness::High, 0.25),
    (Crackiness::Medium, 0.5),
    (Crackiness::Low, 0.75),
    (Crackiness::None, 1.0),
];

impl Crackiness {
    /// Upper health fraction (exclusive) at which this state applies.
    #[must_use]
    pub const fn threshold(self) -> f32 {
        match self {
            Self::None => 1.0,
            Self::Low => 0.75,
            Self::Medium => 0.5,
            Self::High => 0.25,
        }
    }

    /// Classifies a `health / max_health` fraction.
    ///
    /// Returns the first state whose threshold is strictly greater than
    /// `fraction`, or [`Crackiness::None`] when no threshold is.
    #[must_use]
    pub fn by_fraction(fraction: f32) -> Self {
        BY_DAMAGE
            .iter()
            .find(|(_, threshold)| fraction < *threshold)
            .map_or(Self::None, |(state, _)| *state)
    }
}
