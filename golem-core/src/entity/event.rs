//! Entity event codes sent through the host's generic entity-event channel.

/// An entity event the golem emits or reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EntityEvent {
    /// Play the attack swing.
    Attack = 4,
    /// Start holding out a flower.
    OfferFlower = 11,
    /// Stop holding out a flower.
    StopOfferFlower = 34,
}

impl EntityEvent {
    /// The wire code.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for EntityEvent {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Attack),
            11 => Ok(Self::OfferFlower),
            34 => Ok(Self::StopOfferFlower),
            other => Err(other),
        }
    }
}
