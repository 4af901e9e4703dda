//! Player interaction types.

use crate::item::ItemStack;
use crate::entity::EntityRef;

/// Outcome of an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionResult {
    /// The interaction happened; the client swings its arm.
    Success,
    /// The interaction happened on the authoritative side.
    Consume,
    /// Nothing happened, let other handlers try.
    Pass,
}

impl InteractionResult {
    /// Returns true if the interaction used up the action.
    #[must_use]
    pub const fn consumes_action(self) -> bool {
        matches!(self, Self::Success | Self::Consume)
    }

    /// `Success` on the client, `Consume` on the server.
    #[must_use]
    pub const fn sided_success(is_client_side: bool) -> Self {
        if is_client_side {
            Self::Success
        } else {
            Self::Consume
        }
    }
}

/// Everything an entity needs to react to a player right-clicking it.
pub struct InteractContext<'a> {
    /// The interacting player.
    pub player: EntityRef,
    /// The stack in the player's hand; shrunk in place when consumed.
    pub item_stack: &'a mut ItemStack,
    /// Creative-style players keep their items.
    pub has_infinite_materials: bool,
}
