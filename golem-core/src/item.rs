//! Minimal item stacks, enough for interactions that consume items.

use golem_utils::ResourceLocation;

/// Item keys referenced by the golem.
pub mod items {
    use golem_utils::ResourceLocation;

    /// Default repair material.
    pub const IRON_INGOT: ResourceLocation = ResourceLocation::vanilla_static("iron_ingot");
    /// A flower, offered by golems.
    pub const POPPY: ResourceLocation = ResourceLocation::vanilla_static("poppy");
    /// Placeholder for an empty stack.
    pub const AIR: ResourceLocation = ResourceLocation::vanilla_static("air");
}

/// A stack of a single item type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    item: ResourceLocation,
    count: i32,
}

impl ItemStack {
    /// Creates a stack of `count` items.
    #[must_use]
    pub fn new(item: ResourceLocation, count: i32) -> Self {
        Self { item, count }
    }

    /// The empty stack.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(items::AIR, 0)
    }

    /// Returns true if the stack holds nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count <= 0 || self.item == items::AIR
    }

    /// Returns true if the stack is non-empty and holds `item`.
    #[must_use]
    pub fn is(&self, item: &ResourceLocation) -> bool {
        !self.is_empty() && &self.item == item
    }

    /// Number of items in the stack.
    #[must_use]
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Removes `amount` items, leaving an empty stack if it runs out.
    pub fn shrink(&mut self, amount: i32) {
        self.count -= amount;
        if self.count <= 0 {
            *self = Self::empty();
        }
    }
}
