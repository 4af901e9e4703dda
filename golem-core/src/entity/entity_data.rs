//! Entity data synchronization system
//!
//! Tracks changes to synced entity properties so only dirty values are
//! replicated to observers.

use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use golem_utils::locks::SyncRwLock;

/// Entity data value
#[derive(Debug, Clone, PartialEq)]
pub enum EntityDataValue {
    /// Byte value (u8)
    Byte(u8),
    /// Integer value (i32, sent as `VarInt`)
    Int(i32),
    /// Float value (f32)
    Float(f32),
    /// Boolean value
    Boolean(bool),
}

impl EntityDataValue {
    /// Gets the value as `T`, if it has that type
    #[must_use]
    pub fn get<T: IntoEntityData>(&self) -> Option<T> {
        T::from_entity_data(self)
    }
}

/// Trait for types that can be stored in entity data
pub trait IntoEntityData: Clone {
    /// Converts this value into an `EntityDataValue`
    fn into_entity_data(self) -> EntityDataValue;
    /// Extracts this value from an `EntityDataValue`
    fn from_entity_data(value: &EntityDataValue) -> Option<Self>;
}

impl IntoEntityData for u8 {
    fn into_entity_data(self) -> EntityDataValue {
        EntityDataValue::Byte(self)
    }
    fn from_entity_data(value: &EntityDataValue) -> Option<Self> {
        match value {
            EntityDataValue::Byte(v) => Some(*v),
            _ => None,
        }
    }
}

impl IntoEntityData for i32 {
    fn into_entity_data(self) -> EntityDataValue {
        EntityDataValue::Int(self)
    }
    fn from_entity_data(value: &EntityDataValue) -> Option<Self> {
        match value {
            EntityDataValue::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl IntoEntityData for f32 {
    fn into_entity_data(self) -> EntityDataValue {
        EntityDataValue::Float(self)
    }
    fn from_entity_data(value: &EntityDataValue) -> Option<Self> {
        match value {
            EntityDataValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl IntoEntityData for bool {
    fn into_entity_data(self) -> EntityDataValue {
        EntityDataValue::Boolean(self)
    }
    fn from_entity_data(value: &EntityDataValue) -> Option<Self> {
        match value {
            EntityDataValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

/// A data item that tracks its dirty state
struct DataItem {
    value: EntityDataValue,
    dirty: AtomicBool,
}

impl DataItem {
    fn new(value: EntityDataValue) -> Self {
        Self {
            value,
            dirty: AtomicBool::new(true), // Start dirty so initial spawn sends all data
        }
    }

    /// Returns false when the value did not change.
    fn set_value(&mut self, value: EntityDataValue) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.dirty.store(true, Ordering::Release);
        true
    }

    fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    fn mark_clean(&self) {
        self.dirty.store(false, Ordering::Release);
    }
}

/// Entity data storage with dirty tracking
pub struct EntityData {
    entity_id: i32,
    items: SyncRwLock<FxHashMap<u8, DataItem>>,
    is_dirty: AtomicBool,
}

impl EntityData {
    /// Creates a new entity data storage
    #[must_use]
    pub fn new(entity_id: i32) -> Self {
        Self {
            entity_id,
            items: SyncRwLock::new(FxHashMap::default()),
            is_dirty: AtomicBool::new(false),
        }
    }

    /// Defines a new data field with an initial value
    pub fn define<T: IntoEntityData>(&mut self, accessor: EntityDataAccessor<T>, initial_value: T) {
        let value = initial_value.into_entity_data();
        self.items.write().insert(accessor.id, DataItem::new(value));
    }

    /// Sets a data field value, defining it if needed
    pub fn set<T: IntoEntityData>(&self, accessor: EntityDataAccessor<T>, value: T) {
        let new_value = value.into_entity_data();
        let mut items = self.items.write();

        if let Some(item) = items.get_mut(&accessor.id) {
            if item.set_value(new_value) {
                self.is_dirty.store(true, Ordering::Release);
            }
        } else {
            items.insert(accessor.id, DataItem::new(new_value));
            self.is_dirty.store(true, Ordering::Release);
        }
    }

    /// Gets a data field value, or `None` if it is undefined or has another type
    pub fn get<T: IntoEntityData>(&self, accessor: EntityDataAccessor<T>) -> Option<T> {
        let items = self.items.read();
        items
            .get(&accessor.id)
            .and_then(|item| T::from_entity_data(&item.value))
    }

    /// Checks if any data has been modified
    pub fn is_dirty(&self) -> bool {
        self.is_dirty.load(Ordering::Acquire)
    }

    /// Packs all dirty data values into a vec, marking them as clean
    pub fn pack_dirty(&self) -> Option<Vec<(u8, EntityDataValue)>> {
        if !self.is_dirty() {
            return None;
        }

        let items = self.items.read();
        let mut dirty_items: Vec<(u8, EntityDataValue)> = items
            .iter()
            .filter(|(_, item)| item.is_dirty())
            .map(|(id, item)| {
                item.mark_clean();
                (*id, item.value.clone())
            })
            .collect();
        dirty_items.sort_by_key(|(id, _)| *id);

        self.is_dirty.store(false, Ordering::Release);
        if dirty_items.is_empty() {
            None
        } else {
            Some(dirty_items)
        }
    }

    /// Packs all data values (used for initial entity spawn)
    pub fn pack_all(&self) -> Vec<(u8, EntityDataValue)> {
        let items = self.items.read();
        let mut all: Vec<(u8, EntityDataValue)> = items
            .iter()
            .map(|(id, item)| {
                item.mark_clean();
                (*id, item.value.clone())
            })
            .collect();
        all.sort_by_key(|(id, _)| *id);
        self.is_dirty.store(false, Ordering::Release);
        all
    }

    /// Gets the entity ID this data belongs to
    pub fn entity_id(&self) -> i32 {
        self.entity_id
    }
}

/// Type-safe accessor for entity data fields
pub struct EntityDataAccessor<T> {
    id: u8,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> EntityDataAccessor<T> {
    /// Creates a new data accessor
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self {
            id,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Gets the data field ID
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }
}

impl<T> Clone for EntityDataAccessor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EntityDataAccessor<T> {}

impl EntityDataAccessor<u8> {
    /// Shared flags (fire, crouch, sprint, etc.)
    pub const SHARED_FLAGS: Self = Self::new(0);
    /// Mob flags (no AI, left handed, aggressive)
    pub const MOB_FLAGS: Self = Self::new(15);
    /// Golem flags, bit 0 is "player created"
    pub const GOLEM_FLAGS: Self = Self::new(16);
}

impl EntityDataAccessor<i32> {
    /// Air supply (for drowning)
    pub const AIR_SUPPLY: Self = Self::new(1);
}

impl EntityDataAccessor<bool> {
    /// Whether entity is silent
    pub const SILENT: Self = Self::new(4);

    /// Whether entity has no gravity
    pub const NO_GRAVITY: Self = Self::new(5);
}

impl EntityDataAccessor<f32> {
    /// Current health of a living entity
    pub const HEALTH: Self = Self::new(9);
}
