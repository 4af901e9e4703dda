//! Persistent anger.
//!
//! A neutral mob stays angry at one entity for a random number of ticks
//! after being provoked. The tracker only holds the timer and the target
//! UUID; deciding when to start it is up to the owning entity.

use golem_utils::random::{Random, TimeUtil, UniformInt};
use simdnbt::owned::{NbtCompound, NbtTag};
use uuid::Uuid;

use super::nbt::{nbt_i32, nbt_uuid, uuid_to_nbt};

/// Default anger duration, 20 to 39 seconds.
pub const PERSISTENT_ANGER_TIME: UniformInt = TimeUtil::range_of_seconds(20, 39);

const ANGER_TIME_TAG: &str = "AngerTime";
const ANGRY_AT_TAG: &str = "AngryAt";

/// Countdown plus the UUID of the entity being held a grudge against.
///
/// The target is only meaningful while the countdown is positive; it is
/// cleared whenever the countdown reaches zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AngerTracker {
    remaining_ticks: i32,
    target: Option<Uuid>,
}

impl AngerTracker {
    /// A calm tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            remaining_ticks: 0,
            target: None,
        }
    }

    /// Restarts the countdown with a value drawn from `range`.
    pub fn start_timer<R: Random + ?Sized>(&mut self, range: UniformInt, random: &mut R) {
        self.set_remaining_ticks(range.sample(random));
    }

    /// Advances one tick; clears the target once the countdown runs out.
    pub fn tick(&mut self) {
        if self.remaining_ticks > 0 {
            self.remaining_ticks -= 1;
            if self.remaining_ticks == 0 {
                self.target = None;
            }
        }
    }

    /// Ticks left before calming down.
    #[must_use]
    pub const fn remaining_ticks(&self) -> i32 {
        self.remaining_ticks
    }

    /// Sets the countdown; negative values count as zero.
    pub fn set_remaining_ticks(&mut self, ticks: i32) {
        self.remaining_ticks = ticks.max(0);
        if self.remaining_ticks == 0 {
            self.target = None;
        }
    }

    /// UUID of the entity being held a grudge against.
    #[must_use]
    pub const fn target(&self) -> Option<Uuid> {
        self.target
    }

    /// Sets the grudge target without touching the countdown.
    pub fn set_target(&mut self, target: Option<Uuid>) {
        self.target = target;
    }

    /// True while the countdown is running.
    #[must_use]
    pub const fn is_angry(&self) -> bool {
        self.remaining_ticks > 0
    }

    /// True if angry and `uuid` is the target.
    #[must_use]
    pub fn is_angry_at(&self, uuid: Uuid) -> bool {
        self.is_angry() && self.target == Some(uuid)
    }

    /// Forgets the target and stops the countdown.
    pub fn stop_being_angry(&mut self) {
        self.remaining_ticks = 0;
        self.target = None;
    }

    /// Writes `AngerTime` and, when set, `AngryAt`.
    pub fn write_nbt(&self, nbt: &mut NbtCompound) {
        nbt.insert(ANGER_TIME_TAG, NbtTag::Int(self.remaining_ticks));
        if let Some(target) = self.target {
            nbt.insert(ANGRY_AT_TAG, uuid_to_nbt(target));
        }
    }

    /// Reads the tracker back, falling back to a calm tracker for anything
    /// missing or malformed.
    #[must_use]
    pub fn read_nbt(nbt: &NbtCompound) -> Self {
        let remaining_ticks = match nbt.get(ANGER_TIME_TAG) {
            None => 0,
            Some(tag) => nbt_i32(tag).unwrap_or_else(|| {
                log::warn!("Ignoring malformed {ANGER_TIME_TAG} tag: {tag:?}");
                0
            }),
        };
        let target = nbt.get(ANGRY_AT_TAG).and_then(|tag| {
            let uuid = nbt_uuid(tag);
            if uuid.is_none() {
                log::warn!("Ignoring malformed {ANGRY_AT_TAG} tag: {tag:?}");
            }
            uuid
        });

        let mut tracker = Self::new();
        tracker.set_target(target);
        tracker.set_remaining_ticks(remaining_ticks);
        tracker
    }
}
