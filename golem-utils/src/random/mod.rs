//! Random sources matching the game's Java implementations, so that seeded
//! behaviour lines up with vanilla.

mod legacy_random;

pub use legacy_random::LegacyRandom;

/// Number of game ticks in one second.
pub const TICKS_PER_SECOND: i32 = 20;

/// Common interface of the game's random sources.
pub trait Random {
    /// Next uniformly distributed `i32`.
    fn next_i32(&mut self) -> i32;

    /// Next `i32` in `[0, bound)`. `bound` must be positive.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;

    /// Next `f32` in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Next `i32` in `[min, max]`.
    fn next_i32_between(&mut self, min: i32, max: i32) -> i32 {
        self.next_i32_bounded(max - min + 1) + min
    }
}

/// An inclusive integer range sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformInt {
    min: i32,
    max: i32,
}

impl UniformInt {
    /// Creates a range covering `[min, max]`.
    ///
    /// # Panics
    /// Panics if `max < min`.
    #[must_use]
    pub const fn of(min: i32, max: i32) -> Self {
        assert!(max >= min, "UniformInt max must not be below min");
        Self { min, max }
    }

    /// Smallest value the range can produce.
    #[must_use]
    pub const fn min_inclusive(&self) -> i32 {
        self.min
    }

    /// Largest value the range can produce.
    #[must_use]
    pub const fn max_inclusive(&self) -> i32 {
        self.max
    }

    /// Draws a value from the range.
    pub fn sample<R: Random + ?Sized>(&self, random: &mut R) -> i32 {
        random.next_i32_between(self.min, self.max)
    }
}

/// Helpers for expressing durations in ticks.
pub struct TimeUtil;

impl TimeUtil {
    /// Largest second count whose tick value fits in an `i32`.
    pub const MAX_SECONDS: i32 = i32::MAX / TICKS_PER_SECOND;

    /// A tick range spanning `[min_seconds, max_seconds]` seconds.
    ///
    /// Tick values saturate at the `i32` bounds.
    #[must_use]
    pub const fn range_of_seconds(min_seconds: i32, max_seconds: i32) -> UniformInt {
        UniformInt::of(
            min_seconds.saturating_mul(TICKS_PER_SECOND),
            max_seconds.saturating_mul(TICKS_PER_SECOND),
        )
    }
}
