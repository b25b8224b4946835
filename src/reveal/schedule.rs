use crate::{
    foundation::error::{RevealError, RevealResult},
    foundation::rng::Rng64,
    reveal::ease::Ease,
};

/// Default length of the timed reveal window.
pub const DEFAULT_DURATION_MS: f64 = 5000.0;
/// Default pause between hiding every rect and starting the clock.
pub const DEFAULT_SETTLE_MS: f64 = 150.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Timing parameters of a reveal run.
pub struct RevealTiming {
    /// Window over which all rects become visible, in milliseconds.
    pub duration_ms: f64,
    /// Delay before the window starts, in milliseconds.
    pub settle_ms: f64,
    /// Spacing curve for reveal offsets.
    pub ease: Ease,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            settle_ms: DEFAULT_SETTLE_MS,
            ease: Ease::Linear,
        }
    }
}

impl RevealTiming {
    /// Rejects non-finite or non-positive durations and negative settle delays.
    pub fn validate(&self) -> RevealResult<()> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(RevealError::validation(
                "reveal.duration_ms must be finite and > 0",
            ));
        }
        if !self.settle_ms.is_finite() || self.settle_ms < 0.0 {
            return Err(RevealError::validation(
                "reveal.settle_ms must be finite and >= 0",
            ));
        }
        Ok(())
    }

    /// Reveal offset of the rect at shuffled position `index` out of `count`.
    ///
    /// Always in `[0, duration_ms)` for `index < count`.
    pub fn offset_for(&self, index: usize, count: usize) -> f64 {
        debug_assert!(index < count);
        let d = self.duration_ms;
        let off = match self.ease {
            Ease::Linear => (d * index as f64) / count as f64,
            ease => d * ease.apply(index as f64 / count as f64),
        };
        off.min(d.next_down())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Reveal offsets indexed by shuffled rect position.
pub struct RevealSchedule {
    offsets: Vec<f64>,
}

impl RevealSchedule {
    /// Offsets for `count` rects, one per shuffled position.
    pub fn new(count: usize, timing: &RevealTiming) -> Self {
        Self {
            offsets: (0..count).map(|i| timing.offset_for(i, count)).collect(),
        }
    }

    /// Offsets in shuffled order, non-decreasing.
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Number of scheduled rects.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Number of rects whose offset is at or before `elapsed_ms`.
    ///
    /// Offsets are non-decreasing, so the visible rects are always a prefix.
    pub fn due_at(&self, elapsed_ms: f64) -> usize {
        self.offsets.partition_point(|off| *off <= elapsed_ms)
    }

    /// Mean gap between consecutive reveals, if there is more than one rect.
    pub fn mean_interval_ms(&self) -> Option<f64> {
        match self.offsets.as_slice() {
            [first, .., last] => Some((last - first) / (self.offsets.len() - 1) as f64),
            _ => None,
        }
    }
}

/// Fisher–Yates shuffle: a uniform random permutation of `items`, in place.
pub fn shuffle_in_place<T>(items: &mut [T], rng: &mut Rng64) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/schedule.rs"]
mod tests;
