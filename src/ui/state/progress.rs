// SPDX-License-Identifier: MPL-2.0
//! Timing math for the simulated generation.

use crate::config::PROGRESS_COMPLETE;
use std::time::{Duration, Instant};

/// A generation run that started at a fixed instant and lasts a fixed duration.
///
/// Progress is `min(floor(elapsed / duration * 100), 100)`. Since `elapsed`
/// never decreases for later instants, progress is monotonically
/// non-decreasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationTimeline {
    started: Instant,
    duration: Duration,
}

impl GenerationTimeline {
    #[must_use]
    pub fn new(started: Instant, duration: Duration) -> Self {
        Self { started, duration }
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Progress percentage (0–100) at `now`.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> u8 {
        if self.is_complete(now) {
            return PROGRESS_COMPLETE;
        }
        let elapsed = now.saturating_duration_since(self.started).as_micros();
        let total = self.duration.as_micros().max(1);
        let percent = (elapsed * u128::from(PROGRESS_COMPLETE)) / total;
        u8::try_from(percent.min(u128::from(PROGRESS_COMPLETE))).unwrap_or(PROGRESS_COMPLETE)
    }

    /// Whether the full duration has elapsed at `now`.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline() -> (Instant, GenerationTimeline) {
        let start = Instant::now();
        (start, GenerationTimeline::new(start, Duration::from_millis(1500)))
    }

    #[test]
    fn starts_at_zero() {
        let (start, timeline) = timeline();
        assert_eq!(timeline.progress_at(start), 0);
        assert!(!timeline.is_complete(start));
    }

    #[test]
    fn progress_is_floored() {
        let (start, timeline) = timeline();
        // 749ms of 1500ms is 49.93%
        assert_eq!(timeline.progress_at(start + Duration::from_millis(749)), 49);
        assert_eq!(timeline.progress_at(start + Duration::from_millis(750)), 50);
    }

    #[test]
    fn exactly_one_hundred_at_and_after_duration() {
        let (start, timeline) = timeline();
        assert_eq!(timeline.progress_at(start + Duration::from_millis(1499)), 99);
        assert_eq!(timeline.progress_at(start + Duration::from_millis(1500)), 100);
        assert_eq!(timeline.progress_at(start + Duration::from_secs(60)), 100);
        assert!(timeline.is_complete(start + Duration::from_millis(1500)));
    }

    #[test]
    fn progress_never_decreases() {
        let (start, timeline) = timeline();
        let mut last = 0;
        for ms in (0..2000).step_by(7) {
            let progress = timeline.progress_at(start + Duration::from_millis(ms));
            assert!(progress >= last);
            last = progress;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn instant_before_start_reads_as_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let timeline = GenerationTimeline::new(start, Duration::from_millis(1500));
        assert_eq!(timeline.progress_at(Instant::now()), 0);
    }
}
