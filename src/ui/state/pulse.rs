// SPDX-License-Identifier: MPL-2.0
//! Boolean flag that clears itself at a deadline.

use std::time::{Duration, Instant};

/// A flag that is raised at some instant and lowered once its deadline
/// passes.
///
/// Raising the flag again while it is still up keeps the original deadline.
/// The owner calls [`TimedFlag::expire`] from its tick handler.
///
/// ```
/// use pixelweaver::ui::state::TimedFlag;
/// use std::time::{Duration, Instant};
///
/// let start = Instant::now();
/// let mut flag = TimedFlag::default();
/// flag.raise(start, Duration::from_secs(2));
/// assert!(flag.is_raised());
///
/// flag.expire(start + Duration::from_secs(2));
/// assert!(!flag.is_raised());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimedFlag {
    deadline: Option<Instant>,
}

impl TimedFlag {
    /// Raises the flag until `now + duration`, unless it is already raised.
    pub fn raise(&mut self, now: Instant, duration: Duration) {
        if self.deadline.is_none() {
            self.deadline = Some(now + duration);
        }
    }

    /// Lowers the flag if its deadline has passed. Returns `true` if the flag
    /// was lowered by this call.
    pub fn expire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}
