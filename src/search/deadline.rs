//! Search deadline, threaded explicitly through every recursive call.

use std::time::{Duration, Instant};

/// The moment after which the search should stop deepening.
///
/// Built from a start instant, a total budget, and the safety fraction of
/// that budget the search may consume before wrapping up.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    start: Instant,
    cutoff: Option<Instant>,
}

impl Deadline {
    /// Deadline at `safety_fraction * budget` after `start`.
    ///
    /// A zero, negative, or NaN product leaves no usable time. Only a budget
    /// too large to represent is treated as unbounded.
    #[must_use]
    pub fn new(start: Instant, budget: Duration, safety_fraction: f64) -> Self {
        let usable = budget.as_secs_f64() * safety_fraction;
        let cutoff = if usable.is_nan() || usable <= 0.0 {
            Some(start)
        } else {
            Duration::try_from_secs_f64(usable)
                .ok()
                .and_then(|usable| start.checked_add(usable))
        };
        Self { start, cutoff }
    }

    /// Deadline starting now.
    #[must_use]
    pub fn starting_now(budget: Duration, safety_fraction: f64) -> Self {
        Self::new(Instant::now(), budget, safety_fraction)
    }

    /// A deadline that never passes.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            start: Instant::now(),
            cutoff: None,
        }
    }

    /// Whether the usable part of the budget is spent.
    #[must_use]
    pub fn has_passed(&self) -> bool {
        self.cutoff.is_some_and(|cutoff| Instant::now() >= cutoff)
    }

    /// Time since the search started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}
