use std::time::{Duration, Instant};

use log::{debug, trace};

/// How a bounded search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<T> {
    Found { value: T, attempts: usize },
    Exhausted { attempts: usize },
    TimedOut { attempts: usize },
}

impl<T> SearchOutcome<T> {
    pub fn attempts(&self) -> usize {
        match self {
            SearchOutcome::Found { attempts, .. }
            | SearchOutcome::Exhausted { attempts }
            | SearchOutcome::TimedOut { attempts } => *attempts,
        }
    }
}

/// Retry driver for randomized construction: runs an attempt closure until it
/// yields a value, the attempt budget is spent, or the optional wall-clock
/// budget runs out. The closure owns all scoring; this type owns the budget.
#[derive(Debug, Clone)]
pub struct BoundedSearch {
    label: &'static str,
    max_attempts: usize,
    time_budget: Option<Duration>,
}

impl BoundedSearch {
    pub fn new(label: &'static str, max_attempts: usize) -> Self {
        Self {
            label,
            max_attempts,
            time_budget: None,
        }
    }

    pub fn with_time_budget(mut self, time_budget: Option<Duration>) -> Self {
        self.time_budget = time_budget;
        self
    }

    pub fn run<T>(&self, mut attempt: impl FnMut(usize) -> Option<T>) -> SearchOutcome<T> {
        let deadline = self.time_budget.map(|budget| Instant::now() + budget);
        for n in 0..self.max_attempts {
            if deadline.is_some_and(|d| Instant::now() >= d) {
                debug!(
                    target: "retry",
                    "{}: time budget spent after {} attempts",
                    self.label,
                    n
                );
                return SearchOutcome::TimedOut { attempts: n };
            }
            if let Some(value) = attempt(n) {
                trace!(target: "retry", "{}: succeeded on attempt {}", self.label, n + 1);
                return SearchOutcome::Found {
                    value,
                    attempts: n + 1,
                };
            }
            trace!(target: "retry", "{}: attempt {} rejected", self.label, n + 1);
        }
        debug!(
            target: "retry",
            "{}: exhausted {} attempts",
            self.label,
            self.max_attempts
        );
        SearchOutcome::Exhausted {
            attempts: self.max_attempts,
        }
    }
}

/// Deterministic degradation: tries each level in order and returns the first
/// level whose construction succeeds.
pub fn degrade<L: Copy + std::fmt::Debug, T>(
    levels: impl IntoIterator<Item = L>,
    mut construct: impl FnMut(L) -> Option<T>,
) -> Option<(L, T)> {
    for level in levels {
        if let Some(value) = construct(level) {
            return Some((level, value));
        }
        debug!(target: "retry", "Degrading past level {:?}", level);
    }
    None
}
