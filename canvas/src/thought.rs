//! The "thinking" status feed shown while a generation runs.
//!
//! A fixed list of steps is revealed one per interval. The sequence is a
//! finite iterator that can be rewound with [`ThoughtSequence::restart`], and
//! it can also be queried by elapsed time for hosts that drive it from a clock.

#[cfg(test)]
#[path = "thought_test.rs"]
mod thought_test;

use std::time::Duration;

/// Default status lines, in reveal order.
pub const DEFAULT_STEPS: [&str; 5] = [
    "Analyzing request intent",
    "Scaffolding component architecture",
    "Generating Tailwind utility classes",
    "Synthesizing responsive layout",
    "Finalizing render pass",
];

/// Delay between consecutive steps.
pub const STEP_INTERVAL: Duration = Duration::from_millis(800);

/// A revealed step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThoughtStep {
    pub index: usize,
    pub text: String,
    /// Time since start at which this step appears.
    pub reveal_at: Duration,
}

#[derive(Debug, Clone)]
pub struct ThoughtSequence {
    steps: Vec<String>,
    interval: Duration,
    next: usize,
}

impl Default for ThoughtSequence {
    fn default() -> Self {
        Self::new(DEFAULT_STEPS.iter().map(|s| (*s).to_owned()).collect(), STEP_INTERVAL)
    }
}

impl ThoughtSequence {
    #[must_use]
    pub fn new(steps: Vec<String>, interval: Duration) -> Self {
        Self { steps, interval, next: 0 }
    }

    /// Rewind to the first step.
    pub fn restart(&mut self) {
        self.next = 0;
    }

    /// True once every step has been yielded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.next >= self.steps.len()
    }

    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time at which the last step appears.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.reveal_time(self.steps.len())
    }

    /// Steps visible `elapsed` after start. The first step appears after one interval.
    #[must_use]
    pub fn visible_at(&self, elapsed: Duration) -> &[String] {
        let count = if self.interval.is_zero() {
            self.steps.len()
        } else {
            usize::try_from(elapsed.as_nanos() / self.interval.as_nanos()).unwrap_or(usize::MAX)
        };
        &self.steps[..count.min(self.steps.len())]
    }

    /// Index of the step that is highlighted as in progress, if any.
    #[must_use]
    pub fn active_at(&self, elapsed: Duration) -> Option<usize> {
        self.visible_at(elapsed).len().checked_sub(1)
    }

    fn reveal_time(&self, ordinal: usize) -> Duration {
        self.interval.saturating_mul(u32::try_from(ordinal).unwrap_or(u32::MAX))
    }
}

impl Iterator for ThoughtSequence {
    type Item = ThoughtStep;

    fn next(&mut self) -> Option<Self::Item> {
        let text = self.steps.get(self.next)?.clone();
        let index = self.next;
        self.next += 1;
        Some(ThoughtStep { index, text, reveal_at: self.reveal_time(index + 1) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ThoughtSequence {}

/// Header for the thought card: "Thinking..." while generating, otherwise
/// the elapsed time with one decimal.
#[must_use]
pub fn header_label(generating: bool, elapsed: Duration) -> String {
    if generating {
        "Thinking...".to_owned()
    } else {
        format!("Thought for {:.1}s", elapsed.as_secs_f64())
    }
}
