use std::num::NonZeroUsize;

/// Formats the completion message reported once a stepper is exhausted.
pub(crate) fn completion_message(iterations: usize) -> String {
    format!("done; {iterations} iterations")
}

/// Iteration accounting shared by every stepper.
///
/// Counts elementary mutations, decides which of them are surfaced as
/// snapshots and finalises the completion message exactly once.
#[derive(Debug, Clone)]
pub struct StepCounter {
    period: NonZeroUsize,
    iterations: usize,
    message: Option<String>,
}

impl StepCounter {
    pub fn new(period: NonZeroUsize) -> Self {
        Self {
            period,
            iterations: 0,
            message: None,
        }
    }

    /// Throttle period `K`.
    pub fn period(&self) -> NonZeroUsize {
        self.period
    }

    /// Total elementary mutations recorded so far.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Records a throttled mutation. Returns `true` when the running count is
    /// divisible by the period and the state should be surfaced.
    pub fn record(&mut self) -> bool {
        self.iterations += 1;
        self.iterations % self.period.get() == 0
    }

    /// Records a mutation that is always surfaced regardless of the period.
    pub fn record_milestone(&mut self) {
        self.iterations += 1;
    }

    /// Freezes the completion message. Later calls keep the first message.
    pub fn finish(&mut self) {
        if self.message.is_none() {
            self.message = Some(completion_message(self.iterations));
        }
    }

    pub fn is_finished(&self) -> bool {
        self.message.is_some()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
