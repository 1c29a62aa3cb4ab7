//! Per-session bookkeeping around a single [`Stepper`].

use serde::{Deserialize, Serialize};

use crate::{
    algorithm::completion_message, config::throttle_period, input, AlgorithmKind,
    Dimensionality, Result, RunConfig, Stepper,
};

/// Copy of the array taken at one surfaced step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<T> {
    pub values: Vec<T>,
    /// Number of snapshots surfaced so far, this one included.
    pub iteration: usize,
}

/// Final record of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub message: String,
    /// Elementary mutations performed by the algorithm.
    pub total_iterations: usize,
}

/// Result of one call to [`Run::advance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step<T> {
    Snapshot(Snapshot<T>),
    Completed(Completion),
}

impl<T> Step<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Step::Completed(_))
    }
}

/// One visualisation session: an owned array, the algorithm sorting it and
/// the counters a renderer needs.
#[derive(Debug, Clone)]
pub struct Run<T> {
    dimensions: Dimensionality,
    stepper: Stepper<T>,
    iteration: usize,
    completion: Option<Completion>,
}

impl<T: Ord + Clone> Run<T> {
    /// Starts a run over `values`. Fails before touching the array when the
    /// throttle is zero.
    pub fn new(
        algorithm: AlgorithmKind,
        values: Vec<T>,
        throttle: usize,
        dimensions: Dimensionality,
    ) -> Result<Self> {
        let period = throttle_period(throttle)?;
        tracing::debug!(%algorithm, len = values.len(), throttle, "starting run");

        Ok(Self {
            dimensions,
            stepper: algorithm.stepper(values, period),
            iteration: 0,
            completion: None,
        })
    }

    /// Starts a run from an algorithm identifier such as `"quicksort"`.
    pub fn with_identifier(
        identifier: &str,
        values: Vec<T>,
        throttle: usize,
        dimensions: Dimensionality,
    ) -> Result<Self> {
        Self::new(identifier.parse()?, values, throttle, dimensions)
    }

    pub fn algorithm(&self) -> AlgorithmKind {
        self.stepper.kind()
    }

    pub fn dimensions(&self) -> Dimensionality {
        self.dimensions
    }

    pub fn throttle(&self) -> usize {
        self.stepper.counter().period().get()
    }

    /// Snapshots surfaced so far.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn is_completed(&self) -> bool {
        self.completion.is_some()
    }

    pub fn completion(&self) -> Option<&Completion> {
        self.completion.as_ref()
    }

    /// Current state of the array.
    pub fn current(&self) -> &[T] {
        self.stepper.values()
    }

    /// Pulls the next step. After completion every call returns the same
    /// record without touching the algorithm again.
    pub fn advance(&mut self) -> Step<T> {
        if let Some(completion) = &self.completion {
            return Step::Completed(completion.clone());
        }

        match self.stepper.next() {
            Some(values) => {
                self.iteration += 1;
                Step::Snapshot(Snapshot {
                    values,
                    iteration: self.iteration,
                })
            }
            None => {
                let total_iterations = self.stepper.iterations();
                let message = self
                    .stepper
                    .completion_message()
                    .map(str::to_owned)
                    .unwrap_or_else(|| completion_message(total_iterations));
                tracing::debug!(
                    algorithm = %self.algorithm(),
                    snapshots = self.iteration,
                    total_iterations,
                    "run completed"
                );

                let completion = Completion {
                    message,
                    total_iterations,
                };
                self.completion = Some(completion.clone());
                Step::Completed(completion)
            }
        }
    }
}

impl Run<u32> {
    /// Builds a run over a shuffled `1..=size` as described by `config`.
    pub fn from_config(config: &RunConfig) -> Result<Self> {
        config.validate()?;
        let values = input::permutation(config.size, config.seed);
        Self::new(config.algorithm, values, config.throttle, config.dimensions)
    }
}
