use crate::{AlgorithmKind, Completion, Dimensionality, Result, Run, SortVizError, Step};

/// Several runs sorting copies of the same input side by side.
#[derive(Debug, Clone)]
pub struct Comparison<T> {
    runs: Vec<Run<T>>,
}

impl<T: Ord + Clone> Comparison<T> {
    pub fn new(
        kinds: &[AlgorithmKind],
        values: &[T],
        throttle: usize,
        dimensions: Dimensionality,
    ) -> Result<Self> {
        if kinds.is_empty() {
            return Err(SortVizError::invalid(
                "comparison needs at least one algorithm",
            ));
        }

        let runs = kinds
            .iter()
            .map(|&kind| Run::new(kind, values.to_vec(), throttle, dimensions))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { runs })
    }

    pub fn runs(&self) -> &[Run<T>] {
        &self.runs
    }

    /// Advances every run once, returning one step per lane in order.
    pub fn tick(&mut self) -> Vec<Step<T>> {
        self.runs.iter_mut().map(Run::advance).collect()
    }

    /// Number of runs that have not completed yet.
    pub fn active(&self) -> usize {
        self.runs.iter().filter(|run| !run.is_completed()).count()
    }

    pub fn is_finished(&self) -> bool {
        self.active() == 0
    }

    /// Completion records of the runs that have finished.
    pub fn summary(&self) -> Vec<(AlgorithmKind, Completion)> {
        self.runs
            .iter()
            .filter_map(|run| {
                run.completion()
                    .map(|completion| (run.algorithm(), completion.clone()))
            })
            .collect()
    }
}
