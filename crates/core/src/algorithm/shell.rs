use std::num::NonZeroUsize;

use super::counter::StepCounter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Gapped insertion of `values[i]` for the current gap.
    Outer { i: usize },
    Shift { i: usize, hole: usize },
    Done,
}

/// Shell sort with the halving gap sequence `n/2, n/4, .., 1`.
///
/// Gapped shifts are throttled mutations. Settling an element is always
/// surfaced but, unlike insertion sort, is not counted.
#[derive(Debug, Clone)]
pub struct ShellSort<T> {
    values: Vec<T>,
    counter: StepCounter,
    gap: usize,
    phase: Phase,
}

impl<T: Ord + Clone> ShellSort<T> {
    pub fn new(values: Vec<T>, period: NonZeroUsize) -> Self {
        let gap = values.len() / 2;
        Self {
            values,
            counter: StepCounter::new(period),
            gap,
            phase: Phase::Outer { i: gap },
        }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn counter(&self) -> &StepCounter {
        &self.counter
    }
}

impl<T: Ord + Clone> Iterator for ShellSort<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let gap = self.gap;
            match self.phase {
                Phase::Done => return None,
                _ if gap == 0 => {
                    self.counter.finish();
                    self.phase = Phase::Done;
                }
                Phase::Outer { i } if i >= self.values.len() => {
                    self.gap /= 2;
                    self.phase = Phase::Outer { i: self.gap };
                }
                Phase::Outer { i } => self.phase = Phase::Shift { i, hole: i },
                Phase::Shift { i, hole }
                    if hole >= gap && self.values[hole - gap] > self.values[hole] =>
                {
                    self.values.swap(hole - gap, hole);
                    self.phase = Phase::Shift { i, hole: hole - gap };
                    if self.counter.record() {
                        return Some(self.values.clone());
                    }
                }
                Phase::Shift { i, .. } => {
                    self.phase = Phase::Outer { i: i + 1 };
                    return Some(self.values.clone());
                }
            }
        }
    }
}
