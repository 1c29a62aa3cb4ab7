use std::num::NonZeroUsize;

use super::counter::StepCounter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Start inserting `values[i]`.
    Outer { i: usize },
    /// The key sits at `hole` and moves left while its neighbour is larger.
    Shift { i: usize, hole: usize },
    Done,
}

/// Insertion sort. Each shift of the key is throttled; settling the key in
/// its slot ends the outer step and is always surfaced.
#[derive(Debug, Clone)]
pub struct InsertionSort<T> {
    values: Vec<T>,
    counter: StepCounter,
    phase: Phase,
}

impl<T: Ord + Clone> InsertionSort<T> {
    pub fn new(values: Vec<T>, period: NonZeroUsize) -> Self {
        Self {
            values,
            counter: StepCounter::new(period),
            phase: Phase::Outer { i: 1 },
        }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn counter(&self) -> &StepCounter {
        &self.counter
    }
}

impl<T: Ord + Clone> Iterator for InsertionSort<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Outer { i } if i >= self.values.len() => {
                    self.counter.finish();
                    self.phase = Phase::Done;
                }
                Phase::Outer { i } => self.phase = Phase::Shift { i, hole: i },
                Phase::Shift { i, hole }
                    if hole > 0 && self.values[hole - 1] > self.values[hole] =>
                {
                    self.values.swap(hole - 1, hole);
                    self.phase = Phase::Shift { i, hole: hole - 1 };
                    if self.counter.record() {
                        return Some(self.values.clone());
                    }
                }
                Phase::Shift { i, .. } => {
                    self.counter.record_milestone();
                    self.phase = Phase::Outer { i: i + 1 };
                    return Some(self.values.clone());
                }
            }
        }
    }
}
