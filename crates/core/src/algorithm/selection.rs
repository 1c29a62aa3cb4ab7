use std::num::NonZeroUsize;

use super::counter::StepCounter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Outer { i: usize },
    /// Searching `j..` for something smaller than `values[min]`.
    Scan { i: usize, j: usize, min: usize },
    Done,
}

/// Selection sort.
///
/// Every comparison of the minimum search counts as an iteration and is
/// throttled, even though most of them move nothing. The swap closing each
/// pass is always surfaced but does not add to the count.
#[derive(Debug, Clone)]
pub struct SelectionSort<T> {
    values: Vec<T>,
    counter: StepCounter,
    phase: Phase,
}

impl<T: Ord + Clone> SelectionSort<T> {
    pub fn new(values: Vec<T>, period: NonZeroUsize) -> Self {
        Self {
            values,
            counter: StepCounter::new(period),
            phase: Phase::Outer { i: 0 },
        }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn counter(&self) -> &StepCounter {
        &self.counter
    }
}

impl<T: Ord + Clone> Iterator for SelectionSort<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.values.len();
        loop {
            match self.phase {
                Phase::Done => return None,
                // The last element is already in place once the rest are.
                Phase::Outer { i } if i + 1 >= len => {
                    self.counter.finish();
                    self.phase = Phase::Done;
                }
                Phase::Outer { i } => {
                    self.phase = Phase::Scan {
                        i,
                        j: i + 1,
                        min: i,
                    }
                }
                Phase::Scan { i, j, min } if j < len => {
                    let min = if self.values[j] < self.values[min] { j } else { min };
                    self.phase = Phase::Scan { i, j: j + 1, min };
                    if self.counter.record() {
                        return Some(self.values.clone());
                    }
                }
                Phase::Scan { i, min, .. } => {
                    self.values.swap(i, min);
                    self.phase = Phase::Outer { i: i + 1 };
                    return Some(self.values.clone());
                }
            }
        }
    }
}
