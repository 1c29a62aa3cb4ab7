use std::num::NonZeroUsize;

use super::counter::StepCounter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Pop the next inclusive range off the stack.
    Pop,
    /// Lomuto partition of `lo..=hi` around `values[lo]`. `i` is the next
    /// element to inspect and `j` the end of the `<= pivot` prefix.
    Partition {
        lo: usize,
        hi: usize,
        i: usize,
        j: usize,
    },
    Done,
}

/// Iterative quicksort over an explicit range stack.
///
/// In-partition swaps are throttled; the swap that places the pivot is always
/// surfaced.
#[derive(Debug, Clone)]
pub struct QuickSort<T> {
    values: Vec<T>,
    stack: Vec<(usize, usize)>,
    counter: StepCounter,
    phase: Phase,
}

impl<T: Ord + Clone> QuickSort<T> {
    pub fn new(values: Vec<T>, period: NonZeroUsize) -> Self {
        let stack = match values.len() {
            0 => Vec::new(),
            len => vec![(0, len - 1)],
        };

        Self {
            values,
            stack,
            counter: StepCounter::new(period),
            phase: Phase::Pop,
        }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn counter(&self) -> &StepCounter {
        &self.counter
    }

    fn snapshot(&self) -> Vec<T> {
        self.values.clone()
    }
}

impl<T: Ord + Clone> Iterator for QuickSort<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::Pop => match self.stack.pop() {
                    None => {
                        self.counter.finish();
                        self.phase = Phase::Done;
                    }
                    Some((lo, hi)) if lo >= hi => {}
                    Some((lo, hi)) => {
                        self.phase = Phase::Partition {
                            lo,
                            hi,
                            i: lo + 1,
                            j: lo,
                        };
                    }
                },
                Phase::Partition { lo, hi, i, j } if i <= hi => {
                    let mut j = j;
                    let mut surface = false;
                    if self.values[i] <= self.values[lo] {
                        j += 1;
                        self.values.swap(j, i);
                        surface = self.counter.record();
                    }
                    self.phase = Phase::Partition { lo, hi, i: i + 1, j };
                    if surface {
                        return Some(self.snapshot());
                    }
                }
                Phase::Partition { lo, hi, j, .. } => {
                    self.values.swap(lo, j);
                    self.counter.record_milestone();

                    // Right first so the left range is partitioned next.
                    self.stack.push((j + 1, hi));
                    if let Some(left_end) = j.checked_sub(1) {
                        self.stack.push((lo, left_end));
                    }
                    self.phase = Phase::Pop;
                    return Some(self.snapshot());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(k: usize) -> NonZeroUsize {
        NonZeroUsize::new(k).unwrap()
    }

    #[test]
    fn sorts_small_permutation_step_by_step() {
        let mut sorter = QuickSort::new(vec![3, 1, 2], period(1));
        let frames: Vec<Vec<i32>> = sorter.by_ref().collect();

        assert_eq!(
            frames,
            vec![
                vec![3, 1, 2],
                vec![3, 1, 2],
                vec![2, 1, 3],
                vec![2, 1, 3],
                vec![1, 2, 3],
            ]
        );
        assert_eq!(sorter.counter().iterations(), 5);
        assert_eq!(sorter.counter().message(), Some("done; 5 iterations"));
    }

    #[test]
    fn pivot_placements_survive_a_large_period() {
        let mut sorter = QuickSort::new(vec![3, 1, 2], period(100));
        let frames: Vec<Vec<i32>> = sorter.by_ref().collect();

        // One frame per partition: ranges 0..=2 and 0..=1.
        assert_eq!(frames, vec![vec![2, 1, 3], vec![1, 2, 3]]);
        assert_eq!(sorter.counter().iterations(), 5);
    }

    #[test]
    fn handles_duplicates_and_zero_index_pivots() {
        let sorter = QuickSort::new(vec![2, 2, 1, 1, 0, 2], period(1));
        let last = sorter.last().unwrap();

        assert_eq!(last, vec![0, 1, 1, 2, 2, 2]);
    }

    #[test]
    fn stays_exhausted() {
        let mut sorter = QuickSort::new(vec![2, 1], period(1));
        while sorter.next().is_some() {}

        assert!(sorter.next().is_none());
        assert_eq!(sorter.values(), &[1, 2]);
    }
}
