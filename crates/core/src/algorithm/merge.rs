use std::num::NonZeroUsize;

use super::counter::StepCounter;

/// Pair of adjacent runs being merged: `left..=mid` and `mid + 1..=right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    left: usize,
    mid: usize,
    right: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Pick the next window of the current pass, or start the next pass.
    NextWindow,
    /// Write the merged run into the scratch buffer. `i` and `j` index the
    /// left and right runs, `k` the next scratch slot.
    Merge {
        window: Window,
        i: usize,
        j: usize,
        k: usize,
    },
    /// Move `scratch[x]` back into the live array.
    CopyBack { window: Window, x: usize },
    Done,
}

/// Bottom-up merge sort with run width doubling each pass and a single
/// scratch buffer reused by every merge.
///
/// Writes into the scratch buffer (including both drains) and copies back
/// into the live array are all throttled mutations. Snapshots show the live
/// array, so the merge phase of a window only becomes visible during its
/// copy-back.
#[derive(Debug, Clone)]
pub struct MergeSort<T> {
    values: Vec<T>,
    scratch: Vec<T>,
    counter: StepCounter,
    width: usize,
    next_left: usize,
    phase: Phase,
}

impl<T: Ord + Clone> MergeSort<T> {
    pub fn new(values: Vec<T>, period: NonZeroUsize) -> Self {
        let scratch = values.clone();
        Self {
            values,
            scratch,
            counter: StepCounter::new(period),
            width: 1,
            next_left: 0,
            phase: Phase::NextWindow,
        }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn counter(&self) -> &StepCounter {
        &self.counter
    }

    /// Advances to the next window, moving to a wider pass when the current
    /// one is exhausted. Returns `None` once the whole array is one run.
    fn next_window(&mut self) -> Option<Window> {
        let len = self.values.len();
        loop {
            if self.width >= len {
                return None;
            }
            if self.next_left < len {
                break;
            }
            self.width *= 2;
            self.next_left = 0;
        }

        let left = self.next_left;
        self.next_left += 2 * self.width;
        Some(Window {
            left,
            mid: (left + self.width - 1).min(len - 1),
            right: (left + 2 * self.width - 1).min(len - 1),
        })
    }

    /// Writes the next merged element into the scratch buffer. Returns the
    /// phase to continue with, switching to the copy-back once both runs are
    /// drained.
    fn merge_one(&mut self, window: Window, i: usize, j: usize, k: usize) -> Phase {
        let Window { mid, right, .. } = window;
        let take_left = match (i <= mid, j <= right) {
            (true, true) => self.values[i] <= self.values[j],
            (true, false) => true,
            (false, true) => false,
            (false, false) => {
                return Phase::CopyBack {
                    window,
                    x: window.left,
                }
            }
        };

        if take_left {
            self.scratch[k] = self.values[i].clone();
            Phase::Merge {
                window,
                i: i + 1,
                j,
                k: k + 1,
            }
        } else {
            self.scratch[k] = self.values[j].clone();
            Phase::Merge {
                window,
                i,
                j: j + 1,
                k: k + 1,
            }
        }
    }

    /// Brings `scratch[x]` into slot `x` by rotating it out of the unplaced
    /// tail `x..=right`, so the live array never holds duplicates.
    fn copy_back(&mut self, x: usize, right: usize) {
        let target = &self.scratch[x];
        if let Some(offset) = self.values[x..=right].iter().position(|v| v == target) {
            self.values[x..=x + offset].rotate_right(1);
        }
    }
}

impl<T: Ord + Clone> Iterator for MergeSort<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase {
                Phase::Done => return None,
                Phase::NextWindow => match self.next_window() {
                    Some(window) => {
                        self.phase = Phase::Merge {
                            window,
                            i: window.left,
                            j: window.mid + 1,
                            k: window.left,
                        };
                    }
                    None => {
                        self.counter.finish();
                        self.phase = Phase::Done;
                    }
                },
                Phase::Merge { window, i, j, k } => {
                    self.phase = self.merge_one(window, i, j, k);
                    if matches!(self.phase, Phase::Merge { .. }) && self.counter.record() {
                        return Some(self.values.clone());
                    }
                }
                Phase::CopyBack { window, x } if x <= window.right => {
                    self.copy_back(x, window.right);
                    self.phase = Phase::CopyBack { window, x: x + 1 };
                    if self.counter.record() {
                        return Some(self.values.clone());
                    }
                }
                Phase::CopyBack { .. } => self.phase = Phase::NextWindow,
            }
        }
    }
}
