use std::num::NonZeroUsize;

use super::counter::StepCounter;

/// Adjacent-swap bubble sort. Every swap is throttled; a pass without swaps
/// ends the sort early.
#[derive(Debug, Clone)]
pub struct BubbleSort<T> {
    values: Vec<T>,
    counter: StepCounter,
    pass: usize,
    index: usize,
    swapped: bool,
    done: bool,
}

impl<T: Ord + Clone> BubbleSort<T> {
    pub fn new(values: Vec<T>, period: NonZeroUsize) -> Self {
        Self {
            values,
            counter: StepCounter::new(period),
            pass: 0,
            index: 0,
            swapped: false,
            done: false,
        }
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn counter(&self) -> &StepCounter {
        &self.counter
    }

    fn finish(&mut self) {
        self.counter.finish();
        self.done = true;
    }
}

impl<T: Ord + Clone> Iterator for BubbleSort<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.values.len();
        while !self.done {
            if self.pass >= len.saturating_sub(1) {
                self.finish();
                break;
            }

            let limit = len - self.pass - 1;
            if self.index < limit {
                let j = self.index;
                self.index += 1;
                if self.values[j] > self.values[j + 1] {
                    self.values.swap(j, j + 1);
                    self.swapped = true;
                    if self.counter.record() {
                        return Some(self.values.clone());
                    }
                }
                continue;
            }

            if !self.swapped {
                self.finish();
                break;
            }
            self.pass += 1;
            self.index = 0;
            self.swapped = false;
        }
        None
    }
}
