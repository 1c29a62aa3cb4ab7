//! Stepwise sorting algorithms.
//!
//! Each algorithm is an explicit state machine that owns its array, mutates it
//! in place and hands back a full copy of the array at every surfaced step.
//! The sequences are finite and not restartable; sorting again requires a new
//! stepper over a fresh copy of the input.

mod bubble;
mod counter;
mod insertion;
mod merge;
mod quick;
mod selection;
mod shell;

use std::{fmt, iter::FusedIterator, num::NonZeroUsize, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::SortVizError;

pub use bubble::BubbleSort;
pub use counter::StepCounter;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;
pub use shell::ShellSort;

pub(crate) use counter::completion_message;

/// The six supported algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AlgorithmKind {
    Quick,
    Bubble,
    Merge,
    Insertion,
    Selection,
    Shell,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 6] = [
        AlgorithmKind::Quick,
        AlgorithmKind::Bubble,
        AlgorithmKind::Merge,
        AlgorithmKind::Insertion,
        AlgorithmKind::Selection,
        AlgorithmKind::Shell,
    ];

    /// Identifier accepted by [`FromStr`].
    pub fn id(self) -> &'static str {
        match self {
            AlgorithmKind::Quick => "quicksort",
            AlgorithmKind::Bubble => "bubblesort",
            AlgorithmKind::Merge => "mergesort",
            AlgorithmKind::Insertion => "insertionsort",
            AlgorithmKind::Selection => "selectionsort",
            AlgorithmKind::Shell => "shellsort",
        }
    }

    /// Builds a stepper of this kind over `values`.
    pub fn stepper<T: Ord + Clone>(self, values: Vec<T>, period: NonZeroUsize) -> Stepper<T> {
        match self {
            AlgorithmKind::Quick => Stepper::Quick(QuickSort::new(values, period)),
            AlgorithmKind::Bubble => Stepper::Bubble(BubbleSort::new(values, period)),
            AlgorithmKind::Merge => Stepper::Merge(MergeSort::new(values, period)),
            AlgorithmKind::Insertion => Stepper::Insertion(InsertionSort::new(values, period)),
            AlgorithmKind::Selection => Stepper::Selection(SelectionSort::new(values, period)),
            AlgorithmKind::Shell => Stepper::Shell(ShellSort::new(values, period)),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for AlgorithmKind {
    type Err = SortVizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        AlgorithmKind::ALL
            .into_iter()
            .find(|kind| kind.id() == id)
            .ok_or_else(|| SortVizError::UnknownAlgorithm(s.to_string()))
    }
}

impl TryFrom<String> for AlgorithmKind {
    type Error = SortVizError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AlgorithmKind> for String {
    fn from(kind: AlgorithmKind) -> Self {
        kind.id().to_string()
    }
}

/// A running algorithm of any kind.
#[derive(Debug, Clone)]
pub enum Stepper<T> {
    Quick(QuickSort<T>),
    Bubble(BubbleSort<T>),
    Merge(MergeSort<T>),
    Insertion(InsertionSort<T>),
    Selection(SelectionSort<T>),
    Shell(ShellSort<T>),
}

impl<T: Ord + Clone> Stepper<T> {
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Stepper::Quick(_) => AlgorithmKind::Quick,
            Stepper::Bubble(_) => AlgorithmKind::Bubble,
            Stepper::Merge(_) => AlgorithmKind::Merge,
            Stepper::Insertion(_) => AlgorithmKind::Insertion,
            Stepper::Selection(_) => AlgorithmKind::Selection,
            Stepper::Shell(_) => AlgorithmKind::Shell,
        }
    }

    /// Read-only view of the live array.
    pub fn values(&self) -> &[T] {
        match self {
            Stepper::Quick(s) => s.values(),
            Stepper::Bubble(s) => s.values(),
            Stepper::Merge(s) => s.values(),
            Stepper::Insertion(s) => s.values(),
            Stepper::Selection(s) => s.values(),
            Stepper::Shell(s) => s.values(),
        }
    }

    pub fn counter(&self) -> &StepCounter {
        match self {
            Stepper::Quick(s) => s.counter(),
            Stepper::Bubble(s) => s.counter(),
            Stepper::Merge(s) => s.counter(),
            Stepper::Insertion(s) => s.counter(),
            Stepper::Selection(s) => s.counter(),
            Stepper::Shell(s) => s.counter(),
        }
    }

    /// Elementary mutations performed so far.
    pub fn iterations(&self) -> usize {
        self.counter().iterations()
    }

    /// Completion message, available once the sequence is exhausted.
    pub fn completion_message(&self) -> Option<&str> {
        self.counter().message()
    }
}

impl<T: Ord + Clone> Iterator for Stepper<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Stepper::Quick(s) => s.next(),
            Stepper::Bubble(s) => s.next(),
            Stepper::Merge(s) => s.next(),
            Stepper::Insertion(s) => s.next(),
            Stepper::Selection(s) => s.next(),
            Stepper::Shell(s) => s.next(),
        }
    }
}

impl<T: Ord + Clone> FusedIterator for Stepper<T> {}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::input::shuffled_permutation;

    fn period(k: usize) -> NonZeroUsize {
        NonZeroUsize::new(k).unwrap()
    }

    fn sorted(values: &[u32]) -> Vec<u32> {
        let mut values = values.to_vec();
        values.sort_unstable();
        values
    }

    #[test]
    fn parses_identifiers() {
        for kind in AlgorithmKind::ALL {
            assert_eq!(kind.id().parse::<AlgorithmKind>().unwrap(), kind);
        }
        assert_eq!(
            " QuickSort ".parse::<AlgorithmKind>().unwrap(),
            AlgorithmKind::Quick
        );

        let err = "heapsort".parse::<AlgorithmKind>().unwrap_err();
        assert!(matches!(err, SortVizError::UnknownAlgorithm(id) if id == "heapsort"));
    }

    #[test]
    fn serialises_as_identifier() {
        let json = serde_json::to_string(&AlgorithmKind::Shell).unwrap();
        assert_eq!(json, "\"shellsort\"");

        let kind: AlgorithmKind = serde_json::from_str("\"mergesort\"").unwrap();
        assert_eq!(kind, AlgorithmKind::Merge);
        assert!(serde_json::from_str::<AlgorithmKind>("\"heapsort\"").is_err());
    }

    #[test]
    fn every_algorithm_sorts_and_preserves_values() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in [0, 1, 2, 3, 5, 16, 33, 64] {
            let input = shuffled_permutation(len, &mut rng);
            let expected = sorted(&input);

            for kind in AlgorithmKind::ALL {
                let mut stepper = kind.stepper(input.clone(), period(1));
                for frame in stepper.by_ref() {
                    assert_eq!(sorted(&frame), expected, "{kind} lost values at len {len}");
                }
                assert_eq!(stepper.values(), expected.as_slice(), "{kind} len {len}");
            }
        }
    }

    #[test]
    fn period_never_changes_the_total_work() {
        let mut rng = StdRng::seed_from_u64(11);
        let input = shuffled_permutation(40, &mut rng);

        for kind in AlgorithmKind::ALL {
            let mut baseline = kind.stepper(input.clone(), period(1));
            let baseline_frames = baseline.by_ref().count();

            for k in [2, 3, 7, 40] {
                let mut throttled = kind.stepper(input.clone(), period(k));
                let frames = throttled.by_ref().count();

                assert_eq!(throttled.iterations(), baseline.iterations(), "{kind} k={k}");
                assert_eq!(throttled.completion_message(), baseline.completion_message());
                assert!(frames <= baseline_frames, "{kind} k={k}");
            }
        }
    }

    #[test]
    fn unit_period_surfaces_every_counted_mutation() {
        let mut rng = StdRng::seed_from_u64(3);
        let input = shuffled_permutation(24, &mut rng);

        // These kinds surface exactly their counted mutations at K = 1.
        for kind in [
            AlgorithmKind::Quick,
            AlgorithmKind::Bubble,
            AlgorithmKind::Merge,
            AlgorithmKind::Insertion,
        ] {
            let mut stepper = kind.stepper(input.clone(), period(1));
            let frames = stepper.by_ref().count();
            assert_eq!(frames, stepper.iterations(), "{kind}");
        }
    }

    #[test]
    fn trivial_inputs_finish_without_frames() {
        for kind in AlgorithmKind::ALL {
            for input in [vec![], vec![1_u32]] {
                let mut stepper = kind.stepper(input, period(1));

                assert!(stepper.next().is_none(), "{kind}");
                assert_eq!(stepper.completion_message(), Some("done; 0 iterations"));
            }
        }
    }

    #[test]
    fn steppers_are_deterministic() {
        let mut rng = StdRng::seed_from_u64(5);
        let input = shuffled_permutation(30, &mut rng);

        for kind in AlgorithmKind::ALL {
            let first: Vec<Vec<u32>> = kind.stepper(input.clone(), period(2)).collect();
            let second: Vec<Vec<u32>> = kind.stepper(input.clone(), period(2)).collect();
            assert_eq!(first, second, "{kind}");
        }
    }

    #[test]
    fn message_only_appears_at_exhaustion() {
        let mut stepper = AlgorithmKind::Insertion.stepper(vec![2_u32, 1], period(1));

        assert!(stepper.next().is_some());
        assert!(stepper.completion_message().is_none());
        while stepper.next().is_some() {}
        assert_eq!(stepper.completion_message(), Some("done; 2 iterations"));
        assert_eq!(stepper.kind(), AlgorithmKind::Insertion);
    }
}
