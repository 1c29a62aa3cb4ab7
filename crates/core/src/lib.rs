//! Core library for the Sort Visualiser application.
//!
//! Classic in-place sorting algorithms reshaped into resumable state machines.
//! A [`Run`] owns one array and one [`Stepper`] and is advanced once per
//! animation tick by an external driver, which receives either a copy of the
//! array or the final completion record. The crate performs no rendering, no
//! I/O beyond configuration loading and no timing of its own.

pub mod algorithm;
pub mod compare;
pub mod config;
pub mod error;
pub mod input;
pub mod run;

pub use algorithm::{AlgorithmKind, Stepper};
pub use compare::Comparison;
pub use config::{AppConfig, Dimensionality, PlaybackConfig, RunConfig};
pub use error::{Result, SortVizError};
pub use run::{Completion, Run, Snapshot, Step};
