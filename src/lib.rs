//! This crate provides a small collection of sequence algorithms:
//! majority-element detection and in-place duplicate removal from
//! sorted sequences. It also ships the random sequence generators
//! that drive the tests and the perf binaries.

pub mod majority;
pub use majority::{majority, majority_by_run_scan, majority_by_sorting};

pub mod dedup;
pub use dedup::{dedup_sorted, dedup_sorted_truncate};

pub mod gen_sequences;

pub mod utils;
