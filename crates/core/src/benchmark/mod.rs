//! Benchmark module - the reference index a subject is measured against.

mod benchmark_model;

pub use benchmark_model::{Benchmark, ConstituentStats};
