//! Common types shared across the asjs cross-compiler back-end.

pub mod problems;

pub use problems::{Problem, ProblemSeverity, ProblemSink, SourceLocation};
