//! Problem records and the shared problem sink.
//!
//! Emission never aborts on a recoverable translation problem; it degrades the
//! output for the offending subtree and appends a record here. The sink is an
//! insertion-ordered, append-only sequence shared by an entire compilation run.

use std::sync::Mutex;

use serde::Serialize;

/// Problem severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ProblemSeverity {
    Warning = 0,
    Error = 1,
}

/// A source position attached to a problem record.
///
/// Positions refer to the original source file the front-end resolved the AST
/// from. A synthesized node carries `SourceLocation::UNKNOWN`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    pub const UNKNOWN: SourceLocation = SourceLocation {
        file: String::new(),
        line: 0,
        column: 0,
    };

    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

/// A single recoverable problem discovered during emission.
#[derive(Clone, Debug, Serialize)]
pub struct Problem {
    pub severity: ProblemSeverity,
    pub message: String,
    pub location: SourceLocation,
}

impl Problem {
    pub fn error(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            severity: ProblemSeverity::Error,
            message: message.into(),
            location,
        }
    }

    pub fn warning(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            severity: ProblemSeverity::Warning,
            message: message.into(),
            location,
        }
    }
}

/// Append-only problem collection for one compilation run.
///
/// Units may be emitted from worker threads, so appends go through a mutex.
/// Within one unit's emission appends are sequential and therefore keep their
/// insertion order; cross-unit ordering is whatever the scheduler produced.
#[derive(Debug, Default)]
pub struct ProblemSink {
    problems: Mutex<Vec<Problem>>,
}

impl ProblemSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, problem: Problem) {
        self.lock().push(problem);
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Snapshot of all problems recorded so far, in insertion order.
    pub fn collect(&self) -> Vec<Problem> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Problem>> {
        // A poisoned lock still holds a valid problem list; keep appending.
        match self.problems.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
