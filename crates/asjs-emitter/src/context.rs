//! Emission context: the active output sink, capture stack, indentation
//! state, temp-name generation and the problem sink reference.

use asjs_common::{Problem, ProblemSink, SourceLocation};

/// One suspended output frame, pushed while a capture buffer is active.
struct SinkFrame {
    buffer: String,
    at_line_start: bool,
}

/// Per-unit emission state.
///
/// The context owns a stack of sinks: the bottom entry is the unit's real
/// output buffer, everything above it is a capture buffer for stringify
/// sub-emission. The capture stack is always unwound before a sub-emission
/// returns, so a diagnostic recorded mid-capture never leaves the context
/// pointed at a stale buffer.
pub struct EmitContext<'a> {
    sink: String,
    captures: Vec<SinkFrame>,
    indent: usize,
    at_line_start: bool,
    temp_counter: u32,
    problems: &'a ProblemSink,
    /// Source file of the unit currently being emitted, for problem locations.
    pub source_file: String,
}

impl<'a> EmitContext<'a> {
    pub fn new(problems: &'a ProblemSink) -> Self {
        Self {
            sink: String::new(),
            captures: Vec::new(),
            indent: 0,
            at_line_start: true,
            temp_counter: 0,
            problems,
            source_file: String::new(),
        }
    }

    /// Reset per-unit state. Called between units; the capture stack must
    /// already be empty at that point.
    pub fn reset(&mut self, source_file: &str) {
        debug_assert!(self.captures.is_empty());
        self.sink.clear();
        self.captures.clear();
        self.indent = 0;
        self.at_line_start = true;
        self.temp_counter = 0;
        self.source_file = source_file.to_string();
    }

    /// Drain the unit's emitted text.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.sink)
    }

    // =========================================================================
    // Output helpers
    // =========================================================================

    /// Write text to the active sink, indenting first when at line start.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            self.at_line_start = false;
            let indent = self.indent;
            let out = self.out();
            for _ in 0..indent {
                out.push('\t');
            }
        }
        self.out().push_str(text);
    }

    /// Write a newline; the next write re-indents.
    pub fn write_line(&mut self) {
        self.out().push('\n');
        self.at_line_start = true;
    }

    pub fn write_space(&mut self) {
        self.write(" ");
    }

    pub fn increase_indent(&mut self) {
        self.indent += 1;
    }

    pub fn decrease_indent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    // =========================================================================
    // Capture stack (stringify sub-emission)
    // =========================================================================

    /// Redirect output into a fresh capture buffer. Re-entrant.
    pub fn push_capture(&mut self) {
        self.captures.push(SinkFrame {
            buffer: String::new(),
            at_line_start: self.at_line_start,
        });
        // Captured expressions start mid-line; never indent their first token.
        self.at_line_start = false;
    }

    /// Restore the previous sink and return the captured text.
    pub fn pop_capture(&mut self) -> String {
        match self.captures.pop() {
            Some(frame) => {
                self.at_line_start = frame.at_line_start;
                frame.buffer
            }
            None => String::new(),
        }
    }

    pub fn capture_depth(&self) -> usize {
        self.captures.len()
    }

    fn out(&mut self) -> &mut String {
        match self.captures.last_mut() {
            Some(frame) => &mut frame.buffer,
            None => &mut self.sink,
        }
    }

    // =========================================================================
    // Temp names
    // =========================================================================

    /// Next synthesized local name: `_a`, `_b`, ..., `_z`, `_0`, `_1`, ...
    pub fn next_temp_name(&mut self) -> String {
        let counter = self.temp_counter;
        self.temp_counter += 1;
        if counter < 26 {
            format!("_{}", (b'a' + counter as u8) as char)
        } else {
            format!("_{}", counter - 26)
        }
    }

    // =========================================================================
    // Problems
    // =========================================================================

    /// Record a construct with no clean target-language equivalent.
    /// Emission continues with best-effort output.
    pub fn translation_gap(&self, message: impl Into<String>) {
        self.problems.add(Problem::warning(message, self.location()));
    }

    /// Record an AST invariant the front-end should have guaranteed.
    /// The dependent output is omitted and emission continues.
    pub fn missing_child(&self, message: impl Into<String>) {
        self.problems.add(Problem::error(message, self.location()));
    }

    fn location(&self) -> SourceLocation {
        SourceLocation::new(self.source_file.clone(), 0, 0)
    }
}
