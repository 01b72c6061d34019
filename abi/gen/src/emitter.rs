//! Indentation-aware text accumulator for generated source.
//!
//! [`CodeEmitter`] writes brace-delimited, tab-indented text with CRLF line
//! terminators. Indentation is written eagerly: every newline is immediately
//! followed by the current indentation, so text appended afterwards is already
//! in place. Closing a block removes the single dangling tab that the newline
//! left behind, which puts the `}` at the parent's depth.
//!
//! ## Examples
//!
//! ```
//! use abi_gen::emitter::CodeEmitter;
//!
//! let mut w = CodeEmitter::new();
//! w.push_str("class Foo");
//! w.open_block();
//! w.push_str("x = 1;");
//! w.append_newline();
//! w.close_block();
//!
//! assert_eq!(w.as_str(), "class Foo {\r\n\tx = 1;\r\n}\r\n");
//! assert_eq!(w.depth(), 0);
//! ```

use std::fmt;

/// Line terminator used by all generated output.
pub const NEWLINE: &str = "\r\n";

/// One level of indentation.
pub const INDENT: char = '\t';

/// A mutable text buffer that tracks brace depth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeEmitter {
    output: String,
    depth: usize,
}

impl CodeEmitter {
    /// Creates an empty emitter at depth zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends raw text.
    pub fn push_str(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Writes one tab per current indent level.
    pub fn append_indent(&mut self) {
        for _ in 0..self.depth {
            self.output.push(INDENT);
        }
    }

    /// Writes a line terminator followed by the current indentation.
    pub fn append_newline(&mut self) {
        self.output.push_str(NEWLINE);
        self.append_indent();
    }

    /// Writes ` {`, increases the depth, and starts a new line.
    pub fn open_block(&mut self) {
        self.output.push_str(" {");
        self.depth += 1;
        self.append_newline();
    }

    /// Writes `}` at the parent depth, decreases the depth, and starts a new line.
    ///
    /// Must be paired with an earlier [`open_block`](Self::open_block).
    pub fn close_block(&mut self) {
        debug_assert!(self.depth > 0, "close_block without matching open_block");

        if self.output.ends_with(INDENT) {
            self.output.pop();
        }

        self.output.push('}');
        self.depth = self.depth.saturating_sub(1);
        self.append_newline();
    }

    /// Current block depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Consumes the emitter and returns its text.
    pub fn into_string(self) -> String {
        self.output
    }
}

impl fmt::Write for CodeEmitter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}
