//! Output Emitter
//!
//! Abstraction over where rendered statements go: an in-memory string for
//! tests and stdout, or a buffered file.

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Indentation of statements inside the generated init functions.
const STATEMENT_INDENT: usize = 1;

/// Trait for emitting generated text.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit indentation (4 spaces per level).
    fn emit_indent(&mut self, level: usize);
}

/// Write each statement on its own indented line.
///
/// Accepts [`InitProc`](crate::InitProc) values or statements already
/// rendered to strings.
pub fn emit_init_procs<E, I>(emitter: &mut E, procs: I)
where
    E: Emitter + ?Sized,
    I: IntoIterator,
    I::Item: Display,
{
    for init_proc in procs {
        emitter.emit_indent(STATEMENT_INDENT);
        emitter.emit(&init_proc.to_string());
        emitter.emit_newline();
    }
}

/// String-based emitter for in-memory output.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the emitted output.
    pub fn output(self) -> String {
        self.buffer
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, level: usize) {
        for _ in 0..level * 4 {
            self.buffer.push(' ');
        }
    }
}

/// File-based emitter with buffered writes.
///
/// The first write error is kept and returned from [`FileEmitter::finish`];
/// later writes are skipped.
pub struct FileEmitter {
    writer: BufWriter<File>,
    error: Option<io::Error>,
}

impl FileEmitter {
    /// Create (or truncate) the file at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            error: None,
        })
    }

    /// Flush buffered output and report the first error seen.
    pub fn finish(mut self) -> io::Result<()> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()
    }

    fn write(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.writer.write_all(bytes) {
            self.error = Some(err);
        }
    }
}

impl Emitter for FileEmitter {
    fn emit(&mut self, text: &str) {
        self.write(text.as_bytes());
    }

    fn emit_newline(&mut self) {
        self.write(b"\n");
    }

    fn emit_indent(&mut self, level: usize) {
        for _ in 0..level {
            self.write(b"    ");
        }
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests use unwrap for concise assertions"
)]
