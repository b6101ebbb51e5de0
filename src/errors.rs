//! Error types for the diagnostic printer
//!
//! The printer has a single failure mode: standard output refusing a write.
//! [`PrintError`] wraps the underlying [`io::Error`] together with the
//! [`Step`] that was being printed, so the message on stderr says how far the
//! dump got before the stream broke.

use std::fmt;
use std::io;

/// The stage of the dump a write belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    EntryAddress,
    MainAddress,
    Start,
    Alphabet,
    Arguments,
    Environment,
    Jumped,
    Exiting,
    Flush,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::EntryAddress => "entry point address",
            Step::MainAddress => "main address",
            Step::Start => "start line",
            Step::Alphabet => "character range",
            Step::Arguments => "argument vector",
            Step::Environment => "environment vector",
            Step::Jumped => "jumped line",
            Step::Exiting => "exiting line",
            Step::Flush => "buffered output",
        };
        f.write_str(name)
    }
}

/// Output errors raised while dumping
#[derive(Debug)]
pub enum PrintError {
    /// Writing to the output stream failed
    Write { step: Step, source: io::Error },
}

impl PrintError {
    pub fn step(&self) -> Step {
        match self {
            PrintError::Write { step, .. } => *step,
        }
    }
}

impl fmt::Display for PrintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrintError::Write { step, source } => {
                write!(f, "failed to write {}: {}", step, source)
            }
        }
    }
}

impl std::error::Error for PrintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PrintError::Write { source, .. } => Some(source),
        }
    }
}

/// Attach a [`Step`] to an I/O result
pub(crate) trait WriteContext<T> {
    fn during(self, step: Step) -> Result<T, PrintError>;
}

impl<T> WriteContext<T> for io::Result<T> {
    fn during(self, step: Step) -> Result<T, PrintError> {
        self.map_err(|source| PrintError::Write { step, source })
    }
}
