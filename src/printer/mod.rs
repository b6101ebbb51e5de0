//! The diagnostic dump
//!
//! [`DiagnosticPrinter`] writes the fixed report a loader payload produces
//! once it gains control:
//!
//! ```text
//! test.c:17: -> _start at 0x0000000000401020
//! test.c:18: -> main   at 0x0000000000401136
//! test.c:19: -> Starting Test
//! ABCDEFGHIJ
//! <one line per argv entry>
//! <one line per envp entry>
//! test.c:29: -> Jumped
//! test.c:30: -> Exiting
//! ```
//!
//! The printer does not buffer. Callers writing to stdout should wrap it in a
//! [`std::io::BufWriter`] and rely on [`DiagnosticPrinter::run`] to flush.

use std::ffi::OsStr;
use std::io::{self, Write};

use crate::constants::{
    ALPHABET_END, ALPHABET_START, ENTRY_LINE, EXITING_LINE, JUMPED_LINE, LINE_TAG, MAIN_LINE,
    START_LINE,
};
use crate::errors::{PrintError, Step, WriteContext};
use crate::process::{LoadAddresses, ProcessVectors};

/// Writes the dump to any [`Write`] sink
#[derive(Debug)]
pub struct DiagnosticPrinter<W: Write> {
    out: W,
}

impl<W: Write> DiagnosticPrinter<W> {
    pub fn new(out: W) -> Self {
        DiagnosticPrinter { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the whole report and flush the sink
    pub fn run(
        &mut self,
        addresses: &LoadAddresses,
        vectors: &ProcessVectors,
    ) -> Result<(), PrintError> {
        self.address_line(ENTRY_LINE, "_start", addresses.entry_or_zero())
            .during(Step::EntryAddress)?;
        self.address_line(MAIN_LINE, "main  ", addresses.main)
            .during(Step::MainAddress)?;
        self.status_line(START_LINE, "Starting Test").during(Step::Start)?;

        self.alphabet().during(Step::Alphabet)?;

        self.print_sequence(vectors.args()).during(Step::Arguments)?;
        self.print_sequence(vectors.env()).during(Step::Environment)?;

        self.status_line(JUMPED_LINE, "Jumped").during(Step::Jumped)?;
        self.status_line(EXITING_LINE, "Exiting").during(Step::Exiting)?;

        self.out.flush().during(Step::Flush)
    }

    /// Write each entry on its own line, in order
    ///
    /// An empty sequence writes nothing.
    pub fn print_sequence<S: AsRef<OsStr>>(&mut self, seq: &[S]) -> io::Result<()> {
        for entry in seq {
            write_os_str(&mut self.out, entry.as_ref())?;
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }

    fn alphabet(&mut self) -> io::Result<()> {
        let mut line: Vec<u8> = (ALPHABET_START..ALPHABET_END).collect();
        line.push(b'\n');
        self.out.write_all(&line)
    }

    // Each status line goes out in a single write
    fn status_line(&mut self, line: u32, message: &str) -> io::Result<()> {
        let text = format!("{}-> {}\n", prefix(line), message);
        self.out.write_all(text.as_bytes())
    }

    fn address_line(&mut self, line: u32, symbol: &str, addr: usize) -> io::Result<()> {
        self.status_line(line, &format!("{} at 0x{:016x}", symbol, addr))
    }
}

/// `test.c:NN: ` with the number right-aligned in two columns
pub fn prefix(line: u32) -> String {
    format!("{}:{:2}: ", LINE_TAG, line)
}

#[cfg(unix)]
fn write_os_str<W: Write>(out: &mut W, s: &OsStr) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(s.as_bytes())
}

#[cfg(not(unix))]
fn write_os_str<W: Write>(out: &mut W, s: &OsStr) -> io::Result<()> {
    out.write_all(s.to_string_lossy().as_bytes())
}
