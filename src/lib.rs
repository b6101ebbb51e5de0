//! # Introduction
//!
//! argdump is the payload a loader or packer runs to prove it handed control
//! over correctly.  Once started it reports where it was loaded, echoes a
//! fixed marker line, and dumps its argument vector and environment block
//! exactly as it received them.
//!
//! ## Pipeline
//!
//! ```text
//! argv/envp → ProcessVectors ┐
//! _start/main → LoadAddresses ┴→ DiagnosticPrinter → stdout
//! ```
//!
//! 1. [`process`] — captures `argv`, `envp` and the load addresses.
//! 2. [`printer`] — writes the fixed-format report to any [`std::io::Write`].
//! 3. [`terminal`] — in-memory sinks for running the printer without stdout.
//! 4. [`logging`] — stderr backend for the [`log`] facade, configured through
//!    `ARGDUMP_LOG`.
//! 5. [`errors`] — [`errors::PrintError`], the one failure the dump can hit.
//!
//! ## Output
//!
//! Two address lines, a start line, `ABCDEFGHIJ`, one line per argument, one
//! line per environment entry, then `Jumped` and `Exiting`.  No flags are
//! parsed and the exit status is always 0.

pub mod constants;
pub mod errors;
pub mod logging;
pub mod printer;
pub mod process;
pub mod terminal;
