//! What the host hands the process at start
//!
//! - [`vectors`]: the argument and environment sequences
//! - [`addresses`]: the entry point and `main` addresses shown in the header
//!
//! Both are captured once, before anything is printed, and never change
//! afterwards.

pub mod addresses;
pub mod vectors;

pub use addresses::LoadAddresses;
pub use vectors::ProcessVectors;
