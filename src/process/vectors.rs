//! Argument and environment sequences
//!
//! The loader passes `argv` and `envp` as null-terminated arrays of C
//! strings. Both are copied front to back up to their terminating null into
//! plain vectors whose end plays the sentinel's role. Entries stay
//! [`OsString`]s so bytes that are not valid UTF-8 survive the round trip to
//! stdout.
//!
//! On Linux `envp` is read straight from the C runtime's `environ` block, so
//! entries without a `=` are kept. [`std::env::vars_os`] skips those and is
//! only used where `environ` is not available.

use std::env;
use std::ffi::{OsStr, OsString};

/// The argument vector and environment block of a process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessVectors {
    args: Vec<OsString>,
    env: Vec<OsString>,
}

impl ProcessVectors {
    pub fn new<A, E>(args: A, env: E) -> Self
    where
        A: IntoIterator,
        A::Item: Into<OsString>,
        E: IntoIterator,
        E::Item: Into<OsString>,
    {
        ProcessVectors {
            args: args.into_iter().map(Into::into).collect(),
            env: env.into_iter().map(Into::into).collect(),
        }
    }

    /// Snapshot the running process' `argv` and `envp`
    pub fn capture() -> Self {
        ProcessVectors::new(env::args_os(), environment())
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Environment entries as the loader passed them, normally `KEY=VALUE`
    pub fn env(&self) -> &[OsString] {
        &self.env
    }
}

#[cfg(target_os = "linux")]
fn environment() -> Vec<OsString> {
    use std::ffi::c_char;

    extern "C" {
        static environ: *const *const c_char;
    }

    // Nothing in this process has touched the environment yet
    unsafe { walk_block(environ) }
}

#[cfg(not(target_os = "linux"))]
fn environment() -> Vec<OsString> {
    env::vars_os()
        .map(|(key, value)| env_entry(&key, &value))
        .collect()
}

/// Copy a null-terminated array of C strings, stopping at the first null
///
/// # Safety
///
/// `block` must be null or point to an array of valid C string pointers
/// ending in a null pointer.
#[cfg(all(unix, any(test, target_os = "linux")))]
unsafe fn walk_block(block: *const *const std::ffi::c_char) -> Vec<OsString> {
    use std::ffi::CStr;
    use std::os::unix::ffi::OsStrExt;

    let mut entries = Vec::new();
    if block.is_null() {
        return entries;
    }

    let mut cursor = block;
    while !(*cursor).is_null() {
        let bytes = CStr::from_ptr(*cursor).to_bytes();
        entries.push(OsStr::from_bytes(bytes).to_os_string());
        cursor = cursor.add(1);
    }
    entries
}

/// Rebuild the `KEY=VALUE` string the loader placed in `envp`
#[cfg(any(test, not(target_os = "linux")))]
fn env_entry(key: &OsStr, value: &OsStr) -> OsString {
    let mut entry = OsString::with_capacity(key.len() + value.len() + 1);
    entry.push(key);
    entry.push("=");
    entry.push(value);
    entry
}
