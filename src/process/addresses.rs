//! Load-time addresses printed in the dump header
//!
//! The entry point is the linker-provided `_start` symbol from the C runtime
//! startup object. It only exists on Linux targets linked against glibc or
//! musl; everywhere else [`LoadAddresses::entry`] is `None` and the header
//! shows a zero address instead.

/// Entry point and `main` addresses of the running image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadAddresses {
    pub entry: Option<usize>,
    pub main: usize,
}

impl LoadAddresses {
    /// Resolve the entry point; `main` is supplied by the binary as `main as usize`
    pub fn probe(main: usize) -> Self {
        LoadAddresses {
            entry: entry_point(),
            main,
        }
    }

    /// Entry address for display, zero when it could not be resolved
    pub fn entry_or_zero(&self) -> usize {
        self.entry.unwrap_or(0)
    }
}

#[cfg(all(target_os = "linux", any(target_env = "gnu", target_env = "musl")))]
fn entry_point() -> Option<usize> {
    extern "C" {
        static _start: u8;
    }

    // Only the address is taken; the symbol is code and is never read
    Some(std::ptr::addr_of!(_start) as usize)
}

#[cfg(not(all(target_os = "linux", any(target_env = "gnu", target_env = "musl"))))]
fn entry_point() -> Option<usize> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_keeps_main() {
        let addrs = LoadAddresses::probe(0x4010);
        assert_eq!(addrs.main, 0x4010);
    }

    #[test]
    fn test_entry_or_zero() {
        let missing = LoadAddresses {
            entry: None,
            main: 1,
        };
        assert_eq!(missing.entry_or_zero(), 0);

        let present = LoadAddresses {
            entry: Some(0x1040),
            main: 1,
        };
        assert_eq!(present.entry_or_zero(), 0x1040);
    }

    #[cfg(all(target_os = "linux", any(target_env = "gnu", target_env = "musl")))]
    #[test]
    fn test_entry_point_resolves_on_linux() {
        let entry = entry_point();
        assert!(matches!(entry, Some(addr) if addr != 0));
    }
}
