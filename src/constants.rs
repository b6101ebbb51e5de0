// Constants for the diagnostic printer

/// Tag written before every status line
pub const LINE_TAG: &str = "test.c";

/// Placeholder line numbers shown after [`LINE_TAG`]
/// These match the lines of the payload source the output format was taken from
pub const ENTRY_LINE: u32 = 17;
pub const MAIN_LINE: u32 = 18;
pub const START_LINE: u32 = 19;
pub const JUMPED_LINE: u32 = 29;
pub const EXITING_LINE: u32 = 30;

/// Character range echoed after the start line: 'A' (65) up to but excluding 'K' (75)
pub const ALPHABET_START: u8 = b'A';
pub const ALPHABET_END: u8 = b'K';

/// Environment variable holding the stderr log level
pub const LOG_ENV_VAR: &str = "ARGDUMP_LOG";
