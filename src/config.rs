//! Library configuration and decoding parameters.

/// Digit alphabet for base-N share values, lowest digit first.
pub const DIGIT_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Smallest radix accepted by the base decoder.
pub const MIN_BASE: u32 = 2;

/// Largest radix accepted by the base decoder (one digit per alphabet symbol).
pub const MAX_BASE: u32 = DIGIT_ALPHABET.len() as u32;

/// Name of the share record field carrying `n` and `k`.
pub const THRESHOLD_KEYS_FIELD: &str = "keys";

/// Input files processed by the driver when none are given on the command line.
pub const DEFAULT_INPUT_FILES: [&str; 2] = ["input1.json", "input2.json"];
