use std::num::ParseIntError;

/// Threshold used when no multiplier is involved.
pub const FIXED_THRESHOLD: i128 = 100_000;

/// Base threshold scaled by the multiplier.
pub const SCALED_THRESHOLD_BASE: i128 = 100;

pub const DEFAULT_MULTIPLIER: i64 = 1;

/// Pause between generations unless overridden.
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

pub const INTERVAL_ENV: &str = "GENERATIONS_INTERVAL_MS";

/// Parses the multiplier argument. Only an empty value counts as not given; anything else,
/// blanks included, must be an integer once surrounding whitespace is trimmed.
pub fn parse_multiplier(arg: &str) -> Result<i64, ParseIntError> {
    if arg.is_empty() {
        return Ok(DEFAULT_MULTIPLIER);
    }
    arg.trim().parse()
}

/// Line printed for every generation.
pub fn generation_line(babies: i128) -> String {
    format!("This generation has {} babies", babies)
}
