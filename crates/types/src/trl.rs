//! Technology Readiness Level token helpers.
//!
//! TRL values are authored by hand and arrive in many shapes: `"6"`,
//! `"5-6"`, `"4 (lab scale)"`, `"5-6 (Tokamaks); 2-3 (Stellarators)"`.
//! Two different readings are needed: a numeric level for duration
//! estimates and a table key for probability lookups.

/// Highest readiness level; a node at this level needs no further work.
pub const MAX_LEVEL: f64 = 9.0;

/// Leading numeric level of a TRL string.
///
/// Takes the text before the first `-`, then its first whitespace-separated
/// token, and parses it. `"5-6 (Tokamaks)"` gives `5.0`.
pub fn leading_level(raw: &str) -> Option<f64> {
    let before_range = raw.split('-').next().unwrap_or(raw);
    let token = before_range.split_whitespace().next()?;
    token.parse::<f64>().ok().filter(|level| level.is_finite())
}

/// Key used to look a TRL up in a probability table.
///
/// The trimmed value is cut at the first space, then at the first `;`.
/// `"5-6 (Tokamaks); 2-3"` gives `"5-6"`.
pub fn probability_key(raw: &str) -> &str {
    let mut key = raw.trim();
    if let Some((head, _)) = key.split_once(' ') {
        key = head;
    }
    if let Some((head, _)) = key.split_once(';') {
        key = head.trim();
    }
    key
}

/// Years of work implied by a readiness level at `years_per_level`.
pub fn years_to_maturity(level: f64, years_per_level: f64) -> f64 {
    (MAX_LEVEL - level) * years_per_level
}
