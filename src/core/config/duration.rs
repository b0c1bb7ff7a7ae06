// SPDX-License-Identifier: MIT OR Apache-2.0

use std::time::Duration;

/// Parse a duration string like "50ms", "2s" or "1m"
///
/// The amount is an unsigned integer; a missing unit means milliseconds.
/// Whitespace between amount and unit is allowed. Zero parses here and is
/// rejected by the window configuration.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let text = s.trim();
    let unit_start = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let (amount, unit) = text.split_at(unit_start);

    if amount.is_empty() {
        return Err(format!("duration '{}' does not start with an amount", text));
    }
    let amount: u64 = amount
        .parse()
        .map_err(|_| format!("duration '{}' is out of range", text))?;

    let duration = match unit.trim_start() {
        "" | "ms" => Some(Duration::from_millis(amount)),
        "s" => Some(Duration::from_secs(amount)),
        "m" => amount.checked_mul(60).map(Duration::from_secs),
        other => {
            return Err(format!(
                "duration '{}' has unknown unit '{}' (use ms, s or m)",
                text, other
            ))
        }
    };
    duration.ok_or_else(|| format!("duration '{}' is out of range", text))
}
