//! Metric parsing for free-text job fields.
//!
//! Job postings carry experience and salary as loose text ("1 to 9 Years",
//! "$56K-$128K", "$25/hr"). The chart layer needs plain numbers, so these
//! parsers reduce each field to a single representative value. They are total
//! over their input: malformed or absent text degrades to 0.0, never an error.

/// Hours per week assumed when annualizing an hourly rate.
/// Fixed-schedule simplification; there is no fallback for other schedules.
pub const HOURS_PER_WEEK: f64 = 40.0;
/// Weeks per year assumed when annualizing an hourly rate.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Parses a years-of-experience value out of free text.
///
/// One digit run yields that value ("3 Years" → 3); two or more yield the
/// midpoint of the first two ("1 to 9 Years" → 5). No digits yields 0.
pub fn parse_experience_years(text: Option<&str>) -> f64 {
    text.map(range_midpoint).unwrap_or(0.0)
}

/// Parses an annual salary out of free text.
///
/// Range midpoint semantics match [`parse_experience_years`]. If the text
/// mentions an hourly rate ("hour", "hr", case-insensitive), the midpoint is
/// annualized at [`HOURS_PER_WEEK`] × [`WEEKS_PER_YEAR`].
pub fn parse_annual_salary(text: Option<&str>) -> f64 {
    let Some(text) = text else { return 0.0 };
    let midpoint = range_midpoint(text);
    if is_hourly(text) {
        midpoint * HOURS_PER_WEEK * WEEKS_PER_YEAR
    } else {
        midpoint
    }
}

/// Midpoint of the first two digit runs in the text, or the single run, or 0.
fn range_midpoint(text: &str) -> f64 {
    let runs = digit_runs(text);
    match runs.len() {
        0 => 0.0,
        1 => runs[0],
        _ => (runs[0] + runs[1]) / 2.0,
    }
}

/// Extracts every maximal run of ASCII decimal digits as a number.
/// Runs too long to represent finitely are dropped rather than surfaced as
/// infinities, keeping the finite-output invariant.
fn digit_runs(text: &str) -> Vec<f64> {
    let mut runs = Vec::new();
    let mut current = String::new();

    let flush = |current: &mut String, runs: &mut Vec<f64>| {
        if current.is_empty() {
            return;
        }
        if let Ok(n) = current.parse::<f64>() {
            if n.is_finite() {
                runs.push(n);
            }
        }
        current.clear();
    };

    for ch in text.chars() {
        if ch.is_ascii_digit() {
            current.push(ch);
        } else {
            flush(&mut current, &mut runs);
        }
    }
    flush(&mut current, &mut runs);
    runs
}

fn is_hourly(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("hour") || lower.contains("hr")
}
