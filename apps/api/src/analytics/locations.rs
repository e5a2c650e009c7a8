//! Per-state salary averages for the choropleth map.
//!
//! Locations arrive as loose strings ("Canton, OH, USA", "Austin, TX"). Jobs
//! are merged by their two-letter state code, salaries are averaged per
//! state, and each state gets a fill color from the salary scale.

use std::collections::HashMap;

use serde::Serialize;

use crate::analytics::color::{salary_to_color, ColorScaleConfig, Rgb};
use crate::analytics::metrics::parse_annual_salary;
use crate::models::job::JobRecord;

/// One choropleth entry: a state, its mean salary, and its fill color.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StateSalary {
    pub state: String,
    pub average_salary: f64,
    pub color: Rgb,
    /// CSS form of `color`, ready to use as an SVG fill.
    pub fill: String,
}

/// Groups jobs by state code, averages their parsed salaries, and attaches a
/// scale color per state. Jobs without a recognizable location are skipped.
/// States appear in first-encounter order.
pub fn salary_by_state(jobs: &[JobRecord], colors: &ColorScaleConfig) -> Vec<StateSalary> {
    let mut sums: HashMap<String, (f64, u32)> = HashMap::new();
    let mut encounter_order: Vec<String> = Vec::new();

    for job in jobs {
        let Some(location) = job.location.as_deref() else {
            continue;
        };
        let Some(state) = state_code(location) else {
            continue;
        };
        let slot = sums.entry(state.clone()).or_insert_with(|| {
            encounter_order.push(state.clone());
            (0.0, 0)
        });
        slot.0 += parse_annual_salary(job.salary_range.as_deref());
        slot.1 += 1;
    }

    encounter_order
        .into_iter()
        .map(|state| {
            let (sum, count) = sums[&state];
            let average_salary = sum / count as f64; // count ≥ 1 by construction
            let color = salary_to_color(average_salary, colors);
            StateSalary {
                state,
                average_salary,
                color,
                fill: color.to_css(),
            }
        })
        .collect()
}

/// Extracts a two-letter state code from a free-text location.
///
/// Prefers a comma-separated two-letter segment scanned right to left (so
/// "Canton, OH, USA" resolves to OH, not US); falls back to the last two
/// characters of the string, matching the original dashboard heuristic.
fn state_code(location: &str) -> Option<String> {
    let trimmed = location.trim();
    if trimmed.is_empty() {
        return None;
    }

    for part in trimmed.rsplit(',') {
        let part = part.trim();
        if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) && part != "US" {
            return Some(part.to_ascii_uppercase());
        }
    }

    let chars: Vec<char> = trimmed.chars().collect();
    let suffix: String = chars[chars.len().saturating_sub(2)..].iter().collect();
    Some(suffix.to_ascii_uppercase())
}
