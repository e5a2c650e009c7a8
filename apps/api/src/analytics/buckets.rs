//! Experience-bucket aggregation for the salary progression chart.
//!
//! Jobs are grouped by rounded years of experience into a fixed range of
//! integer buckets (1..=6 by default). Each bucket averages the parsed
//! salaries of its jobs; the selected job is emitted as a sparse overlay so
//! the chart can draw it as an isolated point on top of the trend line.

use serde::Serialize;

use crate::analytics::metrics::{parse_annual_salary, parse_experience_years};
use crate::models::job::JobRecord;

/// Inclusive range of integer experience buckets. Passed explicitly so the
/// aggregation carries no ambient globals.
#[derive(Debug, Clone)]
pub struct BucketConfig {
    pub min: u32,
    pub max: u32,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self { min: 1, max: 6 }
    }
}

/// Chart-ready output of one aggregation pass.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BucketSeries {
    /// Bucket keys, in ascending order.
    pub buckets: Vec<u32>,
    /// Per-bucket mean salary; 0.0 for empty buckets so the series stays
    /// numeric for charting.
    pub averages: Vec<f64>,
    /// Sparse series holding the selected job's salary at its own bucket.
    /// At most one entry is `Some`; the rest serialize as JSON nulls.
    pub overlay: Vec<Option<f64>>,
}

/// Aggregates `jobs` into experience buckets and overlays `target`.
///
/// A job whose rounded experience falls outside the bucket range contributes
/// to nothing; a target outside the range yields an all-null overlay.
pub fn aggregate_by_experience_bucket(
    jobs: &[JobRecord],
    target: &JobRecord,
    config: &BucketConfig,
) -> BucketSeries {
    if config.max < config.min {
        return BucketSeries {
            buckets: Vec::new(),
            averages: Vec::new(),
            overlay: Vec::new(),
        };
    }
    let span = (config.max - config.min + 1) as usize;
    let mut sums = vec![0.0_f64; span];
    let mut counts = vec![0_u32; span];

    for job in jobs {
        let years = parse_experience_years(job.experience.as_deref());
        let Some(slot) = bucket_slot(years, config) else {
            continue;
        };
        sums[slot] += parse_annual_salary(job.salary_range.as_deref());
        counts[slot] += 1;
    }

    let averages = sums
        .iter()
        .zip(&counts)
        .map(|(sum, &count)| if count > 0 { sum / count as f64 } else { 0.0 })
        .collect();

    let mut overlay = vec![None; span];
    let target_years = parse_experience_years(target.experience.as_deref());
    if let Some(slot) = bucket_slot(target_years, config) {
        overlay[slot] = Some(parse_annual_salary(target.salary_range.as_deref()));
    }

    BucketSeries {
        buckets: (config.min..=config.max).collect(),
        averages,
        overlay,
    }
}

/// Index of the bucket holding `years` rounded to the nearest integer, or
/// `None` when the rounded value falls outside the configured range.
fn bucket_slot(years: f64, config: &BucketConfig) -> Option<usize> {
    let rounded = years.round();
    if rounded < config.min as f64 || rounded > config.max as f64 {
        return None;
    }
    Some(rounded as usize - config.min as usize)
}
