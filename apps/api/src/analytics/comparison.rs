//! Collection-vs-selected averages for the comparison bar chart.

use serde::Serialize;

use crate::analytics::metrics::{parse_annual_salary, parse_experience_years};
use crate::models::job::JobRecord;

/// Mean experience and salary over the whole collection next to the selected
/// job's own parsed values.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSeries {
    pub avg_experience: f64,
    pub avg_salary: f64,
    pub job_experience: f64,
    pub job_salary: f64,
}

/// Averages parsed metrics across `jobs` and pairs them with `target`'s own.
/// Unparsable fields count as zero (they still divide into the mean); an
/// empty collection yields zero averages rather than NaN.
pub fn compare_to_collection(jobs: &[JobRecord], target: &JobRecord) -> ComparisonSeries {
    let mut experience_sum = 0.0_f64;
    let mut salary_sum = 0.0_f64;
    for job in jobs {
        experience_sum += parse_experience_years(job.experience.as_deref());
        salary_sum += parse_annual_salary(job.salary_range.as_deref());
    }

    let (avg_experience, avg_salary) = if jobs.is_empty() {
        (0.0, 0.0)
    } else {
        let count = jobs.len() as f64;
        (experience_sum / count, salary_sum / count)
    };

    ComparisonSeries {
        avg_experience,
        avg_salary,
        job_experience: parse_experience_years(target.experience.as_deref()),
        job_salary: parse_annual_salary(target.salary_range.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: i64, experience: &str, salary: &str) -> JobRecord {
        serde_json::from_value(serde_json::json!({
            "jobId": id,
            "experience": experience,
            "salaryRange": salary,
        }))
        .unwrap()
    }

    #[test]
    fn test_averages_over_collection() {
        let jobs = vec![job(1, "2 Years", "$60000"), job(2, "4 Years", "$100000")];
        let series = compare_to_collection(&jobs, &jobs[0]);
        assert_eq!(series.avg_experience, 3.0);
        assert_eq!(series.avg_salary, 80_000.0);
        assert_eq!(series.job_experience, 2.0);
        assert_eq!(series.job_salary, 60_000.0);
    }

    #[test]
    fn test_empty_collection_yields_zero_not_nan() {
        let target = job(1, "3 Years", "$90000");
        let series = compare_to_collection(&[], &target);
        assert_eq!(series.avg_experience, 0.0);
        assert_eq!(series.avg_salary, 0.0);
        assert!(series.avg_salary.is_finite());
    }

    #[test]
    fn test_unparsable_fields_count_as_zero_in_mean() {
        let jobs = vec![job(1, "4 Years", "$80000"), job(2, "unknown", "DOE")];
        let series = compare_to_collection(&jobs, &jobs[0]);
        assert_eq!(series.avg_experience, 2.0);
        assert_eq!(series.avg_salary, 40_000.0);
    }

    #[test]
    fn test_results_are_finite() {
        let jobs = vec![job(1, "", ""), job(2, "", "")];
        let series = compare_to_collection(&jobs, &jobs[0]);
        for value in [
            series.avg_experience,
            series.avg_salary,
            series.job_experience,
            series.job_salary,
        ] {
            assert!(value.is_finite());
        }
    }
}
