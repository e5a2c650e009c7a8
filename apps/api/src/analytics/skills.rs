//! Skill frequency counting for the skill grid widget.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::models::job::JobRecord;

/// Skill tallies across one job collection.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillFrequency {
    /// Occurrence count per distinct skill (case-sensitive keys).
    pub counts: HashMap<String, u32>,
    /// Highest count observed; 0 when no skills exist. Callers use this to
    /// normalize cell intensity.
    pub max_count: u32,
    /// Distinct skills, descending by count. Ties keep first-encounter order
    /// (stable sort), so rankings are reproducible.
    pub ranked: Vec<String>,
    /// Skills present on the selected job, for highlighting.
    pub selected: HashSet<String>,
}

/// Tallies skill occurrences across `jobs` and marks the skills of `target`.
/// Jobs without skills contribute nothing.
pub fn count_skill_frequency(jobs: &[JobRecord], target: &JobRecord) -> SkillFrequency {
    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut encounter_order: Vec<String> = Vec::new();

    for job in jobs {
        for skill in &job.skills {
            match counts.entry(skill.clone()) {
                Entry::Occupied(mut slot) => *slot.get_mut() += 1,
                Entry::Vacant(slot) => {
                    slot.insert(1);
                    encounter_order.push(skill.clone());
                }
            }
        }
    }

    let mut ranked = encounter_order;
    // Vec::sort_by is stable, so equal counts preserve encounter order.
    ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));

    let max_count = counts.values().copied().max().unwrap_or(0);
    let selected = target.skills.iter().cloned().collect();

    SkillFrequency {
        counts,
        max_count,
        ranked,
        selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: i64, skills: &[&str]) -> JobRecord {
        serde_json::from_value(serde_json::json!({
            "jobId": id,
            "skills": skills,
        }))
        .unwrap()
    }

    #[test]
    fn test_counts_occurrences_across_jobs() {
        let jobs = vec![
            job(1, &["Python", "SQL"]),
            job(2, &["Python", "Docker"]),
            job(3, &["Python"]),
        ];
        let freq = count_skill_frequency(&jobs, &jobs[0]);
        assert_eq!(freq.counts["Python"], 3);
        assert_eq!(freq.counts["SQL"], 1);
        assert_eq!(freq.counts["Docker"], 1);
        assert_eq!(freq.max_count, 3);
    }

    #[test]
    fn test_ranking_is_descending_by_count() {
        let jobs = vec![
            job(1, &["Rust", "Go"]),
            job(2, &["Go", "Rust"]),
            job(3, &["Go"]),
        ];
        let freq = count_skill_frequency(&jobs, &jobs[0]);
        assert_eq!(freq.ranked, vec!["Go", "Rust"]);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let jobs = vec![job(1, &["Zig", "Ada", "C"]), job(2, &["Ada", "Zig", "C"])];
        let freq = count_skill_frequency(&jobs, &jobs[0]);
        // All counts equal 2; Zig was encountered before Ada before C.
        assert_eq!(freq.ranked, vec!["Zig", "Ada", "C"]);
    }

    #[test]
    fn test_skill_keys_are_case_sensitive() {
        let jobs = vec![job(1, &["python"]), job(2, &["Python"])];
        let freq = count_skill_frequency(&jobs, &jobs[0]);
        assert_eq!(freq.counts.len(), 2);
        assert_eq!(freq.max_count, 1);
    }

    #[test]
    fn test_selected_is_set_membership() {
        let jobs = vec![job(1, &["Python", "SQL", "Python"]), job(2, &["Docker"])];
        let freq = count_skill_frequency(&jobs, &jobs[0]);
        assert!(freq.selected.contains("Python"));
        assert!(freq.selected.contains("SQL"));
        assert!(!freq.selected.contains("Docker"));
        assert_eq!(freq.selected.len(), 2);
    }

    #[test]
    fn test_empty_collection_degrades_cleanly() {
        let target = job(1, &[]);
        let freq = count_skill_frequency(&[], &target);
        assert!(freq.counts.is_empty());
        assert!(freq.ranked.is_empty());
        assert!(freq.selected.is_empty());
        assert_eq!(freq.max_count, 0);
    }

    #[test]
    fn test_jobs_without_skills_contribute_nothing() {
        let jobs = vec![job(1, &[]), job(2, &["SQL"])];
        let freq = count_skill_frequency(&jobs, &jobs[1]);
        assert_eq!(freq.counts.len(), 1);
        assert_eq!(freq.ranked, vec!["SQL"]);
    }

    #[test]
    fn test_counting_is_idempotent() {
        let jobs = vec![job(1, &["A", "B"]), job(2, &["B", "C"])];
        let first = count_skill_frequency(&jobs, &jobs[0]);
        let second = count_skill_frequency(&jobs, &jobs[0]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_duplicate_skill_within_one_job_counts_each_occurrence() {
        let jobs = vec![job(1, &["SQL", "SQL"])];
        let freq = count_skill_frequency(&jobs, &jobs[0]);
        assert_eq!(freq.counts["SQL"], 2);
    }
}
