//! Keyword Differ — set-level overlap between a resume and a job description.

use std::collections::BTreeSet;

use crate::analysis::normalize::tokens;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordDiff {
    /// Job-description tokens also present in the resume.
    pub common: BTreeSet<String>,
    /// Job-description tokens absent from the resume.
    pub missing: BTreeSet<String>,
}

/// Unique tokens of a normalized document.
pub fn token_set(normalized: &str) -> BTreeSet<String> {
    tokens(normalized).map(str::to_string).collect()
}

pub fn diff(normalized_resume: &str, normalized_job: &str) -> KeywordDiff {
    let resume = token_set(normalized_resume);
    let job = token_set(normalized_job);

    let (common, missing): (BTreeSet<String>, BTreeSet<String>) =
        job.into_iter().partition(|term| resume.contains(term));

    KeywordDiff { common, missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_common_and_missing() {
        let d = diff("python developer sql", "python developer java sql aws");
        assert_eq!(d.common, set(&["python", "developer", "sql"]));
        assert_eq!(d.missing, set(&["java", "aws"]));
    }

    #[test]
    fn test_duplicates_collapse() {
        let d = diff("rust rust", "rust rust go go");
        assert_eq!(d.common, set(&["rust"]));
        assert_eq!(d.missing, set(&["go"]));
    }

    #[test]
    fn test_resume_only_terms_are_ignored() {
        let d = diff("rust haskell ocaml", "rust");
        assert_eq!(d.common, set(&["rust"]));
        assert!(d.missing.is_empty());
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let d = diff("", "kafka flink");
        assert!(d.common.is_empty());
        assert_eq!(d.missing, set(&["kafka", "flink"]));
    }

    #[test]
    fn test_both_empty() {
        let d = diff("", " ");
        assert!(d.common.is_empty());
        assert!(d.missing.is_empty());
    }

    #[test]
    fn test_partition_covers_job_tokens() {
        let resume = "go rust terraform";
        let job = "rust aws terraform docker";
        let d = diff(resume, job);
        let resume_set = token_set(resume);

        let union: BTreeSet<String> = d.common.union(&d.missing).cloned().collect();
        assert_eq!(union, token_set(job));
        assert!(d.common.is_disjoint(&d.missing));
        assert!(d.missing.is_disjoint(&resume_set));
        assert!(d.common.is_subset(&resume_set));
    }
}
