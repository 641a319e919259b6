//! Analysis entry point: resume text + job description → similarity and keyword diagnostics.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::keywords::{diff, KeywordDiff};
use crate::analysis::normalize::normalize;
use crate::analysis::similarity::score;
use crate::analysis::vectorizer::vectorize;

/// Outcome of a single resume / job-description comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Cosine similarity of term frequencies, 0 – 100.
    pub similarity_percentage: f64,
    pub common_keywords: BTreeSet<String>,
    pub missing_keywords: BTreeSet<String>,
}

/// Compares raw resume text against a raw job description.
///
/// Total over all inputs: empty or punctuation-only text yields 0% and empty keyword sets
/// rather than an error. Both inputs are normalized once and the normalized forms feed
/// the similarity score and the keyword diff alike.
pub fn analyze(resume_text: &str, job_description: &str) -> AnalysisResult {
    let resume = normalize(resume_text);
    let job = normalize(job_description);

    let vectors = vectorize(&resume, &job);
    if vectors.vocabulary.is_empty() {
        debug!("Neither document contains a word token; similarity is 0");
    }
    let similarity_percentage = score(&vectors.vec_a, &vectors.vec_b);

    let KeywordDiff { common, missing } = diff(&resume, &job);

    debug!(
        "Analysis: vocabulary={} similarity={:.2} common={} missing={}",
        vectors.vocabulary.len(),
        similarity_percentage,
        common.len(),
        missing.len()
    );

    AnalysisResult {
        similarity_percentage,
        common_keywords: common,
        missing_keywords: missing,
    }
}
