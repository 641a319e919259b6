//! Presentation rules for an `AnalysisResult`: alignment band, user-facing message,
//! two-decimal percentage, and a plain-text rendering.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::AnalysisResult;

const MODERATE_THRESHOLD: f64 = 50.0;
const STRONG_THRESHOLD: f64 = 80.0;

/// How well a resume lines up with a job description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// similarity < 50
    Weak,
    /// 50 ≤ similarity < 80
    Moderate,
    /// similarity ≥ 80
    Strong,
}

impl Alignment {
    pub fn from_similarity(similarity_percentage: f64) -> Self {
        if similarity_percentage < MODERATE_THRESHOLD {
            Alignment::Weak
        } else if similarity_percentage < STRONG_THRESHOLD {
            Alignment::Moderate
        } else {
            Alignment::Strong
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Alignment::Weak => {
                "Your resume may not be well aligned with the job description. \
                 Consider updating it to include more relevant keywords."
            }
            Alignment::Moderate => {
                "Your resume has a moderate alignment with the job description. \
                 Consider optimizing it further to improve the match."
            }
            Alignment::Strong => {
                "Your resume is well aligned with the job description. Congratulations!"
            }
        }
    }
}

/// An `AnalysisResult` decorated for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub result: AnalysisResult,
    pub alignment: Alignment,
    pub message: String,
    /// e.g. "77.46%"
    pub similarity_display: String,
}

impl AnalysisReport {
    pub fn new(result: AnalysisResult) -> Self {
        let alignment = Alignment::from_similarity(result.similarity_percentage);
        Self {
            similarity_display: format_percentage(result.similarity_percentage),
            message: alignment.message().to_string(),
            alignment,
            result,
        }
    }

    /// Plain-text report, keyword lists in sorted order.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Analysis Result:");
        let _ = writeln!(
            out,
            "Similarity between the resume and the job description: {}",
            self.similarity_display
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Common Keywords:");
        let _ = writeln!(
            out,
            "{}",
            join_or(&self.result.common_keywords, "No common keywords found.")
        );
        let _ = writeln!(out);
        let _ = writeln!(out, "Missing Keywords in Resume:");
        let _ = writeln!(
            out,
            "{}",
            join_or(&self.result.missing_keywords, "No missing keywords found.")
        );
        let _ = writeln!(out);
        let _ = write!(out, "{}", self.message);
        out
    }
}

pub fn format_percentage(similarity_percentage: f64) -> String {
    format!("{similarity_percentage:.2}%")
}

fn join_or<'a>(terms: impl IntoIterator<Item = &'a String>, empty: &str) -> String {
    let joined = terms
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        empty.to_string()
    } else {
        joined
    }
}
