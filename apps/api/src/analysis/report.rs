//! Report Assembler — bundles one analysis into a presentation-ready result.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analysis::catalog::Role;
use crate::analysis::feedback::Feedback;
use crate::analysis::scorer::ScoreResult;
use crate::models::analysis::AnalysisRecord;

/// Full result of one résumé analysis. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub role_id: String,
    pub role_display_name: String,
    pub original_filename: String,
    pub score: u32,
    pub keyword_count: usize,
    pub present_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub feedback: Feedback,
    pub feedback_message: String,
}

/// Pure aggregation. Skill lists are moved in as-is, never reordered or deduplicated.
pub fn assemble(
    role: &Role,
    original_filename: &str,
    score_result: ScoreResult,
    feedback: Feedback,
) -> Report {
    let ScoreResult {
        score,
        present_skills,
        missing_skills,
    } = score_result;

    Report {
        role_id: role.id.clone(),
        role_display_name: role.display_name.clone(),
        original_filename: original_filename.to_string(),
        score,
        keyword_count: present_skills.len() + missing_skills.len(),
        present_skills,
        missing_skills,
        feedback,
        feedback_message: feedback.message().to_string(),
    }
}

impl Report {
    /// The persistence record for this report.
    pub fn to_record(&self, stored_filename: &str, uploaded_at: DateTime<Utc>) -> AnalysisRecord {
        AnalysisRecord {
            filename: stored_filename.to_string(),
            score: self.score as i32,
            uploaded_at,
            role: self.role_id.clone(),
        }
    }
}
