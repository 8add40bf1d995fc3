//! Keyword Scorer — literal, case-insensitive keyword presence scoring.
//!
//! Algorithm:
//! 1. Lowercase the text once.
//! 2. Each keyword is worth `100 / keyword_count` points (not pre-rounded).
//! 3. Walk keywords in role order; a substring hit adds its points and lands in
//!    `present_skills`, a miss lands in `missing_skills`.
//! 4. Round the accumulated total once at the end.

use serde::{Deserialize, Serialize};

/// Outcome of scoring one text against one keyword set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub score: u32, // 0 – 100
    pub present_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// Scores `text` against `keywords`. Keywords are expected to be lowercase already.
///
/// An empty keyword set scores 0 with both lists empty.
pub fn score<S: AsRef<str>>(text: &str, keywords: &[S]) -> ScoreResult {
    if keywords.is_empty() {
        return ScoreResult {
            score: 0,
            present_skills: vec![],
            missing_skills: vec![],
        };
    }

    let text = text.to_lowercase();
    let points_per_keyword = 100.0_f64 / keywords.len() as f64;

    let mut total = 0.0_f64;
    let mut present_skills = Vec::new();
    let mut missing_skills = Vec::new();

    for keyword in keywords {
        let keyword = keyword.as_ref();
        if text.contains(keyword) {
            total += points_per_keyword;
            present_skills.push(keyword.to_string());
        } else {
            missing_skills.push(keyword.to_string());
        }
    }

    // Non-negative, so f64::round (half away from zero) is round-half-up here.
    let score = total.round().clamp(0.0, 100.0) as u32;

    ScoreResult {
        score,
        present_skills,
        missing_skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::catalog::{RoleCatalog, DEFAULT_ROLE_ID};

    const FRONTEND: [&str; 8] = [
        "javascript",
        "react",
        "html",
        "css",
        "redux",
        "typescript",
        "tailwind",
        "webpack",
    ];

    #[test]
    fn test_half_of_frontend_keywords_scores_50() {
        let result = score("Built UIs in JavaScript and React with HTML/CSS.", &FRONTEND);
        assert_eq!(result.score, 50);
        assert_eq!(result.present_skills, vec!["javascript", "react", "html", "css"]);
        assert_eq!(
            result.missing_skills,
            vec!["redux", "typescript", "tailwind", "webpack"]
        );
    }

    #[test]
    fn test_all_keywords_present_scores_100() {
        let catalog = RoleCatalog::builtin(DEFAULT_ROLE_ID).unwrap();
        for role in catalog.roles() {
            let text = role.keywords.join(" ");
            let result = score(&text, &role.keywords);
            assert_eq!(result.score, 100, "role {}", role.id);
            assert!(result.missing_skills.is_empty());
        }
    }

    #[test]
    fn test_no_keywords_present_scores_0() {
        let result = score("Experienced pastry chef.", &["rust", "kafka", "tokio"]);
        assert_eq!(result.score, 0);
        assert!(result.present_skills.is_empty());
        assert_eq!(result.missing_skills.len(), 3);
    }

    #[test]
    fn test_empty_keyword_set_scores_0_without_panicking() {
        let empty: [&str; 0] = [];
        let result = score("python react", &empty);
        assert_eq!(result.score, 0);
        assert!(result.present_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let result = score("Python developer with REACT skills", &["python", "react", "go"]);
        assert_eq!(result.present_skills, vec!["python", "react"]);
        assert_eq!(result.missing_skills, vec!["go"]);
    }

    #[test]
    fn test_lists_follow_keyword_order_not_text_order() {
        let result = score("webpack then css then javascript", &FRONTEND);
        assert_eq!(result.present_skills, vec!["javascript", "css", "webpack"]);
    }

    #[test]
    fn test_partition_covers_every_keyword_once() {
        let catalog = RoleCatalog::builtin(DEFAULT_ROLE_ID).unwrap();
        let text = "Python, SQL and Docker on AWS; some Java and statistics.";
        for role in catalog.roles() {
            let result = score(text, &role.keywords);
            assert_eq!(
                result.present_skills.len() + result.missing_skills.len(),
                role.keywords.len()
            );
            let mut seen: Vec<&String> = result
                .present_skills
                .iter()
                .chain(result.missing_skills.iter())
                .collect();
            seen.sort();
            let mut expected: Vec<&String> = role.keywords.iter().collect();
            expected.sort();
            assert_eq!(seen, expected, "role {}", role.id);
        }
    }

    #[test]
    fn test_substring_match_is_literal() {
        // "r" and "go" are substrings of many words; literal matching counts them.
        let result = score("Managed a cargo fleet", &["r", "go"]);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_multi_word_keyword_needs_contiguous_text() {
        let hit = score("Applied machine learning daily", &["machine learning"]);
        assert_eq!(hit.score, 100);
        let miss = score("machine\nlearning", &["machine learning"]);
        assert_eq!(miss.score, 0);
    }

    #[test]
    fn test_fractional_points_round_once_at_the_end() {
        // 1 of 3 → 33.33 → 33; 2 of 3 → 66.67 → 67; 3 of 3 → 100.
        let kws = ["a1", "b2", "c3"];
        assert_eq!(score("a1", &kws).score, 33);
        assert_eq!(score("a1 b2", &kws).score, 67);
        assert_eq!(score("a1 b2 c3", &kws).score, 100);
    }

    #[test]
    fn test_half_point_rounds_up() {
        // 1 of 8 → 12.5 → 13.
        assert_eq!(score("javascript", &FRONTEND).score, 13);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let text = "React, Redux, TypeScript";
        assert_eq!(score(text, &FRONTEND), score(text, &FRONTEND));
    }
}
