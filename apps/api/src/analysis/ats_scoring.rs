//! ATS Scoring - pluggable, trait-based scorer that measures a resume against a job description.
//!
//! Default: `KeywordAtsScorer` (pure-Rust, fast, deterministic, fully testable).
//! The scorer takes no storage or network handle; handlers flatten the stored
//! document and persist the result themselves.
//!
//! `AppState` holds an `Arc<dyn AtsScorer>`.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Full ATS compatibility report returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsResult {
    /// Overall compatibility, always within [0, 100].
    pub ats_score: i32,
    /// Job-description keywords found in the resume, first-occurrence order, max 10.
    pub matched_keywords: Vec<String>,
    /// Job-description keywords absent from the resume, first-occurrence order, max 10.
    pub missing_keywords: Vec<String>,
    /// One entry per recognized section name, 85 when detected, 0 when not.
    pub section_scores: BTreeMap<String, i32>,
    /// One entry per failed check, in check order.
    pub recommendations: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The ATS scorer trait. Implement this to swap backends without touching
/// the endpoint, handler, or caller code.
///
/// Carried in `AppState` as `Arc<dyn AtsScorer>`.
#[async_trait]
pub trait AtsScorer: Send + Sync {
    async fn score(&self, resume_text: &str, job_description: &str)
        -> Result<AtsResult, AppError>;
}

/// Pure-Rust keyword/section heuristic scorer. No LLM call, no I/O.
pub struct KeywordAtsScorer;

#[async_trait]
impl AtsScorer for KeywordAtsScorer {
    async fn score(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AtsResult, AppError> {
        Ok(compute_ats_score(resume_text, job_description))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

const BASE_SCORE: i32 = 60;
const CONTACT_POINTS: i32 = 5;
const SECTION_POINTS: i32 = 7;
const SECTION_PRESENT_SCORE: i32 = 85;
const KEYWORD_POINTS: i32 = 1;
const KEYWORD_LIST_CAP: usize = 10;
/// Job-description tokens shorter than this are discarded as noise.
const MIN_KEYWORD_LEN: usize = 4;

/// Section names probed in the resume text. Evaluation order is fixed; it
/// drives recommendation ordering, not the score.
const RESUME_SECTIONS: [&str; 4] = ["experience", "education", "skills", "summary"];

lazy_static! {
    // local-part @ domain . 2+ letter TLD
    static ref EMAIL_RE: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();
    // 10 digits, optionally grouped 3-3-4 with '-' or '.' separators
    static ref PHONE_RE: Regex = Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").unwrap();
    // alphabetic words only; digits and punctuation never join a token
    static ref WORD_RE: Regex = Regex::new(r"\b[A-Za-z]+\b").unwrap();
}

/// Computes the ATS compatibility report for a resume, optionally against a
/// job description. Total over all string inputs, including empty ones:
/// degenerate input just yields the base score and a full recommendation list.
///
/// Scoring: 60 base, +5 per contact check, +7 per detected section, +1 per
/// job-description keyword found in the resume, clamped to [0, 100].
pub fn compute_ats_score(resume_text: &str, job_description: &str) -> AtsResult {
    let mut score = BASE_SCORE;
    let mut recommendations = Vec::new();
    let mut matched_keywords = Vec::new();
    let mut missing_keywords = Vec::new();

    // Contact information over the raw text.
    if EMAIL_RE.is_match(resume_text) {
        score += CONTACT_POINTS;
    } else {
        recommendations.push("Add email address".to_string());
    }
    if PHONE_RE.is_match(resume_text) {
        score += CONTACT_POINTS;
    } else {
        recommendations.push("Add phone number".to_string());
    }

    // Section detection is a case-insensitive substring probe.
    let resume_lower = resume_text.to_lowercase();
    let mut section_scores = BTreeMap::new();
    for section in RESUME_SECTIONS {
        if resume_lower.contains(section) {
            score += SECTION_POINTS;
            section_scores.insert(section.to_string(), SECTION_PRESENT_SCORE);
        } else {
            recommendations.push(format!("Add {section} section"));
            section_scores.insert(section.to_string(), 0);
        }
    }

    // Keyword matching against the job description, when one was supplied.
    // Keywords are deduplicated in first-occurrence order so matched/missing
    // lists are stable for display. Resume-side lookup is a membership test;
    // duplicate resume tokens are tolerated.
    if !job_description.is_empty() {
        let resume_tokens: HashSet<String> = tokenize(resume_text).into_iter().collect();
        let mut seen = HashSet::new();
        for keyword in tokenize(job_description) {
            if keyword.len() < MIN_KEYWORD_LEN || !seen.insert(keyword.clone()) {
                continue;
            }
            if resume_tokens.contains(&keyword) {
                matched_keywords.push(keyword);
                score += KEYWORD_POINTS;
            } else {
                missing_keywords.push(keyword);
            }
        }
    }

    // Lists are truncated only at the end; accumulation is uncapped.
    matched_keywords.truncate(KEYWORD_LIST_CAP);
    missing_keywords.truncate(KEYWORD_LIST_CAP);

    AtsResult {
        // The floor is unreachable with a base of 60; clamped anyway.
        ats_score: score.clamp(0, 100),
        matched_keywords,
        missing_keywords,
        section_scores,
        recommendations,
    }
}

/// Lowercase alphabetic tokens of `text`, in occurrence order.
fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_yield_base_score_and_full_recommendations() {
        let result = compute_ats_score("", "");
        assert_eq!(result.ats_score, 60);
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
        assert_eq!(result.recommendations.len(), 6);
        assert_eq!(
            result.recommendations,
            vec![
                "Add email address",
                "Add phone number",
                "Add experience section",
                "Add education section",
                "Add skills section",
                "Add summary section",
            ]
        );
        for section in ["experience", "education", "skills", "summary"] {
            assert_eq!(result.section_scores[section], 0);
        }
    }

    #[test]
    fn test_email_alone_adds_five() {
        let result = compute_ats_score("email: a@b.com", "");
        assert_eq!(result.ats_score, 65);
        // Phone and all four sections still fail.
        assert_eq!(result.recommendations.len(), 5);
        assert!(!result.recommendations.contains(&"Add email address".to_string()));
    }

    #[test]
    fn test_all_sections_without_contact_info() {
        let result = compute_ats_score("Experience Education Skills Summary", "");
        assert_eq!(result.ats_score, 88); // 60 + 7*4
        for section in ["experience", "education", "skills", "summary"] {
            assert_eq!(result.section_scores[section], 85);
        }
        assert_eq!(
            result.recommendations,
            vec!["Add email address", "Add phone number"]
        );
    }

    #[test]
    fn test_section_detection_is_substring_based() {
        // "experiences" still contains "experience"
        let result = compute_ats_score("My experiences were varied", "");
        assert_eq!(result.section_scores["experience"], 85);
    }

    #[test]
    fn test_section_scores_always_have_four_entries() {
        let result = compute_ats_score("skills only", "");
        assert_eq!(result.section_scores.len(), 4);
        assert_eq!(result.section_scores["skills"], 85);
        assert_eq!(result.section_scores["education"], 0);
    }

    #[test]
    fn test_phone_formats_accepted() {
        for phone in ["555-123-4567", "555.123.4567", "5551234567"] {
            let result = compute_ats_score(phone, "");
            assert_eq!(result.ats_score, 65, "expected {phone} to pass the phone check");
        }
    }

    #[test]
    fn test_phone_formats_rejected() {
        for text in ["12345", "555-12-34", "phone on request"] {
            let result = compute_ats_score(text, "");
            assert!(
                result.recommendations.contains(&"Add phone number".to_string()),
                "expected {text} to fail the phone check"
            );
        }
    }

    #[test]
    fn test_email_formats_rejected() {
        for text in ["not-an-email", "a@b", "@b.com", "user at example dot com"] {
            let result = compute_ats_score(text, "");
            assert!(
                result.recommendations.contains(&"Add email address".to_string()),
                "expected {text} to fail the email check"
            );
        }
    }

    #[test]
    fn test_keyword_matching_adds_one_point_each() {
        let resume = "Built services in rust with tokio";
        let jd = "rust tokio kubernetes";
        let result = compute_ats_score(resume, jd);
        assert_eq!(result.matched_keywords, vec!["rust", "tokio"]);
        assert_eq!(result.missing_keywords, vec!["kubernetes"]);
        // 60 base + 2 matched keywords; no contact info, no section names.
        assert_eq!(result.ats_score, 62);
    }

    #[test]
    fn test_short_keywords_are_discarded() {
        // "go", "c", "and" are <= 3 chars and never become keywords
        let result = compute_ats_score("", "go c and rust");
        assert_eq!(result.missing_keywords, vec!["rust"]);
    }

    #[test]
    fn test_keywords_deduplicated_in_first_occurrence_order() {
        let result = compute_ats_score("", "tokio rust tokio async rust");
        assert_eq!(result.missing_keywords, vec!["tokio", "rust", "async"]);
    }

    #[test]
    fn test_keyword_matching_is_case_insensitive() {
        let result = compute_ats_score("RUST developer", "Rust required");
        assert_eq!(result.matched_keywords, vec!["rust"]);
    }

    #[test]
    fn test_matched_and_missing_are_disjoint() {
        let resume = "rust tokio axum postgres";
        let jd = "rust tokio kafka redis axum postgres docker";
        let result = compute_ats_score(resume, jd);
        for kw in &result.matched_keywords {
            assert!(!result.missing_keywords.contains(kw));
        }
    }

    #[test]
    fn test_empty_job_description_yields_empty_keyword_lists() {
        let result = compute_ats_score("rust tokio experience a@b.com", "");
        assert!(result.matched_keywords.is_empty());
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn test_keyword_lists_truncated_to_ten() {
        let jd = (b'a'..=b'y')
            .map(|c| format!("keyword{}", c as char))
            .collect::<Vec<_>>()
            .join(" ");
        let result = compute_ats_score("", &jd);
        assert_eq!(result.missing_keywords.len(), 10);
        assert!(result.matched_keywords.is_empty());
    }

    #[test]
    fn test_score_clamped_to_100() {
        // 60 base + 10 contact + 28 sections = 98, plus 3 matched keywords = 101
        let resume = "a@b.com 555-123-4567 experience education skills summary rust tokio axum";
        let jd = "rust tokio axum";
        let result = compute_ats_score(resume, jd);
        assert_eq!(result.matched_keywords.len(), 3);
        assert_eq!(result.ats_score, 100);
    }

    #[test]
    fn test_score_always_within_bounds() {
        let inputs = [
            ("", ""),
            ("!!!???", "12345 678"),
            ("a@b.com 555-123-4567 experience education skills summary", ""),
        ];
        for (resume, jd) in inputs {
            let result = compute_ats_score(resume, jd);
            assert!((0..=100).contains(&result.ats_score));
        }
    }

    #[test]
    fn test_non_alphabetic_text_yields_no_tokens() {
        assert!(tokenize("1234 !!! ---").is_empty());
        // letter runs glued to digits fail the word boundary on both sides
        assert!(tokenize("rust2024").is_empty());
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        assert_eq!(tokenize("don't"), vec!["don", "t"]);
        assert_eq!(tokenize("Rust, Tokio."), vec!["rust", "tokio"]);
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let resume = "a@b.com experience in rust";
        let jd = "rust kubernetes";
        assert_eq!(
            compute_ats_score(resume, jd),
            compute_ats_score(resume, jd)
        );
    }

    #[tokio::test]
    async fn test_keyword_backend_delegates_to_pure_core() {
        let scorer = KeywordAtsScorer;
        let via_trait = scorer.score("rust experience", "rust").await.unwrap();
        assert_eq!(via_trait, compute_ats_score("rust experience", "rust"));
    }
}
