//! Heuristic fallback parser — the self-contained regex/keyword pipeline:
//! text extraction → field extraction → scoring → response assembly.
//!
//! The four field extractors run independently on the same text, then the
//! scorer sees their combined output. Failure at any point collapses to the
//! all-empty "Error"-graded profile; the caller never sees an error value.

use std::path::Path;

use async_trait::async_trait;
use serde_json::json;

use crate::models::resume::{
    AtsReport, Education, Experience, PersonalInfo, ResumeProfile, Skills,
};
use crate::parsing::{ats, extract, fields, ResumeParser};

/// Longest extracted-text preview carried in `raw_data` diagnostics.
const RAW_TEXT_PREVIEW_CHARS: usize = 500;

pub struct HeuristicParser;

#[async_trait]
impl ResumeParser for HeuristicParser {
    async fn parse(&self, path: &Path) -> ResumeProfile {
        build_profile(&extract::extract_text(path))
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

/// Entry point after text extraction: truly empty text (nothing extracted at
/// all) becomes the error profile; anything else runs the pipeline. Text
/// that is whitespace-only still proceeds — a document of blank paragraphs
/// parses with no signal and scores accordingly, it is not an error.
fn build_profile(text: &str) -> ResumeProfile {
    if text.is_empty() {
        return empty_profile("Could not extract text from file");
    }
    profile_from_text(text)
}

/// Runs the field extractors and the scorer over already-extracted text.
/// Pure: same text in, same profile out.
fn profile_from_text(text: &str) -> ResumeProfile {
    let personal_info = fields::extract_personal_info(text);
    let skills = fields::extract_skills(text);
    let experience = fields::extract_experience(text);
    let education = fields::extract_education(text);
    let ats_analysis = ats::analyze_compatibility(&personal_info, &skills, &education);

    ResumeProfile {
        personal_info,
        skills,
        experience,
        education,
        projects: Vec::new(),
        ats_analysis,
        raw_data: json!({ "extracted_text": text_preview(text) }),
    }
}

/// First 500 characters of the text, with a truncation marker if longer.
/// Counted in characters, not bytes, so multi-byte text never splits.
fn text_preview(text: &str) -> String {
    if text.chars().count() > RAW_TEXT_PREVIEW_CHARS {
        let truncated: String = text.chars().take(RAW_TEXT_PREVIEW_CHARS).collect();
        format!("{truncated}...")
    } else {
        text.to_string()
    }
}

/// The all-empty error response: every field still present, with failure
/// communicated through the "Error" grade and a feedback line.
fn empty_profile(error_msg: &str) -> ResumeProfile {
    ResumeProfile {
        personal_info: PersonalInfo::default(),
        skills: Skills::default(),
        experience: Experience::default(),
        education: Education::default(),
        projects: Vec::new(),
        ats_analysis: AtsReport {
            score: 0,
            feedback: vec![error_msg.to_string()],
            grade: "Error".to_string(),
        },
        raw_data: json!({ "error": error_msg }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLDEN_RESUME: &str = "John Smith\n\
        john@example.com\n\
        555-123-4567\n\
        5 years of experience\n\
        Skills: Python, React, Docker, Git, AWS\n\
        Bachelor of Computer Science";

    #[test]
    fn test_golden_resume_fully_extracted() {
        let profile = profile_from_text(GOLDEN_RESUME);

        assert_eq!(profile.personal_info.name, "John Smith");
        assert_eq!(profile.personal_info.email, "john@example.com");
        assert_eq!(profile.personal_info.mobile_number, "555-123-4567");
        assert_eq!(profile.experience.total_experience, 5);
        assert_eq!(
            profile.skills.technical_skills,
            vec!["Python", "React", "Git", "Docker", "AWS"]
        );
        assert_eq!(
            profile.education.degree,
            vec!["Bachelor", "Computer Science"]
        );
        assert_eq!(profile.ats_analysis.score, 100);
        assert_eq!(profile.ats_analysis.grade, "A+ (Excellent)");
    }

    #[test]
    fn test_no_signal_text_scores_10() {
        let profile = profile_from_text("lorem ipsum dolor sit amet consectetur");
        assert_eq!(profile.personal_info, PersonalInfo::default());
        assert!(profile.skills.technical_skills.is_empty());
        assert_eq!(profile.experience.total_experience, 0);
        assert!(profile.education.degree.is_empty());
        assert_eq!(profile.ats_analysis.score, 10);
        assert_eq!(profile.ats_analysis.grade, "D (Needs Improvement)");
    }

    #[test]
    fn test_every_field_present_on_error() {
        let profile = empty_profile("Could not extract text from file");
        assert_eq!(profile.ats_analysis.score, 0);
        assert_eq!(profile.ats_analysis.grade, "Error");
        assert_eq!(profile.ats_analysis.feedback.len(), 1);
        assert_eq!(
            profile.raw_data,
            json!({ "error": "Could not extract text from file" })
        );
        assert!(profile.projects.is_empty());

        // Serialized shape must carry every key even when empty.
        let value = serde_json::to_value(&profile).unwrap();
        for key in [
            "personal_info",
            "skills",
            "experience",
            "education",
            "projects",
            "ats_analysis",
            "raw_data",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
    }

    #[test]
    fn test_raw_data_preview_truncated_at_500_chars() {
        let long_text = format!("John Smith\n{}", "x".repeat(600));
        let profile = profile_from_text(&long_text);
        let preview = profile.raw_data["extracted_text"].as_str().unwrap();
        assert_eq!(preview.chars().count(), 503); // 500 + "..."
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn test_raw_data_short_text_not_truncated() {
        let profile = profile_from_text("John Smith\nshort resume");
        assert_eq!(
            profile.raw_data["extracted_text"].as_str().unwrap(),
            "John Smith\nshort resume"
        );
    }

    #[test]
    fn test_empty_text_is_error_profile() {
        let profile = build_profile("");
        assert_eq!(profile.ats_analysis.grade, "Error");
        assert_eq!(profile.ats_analysis.score, 0);
    }

    #[test]
    fn test_whitespace_only_text_is_not_an_error() {
        // A document of blank paragraphs extracts to newlines only. That is
        // a no-signal parse (score 10, lowest tier), not a failure.
        for text in ["\n", "\n\n\n", "   \n\t\n"] {
            let profile = build_profile(text);
            assert_eq!(profile.ats_analysis.grade, "D (Needs Improvement)");
            assert_eq!(profile.ats_analysis.score, 10);
            assert_eq!(profile.raw_data["extracted_text"].as_str().unwrap(), text);
        }
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let first = profile_from_text(GOLDEN_RESUME);
        let second = profile_from_text(GOLDEN_RESUME);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_parse_missing_file_returns_error_profile() {
        let parser = HeuristicParser;
        let profile = parser.parse(Path::new("/nonexistent/resume.pdf")).await;
        assert_eq!(profile.ats_analysis.grade, "Error");
        assert_eq!(profile.ats_analysis.score, 0);
    }

    #[tokio::test]
    async fn test_parse_unsupported_extension_returns_error_profile() {
        let parser = HeuristicParser;
        let profile = parser.parse(Path::new("resume.txt")).await;
        assert_eq!(profile.ats_analysis.grade, "Error");
        assert_eq!(
            profile.ats_analysis.feedback,
            vec!["Could not extract text from file"]
        );
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(HeuristicParser.backend(), "heuristic");
    }
}
