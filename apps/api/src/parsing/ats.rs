//! ATS compatibility scoring — a deterministic, pure function of the
//! extracted fields. Accumulates points per detected signal category, emits
//! one feedback line per category in evaluation order, clamps at 100, and
//! maps the final score onto a five-tier letter grade.

use crate::models::resume::{AtsReport, Education, PersonalInfo, Skills};

const MAX_SCORE: u32 = 100;

/// Scores a parsed profile for ATS compatibility.
///
/// Rubric: name/email/phone +10 each, skills +40 (≥5 found) or +20 (1–4),
/// education +20, plus an unconditional +10 for a successful parse. Sums to
/// at most 100 by construction; the clamp is a safety net.
pub fn analyze_compatibility(
    personal_info: &PersonalInfo,
    skills: &Skills,
    education: &Education,
) -> AtsReport {
    let mut score = 0;
    let mut feedback = Vec::new();

    // Contact information: 30 points
    if personal_info.name.is_empty() {
        feedback.push("Name not clearly detected".to_string());
    } else {
        score += 10;
        feedback.push("Name detected".to_string());
    }

    if personal_info.email.is_empty() {
        feedback.push("Email not found".to_string());
    } else {
        score += 10;
        feedback.push("Email found".to_string());
    }

    if personal_info.mobile_number.is_empty() {
        feedback.push("Phone number not found".to_string());
    } else {
        score += 10;
        feedback.push("Phone number found".to_string());
    }

    // Skills: 40 points
    let skills_count = skills.technical_skills.len();
    if skills_count >= 5 {
        score += 40;
        feedback.push(format!("Good skills section ({skills_count} skills)"));
    } else if skills_count >= 1 {
        score += 20;
        feedback.push(format!("Some skills found ({skills_count} skills)"));
    } else {
        feedback.push("No technical skills detected".to_string());
    }

    // Education: 20 points
    if education.degree.is_empty() {
        feedback.push("Education not clearly detected".to_string());
    } else {
        score += 20;
        feedback.push("Education section found".to_string());
    }

    // General formatting: 10 points, unconditional
    score += 10;
    feedback.push("File successfully parsed".to_string());

    let score = score.min(MAX_SCORE);
    AtsReport {
        score,
        feedback,
        grade: grade_label(score).to_string(),
    }
}

/// Five-tier letter grade from the post-clamp score.
pub fn grade_label(score: u32) -> &'static str {
    if score >= 90 {
        "A+ (Excellent)"
    } else if score >= 80 {
        "A (Very Good)"
    } else if score >= 70 {
        "B (Good)"
    } else if score >= 60 {
        "C (Fair)"
    } else {
        "D (Needs Improvement)"
    }
}
