//! Heuristic field extractors — four independent, pure functions of the raw
//! document text. Each is best-effort pattern matching: a field with no
//! signal contributes its empty/zero value, never an error.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::resume::{Education, Experience, PersonalInfo, Skills};

/// Technical skill vocabulary. Order matters: it defines the output order of
/// detected skills. Matching is case-insensitive substring containment — no
/// word-boundary enforcement, no stemming.
const SKILL_VOCABULARY: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "React",
    "Node.js",
    "SQL",
    "HTML",
    "CSS",
    "Git",
    "Docker",
    "AWS",
    "Azure",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "FastAPI",
    "Django",
    "Flask",
    "Express",
    "Vue.js",
    "Angular",
    "Machine Learning",
    "Data Science",
    "TensorFlow",
    "Pandas",
    "NumPy",
];

/// Degree titles and common field names, in output order.
const EDUCATION_VOCABULARY: &[&str] = &[
    "Bachelor",
    "Master",
    "PhD",
    "Doctorate",
    "MBA",
    "B.S.",
    "M.S.",
    "Computer Science",
    "Engineering",
    "Business",
    "Mathematics",
];

lazy_static! {
    static ref RE_EMAIL: Regex =
        Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap();

    /// Phone patterns in priority order: US plain, US parenthesized,
    /// international. The first pattern that matches anywhere wins; later
    /// patterns are not tried after a match.
    static ref RE_PHONE: [Regex; 3] = [
        Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").unwrap(),
        Regex::new(r"\(\d{3}\)\s*\d{3}[-.]?\d{4}").unwrap(),
        Regex::new(r"\+\d{1,3}[-.\s]?\d{3,4}[-.\s]?\d{3,4}[-.\s]?\d{3,4}\b").unwrap(),
    ];

    /// Years-of-experience patterns in priority order, applied to lowercased text.
    static ref RE_EXPERIENCE: [Regex; 3] = [
        Regex::new(r"(\d+)\+?\s*years?\s*of\s*experience").unwrap(),
        Regex::new(r"(\d+)\+?\s*years?\s*experience").unwrap(),
        Regex::new(r"experience:?\s*(\d+)\+?\s*years?").unwrap(),
    ];
}

/// Extracts name, email, and phone number. All fields default to empty.
pub fn extract_personal_info(text: &str) -> PersonalInfo {
    let mut info = PersonalInfo::default();

    if let Some(m) = RE_EMAIL.find(text) {
        info.email = m.as_str().to_string();
    }

    for pattern in RE_PHONE.iter() {
        if let Some(m) = pattern.find(text) {
            info.mobile_number = m.as_str().to_string();
            break;
        }
    }

    // Name: first of the top 5 lines that reads like "First Last". Misfires
    // on two-word headers like "Software Engineer" — known limitation of the
    // heuristic, preserved deliberately.
    for line in text.lines().take(5) {
        let line = line.trim();
        if looks_like_name(line) {
            info.name = line.to_string();
            break;
        }
    }

    info
}

/// Exactly two whitespace-separated tokens, alphabetic once whitespace is
/// removed, and more than 5 characters including the separator.
fn looks_like_name(line: &str) -> bool {
    line.split_whitespace().count() == 2
        && line
            .chars()
            .filter(|c| !c.is_whitespace())
            .all(char::is_alphabetic)
        && line.chars().count() > 5
}

/// Scans the text for known technical terms, preserving vocabulary order and
/// canonical casing. `all_skills` mirrors `technical_skills`.
pub fn extract_skills(text: &str) -> Skills {
    let text_lower = text.to_lowercase();
    let found: Vec<String> = SKILL_VOCABULARY
        .iter()
        .filter(|skill| text_lower.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect();

    Skills {
        technical_skills: found.clone(),
        all_skills: found,
    }
}

/// Extracts total years of experience from phrases like "5 years of
/// experience". First matching pattern wins; no match means 0. The captured
/// value is deliberately unclamped ("999 years" parses as 999).
pub fn extract_experience(text: &str) -> Experience {
    let text_lower = text.to_lowercase();
    let mut total_experience = 0;

    for pattern in RE_EXPERIENCE.iter() {
        if let Some(caps) = pattern.captures(&text_lower) {
            // A capture too large for u32 falls through to 0.
            total_experience = caps[1].parse().unwrap_or(0);
            break;
        }
    }

    Experience {
        total_experience,
        experience_details: Vec::new(),
    }
}

/// Scans the text for degree/field keywords, preserving vocabulary order and
/// reference casing.
pub fn extract_education(text: &str) -> Education {
    let text_lower = text.to_lowercase();
    let degree: Vec<String> = EDUCATION_VOCABULARY
        .iter()
        .filter(|keyword| text_lower.contains(&keyword.to_lowercase()))
        .map(|keyword| keyword.to_string())
        .collect();

    Education {
        degree,
        education_details: Vec::new(),
    }
}
