use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Contact details pulled from the top of the document. Empty string = not found.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub mobile_number: String,
}

/// Detected technical skills, in vocabulary order.
/// `all_skills` mirrors `technical_skills` — kept as a separate field because the
/// response shape is the compatibility surface consumed by the frontend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skills {
    pub technical_skills: Vec<String>,
    pub all_skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub total_experience: u32,
    /// Reserved — detailed work history is not extracted by the heuristic backend.
    pub experience_details: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: Vec<String>,
    /// Reserved — institution/date details are not extracted by the heuristic backend.
    pub education_details: Vec<Value>,
}

/// ATS compatibility verdict: bounded score, one feedback line per evaluated
/// category (in evaluation order), and a letter grade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: u32,
    pub feedback: Vec<String>,
    pub grade: String,
}

/// Canonical structured output of parsing one résumé.
///
/// Every field is always present, even on total failure — absent information is
/// an empty string, empty sequence, or zero, never a missing key. Constructed
/// fresh per upload and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub personal_info: PersonalInfo,
    pub skills: Skills,
    pub experience: Experience,
    pub education: Education,
    /// Reserved — project extraction is not implemented by any backend.
    pub projects: Vec<Value>,
    pub ats_analysis: AtsReport,
    /// Diagnostic payload: `{"extracted_text": ...}` on success (truncated),
    /// `{"error": ...}` on failure.
    pub raw_data: Value,
}
