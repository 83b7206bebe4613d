// Résumé parsing pipeline: document text extraction, heuristic field
// extraction, ATS scoring, and the parser backend seam used by the upload
// handler. All file I/O stays in extract/storage — the field extractors and
// the scorer are pure functions of the text.

pub mod ats;
pub mod extract;
pub mod fields;
pub mod handlers;
pub mod heuristic;
pub mod storage;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::resume::ResumeProfile;
use crate::parsing::heuristic::HeuristicParser;

/// A résumé parser backend. Carried in `AppState` as `Arc<dyn ResumeParser>`.
///
/// `parse` never fails: extraction problems surface inside the returned
/// profile (`ats_analysis.grade == "Error"` plus a feedback line), so the
/// HTTP layer always has something renderable. Backends must not depend on
/// the file existing after they return.
#[async_trait]
pub trait ResumeParser: Send + Sync {
    async fn parse(&self, path: &Path) -> ResumeProfile;

    /// Short backend label, reported by the health endpoint.
    fn backend(&self) -> &'static str;
}

/// Selects the parser backend once at process start.
///
/// `ENABLE_NLP_PARSER` is the capability flag for a richer NLP-backed parser
/// (named-entity extraction). No such backend ships yet, so the flag only
/// logs and the heuristic parser is always selected — handlers never check
/// capabilities themselves, they only see the trait object.
pub fn select_parser(config: &Config) -> Arc<dyn ResumeParser> {
    if config.nlp_parser_enabled {
        warn!("ENABLE_NLP_PARSER is set but no NLP backend is available; using the heuristic parser");
    }
    let parser: Arc<dyn ResumeParser> = Arc::new(HeuristicParser);
    info!("Parser backend selected: {}", parser.backend());
    parser
}
