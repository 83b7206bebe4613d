use std::sync::Arc;

use crate::config::Config;
use crate::parsing::ResumeParser;

/// Shared application state injected into all route handlers via Axum
/// extractors. Holds no mutable state: requests are independent and nothing
/// is cached between them.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable parser backend. Default: HeuristicParser; selected once at
    /// startup by `parsing::select_parser`.
    pub parser: Arc<dyn ResumeParser>,
}
