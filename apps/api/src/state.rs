use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::scoring::AtsScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: HeuristicAtsScorer over the configured catalog.
    pub scorer: Arc<dyn AtsScorer>,
    /// Turns uploaded résumé files into text. Default: DocumentTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
