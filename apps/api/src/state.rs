use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds no per-analysis data: every request is a self-contained comparison.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable PDF text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}
