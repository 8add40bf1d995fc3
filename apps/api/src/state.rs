use std::sync::Arc;

use crate::analysis::catalog::RoleCatalog;
use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::store::AnalysisStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only role table, built once at startup.
    pub catalog: Arc<RoleCatalog>,
    /// Pluggable document reader. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    pub store: Arc<dyn AnalysisStore>,
}
