use std::sync::Arc;

use crate::mentor::gate::AnalysisGate;
use crate::mentor::CareerAdvisor;
use crate::storage::Storage;

/// Shared application state injected into all route handlers via Axum
/// extractors. Store and advisor are trait objects so tests run against
/// isolated stores and a mock advisor.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Storage>,
    pub advisor: Arc<dyn CareerAdvisor>,
    /// Per-profile lock serializing the check-then-generate-then-store path.
    pub gate: Arc<AnalysisGate>,
}
