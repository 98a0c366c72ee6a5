use std::sync::Arc;

use crate::catalog::RoleCatalog;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The catalog is read-only reference data, loaded once at startup and
/// shared behind an `Arc`; tests build it from fixtures instead.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RoleCatalog>,
    pub config: Config,
}
