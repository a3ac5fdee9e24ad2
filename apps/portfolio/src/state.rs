use std::sync::Arc;

use crate::config::Config;
use crate::contact::FormRelay;
use crate::particles::ParticleController;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Form relay. `RelayClient` in production; swapped for a stub in tests.
    pub relay: Arc<dyn FormRelay>,
    /// Process-wide particle engine controller; initialized once at startup.
    pub particles: Arc<ParticleController>,
}
