//! One-time engine initialization with explicit lifecycle.
//!
//! `Uninitialized -> Initializing -> Ready | Failed`. The first caller of
//! `initialize_once` claims the transition and runs the load; every other
//! caller (concurrent or later) waits on the shared state instead of starting
//! a second load. There is no path back to `Uninitialized`.

use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};
use serde::Serialize;
use tokio::sync::watch;
use tracing::{info, warn};

use super::engine::{EngineBundle, ParticleEngine, SlimEngine};
use super::{options_for, DeviceClass, ParticleOptions};

static GLOBAL: Lazy<Arc<ParticleController>> =
    Lazy::new(|| Arc::new(ParticleController::new(Arc::new(SlimEngine))));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InitState {
    Uninitialized,
    Initializing,
    Ready,
    Failed,
}

impl InitState {
    fn is_settled(self) -> bool {
        matches!(self, InitState::Ready | InitState::Failed)
    }
}

pub struct ParticleController {
    engine: Arc<dyn ParticleEngine>,
    state: watch::Sender<InitState>,
    bundle: OnceCell<EngineBundle>,
}

impl ParticleController {
    pub fn new(engine: Arc<dyn ParticleEngine>) -> Self {
        let (state, _) = watch::channel(InitState::Uninitialized);
        Self {
            engine,
            state,
            bundle: OnceCell::new(),
        }
    }

    /// The process-wide controller backed by the slim engine bundle.
    pub fn global() -> Arc<ParticleController> {
        GLOBAL.clone()
    }

    pub fn state(&self) -> InitState {
        *self.state.borrow()
    }

    /// Loads the engine if nobody has yet, then waits for the outcome.
    /// Resolves `true` once the engine is ready, `false` if loading failed.
    pub async fn initialize_once(&self) -> bool {
        let claimed = self.state.send_if_modified(|state| {
            if *state == InitState::Uninitialized {
                *state = InitState::Initializing;
                true
            } else {
                false
            }
        });

        if claimed {
            let mut guard = InitGuard {
                state: &self.state,
                finished: false,
            };
            let outcome = match self.engine.load().await {
                Ok(bundle) => {
                    info!(bundle = bundle.name, "particle engine ready");
                    let _ = self.bundle.set(bundle);
                    InitState::Ready
                }
                Err(e) => {
                    warn!("particle engine failed to initialize; background disabled: {e}");
                    InitState::Failed
                }
            };
            self.state.send_replace(outcome);
            guard.finished = true;
        }

        let mut rx = self.state.subscribe();
        rx.wait_for(|state| state.is_settled())
            .await
            .is_ok_and(|state| *state == InitState::Ready)
    }

    /// Options for `device`, or `None` while the engine is not ready
    /// (or cannot draw them). Never returns a partial configuration.
    pub fn render(&self, device: DeviceClass) -> Option<ParticleOptions> {
        if self.state() != InitState::Ready {
            return None;
        }
        let bundle = self.bundle.get()?;
        let options = options_for(device);
        if !bundle.supports(&options) {
            warn!(bundle = bundle.name, "engine bundle cannot draw the configured options");
            return None;
        }
        Some(options)
    }
}

/// Marks the load as failed if the claiming future is dropped mid-load, so
/// waiters are not left hanging on `Initializing`.
struct InitGuard<'a> {
    state: &'a watch::Sender<InitState>,
    finished: bool,
}

impl Drop for InitGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            warn!("particle engine initialization cancelled");
            self.state.send_replace(InitState::Failed);
        }
    }
}
