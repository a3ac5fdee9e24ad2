//! Viewport Observer: one-shot "became visible" signals for mounted regions.
//!
//! Each `observe` call registers one subscription and hands back a
//! `Visibility`. The value starts `false` and flips to `true` the first time
//! the region's visible fraction reaches the requested threshold. After that
//! the subscription is detached; the value never goes back to `false`.
//!
//! Dropping a `Visibility` (the region unmounting) releases its subscription
//! whether or not it ever fired.
//!
//! Nothing in the HTTP surface builds an observer: the server has no viewport.
//! `page::LandingPage` drives one per mounted page on the rendering side.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, Weak};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::debug;

mod geometry;

pub use geometry::Rect;

#[derive(Default)]
struct Registry {
    next_id: u64,
    viewport: Option<Rect>,
    watches: HashMap<u64, Watch>,
}

struct Watch {
    bounds: Rect,
    threshold: f64,
    tx: watch::Sender<bool>,
}

impl Watch {
    fn is_satisfied(&self, viewport: &Rect) -> bool {
        let fraction = self.bounds.visible_fraction(viewport);
        fraction > 0.0 && fraction >= self.threshold
    }
}

/// Shared observer for every region on one page.
#[derive(Clone, Default)]
pub struct ViewportObserver {
    registry: Arc<Mutex<Registry>>,
}

/// Snapshot of observer bookkeeping, mostly for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverStats {
    pub pending: usize,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts watching `region` until `threshold` (clamped to `[0, 1]`) of its
    /// area is on screen. A missing region is never visible.
    pub fn observe(&self, region: Option<Rect>, threshold: f64) -> Visibility {
        let Some(bounds) = region else {
            let (tx, rx) = watch::channel(false);
            return Visibility {
                rx,
                subscription: None,
                _detached: Some(tx),
            };
        };

        let (tx, rx) = watch::channel(false);
        let watch = Watch {
            bounds,
            threshold: threshold.clamp(0.0, 1.0),
            tx,
        };

        let mut registry = self.lock();
        if let Some(viewport) = registry.viewport {
            if watch.is_satisfied(&viewport) {
                watch.tx.send_replace(true);
                return Visibility {
                    rx,
                    subscription: None,
                    _detached: None,
                };
            }
        }

        let id = registry.next_id;
        registry.next_id += 1;
        registry.watches.insert(id, watch);
        debug!(id, "viewport subscription attached");

        Visibility {
            rx,
            subscription: Some(Subscription {
                id,
                registry: Arc::downgrade(&self.registry),
            }),
            _detached: None,
        }
    }

    /// Records a new viewport (scroll or resize) and fires every region that
    /// now meets its threshold. Fired subscriptions are dropped from the registry.
    pub fn update_viewport(&self, viewport: Rect) {
        let mut registry = self.lock();
        registry.viewport = Some(viewport);
        registry.watches.retain(|id, watch| {
            if watch.is_satisfied(&viewport) {
                watch.tx.send_replace(true);
                debug!(id, "region became visible; detaching");
                false
            } else {
                true
            }
        });
    }

    pub fn stats(&self) -> ObserverStats {
        ObserverStats {
            pending: self.lock().watches.len(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
            if registry.watches.remove(&self.id).is_some() {
                debug!(id = self.id, "viewport subscription released before firing");
            }
        }
    }
}

/// Monotonic visibility flag for one mounted region.
pub struct Visibility {
    rx: watch::Receiver<bool>,
    subscription: Option<Subscription>,
    // Keeps the channel open for regions that can never fire.
    _detached: Option<watch::Sender<bool>>,
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        *self.rx.borrow()
    }

    /// True while the region still holds a live subscription.
    pub fn is_pending(&self) -> bool {
        let Some(subscription) = &self.subscription else {
            return false;
        };
        let Some(registry) = subscription.registry.upgrade() else {
            return false;
        };
        let registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
        registry.watches.contains_key(&subscription.id)
    }

    /// Resolves once the region has become visible. Returns `false` only if
    /// the observer went away first.
    pub async fn wait_visible(&mut self) -> bool {
        let reached = self.rx.wait_for(|visible| *visible).await.is_ok();
        reached || self.is_visible()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.rx.clone()
    }
}
