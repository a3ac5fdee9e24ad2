use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use super::{InteractionMode, ParticleOptions, Shape};

#[derive(Debug, Error)]
pub enum ParticleInitError {
    #[error("engine bundle '{0}' failed to load: {1}")]
    Load(&'static str, String),

    #[error("engine loader task aborted: {0}")]
    Aborted(#[from] tokio::task::JoinError),
}

/// What a loaded engine can draw.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineBundle {
    pub name: &'static str,
    pub shapes: Vec<Shape>,
    pub interactions: Vec<InteractionMode>,
    pub links: bool,
}

impl EngineBundle {
    pub fn supports(&self, options: &ParticleOptions) -> bool {
        self.shapes.contains(&options.particles.shape)
            && self.interactions.contains(&options.interactivity.on_hover)
            && self.links
    }
}

/// Loads the particle simulation engine. Called at most once per controller.
#[async_trait]
pub trait ParticleEngine: Send + Sync {
    async fn load(&self) -> Result<EngineBundle, ParticleInitError>;
}

/// The trimmed-down engine bundle: basic shapes, links and hover interactions.
pub struct SlimEngine;

#[async_trait]
impl ParticleEngine for SlimEngine {
    async fn load(&self) -> Result<EngineBundle, ParticleInitError> {
        let bundle = tokio::task::spawn_blocking(build_slim_bundle).await?;
        debug!(bundle = bundle.name, shapes = bundle.shapes.len(), "engine bundle registered");
        Ok(bundle)
    }
}

fn build_slim_bundle() -> EngineBundle {
    EngineBundle {
        name: "slim",
        shapes: vec![Shape::Circle],
        interactions: vec![InteractionMode::Repulse],
        links: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::{options_for, DeviceClass};

    #[tokio::test]
    async fn test_slim_bundle_supports_site_options() {
        let bundle = SlimEngine.load().await.unwrap();
        assert_eq!(bundle.name, "slim");
        assert!(bundle.supports(&options_for(DeviceClass::Compact)));
        assert!(bundle.supports(&options_for(DeviceClass::Regular)));
    }

    #[test]
    fn test_bundle_without_links_is_rejected() {
        let bundle = EngineBundle {
            links: false,
            ..build_slim_bundle()
        };
        assert!(!bundle.supports(&options_for(DeviceClass::Regular)));
    }
}
