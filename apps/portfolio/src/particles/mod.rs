//! Particle Background Controller.
//!
//! - `options_for` maps a device class to the simulation options (pure).
//! - `ParticleController` loads the simulation engine at most once per process
//!   and hands out options only after that load has succeeded.

pub mod controller;
pub mod engine;
pub mod handlers;

use serde::Serialize;

pub use controller::ParticleController;
pub use engine::SlimEngine;

/// Widths strictly below this are compact.
pub const DEFAULT_COMPACT_BREAKPOINT_PX: u32 = 768;

const COMPACT_PARTICLE_COUNT: u32 = 40;
const FULL_PARTICLE_COUNT: u32 = 80;
const PARTICLE_COLOR: &str = "#9ca3af";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceClass {
    Compact,
    Regular,
}

impl DeviceClass {
    pub fn from_width(width_px: u32, breakpoint_px: u32) -> Self {
        if width_px < breakpoint_px {
            DeviceClass::Compact
        } else {
            DeviceClass::Regular
        }
    }

    pub fn is_compact(self) -> bool {
        self == DeviceClass::Compact
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    Repulse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutMode {
    Bounce,
}

// Options mirror the browser particle library's JSON shape so the front-end
// can pass them through untouched.

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticleOptions {
    pub background: Background,
    pub fps_limit: u32,
    pub interactivity: Interactivity,
    pub particles: ParticleStyle,
    pub detect_retina: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Background {
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interactivity {
    pub on_hover: InteractionMode,
    pub repulse: Repulse,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Repulse {
    pub distance: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleStyle {
    pub color: String,
    pub links: Links,
    pub movement: Movement,
    pub number: Density,
    pub opacity: f64,
    pub shape: Shape,
    pub size: SizeRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Links {
    pub color: String,
    pub distance: f64,
    pub opacity: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    pub speed: f64,
    pub out_mode: OutMode,
    pub random: bool,
    pub straight: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Density {
    pub value: u32,
    pub density_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeRange {
    pub min: f64,
    pub max: f64,
}

/// Simulation options for a device class. Pure; calling it again yields an equal value.
pub fn options_for(device: DeviceClass) -> ParticleOptions {
    let count = if device.is_compact() {
        COMPACT_PARTICLE_COUNT
    } else {
        FULL_PARTICLE_COUNT
    };

    ParticleOptions {
        background: Background {
            color: "transparent".to_string(),
        },
        fps_limit: 60,
        interactivity: Interactivity {
            on_hover: InteractionMode::Repulse,
            repulse: Repulse {
                distance: 80.0,
                duration: 0.4,
            },
        },
        particles: ParticleStyle {
            color: PARTICLE_COLOR.to_string(),
            links: Links {
                color: PARTICLE_COLOR.to_string(),
                distance: 150.0,
                opacity: 0.1,
                width: 1.0,
            },
            movement: Movement {
                speed: 1.0,
                out_mode: OutMode::Bounce,
                random: false,
                straight: false,
            },
            number: Density {
                value: count,
                density_enabled: true,
            },
            opacity: 0.2,
            shape: Shape::Circle,
            size: SizeRange { min: 1.0, max: 2.0 },
        },
        detect_retina: true,
    }
}
