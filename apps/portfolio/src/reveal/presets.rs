//! Motion presets for whole cards and groups: the reveal primitive applied to a
//! single unit instead of a word sequence.

use serde::Serialize;

use super::easing::{EASE_OUT, REVEAL_EASE};
use super::transition::{Transition, UnitFrame};

/// Visible fraction at which a word block starts revealing.
pub const TEXT_THRESHOLD: f64 = 0.5;

/// What starts the motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Trigger {
    /// Plays as soon as the element mounts.
    Mount,
    /// Plays once the given fraction of the element is in the viewport.
    /// A fraction of `0.0` means any visible pixel.
    Visible { threshold: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionPreset {
    pub delay: f64,
    pub transition: Transition,
    pub trigger: Trigger,
}

impl MotionPreset {
    pub fn frame(&self, elapsed: Option<f64>) -> UnitFrame {
        self.transition.frame(self.delay, elapsed)
    }

    pub fn settles_at(&self) -> f64 {
        self.delay + self.transition.duration
    }
}

fn landing(offset: f64, duration: f64) -> Transition {
    Transition {
        duration,
        offset,
        easing: REVEAL_EASE,
    }
}

/// Expertise grid card `index`; cards cascade by a tenth each.
pub fn expertise_card(index: usize) -> MotionPreset {
    MotionPreset {
        delay: index as f64 * 0.1,
        transition: landing(50.0, 0.6),
        trigger: Trigger::Visible { threshold: 0.3 },
    }
}

/// Hero buttons under the tagline.
pub fn hero_actions() -> MotionPreset {
    MotionPreset {
        delay: 1.2,
        transition: landing(20.0, 0.8),
        trigger: Trigger::Mount,
    }
}

/// Resume / get-in-touch button group.
pub fn call_to_action() -> MotionPreset {
    MotionPreset {
        delay: 0.6,
        transition: landing(20.0, 0.8),
        trigger: Trigger::Visible { threshold: 0.0 },
    }
}

pub fn contact_card() -> MotionPreset {
    MotionPreset {
        delay: 0.0,
        transition: landing(50.0, 0.8),
        trigger: Trigger::Visible { threshold: 0.3 },
    }
}

pub fn resume_section() -> MotionPreset {
    MotionPreset {
        delay: 0.0,
        transition: Transition {
            duration: 0.7,
            offset: 30.0,
            easing: EASE_OUT,
        },
        trigger: Trigger::Visible { threshold: 0.2 },
    }
}

/// Skill badge `index` inside a resume skills row.
pub fn skill_badge(index: usize) -> MotionPreset {
    MotionPreset {
        delay: index as f64 * 0.05,
        transition: Transition {
            duration: 0.3,
            offset: 10.0,
            easing: EASE_OUT,
        },
        trigger: Trigger::Visible { threshold: 0.0 },
    }
}
