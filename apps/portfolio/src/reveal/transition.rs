//! Per-unit transition contract: `(start, duration, easing) -> (opacity, offset)` at time `t`.
//!
//! Nothing here knows about rendering. Callers evaluate a `Transition` at a
//! point in time and apply the resulting `UnitFrame` however they draw.

use serde::Serialize;

use super::easing::{CubicBezier, REVEAL_EASE};

/// Duration of one word's hidden -> shown tween.
pub const WORD_DURATION: f64 = 0.3;
/// Vertical distance a hidden word sits below its resting position.
pub const WORD_OFFSET: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub duration: f64,
    pub offset: f64,
    pub easing: CubicBezier,
}

impl Transition {
    pub const WORD: Transition = Transition {
        duration: WORD_DURATION,
        offset: WORD_OFFSET,
        easing: REVEAL_EASE,
    };

    /// Frame for a unit whose tween starts `start` time-units after the block
    /// became visible, sampled `elapsed` time-units after that moment.
    /// `elapsed == None` means the block has not become visible yet.
    pub fn frame(&self, start: f64, elapsed: Option<f64>) -> UnitFrame {
        let Some(elapsed) = elapsed else {
            return UnitFrame::hidden(self.offset);
        };
        let local = elapsed - start;
        if local <= 0.0 {
            return UnitFrame::hidden(self.offset);
        }
        if self.duration <= 0.0 || local >= self.duration {
            return UnitFrame::SHOWN;
        }
        let progress = self.easing.ease(local / self.duration);
        UnitFrame {
            opacity: progress,
            offset_y: self.offset * (1.0 - progress),
        }
    }
}

/// Presentation state of one unit at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UnitFrame {
    pub opacity: f64,
    pub offset_y: f64,
}

impl UnitFrame {
    pub const SHOWN: UnitFrame = UnitFrame {
        opacity: 1.0,
        offset_y: 0.0,
    };

    pub fn hidden(offset: f64) -> Self {
        Self {
            opacity: 0.0,
            offset_y: offset,
        }
    }

    pub fn is_shown(&self) -> bool {
        *self == Self::SHOWN
    }
}
