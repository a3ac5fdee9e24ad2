//! Reveal Engine: staggered word-by-word entrance for a block of text.
//!
//! A block is a pure function of `(text, visible, schedule)`. The only state it
//! keeps is the instant it first saw `visible == true`; later `false` readings
//! are ignored, so a shown word never goes back to hidden.
//!
//! The full sentence is always exposed unsegmented through `accessible_text`;
//! the per-word units are decorative and meant to be hidden from assistive tech.

pub mod easing;
pub mod handlers;
pub mod presets;
pub mod transition;
pub mod units;

use serde::Serialize;

pub use transition::{Transition, UnitFrame};
pub use units::{split_units, RevealSchedule, TextUnit};

#[derive(Debug, Clone)]
pub struct RevealBlock {
    text: String,
    units: Vec<TextUnit>,
    schedule: RevealSchedule,
    transition: Transition,
    visible_since: Option<f64>,
}

impl RevealBlock {
    pub fn new(text: impl Into<String>, schedule: RevealSchedule) -> Self {
        let text = text.into();
        let units = split_units(&text);
        Self {
            text,
            units,
            schedule,
            transition: Transition::WORD,
            visible_since: None,
        }
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = transition;
        self
    }

    /// Unsegmented source text for screen readers.
    pub fn accessible_text(&self) -> &str {
        &self.text
    }

    pub fn schedule(&self) -> RevealSchedule {
        self.schedule
    }

    pub fn is_triggered(&self) -> bool {
        self.visible_since.is_some()
    }

    /// Feeds the current visibility reading taken at `now`.
    /// Only the first `true` has any effect.
    pub fn observe(&mut self, visible: bool, now: f64) {
        if visible && self.visible_since.is_none() {
            self.visible_since = Some(now);
        }
    }

    fn elapsed(&self, now: f64) -> Option<f64> {
        self.visible_since.map(|since| (now - since).max(0.0))
    }

    /// Per-unit presentation at `now`, in word order.
    pub fn frames(&self, now: f64) -> Vec<UnitFrame> {
        presentation(&self.units, self.schedule, self.transition, self.elapsed(now))
    }

    /// Units with `revealed` set once their tween has started.
    pub fn units_at(&self, now: f64) -> Vec<TextUnit> {
        let elapsed = self.elapsed(now);
        self.units
            .iter()
            .map(|unit| TextUnit {
                revealed: elapsed.is_some_and(|e| e >= self.schedule.trigger_time(unit.index)),
                ..unit.clone()
            })
            .collect()
    }

    /// True once every unit has reached its shown state.
    pub fn is_settled(&self, now: f64) -> bool {
        match self.elapsed(now) {
            Some(elapsed) => elapsed >= self.settles_at(),
            None => false,
        }
    }

    /// Time after trigger at which the last unit finishes.
    pub fn settles_at(&self) -> f64 {
        match self.units.len() {
            0 => 0.0,
            n => self.schedule.trigger_time(n - 1) + self.transition.duration,
        }
    }

    pub fn plan(&self) -> RevealPlan {
        RevealPlan {
            accessible_text: self.text.clone(),
            decorative: true,
            units: self
                .units
                .iter()
                .map(|unit| PlannedUnit {
                    content: unit.content.clone(),
                    index: unit.index,
                    trigger_time: self.schedule.trigger_time(unit.index),
                })
                .collect(),
            schedule: self.schedule,
            transition: self.transition,
        }
    }
}

/// Pure presentation function. `elapsed` is time since the block became
/// visible, `None` while it has not.
pub fn presentation(
    units: &[TextUnit],
    schedule: RevealSchedule,
    transition: Transition,
    elapsed: Option<f64>,
) -> Vec<UnitFrame> {
    units
        .iter()
        .map(|unit| transition.frame(schedule.trigger_time(unit.index), elapsed))
        .collect()
}

/// Serializable description of a block's reveal, handed to a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct RevealPlan {
    pub accessible_text: String,
    /// The segmented units are presentation only (`aria-hidden`).
    pub decorative: bool,
    pub units: Vec<PlannedUnit>,
    pub schedule: RevealSchedule,
    pub transition: Transition,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedUnit {
    pub content: String,
    pub index: usize,
    pub trigger_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(text: &str) -> RevealBlock {
        RevealBlock::new(text, RevealSchedule::default())
    }

    #[test]
    fn test_all_hidden_until_visible() {
        let b = block("Core Expertise");
        assert!(b.frames(10.0).iter().all(|f| f.opacity == 0.0));
        assert!(b.units_at(10.0).iter().all(|u| !u.revealed));
    }

    #[test]
    fn test_words_start_in_order() {
        let mut b = block("Ready to build something amazing?");
        b.observe(true, 1.0);
        // 0.12s after trigger: words 0..=2 have started, 3 and 4 have not.
        let units = b.units_at(1.12);
        let revealed: Vec<_> = units.iter().map(|u| u.revealed).collect();
        assert_eq!(revealed, vec![true, true, true, false, false]);

        let frames = b.frames(1.12);
        assert!(frames[0].opacity > frames[1].opacity);
        assert!(frames[1].opacity > frames[2].opacity);
        assert_eq!(frames[4].opacity, 0.0);
    }

    #[test]
    fn test_false_after_true_does_not_revert() {
        let mut b = block("Contact Me");
        b.observe(true, 0.0);
        b.observe(false, 5.0);
        assert!(b.is_triggered());
        assert!(b.frames(5.0).iter().all(UnitFrame::is_shown));
    }

    #[test]
    fn test_later_true_does_not_restart() {
        let mut b = block("Contact Me");
        b.observe(true, 0.0);
        b.observe(true, 4.0);
        assert!(b.is_settled(1.0));
    }

    #[test]
    fn test_settles_after_last_word() {
        let mut b = RevealBlock::new("About Me", RevealSchedule::with_delay(0.3));
        assert!((b.settles_at() - (0.3 + 0.05 + transition::WORD_DURATION)).abs() < 1e-12);
        b.observe(true, 2.0);
        assert!(!b.is_settled(2.5));
        assert!(b.is_settled(2.0 + b.settles_at()));
    }

    #[test]
    fn test_empty_text_renders_nothing() {
        let mut b = block("");
        b.observe(true, 0.0);
        assert!(b.frames(1.0).is_empty());
        assert!(b.plan().units.is_empty());
        assert!(b.is_settled(0.0));
    }

    #[test]
    fn test_plan_keeps_accessible_text() {
        let text = "A developer building community-focused digital experiences.";
        let plan = RevealBlock::new(text, RevealSchedule::with_delay(0.6)).plan();
        assert_eq!(plan.accessible_text, text);
        assert!(plan.decorative);
        assert_eq!(plan.units.len(), 6);
        assert!((plan.units[5].trigger_time - 0.85).abs() < 1e-9);
    }
}
