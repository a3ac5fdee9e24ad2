//! Landing page orchestration: mounts every text block and card on a
//! `ViewportObserver`, then turns visibility plus a clock into per-unit frames.
//!
//! Blocks are independent: each has its own subscription and its own reveal
//! clock. Dropping the page drops every `Visibility`, which releases any
//! observation that never fired.
//!
//! The server never mounts a page. It only publishes `landing_plan()` over
//! HTTP; `LandingPage` is the reference driver a renderer embeds, fed with its
//! own layout and scroll events.
#![allow(dead_code)]

pub mod content;

use std::collections::HashMap;

use serde::Serialize;

use crate::reveal::presets::{self, MotionPreset, Trigger, TEXT_THRESHOLD};
use crate::reveal::{RevealBlock, RevealPlan, RevealSchedule, UnitFrame};
use crate::viewport::{Rect, ViewportObserver, Visibility};

use content::{ExpertiseArea, EXPERTISE, LANDING_TEXT};

pub const HERO_ACTIONS_ID: &str = "hero-actions";
pub const CTA_ACTIONS_ID: &str = "cta-actions";
pub const CONTACT_CARD_ID: &str = "contact-card";

/// Where each element landed on the page, keyed by element id.
/// Elements missing from the layout are treated as never visible.
pub type PageLayout = HashMap<String, Rect>;

pub fn expertise_card_id(index: usize) -> String {
    format!("expertise-card-{index}")
}

struct MountedText {
    id: &'static str,
    reveal: RevealBlock,
    visibility: Visibility,
}

struct MountedCard {
    id: String,
    preset: MotionPreset,
    visibility: Option<Visibility>,
    visible_since: Option<f64>,
}

impl MountedCard {
    fn observe(&mut self, now: f64) {
        if self.visible_since.is_some() {
            return;
        }
        let visible = match &self.visibility {
            Some(visibility) => visibility.is_visible(),
            None => true,
        };
        if visible {
            self.visible_since = Some(now);
        }
    }

    fn frame(&self, now: f64) -> UnitFrame {
        self.preset
            .frame(self.visible_since.map(|since| (now - since).max(0.0)))
    }
}

pub struct LandingPage {
    texts: Vec<MountedText>,
    cards: Vec<MountedCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockFrame {
    pub id: String,
    pub frames: Vec<UnitFrame>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageFrame {
    pub texts: Vec<BlockFrame>,
    pub cards: Vec<BlockFrame>,
}

impl LandingPage {
    /// Mounts the landing page at time `now`. Mount-triggered motion starts
    /// its clock here.
    pub fn mount(observer: &ViewportObserver, layout: &PageLayout, now: f64) -> Self {
        let texts = LANDING_TEXT
            .iter()
            .map(|block| MountedText {
                id: block.id,
                reveal: RevealBlock::new(block.text, RevealSchedule::with_delay(block.delay)),
                visibility: observer.observe(layout.get(block.id).copied(), TEXT_THRESHOLD),
            })
            .collect();

        let mut cards: Vec<MountedCard> = card_presets()
            .into_iter()
            .map(|(id, preset)| {
                let visibility = match preset.trigger {
                    Trigger::Mount => None,
                    Trigger::Visible { threshold } => {
                        Some(observer.observe(layout.get(&id).copied(), threshold))
                    }
                };
                MountedCard {
                    id,
                    preset,
                    visibility,
                    visible_since: None,
                }
            })
            .collect();
        for card in &mut cards {
            card.observe(now);
        }

        Self { texts, cards }
    }

    /// Samples every block at `now`, latching any visibility that flipped
    /// since the last tick.
    pub fn tick(&mut self, now: f64) -> PageFrame {
        let texts = self
            .texts
            .iter_mut()
            .map(|text| {
                text.reveal.observe(text.visibility.is_visible(), now);
                BlockFrame {
                    id: text.id.to_string(),
                    frames: text.reveal.frames(now),
                }
            })
            .collect();

        let cards = self
            .cards
            .iter_mut()
            .map(|card| {
                card.observe(now);
                BlockFrame {
                    id: card.id.clone(),
                    frames: vec![card.frame(now)],
                }
            })
            .collect();

        PageFrame { texts, cards }
    }

    pub fn text_block(&self, id: &str) -> Option<&RevealBlock> {
        self.texts.iter().find(|t| t.id == id).map(|t| &t.reveal)
    }
}

/// Every card/group motion on the landing page, in document order.
pub fn card_presets() -> Vec<(String, MotionPreset)> {
    let mut cards = vec![(HERO_ACTIONS_ID.to_string(), presets::hero_actions())];
    cards.extend((0..EXPERTISE.len()).map(|i| (expertise_card_id(i), presets::expertise_card(i))));
    cards.push((CTA_ACTIONS_ID.to_string(), presets::call_to_action()));
    cards.push((CONTACT_CARD_ID.to_string(), presets::contact_card()));
    cards
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedText {
    pub id: &'static str,
    pub plan: RevealPlan,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedCard {
    pub id: String,
    pub preset: MotionPreset,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandingPlan {
    pub text_threshold: f64,
    pub texts: Vec<PlannedText>,
    pub cards: Vec<PlannedCard>,
    pub expertise: &'static [ExpertiseArea],
}

pub fn landing_plan() -> LandingPlan {
    LandingPlan {
        text_threshold: TEXT_THRESHOLD,
        texts: LANDING_TEXT
            .iter()
            .map(|block| PlannedText {
                id: block.id,
                plan: RevealBlock::new(block.text, RevealSchedule::with_delay(block.delay)).plan(),
            })
            .collect(),
        cards: card_presets()
            .into_iter()
            .map(|(id, preset)| PlannedCard { id, preset })
            .collect(),
        expertise: EXPERTISE,
    }
}
