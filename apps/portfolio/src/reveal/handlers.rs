use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::page::{landing_plan, LandingPlan};
use crate::reveal::units::DEFAULT_STAGGER;
use crate::reveal::{RevealBlock, RevealPlan, RevealSchedule};

const MAX_TEXT_LEN: usize = 4096;

#[derive(Debug, Deserialize)]
pub struct RevealQuery {
    pub text: String,
    #[serde(default)]
    pub delay: f64,
    pub stagger: Option<f64>,
}

/// GET /api/v1/reveal
pub async fn handle_reveal_plan(
    Query(query): Query<RevealQuery>,
) -> Result<Json<RevealPlan>, AppError> {
    if query.text.len() > MAX_TEXT_LEN {
        return Err(AppError::BadRequest(format!(
            "text must be at most {MAX_TEXT_LEN} bytes"
        )));
    }
    let schedule = RevealSchedule::new(query.delay, query.stagger.unwrap_or(DEFAULT_STAGGER));
    Ok(Json(RevealBlock::new(query.text, schedule).plan()))
}

/// GET /api/v1/reveal/landing
pub async fn handle_landing_plan() -> Json<LandingPlan> {
    Json(landing_plan())
}
