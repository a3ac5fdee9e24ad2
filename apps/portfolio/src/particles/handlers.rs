use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::particles::{DeviceClass, ParticleOptions};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ViewportQuery {
    pub width: u32,
}

/// GET /api/v1/particles
pub async fn handle_particle_options(
    State(state): State<AppState>,
    Query(query): Query<ViewportQuery>,
) -> Result<Json<ParticleOptions>, AppError> {
    let device = DeviceClass::from_width(query.width, state.config.compact_breakpoint_px);
    state
        .particles
        .render(device)
        .map(Json)
        .ok_or_else(|| AppError::NotReady("particle engine is not ready".to_string()))
}
