use anyhow::anyhow;
use axum::{extract::State, Json};
use serde::Serialize;

use crate::contact::notify::{Toast, Toaster};
use crate::contact::pipeline::{ContactForm, SubmissionOutcome, SubmitReport};
use crate::contact::validation::ContactInput;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    #[serde(flatten)]
    pub outcome: SubmissionOutcome,
    pub toast: Option<Toast>,
}

/// POST /api/v1/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(input): Json<ContactInput>,
) -> Result<Json<ContactResponse>, AppError> {
    let (toaster, mut toasts) = Toaster::channel();
    let form = ContactForm::new(state.relay.clone(), toaster);
    form.set_values(input);

    match form.submit().await {
        SubmitReport::Blocked { errors } => Err(AppError::Validation(errors)),
        SubmitReport::Completed(outcome) => Ok(Json(ContactResponse {
            outcome,
            toast: toasts.try_recv().ok(),
        })),
        // A per-request form is never shared and outlives its own submission.
        report @ (SubmitReport::Busy | SubmitReport::Detached) => Err(AppError::Internal(
            anyhow!("unexpected submit report: {report:?}"),
        )),
    }
}
