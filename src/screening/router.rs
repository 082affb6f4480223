use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::ApplicantInput;
use super::evaluation::{EligibilityEngine, EvaluationOutcome};

/// Router builder exposing the eligibility check endpoint.
pub fn screening_router(engine: Arc<EligibilityEngine>) -> Router {
    Router::new()
        .route("/api/v1/loan/checks", post(check_handler))
        .with_state(engine)
}

/// Flat response view for one screened applicant.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EligibilityView {
    applicant: String,
    eligible: bool,
    message: String,
    reasons: Vec<String>,
    proposed_emi: f64,
    dti_percent: f64,
}

impl From<EvaluationOutcome> for EligibilityView {
    fn from(outcome: EvaluationOutcome) -> Self {
        Self {
            applicant: outcome.applicant,
            eligible: outcome.decision.eligible,
            message: outcome.decision.message,
            reasons: outcome.decision.reasons,
            proposed_emi: outcome.metrics.proposed_emi,
            dti_percent: outcome.metrics.dti_percent,
        }
    }
}

pub(crate) async fn check_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    axum::Json(input): axum::Json<ApplicantInput>,
) -> Response {
    match engine.check(input) {
        Ok(outcome) => {
            let view = EligibilityView::from(outcome);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
