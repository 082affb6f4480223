use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::screening::domain::ApplicantInput;
use crate::screening::evaluation::{EligibilityEngine, RulePolicy};
use crate::screening::router::screening_router;

pub(super) fn applicant(
    name: &str,
    age: &str,
    salary: &str,
    existing_emi: &str,
    loan_amount: &str,
) -> ApplicantInput {
    ApplicantInput {
        name: name.to_string(),
        age: age.to_string(),
        salary: salary.to_string(),
        existing_emi: existing_emi.to_string(),
        loan_amount: loan_amount.to_string(),
    }
}

pub(super) fn eligible_applicant() -> ApplicantInput {
    applicant("Asha", "30", "50000", "2000", "100000")
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::default()
}

/// Engine whose DTI gate never trips, for exercising the later gates alone.
pub(super) fn lenient_dti_engine() -> EligibilityEngine {
    EligibilityEngine::new(RulePolicy {
        max_dti_percent: f64::INFINITY,
        ..RulePolicy::default()
    })
}

pub(super) fn check_router() -> axum::Router {
    screening_router(Arc::new(engine()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
