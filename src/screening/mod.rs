//! Loan applicant screening: intake validation, the eligibility gates, and
//! the thin shells (HTTP endpoint, form snapshot, CSV batch) that hand the
//! evaluator raw field values.

pub(crate) mod batch;
pub mod domain;
pub(crate) mod evaluation;
pub mod form;
pub(crate) mod intake;
pub mod router;

#[cfg(test)]
mod tests;

pub use batch::{ApplicantCsvImporter, ScreeningImportError};
pub use domain::{ApplicantInput, ApplicantProfile};
pub use evaluation::{
    DebtMetrics, Decision, EligibilityEngine, EvaluationOutcome, RulePolicy, RuleViolation,
    ELIGIBLE_MESSAGE,
};
pub use form::{ApplicantForm, FormDisplay, FormField};
pub use intake::IntakeError;
pub use router::screening_router;
