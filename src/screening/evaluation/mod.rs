mod config;
mod policy;
mod rules;

pub use config::RulePolicy;
pub use policy::{Decision, RuleViolation, ELIGIBLE_MESSAGE};
pub use rules::DebtMetrics;

use serde::{Deserialize, Serialize};

use super::domain::{ApplicantInput, ApplicantProfile};
use super::intake::{self, IntakeError};
use policy::decide;

/// Stateless evaluator that applies the rule policy to an applicant.
pub struct EligibilityEngine {
    policy: RulePolicy,
}

impl EligibilityEngine {
    pub fn new(policy: RulePolicy) -> Self {
        Self { policy }
    }

    /// Full pipeline for raw form fields: intake validation first, then the
    /// gates against the resulting profile.
    pub fn check(&self, input: ApplicantInput) -> Result<EvaluationOutcome, IntakeError> {
        let profile = intake::validate(input)?;
        Ok(self.evaluate(&profile))
    }

    /// Apply the gates to an already validated profile.
    pub fn evaluate(&self, profile: &ApplicantProfile) -> EvaluationOutcome {
        let metrics = rules::debt_metrics(profile, &self.policy);
        let violations = rules::check_gates(profile, &metrics, &self.policy);

        EvaluationOutcome {
            applicant: profile.name.clone(),
            metrics,
            decision: decide(&violations),
        }
    }
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new(RulePolicy::default())
    }
}

/// Evaluation output pairing the decision with the derived figures so shells
/// can show the numbers behind it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub applicant: String,
    pub metrics: DebtMetrics,
    pub decision: Decision,
}
