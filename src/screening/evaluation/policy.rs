use serde::{Deserialize, Serialize};

/// Message shown when every gate passes.
pub const ELIGIBLE_MESSAGE: &str = "Congratulations! You are eligible for the loan.";

/// Currency marker used whenever an amount appears in applicant-facing text.
const CURRENCY: char = '₹';

/// Individual gate violations, ordered the way the rubric evaluates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RuleViolation {
    DebtBurden { dti_percent: f64, limit_percent: f64 },
    AgeOutsideBand { min_age: f64, max_age: f64 },
    LoanCapExceeded { salary_multiple: f64, max_loan: f64 },
}

impl RuleViolation {
    /// Applicant-facing reason line. Thresholds are interpolated from the
    /// policy that raised the violation, so a tuned policy never reports a
    /// stale limit.
    pub fn summary(&self) -> String {
        match self {
            RuleViolation::DebtBurden {
                dti_percent,
                limit_percent,
            } => format!("High DTI ({dti_percent:.2}%) exceeds {limit_percent}%"),
            RuleViolation::AgeOutsideBand { min_age, max_age } => {
                format!("Age should be between {min_age} and {max_age}")
            }
            RuleViolation::LoanCapExceeded {
                salary_multiple,
                max_loan,
            } => {
                format!("Requested loan exceeds {salary_multiple}x monthly salary (max {CURRENCY}{max_loan})")
            }
        }
    }
}

/// Final decision for one applicant: the flag, the display message, and the
/// violation summaries in evaluation order (empty when eligible).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub eligible: bool,
    pub message: String,
    pub reasons: Vec<String>,
}

pub(crate) fn decide(violations: &[RuleViolation]) -> Decision {
    let reasons: Vec<String> = violations.iter().map(RuleViolation::summary).collect();

    if reasons.is_empty() {
        Decision {
            eligible: true,
            message: ELIGIBLE_MESSAGE.to_string(),
            reasons,
        }
    } else {
        Decision {
            eligible: false,
            message: format!("Not Eligible: {}", reasons.join(", ")),
            reasons,
        }
    }
}
