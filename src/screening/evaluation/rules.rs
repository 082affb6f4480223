use serde::{Deserialize, Serialize};

use super::super::domain::ApplicantProfile;
use super::config::RulePolicy;
use super::policy::RuleViolation;

/// Derived debt figures every decision is based on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebtMetrics {
    pub proposed_emi: f64,
    pub dti_percent: f64,
}

pub(crate) fn debt_metrics(profile: &ApplicantProfile, policy: &RulePolicy) -> DebtMetrics {
    // The horizon is a fixed hypothetical used to estimate burden, not the
    // real repayment term of the requested loan.
    let proposed_emi = profile.loan_amount / policy.repayment_horizon_months;
    let dti_percent = ((profile.existing_emi + proposed_emi) / profile.salary) * 100.0;

    DebtMetrics {
        proposed_emi,
        dti_percent,
    }
}

/// Run the three gates independently and in fixed order. A violation never
/// suppresses the gates after it.
pub(crate) fn check_gates(
    profile: &ApplicantProfile,
    metrics: &DebtMetrics,
    policy: &RulePolicy,
) -> Vec<RuleViolation> {
    let mut violations = Vec::new();

    if metrics.dti_percent > policy.max_dti_percent {
        violations.push(RuleViolation::DebtBurden {
            dti_percent: metrics.dti_percent,
            limit_percent: policy.max_dti_percent,
        });
    }

    if profile.age < policy.min_age || profile.age > policy.max_age {
        violations.push(RuleViolation::AgeOutsideBand {
            min_age: policy.min_age,
            max_age: policy.max_age,
        });
    }

    let max_loan = policy.salary_multiple_cap * profile.salary;
    if profile.loan_amount > max_loan {
        violations.push(RuleViolation::LoanCapExceeded {
            salary_multiple: policy.salary_multiple_cap,
            max_loan,
        });
    }

    violations
}
