use serde::{Deserialize, Serialize};

/// Thresholds applied by the eligibility gates. Defaults are the published
/// lending rubric; the shipped shells never override them, tests may.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulePolicy {
    pub max_dti_percent: f64,
    pub min_age: f64,
    pub max_age: f64,
    pub salary_multiple_cap: f64,
    pub repayment_horizon_months: f64,
}

impl Default for RulePolicy {
    fn default() -> Self {
        Self {
            max_dti_percent: 60.0,
            min_age: 21.0,
            max_age: 60.0,
            salary_multiple_cap: 10.0,
            repayment_horizon_months: 12.0,
        }
    }
}
