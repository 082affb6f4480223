use serde::{Deserialize, Serialize};

/// Raw fields exactly as collected from the applicant form. Every value stays
/// a string until intake validation parses it; wire keys use the form's
/// camelCase field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApplicantInput {
    pub name: String,
    pub age: String,
    pub salary: String,
    pub existing_emi: String,
    pub loan_amount: String,
}

/// Numeric snapshot produced by intake validation. The name is carried for
/// display only and never feeds a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub name: String,
    pub age: f64,
    pub salary: f64,
    pub existing_emi: f64,
    pub loan_amount: f64,
}
