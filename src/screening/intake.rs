use super::domain::{ApplicantInput, ApplicantProfile};

/// Validation errors raised during applicant intake. The Display text is the
/// exact message surfaced to the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntakeError {
    #[error("Please fill in all fields.")]
    MissingField,
    #[error("Please enter realistic values.")]
    UnrealisticValue,
}

// Sanity bounds, distinct from the 21-60 eligibility band.
const MIN_PLAUSIBLE_AGE: f64 = 18.0;
const MAX_PLAUSIBLE_AGE: f64 = 100.0;

/// Convert raw form fields into a numeric profile, rejecting incomplete or
/// implausible submissions before any rule runs.
pub(crate) fn validate(input: ApplicantInput) -> Result<ApplicantProfile, IntakeError> {
    if input.name.is_empty()
        || input.age.is_empty()
        || input.salary.is_empty()
        || input.existing_emi.is_empty()
        || input.loan_amount.is_empty()
    {
        return Err(IntakeError::MissingField);
    }

    let age = parse_number(&input.age);
    let salary = parse_number(&input.salary);
    let existing_emi = parse_number(&input.existing_emi);
    let loan_amount = parse_number(&input.loan_amount);

    // Affirmative bounds, so the NaN sentinel from an unparseable field
    // can never satisfy them.
    let plausible = (MIN_PLAUSIBLE_AGE..=MAX_PLAUSIBLE_AGE).contains(&age)
        && salary > 0.0
        && existing_emi >= 0.0
        && loan_amount > 0.0;
    if !plausible {
        return Err(IntakeError::UnrealisticValue);
    }

    Ok(ApplicantProfile {
        name: input.name,
        age,
        salary,
        existing_emi,
        loan_amount,
    })
}

fn parse_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}
