use super::domain::ApplicantInput;
use super::evaluation::{EligibilityEngine, EvaluationOutcome};

/// The five applicant form fields, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Age,
    Salary,
    ExistingEmi,
    LoanAmount,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Name,
        FormField::Age,
        FormField::Salary,
        FormField::ExistingEmi,
        FormField::LoanAmount,
    ];

    /// Wire and CSV column key for this field.
    pub const fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Age => "age",
            FormField::Salary => "salary",
            FormField::ExistingEmi => "existingEmi",
            FormField::LoanAmount => "loanAmount",
        }
    }

    /// Human label shown next to the input.
    pub const fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Age => "Age",
            FormField::Salary => "Monthly Salary (₹)",
            FormField::ExistingEmi => "Existing EMI/Debts (₹)",
            FormField::LoanAmount => "Loan Amount Requested (₹)",
        }
    }
}

/// What the form currently shows below the inputs: a blocking validation
/// message or the outcome of the last submission.
#[derive(Debug, Clone, PartialEq)]
pub enum FormDisplay {
    Blocked(String),
    Outcome(EvaluationOutcome),
}

/// Immutable snapshot of the applicant form. Edits and submissions return a
/// new snapshot; editing any field drops whatever the previous check showed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicantForm {
    fields: ApplicantInput,
    display: Option<FormDisplay>,
}

impl ApplicantForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.fields.name,
            FormField::Age => &self.fields.age,
            FormField::Salary => &self.fields.salary,
            FormField::ExistingEmi => &self.fields.existing_emi,
            FormField::LoanAmount => &self.fields.loan_amount,
        }
    }

    /// Raw field values as they would be handed to the evaluator.
    pub fn input(&self) -> ApplicantInput {
        self.fields.clone()
    }

    /// Replace one field, clearing any displayed result or error.
    pub fn set(&self, field: FormField, value: impl Into<String>) -> Self {
        let mut fields = self.fields.clone();
        let value = value.into();

        match field {
            FormField::Name => fields.name = value,
            FormField::Age => fields.age = value,
            FormField::Salary => fields.salary = value,
            FormField::ExistingEmi => fields.existing_emi = value,
            FormField::LoanAmount => fields.loan_amount = value,
        }

        Self {
            fields,
            display: None,
        }
    }

    /// Run the check and return a snapshot displaying whatever it produced.
    /// A repeat submission simply overwrites the previous display.
    pub fn submit(&self, engine: &EligibilityEngine) -> Self {
        let display = match engine.check(self.fields.clone()) {
            Ok(outcome) => FormDisplay::Outcome(outcome),
            Err(error) => FormDisplay::Blocked(error.to_string()),
        };

        Self {
            fields: self.fields.clone(),
            display: Some(display),
        }
    }

    pub fn display(&self) -> Option<&FormDisplay> {
        self.display.as_ref()
    }
}
