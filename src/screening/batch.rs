use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::ApplicantInput;

/// Failures while reading an applicant CSV export. Row-level validation
/// problems are not import errors; they surface per row once the engine
/// checks each input.
#[derive(Debug)]
pub enum ScreeningImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ScreeningImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreeningImportError::Io(err) => {
                write!(f, "failed to read applicant export: {}", err)
            }
            ScreeningImportError::Csv(err) => write!(f, "invalid applicant CSV data: {}", err),
        }
    }
}

impl std::error::Error for ScreeningImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScreeningImportError::Io(err) => Some(err),
            ScreeningImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ScreeningImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ScreeningImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One export row. Every column is required so a missing header fails the
/// whole import; cells stay raw strings for the intake validator to judge.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApplicantRow {
    name: String,
    age: String,
    salary: String,
    existing_emi: String,
    loan_amount: String,
}

impl From<ApplicantRow> for ApplicantInput {
    fn from(row: ApplicantRow) -> Self {
        Self {
            name: row.name,
            age: row.age,
            salary: row.salary,
            existing_emi: row.existing_emi,
            loan_amount: row.loan_amount,
        }
    }
}

pub struct ApplicantCsvImporter;

impl ApplicantCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ApplicantInput>, ScreeningImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ApplicantInput>, ScreeningImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut inputs = Vec::new();
        for record in csv_reader.deserialize::<ApplicantRow>() {
            let row = record?;
            inputs.push(ApplicantInput::from(row));
        }

        Ok(inputs)
    }
}
