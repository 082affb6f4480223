use std::io::Cursor;

use super::common::*;
use crate::screening::batch::{ApplicantCsvImporter, ScreeningImportError};
use crate::screening::intake::IntakeError;

const EXPORT: &str = "name,age,salary,existingEmi,loanAmount\n\
                      Asha,30,50000,2000,100000\n\
                      Ravi,65,50000,2000,100000\n";

#[test]
fn reads_rows_as_raw_strings() {
    let inputs = ApplicantCsvImporter::from_reader(Cursor::new(EXPORT)).expect("import succeeds");

    assert_eq!(inputs.len(), 2);
    assert_eq!(inputs[0], eligible_applicant());
    assert_eq!(inputs[1].name, "Ravi");
    assert_eq!(inputs[1].age, "65");
}

#[test]
fn trims_cell_padding() {
    let export = "name,age,salary,existingEmi,loanAmount\nAsha, 30 , 50000 ,2000,100000\n";
    let inputs = ApplicantCsvImporter::from_reader(Cursor::new(export)).expect("import succeeds");

    assert_eq!(inputs[0].age, "30");
    assert_eq!(inputs[0].salary, "50000");
}

#[test]
fn blank_cells_surface_as_row_level_validation() {
    let export =
        "name,age,salary,existingEmi,loanAmount\n,,50000,2000,100000\nAsha,30,50000,2000,100000\n";
    let inputs = ApplicantCsvImporter::from_reader(Cursor::new(export)).expect("import succeeds");

    let engine = engine();
    let error = engine
        .check(inputs[0].clone())
        .expect_err("blank row fails intake");
    assert_eq!(error, IntakeError::MissingField);

    let outcome = engine
        .check(inputs[1].clone())
        .expect("second row is judged on its own");
    assert!(outcome.decision.eligible);
}

#[test]
fn missing_header_fails_the_import() {
    let export = "name,age,salary,existingEmi\nAsha,30,50000,2000\n";
    let error =
        ApplicantCsvImporter::from_reader(Cursor::new(export)).expect_err("import must fail");
    assert!(matches!(error, ScreeningImportError::Csv(_)));
}

#[test]
fn unreadable_path_fails_the_import() {
    let error = ApplicantCsvImporter::from_path("/definitely/not/here.csv")
        .expect_err("missing file must fail");
    assert!(matches!(error, ScreeningImportError::Io(_)));
}
