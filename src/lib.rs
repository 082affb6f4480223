//! Loan eligibility screening service: a pure rule evaluator wrapped by thin
//! HTTP, CLI, and CSV batch shells that feed it raw applicant form fields.

pub mod config;
pub mod error;
pub mod screening;
pub mod telemetry;
