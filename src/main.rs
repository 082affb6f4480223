use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use clap::{Args, Parser, Subcommand};
use loan_screening::config::AppConfig;
use loan_screening::error::AppError;
use loan_screening::screening::{
    screening_router, ApplicantCsvImporter, ApplicantForm, ApplicantInput, EligibilityEngine,
    EvaluationOutcome, FormDisplay, FormField,
};
use loan_screening::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Loan Eligibility Screener",
    about = "Screen loan applicants from the command line or behind the HTTP API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Screen a single applicant and print the decision
    Check(CheckArgs),
    /// Screen every applicant row in a CSV export
    Batch(BatchArgs),
    /// Walk the applicant form contract through a scripted session
    Demo,
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Applicant name
    #[arg(long)]
    name: Option<String>,
    /// Applicant age in years
    #[arg(long)]
    age: Option<String>,
    /// Monthly salary
    #[arg(long)]
    salary: Option<String>,
    /// Existing EMI and debt obligations per month
    #[arg(long)]
    existing_emi: Option<String>,
    /// Requested loan amount
    #[arg(long)]
    loan_amount: Option<String>,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// CSV export with columns name,age,salary,existingEmi,loanAmount
    #[arg(long)]
    csv: PathBuf,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Check(args) => run_check(args),
        Command::Batch(args) => run_batch(args),
        Command::Demo => run_demo(),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let engine = Arc::new(EligibilityEngine::default());
    let app = screening_router(engine)
        .merge(
            Router::new()
                .route("/health", get(healthcheck))
                .route("/ready", get(readiness_endpoint))
                .route("/metrics", get(metrics_endpoint))
                .with_state(state),
        )
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "loan screening service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let CheckArgs {
        name,
        age,
        salary,
        existing_emi,
        loan_amount,
    } = args;

    // Omitted flags flow through as empty fields so the intake validator
    // owns the missing-field message.
    let input = ApplicantInput {
        name: name.unwrap_or_default(),
        age: age.unwrap_or_default(),
        salary: salary.unwrap_or_default(),
        existing_emi: existing_emi.unwrap_or_default(),
        loan_amount: loan_amount.unwrap_or_default(),
    };

    let today = Local::now().date_naive();
    println!("Loan eligibility check (evaluated {today})");

    let engine = EligibilityEngine::default();
    match engine.check(input) {
        Ok(outcome) => {
            println!();
            render_outcome(&outcome);
        }
        Err(err) => println!("\n{err}"),
    }

    Ok(())
}

fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs { csv } = args;

    let inputs = ApplicantCsvImporter::from_path(csv)?;
    let today = Local::now().date_naive();
    println!("Screening {} applicant(s) (evaluated {today})", inputs.len());

    let engine = EligibilityEngine::default();
    for (index, input) in inputs.into_iter().enumerate() {
        println!("\nRow {}", index + 1);
        match engine.check(input) {
            Ok(outcome) => render_outcome(&outcome),
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

fn run_demo() -> Result<(), AppError> {
    let engine = EligibilityEngine::default();
    let mut form = ApplicantForm::new();

    println!("Applicant form demo");
    println!("\nSubmitting the empty form");
    form = form.submit(&engine);
    render_form_display(&form);

    println!("\nFilling in the fields");
    for (field, value) in [
        (FormField::Name, "Asha"),
        (FormField::Age, "30"),
        (FormField::Salary, "50000"),
        (FormField::ExistingEmi, "2000"),
        (FormField::LoanAmount, "100000"),
    ] {
        form = form.set(field, value);
        println!("- {}: {}", field.label(), form.value(field));
    }

    form = form.submit(&engine);
    render_form_display(&form);

    println!("\nEditing {} drops the displayed result", FormField::Age.label());
    form = form.set(FormField::Age, "65");
    println!("- display cleared: {}", form.display().is_none());

    form = form.submit(&engine);
    render_form_display(&form);

    Ok(())
}

fn render_outcome(outcome: &EvaluationOutcome) {
    println!("Applicant: {}", outcome.applicant);
    println!(
        "Proposed EMI: ₹{:.2} | DTI: {:.2}%",
        outcome.metrics.proposed_emi, outcome.metrics.dti_percent
    );
    println!("{}", outcome.decision.message);
}

fn render_form_display(form: &ApplicantForm) {
    match form.display() {
        Some(FormDisplay::Outcome(outcome)) => {
            println!();
            render_outcome(outcome);
        }
        Some(FormDisplay::Blocked(message)) => println!("\n{message}"),
        None => println!("\n(nothing submitted yet)"),
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
