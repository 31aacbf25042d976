use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

mod demo;
mod matrix;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Runner for the geomath vector, matrix and 2D shape routines")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Walk through vector, matrix and shape predicates and print each result
    Demo,
    /// Determinant and inverse of a row-major 2x2, 3x3 or 4x4 matrix
    Matrix {
        /// Comma-separated values, e.g. "1,2,3,4"
        #[arg(long, allow_hyphen_values = true)]
        values: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo => run_demo(),
        Action::Matrix { values } => run_matrix(&values),
        Action::Report => report(),
    }
}

fn run_demo() -> Result<()> {
    for step in demo::steps() {
        tracing::info!(step = step.label, value = %step.value, "demo");
        println!("{}: {}", step.label, step.value);
    }
    Ok(())
}

fn run_matrix(values: &str) -> Result<()> {
    let parsed = matrix::parse_values(values)?;
    let summary = matrix::summarize(&parsed)?;
    if summary.singular {
        tracing::warn!(order = summary.order, "singular matrix; inverse is the identity fallback");
    }
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::report_doc();
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
