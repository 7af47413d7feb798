//! Command-line interface for pricing grocery lists with the basket engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;
use plan::{PlanArgs, run_plan};

pub(crate) const ARG_PLAN_REQUEST: &str = "request";
pub(crate) const ARG_PLAN_CATALOG: &str = "catalog";
pub(crate) const ARG_PLAN_SYNTHETIC_SEED: &str = "synthetic-seed";
pub(crate) const ARG_PLAN_RADIUS_MILES: &str = "radius-miles";
pub(crate) const ARG_PLAN_TAX_RATE: &str = "tax-rate";
pub(crate) const ENV_PLAN_REQUEST: &str = "BASKET_CMDS_PLAN_REQUEST_PATH";
pub(crate) const ENV_PLAN_CATALOG: &str = "BASKET_CMDS_PLAN_CATALOG";

/// Run the basket CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "basket",
    about = "Find the cheapest way to buy a grocery list nearby",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Price a shopping list at one store and split across several.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
