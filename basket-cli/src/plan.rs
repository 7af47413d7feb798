//! Plan command implementation for the basket CLI.

use basket_core::{
    LocationQuery, LocationResolver, PlanError, PlanRequest, PlanResponse, Planner, RequestContext,
};
use basket_data::{GazetteerResolver, JsonCatalog, SyntheticCatalog};
use basket_planner::{BasketPlanner, PlannerConfig};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use basket_fs::open_utf8_file;

use crate::{
    ARG_PLAN_CATALOG, ARG_PLAN_RADIUS_MILES, ARG_PLAN_REQUEST, ARG_PLAN_SYNTHETIC_SEED,
    ARG_PLAN_TAX_RATE, CliError, ENV_PLAN_CATALOG, ENV_PLAN_REQUEST,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Price a shopping list around a location. The request is a \
                 JSON file naming the location and the items; stores come \
                 from a JSON catalog file or are generated from a seed.",
    about = "Plan the cheapest grocery trip"
)]
#[ortho_config(prefix = "BASKET")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing a plan request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to a JSON store catalog.
    #[arg(long = ARG_PLAN_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Generate a synthetic catalog around the shopper with this seed.
    #[arg(long = ARG_PLAN_SYNTHETIC_SEED, value_name = "seed")]
    #[serde(default)]
    pub(crate) synthetic_seed: Option<u64>,
    /// Only consider stores within this many miles (default 100).
    #[arg(long = ARG_PLAN_RADIUS_MILES, value_name = "miles")]
    #[serde(default)]
    pub(crate) radius_miles: Option<f64>,
    /// Sales tax rate applied to item costs, e.g. 0.07 (default 0).
    #[arg(long = ARG_PLAN_TAX_RATE, value_name = "rate")]
    #[serde(default)]
    pub(crate) tax_rate: Option<f64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Where the store catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogSource {
    /// A JSON fixture file.
    File(Utf8PathBuf),
    /// Stores generated around the shopper.
    Synthetic { seed: u64 },
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Catalog to plan against.
    pub(crate) catalog: CatalogSource,
    /// Search radius, cost model and tax rate.
    pub(crate) planner: PlannerConfig,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)?;
        if let CatalogSource::File(path) = &self.catalog {
            Self::require_existing(path, ARG_PLAN_CATALOG)?;
        }
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match basket_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;

        let catalog = match (args.catalog, args.synthetic_seed) {
            (Some(path), None) => CatalogSource::File(path),
            (None, Some(seed)) => CatalogSource::Synthetic { seed },
            (Some(_), Some(_)) => {
                return Err(CliError::ConflictingArguments {
                    first: ARG_PLAN_CATALOG,
                    second: ARG_PLAN_SYNTHETIC_SEED,
                });
            }
            (None, None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_PLAN_CATALOG,
                    env: ENV_PLAN_CATALOG,
                });
            }
        };

        let mut planner = PlannerConfig::default();
        if let Some(radius_miles) = args.radius_miles {
            planner = planner.with_radius_miles(radius_miles);
        }
        if let Some(tax_rate) = args.tax_rate {
            planner = planner.with_tax_rate(tax_rate);
        }

        Ok(Self {
            request_path,
            catalog,
            planner,
        })
    }
}

/// Builds a planner for the current plan invocation.
pub(super) trait PlannerBuilder {
    fn build(
        &self,
        config: &PlanConfig,
        request: &PlanRequest,
    ) -> Result<Box<dyn Planner>, CliError>;
}

pub(super) struct DefaultPlannerBuilder;

impl PlannerBuilder for DefaultPlannerBuilder {
    fn build(
        &self,
        config: &PlanConfig,
        request: &PlanRequest,
    ) -> Result<Box<dyn Planner>, CliError> {
        let gazetteer = GazetteerResolver::new();
        let catalog = match &config.catalog {
            CatalogSource::File(path) => JsonCatalog::from_path(path)?,
            CatalogSource::Synthetic { seed } => {
                synthetic_catalog(*seed, &request.location, &gazetteer)?
            }
        };
        Ok(Box::new(BasketPlanner::with_config(
            catalog.clone(),
            catalog,
            gazetteer,
            config.planner,
        )))
    }
}

/// Generate stores around wherever `location` resolves to.
fn synthetic_catalog(
    seed: u64,
    location: &LocationQuery,
    gazetteer: &GazetteerResolver,
) -> Result<JsonCatalog, PlanError> {
    let generator = SyntheticCatalog::new(seed);
    let catalog = match location {
        LocationQuery::Text(text) => {
            let resolved = gazetteer.resolve(text)?;
            match resolved.city {
                Some(city) => generator.with_city(city),
                None => generator,
            }
            .generate(resolved.location)
        }
        LocationQuery::Coordinates(origin) => generator.generate(*origin),
    };
    log::debug!("planning against a synthetic catalog with seed {seed}");
    Ok(catalog)
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    let builder = DefaultPlannerBuilder;
    run_plan_with(args, &builder, &mut stdout)
}

pub(super) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn PlannerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let response = execute_plan(args, builder)?;
    write_plan_response(writer, &response)
}

fn execute_plan(args: PlanArgs, builder: &dyn PlannerBuilder) -> Result<PlanResponse, CliError> {
    let config = resolve_plan_config(args)?;
    let request = load_plan_request(&config.request_path)?;
    let planner = builder.build(&config, &request)?;
    Ok(planner.plan(&request, &RequestContext::new())?)
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`PlanRequest`] from disk.
pub(super) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequest, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPlanRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

fn write_plan_response(writer: &mut dyn Write, response: &PlanResponse) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerialisePlanResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WritePlanOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
