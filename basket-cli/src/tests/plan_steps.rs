//! Behaviour-driven step definitions driving the plan CLI scenarios.

use super::helpers::{
    milk_and_bread_request, three_store_document, utf8_tempdir, write_catalog, write_request,
    write_utf8,
};
use super::*;
use crate::plan::{PlanConfig, PlannerBuilder, run_plan_with};
use basket_core::test_support::{FixedLocationResolver, ORIGIN, three_store_catalog};
use basket_core::{LocationError, PlanError, PlanRequest, Planner};
use basket_planner::BasketPlanner;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct PlanWorld {
    _tmp: TempDir,
    root: Utf8PathBuf,
    request_path: Utf8PathBuf,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl PlanWorld {
    fn new() -> Self {
        let (tmp, root) = utf8_tempdir();
        let request_path = root.join("request.json");
        Self {
            _tmp: tmp,
            root,
            request_path,
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec![
            "basket".to_owned(),
            "plan".to_owned(),
            self.request_path.as_str().to_owned(),
        ];
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn run_with(&self, builder: &dyn PlannerBuilder) {
        let parsed = Cli::try_parse_from(self.build_command_line()).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| match cli.command {
            Command::Plan(args) => {
                let mut buffer = self.stdout.borrow_mut();
                run_plan_with(args, builder, &mut *buffer)
            }
        });
        self.result.replace(Some(outcome));
    }

    fn printed_json(&self) -> serde_json::Value {
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        serde_json::from_str(&stdout).expect("output should be a JSON plan")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |result| {
            result
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld::new()
}

/// Plans against the in-memory three-store fixture wherever the shopper is.
struct InMemoryPlannerBuilder;

impl PlannerBuilder for InMemoryPlannerBuilder {
    fn build(
        &self,
        config: &PlanConfig,
        _request: &PlanRequest,
    ) -> Result<Box<dyn Planner>, CliError> {
        let catalog = three_store_catalog();
        Ok(Box::new(BasketPlanner::with_config(
            catalog.clone(),
            catalog,
            FixedLocationResolver(ORIGIN),
            config.planner,
        )))
    }
}

#[given("a catalog file with three stores near Oxford")]
fn catalog_file_exists(#[from(world)] world: &PlanWorld) {
    let path = world.root.join("catalog.json");
    write_catalog(&path, &three_store_document());
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_PLAN_CATALOG}"), path.into_string()]);
}

#[given("a synthetic catalog seed of {seed:u64}")]
fn synthetic_seed(#[from(world)] world: &PlanWorld, seed: u64) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_PLAN_SYNTHETIC_SEED}"), seed.to_string()]);
}

#[given("a request for milk and bread from {place}")]
fn request_exists(#[from(world)] world: &PlanWorld, place: String) {
    let request = milk_and_bread_request(place.trim_matches('"'));
    write_request(&world.request_path, &request);
}

#[given("the plan request contains invalid JSON")]
fn request_contains_invalid_json(#[from(world)] world: &PlanWorld) {
    write_utf8(&world.request_path, b"{ not valid json");
}

#[when("I run the plan command")]
fn run_plan_command(#[from(world)] world: &PlanWorld) {
    world.run_with(&crate::plan::DefaultPlannerBuilder);
}

#[when("I run the plan command with the in-memory planner")]
fn run_plan_command_in_memory(#[from(world)] world: &PlanWorld) {
    world.run_with(&InMemoryPlannerBuilder);
}

#[then("the command succeeds and prints JSON output")]
fn command_succeeds(#[from(world)] world: &PlanWorld) {
    let borrowed = world.result.borrow();
    let result = borrowed.as_ref().expect("result recorded");
    if let Err(err) = result {
        panic!("expected success, found {err}");
    }
    assert!(world.printed_json().is_object());
}

#[then("the printed multi-store total is {total:f64}")]
fn printed_multi_store_total(#[from(world)] world: &PlanWorld, total: f64) {
    let printed = world.printed_json()["multiStore"]["totalCost"]
        .as_f64()
        .expect("multi-store total");
    assert!((printed - total).abs() < 1e-9);
}

#[then("the printed single-store choice is {store}")]
fn printed_single_store(#[from(world)] world: &PlanWorld, store: String) {
    assert_eq!(
        world.printed_json()["singleStore"]["storeId"],
        store.trim_matches('"')
    );
}

#[then("the printed plan considered {count:u64} candidate stores")]
fn printed_candidates(#[from(world)] world: &PlanWorld, count: u64) {
    let printed = world.printed_json();
    assert_eq!(printed["diagnostics"]["candidatesEvaluated"], count);
    assert_eq!(
        printed["candidates"].as_array().map(Vec::len),
        Some(usize::try_from(count).expect("count fits usize"))
    );
}

#[then("the command fails because the catalog is missing")]
fn command_fails_missing_catalog(#[from(world)] world: &PlanWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, .. } => assert_eq!(*field, ARG_PLAN_CATALOG),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[then("the command fails because the request JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &PlanWorld) {
    match &*world.error() {
        CliError::ParsePlanRequest { .. } => {}
        other => panic!("expected ParsePlanRequest, found {other:?}"),
    }
}

#[then("the command fails because the location is unknown")]
fn command_fails_unknown_location(#[from(world)] world: &PlanWorld) {
    match &*world.error() {
        CliError::Plan {
            source: PlanError::Location(LocationError::NotFound { query }),
        } => assert_eq!(query, "Atlantis"),
        other => panic!("expected an unknown location, found {other:?}"),
    }
}

macro_rules! register_plan_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/plan_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: PlanWorld) {
            let _ = world;
        }
    };
}

register_plan_scenario!(plan_catalog_file, "planning a request against a catalog file");
register_plan_scenario!(
    plan_synthetic_catalog,
    "planning a request against a synthetic catalog"
);
register_plan_scenario!(plan_injected_planner, "planning with an injected planner");
register_plan_scenario!(plan_missing_catalog, "rejecting a request without a catalog");
register_plan_scenario!(plan_invalid_json, "rejecting invalid JSON input");
register_plan_scenario!(plan_unknown_location, "reporting an unknown location");
