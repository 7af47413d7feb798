//! Shared test harness modules for the basket CLI.

use super::*;

mod helpers;
mod plan_steps;
