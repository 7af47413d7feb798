//! Cost optimisation over the stores around a shopper.
//!
//! This crate provides the pricing pipeline and [`BasketPlanner`], the default
//! implementation of the [`Planner`](basket_core::Planner) trait. A request
//! flows through the same stages whether it arrives through the planner or the
//! free functions:
//!
//! 1. [`resolve_candidates`] keeps the stores inside the search radius,
//!    nearest first.
//! 2. [`PriceTable::collect`] looks every requested item up at every candidate
//!    once, degrading failed lookups to "unavailable".
//! 3. [`search_availability`], [`cheapest_single_store`] and
//!    [`cheapest_combination`] read the table to answer the three questions a
//!    shopper asks.
//!
//! The multi-store split is a greedy per-item choice followed by a
//! nearest-first visiting order. It is not a travelling-salesman optimum.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod availability;
mod candidates;
mod multi_store;
mod planner;
mod single_store;
mod table;

pub use availability::search_availability;
pub use candidates::resolve_candidates;
pub use multi_store::cheapest_combination;
pub use planner::{BasketPlanner, DEFAULT_RADIUS_MILES, PlannerConfig};
pub use single_store::cheapest_single_store;
pub use table::PriceTable;
