//! Use cases (application services)

pub mod hub_controller;
pub mod run_lookup;
