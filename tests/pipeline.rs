//! End-to-end tests of the record store, query pipeline and output modes.

#[path = "pipeline/fixtures.rs"]
mod fixtures;
#[path = "pipeline/loading.rs"]
mod loading;
#[path = "pipeline/properties.rs"]
mod properties;
#[path = "pipeline/scenarios.rs"]
mod scenarios;
