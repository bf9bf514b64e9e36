//! SpaceX dashboard core: validated upstream reads behind a revalidating
//! cache, plus the aggregations the dashboard views are built from.
#![recursion_limit = "256"]

pub mod analytics;
pub mod cache;
pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod schema;
pub mod services;
pub mod utils;
