//! Atlas - Business Location Intelligence
//!
//! The POI data pipeline behind the Atlas dashboard: a query-building
//! client for the remote table store, a fail-soft paginated harvest
//! loop, and the aggregation engine that derives every dashboard
//! statistic. The `server` module exposes the REST API over the
//! pipeline; the `cli` module is a thin HTTP client over that API.

pub mod catalog;
pub mod cli;
pub mod engine;
pub mod fetch;
pub mod layers;
pub mod model;
pub mod predict;
pub mod server;
pub mod store;
