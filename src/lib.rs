//! Delivery gateway library crate.
//!
//! # Purpose
//! Exposes the gateway API surface, catalog cache, refresh policy,
//! configuration, and the order store for use by the binary and tests.
//!
//! # Notes
//! Module boundaries mirror the request flow: upstream fetch, cache, refresh
//! policy, then the HTTP handlers on top.
pub mod api;
pub mod app;
pub mod cache;
pub mod config;
pub mod model;
pub mod observability;
pub mod refresh;
pub mod store;
pub mod upstream;
