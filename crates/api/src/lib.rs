//! HTTP API for the customer self-service portal: config, routing, and
//! request/response mapping.

pub mod app;
pub mod config;
pub mod middleware;
