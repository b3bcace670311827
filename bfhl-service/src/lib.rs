//! bfhl-service: a single multi-operation endpoint plus a liveness probe.
//!
//! `POST /bfhl` takes a JSON object carrying exactly one recognized key and
//! dispatches to the matching computation; `GET /health` reports liveness.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
