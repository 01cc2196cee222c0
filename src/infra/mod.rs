//! Infrastructure adapters and runtime bootstrap.

pub mod catalog;
pub mod error;
pub mod http;
pub mod routes;
pub mod telemetry;
