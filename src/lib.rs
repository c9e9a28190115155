//! Library exports for devops-info-service, shared between the binary and tests.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod startup;
pub mod state;
pub mod utils;
