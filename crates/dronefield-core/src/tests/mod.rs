//! Cross-module tests for the simulation core.
//!
//! - `integration.rs`: end-to-end mission runs, including the worked
//!   examples from the movement and detection contracts
//! - `determinism.rs`: identical inputs must produce identical reports
//! - `properties.rs`: property-based invariants over random fields and
//!   movement strings
//! - `helpers.rs`: shared factory functions

mod determinism;
mod helpers;

pub use helpers::*;
