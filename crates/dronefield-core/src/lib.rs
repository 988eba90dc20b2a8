//! # Dronefield Core
//!
//! Deterministic simulation of drones moving on a discrete 2D grid.
//!
//! Drones start on grid points of a bounded [`field::Field`], follow movement
//! strings of `N/S/E/W` steps, and stop silently at the first step that would
//! leave the field. Finished paths are compared pairwise for coincidence
//! within a small tolerance.
//!
//! The crate is pure: no I/O, no global state, no randomness. All console
//! interaction lives in the `dronefield-cli` binary.
//!
//! ## Usage
//!
//! ```
//! use dronefield_core::{Field, Mission};
//! use dronefield_core::flight::parse_moves;
//! use glam::Vec2;
//!
//! let field = Field::new(3.0, 3.0)?;
//! let mut mission = Mission::new(field);
//! mission.add_drone(Vec2::new(1.0, 1.0), parse_moves("NNEE")?)?;
//!
//! let report = mission.run();
//! assert_eq!(report.paths()[0].final_position(), Vec2::new(3.0, 3.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod field;
pub mod flight;
pub mod intersect;
pub mod mission;

// Re-exports for convenience
pub use field::{Field, FieldError};
pub use flight::{parse_moves, simulate, Direction, FlightPath, InvalidMove, Truncation};
pub use intersect::{
    detect_intersections, DetectionPolicy, DroneId, Intersection, DEFAULT_TOLERANCE,
};
pub use mission::{Mission, MissionError, MissionReport};

#[cfg(test)]
mod tests;
