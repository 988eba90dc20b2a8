//! Mission orchestration: validated setup, sequential simulation, detection.
//!
//! A [`Mission`] owns the field, the registered drones, and the detection
//! configuration. Drones are validated as they are added; an off-grid start
//! is returned as an error value so the caller decides whether to terminate
//! (the default console front end aborts the whole run). Once set up, a run
//! is infallible: each drone is simulated strictly sequentially in
//! registration order, then all paths are compared pairwise.
//!
//! # Example
//!
//! ```
//! use dronefield_core::field::Field;
//! use dronefield_core::flight::parse_moves;
//! use dronefield_core::mission::Mission;
//! use glam::Vec2;
//!
//! let field = Field::new(3.0, 3.0).unwrap();
//! let mut mission = Mission::new(field);
//!
//! mission.add_drone(Vec2::new(0.0, 0.0), parse_moves("EE").unwrap()).unwrap();
//! mission.add_drone(Vec2::new(2.0, 0.0), parse_moves("").unwrap()).unwrap();
//!
//! let report = mission.run();
//! assert_eq!(report.intersections().len(), 1);
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::field::Field;
use crate::flight::{simulate, Direction, FlightPath};
use crate::intersect::{
    detect_intersections, DetectionPolicy, DroneId, Intersection, DEFAULT_TOLERANCE,
};

/// Error raised while registering drones for a mission.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MissionError {
    /// The drone's initial position is not a grid point of the field.
    ///
    /// Fatal for the run by default: no partial results are reported for
    /// the other drones.
    #[error("initial position ({x}, {y}) is not a grid point of the field")]
    OffGridStart {
        /// X coordinate of the rejected position.
        x: f32,
        /// Y coordinate of the rejected position.
        y: f32,
    },
}

/// One registered drone: where it starts and how it moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneSetup {
    /// Validated initial grid position.
    pub initial: Vec2,
    /// The drone's movement sequence.
    pub moves: Vec<Direction>,
}

/// A configured simulation run over one field.
#[derive(Debug, Clone, PartialEq)]
pub struct Mission {
    field: Field,
    drones: Vec<DroneSetup>,
    policy: DetectionPolicy,
    tolerance: f32,
}

impl Mission {
    /// Creates an empty mission over the given field with the default
    /// detection policy and tolerance.
    #[must_use]
    pub fn new(field: Field) -> Self {
        Self {
            field,
            drones: Vec::new(),
            policy: DetectionPolicy::default(),
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Sets the detection policy.
    #[must_use]
    pub fn with_policy(mut self, policy: DetectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the coincidence tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Registers a drone, validating its initial position.
    ///
    /// # Errors
    ///
    /// Returns [`MissionError::OffGridStart`] if `initial` is not a grid
    /// point inside the field.
    pub fn add_drone(
        &mut self,
        initial: Vec2,
        moves: Vec<Direction>,
    ) -> Result<DroneId, MissionError> {
        if !self.field.is_grid_point(initial) {
            return Err(MissionError::OffGridStart {
                x: initial.x,
                y: initial.y,
            });
        }
        self.drones.push(DroneSetup { initial, moves });
        Ok(DroneId::from_index(self.drones.len() - 1))
    }

    /// Returns the field this mission runs over.
    #[must_use]
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Number of registered drones.
    #[must_use]
    pub fn drone_count(&self) -> usize {
        self.drones.len()
    }

    /// Simulates every drone in registration order, then detects
    /// intersections over the finished paths.
    ///
    /// Drones are independent: each flight is a pure function of its own
    /// setup and the field, so the report is identical across repeated runs.
    #[must_use]
    pub fn run(&self) -> MissionReport {
        let paths: Vec<FlightPath> = self
            .drones
            .iter()
            .map(|drone| simulate(drone.initial, &drone.moves, &self.field))
            .collect();

        let intersections = detect_intersections(&paths, self.policy, self.tolerance);

        info!(
            drones = paths.len(),
            intersections = intersections.len(),
            "mission complete"
        );

        MissionReport {
            paths,
            intersections,
        }
    }
}

/// The derived, read-only outcome of a mission run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionReport {
    paths: Vec<FlightPath>,
    intersections: Vec<Intersection>,
}

impl MissionReport {
    /// Returns all flight paths, in drone registration order.
    #[must_use]
    pub fn paths(&self) -> &[FlightPath] {
        &self.paths
    }

    /// Returns all detected intersections in deterministic order.
    #[must_use]
    pub fn intersections(&self) -> &[Intersection] {
        &self.intersections
    }

    /// Number of drones that flew in this mission.
    #[must_use]
    pub fn drone_count(&self) -> usize {
        self.paths.len()
    }

    /// Iterates over final positions paired with their drone IDs.
    pub fn final_positions(&self) -> impl Iterator<Item = (DroneId, Vec2)> + '_ {
        self.paths
            .iter()
            .enumerate()
            .map(|(index, path)| (DroneId::from_index(index), path.final_position()))
    }
}

// =============================================================================
// Tests
// =============================================================================
