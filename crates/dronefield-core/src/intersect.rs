//! Intersection detection between drone flight paths.
//!
//! Detection compares drone pairs in increasing `(i, j)` order with `i < j`,
//! and positions within a pair in path order, so the output is stable and
//! reproducible for identical inputs. Two policies exist and are never
//! merged:
//!
//! - [`DetectionPolicy::FullPath`]: every visited position of one path
//!   against every visited position of the other; each coincident pair of
//!   positions yields its own record, no deduplication.
//! - [`DetectionPolicy::FinalOnly`]: only final positions, at most one
//!   record per drone pair.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::flight::FlightPath;

/// Default coincidence tolerance.
///
/// Positions are sums of pitch increments and remain exact when the pitch
/// is exact; the tolerance only guards against float drift.
pub const DEFAULT_TOLERANCE: f32 = 0.01;

// =============================================================================
// Drone identity
// =============================================================================

/// One-based identifier for a drone within a mission.
///
/// Identifiers are assigned in registration order, starting at 1, matching
/// how drones are numbered in all user-facing output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct DroneId(usize);

impl DroneId {
    /// Creates a drone ID from its one-based number.
    #[must_use]
    pub const fn new(number: usize) -> Self {
        Self(number)
    }

    /// Creates a drone ID from a zero-based slice index.
    #[must_use]
    pub(crate) const fn from_index(index: usize) -> Self {
        Self(index + 1)
    }

    /// Returns the one-based drone number.
    #[must_use]
    pub const fn number(self) -> usize {
        self.0
    }
}

impl fmt::Display for DroneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "drone {}", self.0)
    }
}

// =============================================================================
// Detection
// =============================================================================

/// Which positions of each path participate in detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DetectionPolicy {
    /// Compare every visited position of both paths (default).
    #[default]
    FullPath,
    /// Compare only the final position of each path.
    FinalOnly,
}

/// A pair of drones found at coincident positions.
///
/// `first` is always the lower drone number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    /// The lower-numbered drone of the pair.
    pub first: DroneId,
    /// The higher-numbered drone of the pair.
    pub second: DroneId,
    /// The coincident position (taken from the first drone's path).
    pub position: Vec2,
}

impl fmt::Display for Intersection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Drone {} and drone {} intersect at ({}, {})",
            self.first.number(),
            self.second.number(),
            self.position.x,
            self.position.y
        )
    }
}

/// Per-axis coincidence check.
fn coincident(a: Vec2, b: Vec2, tolerance: f32) -> bool {
    (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance
}

/// Finds all pairwise intersections between the given flight paths.
///
/// Paths are indexed in registration order; the resulting records carry
/// one-based [`DroneId`]s with `first < second`. Output order is
/// deterministic: increasing drone pairs, then path order within a pair.
/// Running detection twice over the same paths yields identical output.
#[must_use]
pub fn detect_intersections(
    paths: &[FlightPath],
    policy: DetectionPolicy,
    tolerance: f32,
) -> Vec<Intersection> {
    let mut intersections = Vec::new();

    for i in 0..paths.len() {
        for j in (i + 1)..paths.len() {
            let record = |position: Vec2| Intersection {
                first: DroneId::from_index(i),
                second: DroneId::from_index(j),
                position,
            };

            match policy {
                DetectionPolicy::FullPath => {
                    for &p in paths[i].positions() {
                        for &q in paths[j].positions() {
                            if coincident(p, q, tolerance) {
                                intersections.push(record(p));
                            }
                        }
                    }
                }
                DetectionPolicy::FinalOnly => {
                    let p = paths[i].final_position();
                    if coincident(p, paths[j].final_position(), tolerance) {
                        intersections.push(record(p));
                    }
                }
            }
        }
    }

    intersections
}

// =============================================================================
// Tests
// =============================================================================
