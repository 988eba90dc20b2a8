//! Field module: the rectangular operating area bounding all drone positions.
//!
//! A [`Field`] spans `[0, max_x] × [0, max_y]` with inclusive bounds and a
//! grid pitch that spaces the valid grid points. Two configurations are
//! supported without merging their semantics:
//!
//! - **Axis bounds**: independent `max_x` / `max_y` with the default pitch
//!   of 1.0 ([`Field::new`]).
//! - **Square with drone size**: a square field divided into cells the size
//!   of a drone ([`Field::square`]).
//!
//! # Example
//!
//! ```
//! use dronefield_core::field::Field;
//! use glam::Vec2;
//!
//! let field = Field::new(3.0, 3.0).unwrap();
//!
//! assert!(field.contains(Vec2::new(3.0, 3.0)));
//! assert!(!field.contains(Vec2::new(3.0, 4.0)));
//! assert!(field.is_grid_point(Vec2::new(1.0, 2.0)));
//! assert!(!field.is_grid_point(Vec2::new(1.5, 2.0)));
//! ```

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tolerance used when deciding whether a coordinate sits on a grid point.
///
/// Positions are sums of pitch-sized increments, so exact coordinates stay
/// exact; the epsilon only guards against float drift in user-entered values.
const GRID_EPSILON: f32 = 0.01;

/// Error raised when constructing a [`Field`] from invalid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FieldError {
    /// A field bound was negative. Bounds of zero are allowed (a field that
    /// is a single line, or a single point).
    #[error("field bound must be non-negative, got {0}")]
    NegativeBound(f32),
    /// The grid pitch was zero, negative, or not finite.
    #[error("grid pitch must be positive, got {0}")]
    InvalidPitch(f32),
}

/// The rectangular operating area for a set of drones.
///
/// Bounds are inclusive: a drone sitting exactly on `max_x` or `max_y` is
/// still inside the field. Grid points are spaced by the pitch, starting
/// at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Upper-right corner of the field.
    max: Vec2,
    /// Distance between adjacent grid points.
    pitch: f32,
}

impl Field {
    /// Creates a field with axis-independent bounds and a pitch of 1.0.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NegativeBound`] if either bound is negative
    /// or not finite.
    pub fn new(max_x: f32, max_y: f32) -> Result<Self, FieldError> {
        Self::with_pitch(max_x, max_y, 1.0)
    }

    /// Creates a field with explicit bounds and grid pitch.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::NegativeBound`] for a negative or non-finite
    /// bound, [`FieldError::InvalidPitch`] for a non-positive pitch.
    pub fn with_pitch(max_x: f32, max_y: f32, pitch: f32) -> Result<Self, FieldError> {
        for bound in [max_x, max_y] {
            if !bound.is_finite() || bound < 0.0 {
                return Err(FieldError::NegativeBound(bound));
            }
        }
        if !pitch.is_finite() || pitch <= 0.0 {
            return Err(FieldError::InvalidPitch(pitch));
        }
        Ok(Self {
            max: Vec2::new(max_x, max_y),
            pitch,
        })
    }

    /// Creates a square field of the given size, divided into cells of
    /// `drone_size` (the size/pitch variant).
    ///
    /// # Errors
    ///
    /// Same conditions as [`Field::with_pitch`].
    pub fn square(size: f32, drone_size: f32) -> Result<Self, FieldError> {
        Self::with_pitch(size, size, drone_size)
    }

    /// Returns the X coordinate of the upper-right corner.
    #[must_use]
    pub const fn max_x(&self) -> f32 {
        self.max.x
    }

    /// Returns the Y coordinate of the upper-right corner.
    #[must_use]
    pub const fn max_y(&self) -> f32 {
        self.max.y
    }

    /// Returns the distance between adjacent grid points.
    #[must_use]
    pub const fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Returns true if the position lies within the inclusive bounds
    /// `[0, max_x] × [0, max_y]`.
    #[must_use]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.max.x && pos.y >= 0.0 && pos.y <= self.max.y
    }

    /// Returns true if the position is a valid grid point: inside the field
    /// and within a small epsilon of a pitch multiple on both axes.
    #[must_use]
    pub fn is_grid_point(&self, pos: Vec2) -> bool {
        self.contains(pos) && self.on_pitch(pos.x) && self.on_pitch(pos.y)
    }

    fn on_pitch(&self, coord: f32) -> bool {
        let nearest = (coord / self.pitch).round() * self.pitch;
        (coord - nearest).abs() < GRID_EPSILON
    }

    /// Number of grid points along the X axis.
    ///
    /// Grid points run from the origin to the last pitch multiple that fits
    /// inside the bounds, inclusive on both ends.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn grid_points_x(&self) -> usize {
        (self.max.x / self.pitch).floor() as usize + 1
    }

    /// Number of grid points along the Y axis.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn grid_points_y(&self) -> usize {
        (self.max.y / self.pitch).floor() as usize + 1
    }

    /// Coordinate of the grid point at the given index along one axis.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn grid_coord(&self, index: usize) -> f32 {
        index as f32 * self.pitch
    }
}

// =============================================================================
// Tests
// =============================================================================
