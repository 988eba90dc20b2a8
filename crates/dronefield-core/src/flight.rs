//! Flight module: movement strings and path simulation.
//!
//! A drone's flight is a single forward pass over its movement sequence.
//! Each [`Direction`] displaces the drone by one pitch along an axis. The
//! first candidate step that would leave the field stops the flight: the
//! out-of-bounds position is never appended, no further moves are applied,
//! and the cutoff is recorded as a [`Truncation`] rather than an error.
//!
//! # Example
//!
//! ```
//! use dronefield_core::field::Field;
//! use dronefield_core::flight::{parse_moves, simulate};
//! use glam::Vec2;
//!
//! let field = Field::new(3.0, 3.0).unwrap();
//! let moves = parse_moves("NNEE").unwrap();
//! let path = simulate(Vec2::new(1.0, 1.0), &moves, &field);
//!
//! assert_eq!(path.final_position(), Vec2::new(3.0, 3.0));
//! assert_eq!(path.len(), 5);
//! assert!(!path.is_truncated());
//! ```

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::field::Field;

// =============================================================================
// Directions
// =============================================================================

/// One of the four compass directions a drone can move in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Up: `+Y`.
    North,
    /// Down: `-Y`.
    South,
    /// Right: `+X`.
    East,
    /// Left: `-X`.
    West,
}

impl Direction {
    /// All directions, in symbol order.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Parses a single movement symbol, case-insensitively.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Returns the canonical symbol for this direction.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// Returns the unit displacement for this direction.
    #[must_use]
    pub const fn unit(self) -> Vec2 {
        match self {
            Self::North => Vec2::new(0.0, 1.0),
            Self::South => Vec2::new(0.0, -1.0),
            Self::East => Vec2::new(1.0, 0.0),
            Self::West => Vec2::new(-1.0, 0.0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Error for a movement string containing a symbol outside `N/S/E/W`.
///
/// This is the recoverable branch of the error taxonomy: the console layer
/// re-prompts for the whole string rather than aborting the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid move '{symbol}' at position {index}")]
pub struct InvalidMove {
    /// The offending character.
    pub symbol: char,
    /// Zero-based index of the character in the movement string.
    pub index: usize,
}

/// Parses a movement string into a direction sequence.
///
/// Symbols are accepted in either case. An empty string is a valid, empty
/// sequence.
///
/// # Errors
///
/// Returns [`InvalidMove`] naming the first symbol that is not one of
/// `N`, `S`, `E`, `W`.
pub fn parse_moves(input: &str) -> Result<Vec<Direction>, InvalidMove> {
    input
        .chars()
        .enumerate()
        .map(|(index, symbol)| {
            Direction::from_symbol(symbol).ok_or(InvalidMove { symbol, index })
        })
        .collect()
}

// =============================================================================
// Flight paths
// =============================================================================

/// Record of a flight that stopped early at the field boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Truncation {
    /// Index of the move that would have left the field.
    pub move_index: usize,
    /// The out-of-bounds position that move would have reached.
    pub attempted: Vec2,
}

/// The ordered sequence of positions a drone actually visits.
///
/// A path always contains at least the initial position. It is built once by
/// [`simulate`] and never mutated afterward. When the flight was cut short,
/// [`FlightPath::truncation`] describes the rejected step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightPath {
    positions: Vec<Vec2>,
    truncation: Option<Truncation>,
}

impl FlightPath {
    /// Returns every visited position, starting with the initial one.
    #[must_use]
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Returns the last in-bounds position reached.
    #[must_use]
    pub fn final_position(&self) -> Vec2 {
        // The path always holds at least the initial position.
        self.positions[self.positions.len() - 1]
    }

    /// Number of positions in the path, including the initial one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// A path is never empty; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns true if the flight stopped before exhausting its moves.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.truncation.is_some()
    }

    /// Returns the truncation record, if the flight was cut short.
    #[must_use]
    pub fn truncation(&self) -> Option<Truncation> {
        self.truncation
    }
}

/// Simulates one drone's flight across the field.
///
/// The path starts at `initial`. Each move displaces the drone by one pitch
/// in its direction; the first candidate position outside the field stops
/// the flight immediately. Leaving the field is a normal termination
/// condition, not an error.
///
/// The caller is responsible for `initial` being a valid grid point; see
/// [`crate::mission::Mission::add_drone`] for the validating entry point.
#[must_use]
pub fn simulate(initial: Vec2, moves: &[Direction], field: &Field) -> FlightPath {
    let mut positions = Vec::with_capacity(moves.len() + 1);
    positions.push(initial);

    let mut current = initial;
    let mut truncation = None;

    for (move_index, direction) in moves.iter().enumerate() {
        let candidate = current + direction.unit() * field.pitch();
        if !field.contains(candidate) {
            debug!(
                move_index,
                x = candidate.x,
                y = candidate.y,
                "flight stopped at field boundary"
            );
            truncation = Some(Truncation {
                move_index,
                attempted: candidate,
            });
            break;
        }
        current = candidate;
        positions.push(current);
    }

    FlightPath {
        positions,
        truncation,
    }
}

// =============================================================================
// Tests
// =============================================================================
