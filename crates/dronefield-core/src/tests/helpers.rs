//! Shared factory functions for the cross-module tests.

use glam::Vec2;

use crate::field::Field;
use crate::flight::{parse_moves, simulate, FlightPath};
use crate::mission::Mission;

/// Builds a unit-pitch field with the given bounds.
pub fn unit_field(max_x: f32, max_y: f32) -> Field {
    Field::new(max_x, max_y).expect("test field bounds are valid")
}

/// Simulates a single flight from a `(x, y)` start and a movement string.
pub fn flown(field: &Field, start: (f32, f32), moves: &str) -> FlightPath {
    simulate(
        Vec2::new(start.0, start.1),
        &parse_moves(moves).expect("test movement string is valid"),
        field,
    )
}

/// Builds a mission with one drone per `(start, moves)` entry.
pub fn mission_with(field: Field, drones: &[((f32, f32), &str)]) -> Mission {
    let mut mission = Mission::new(field);
    for ((x, y), moves) in drones {
        mission
            .add_drone(
                Vec2::new(*x, *y),
                parse_moves(moves).expect("test movement string is valid"),
            )
            .expect("test drone starts on a grid point");
    }
    mission
}
