//! ASCII rendering of the field grid.
//!
//! Grids are returned as plain strings so they can be asserted on in tests.
//! Rows print top-down (highest Y first). On the final grid, `I` marks an
//! intersection cell and takes precedence over `D`, which marks a drone's
//! final position; everything else is a dot.

use dronefield_core::{Field, MissionReport};
use glam::Vec2;

/// Matching tolerance between a grid cell and a reported position.
const CELL_TOLERANCE: f32 = 0.01;

/// Renders the empty field as a grid of dots.
pub fn initial_grid(field: &Field) -> String {
    let mut out = String::new();
    for _row in 0..field.grid_points_y() {
        for _col in 0..field.grid_points_x() {
            out.push_str(". ");
        }
        out.push('\n');
    }
    out
}

/// Renders the field with final drone positions and intersection markers.
pub fn final_grid(field: &Field, report: &MissionReport) -> String {
    let mut out = String::new();
    for row in (0..field.grid_points_y()).rev() {
        for col in 0..field.grid_points_x() {
            let cell = Vec2::new(field.grid_coord(col), field.grid_coord(row));
            out.push_str(marker(report, cell));
        }
        out.push('\n');
    }
    out
}

fn marker(report: &MissionReport, cell: Vec2) -> &'static str {
    if report
        .intersections()
        .iter()
        .any(|record| near(record.position, cell))
    {
        return "I ";
    }
    if report.final_positions().any(|(_, pos)| near(pos, cell)) {
        return "D ";
    }
    ". "
}

fn near(a: Vec2, b: Vec2) -> bool {
    (a.x - b.x).abs() < CELL_TOLERANCE && (a.y - b.y).abs() < CELL_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use dronefield_core::flight::parse_moves;
    use dronefield_core::Mission;

    fn field(max_x: f32, max_y: f32) -> Field {
        Field::new(max_x, max_y).unwrap()
    }

    #[test]
    fn initial_grid_is_all_dots() {
        let grid = initial_grid(&field(2.0, 1.0));
        assert_eq!(grid, ". . . \n. . . \n");
    }

    #[test]
    fn initial_grid_single_point_field() {
        assert_eq!(initial_grid(&field(0.0, 0.0)), ". \n");
    }

    #[test]
    fn final_grid_marks_drone_positions() {
        let mut mission = Mission::new(field(2.0, 2.0));
        mission
            .add_drone(Vec2::new(1.0, 2.0), vec![])
            .unwrap();
        let report = mission.run();

        // Top row first: the drone sits at (1, 2), top middle.
        let grid = final_grid(mission.field(), &report);
        assert_eq!(grid, ". D . \n. . . \n. . . \n");
    }

    #[test]
    fn intersection_marker_takes_precedence() {
        let mut mission = Mission::new(field(2.0, 2.0));
        mission
            .add_drone(Vec2::ZERO, parse_moves("EE").unwrap())
            .unwrap();
        mission.add_drone(Vec2::new(2.0, 0.0), vec![]).unwrap();
        let report = mission.run();

        let grid = final_grid(mission.field(), &report);
        // Both drones end at (2, 0): bottom-right shows I, not D.
        assert_eq!(grid, ". . . \n. . . \n. . I \n");
    }

    #[test]
    fn full_path_intersections_mark_mid_path_cells() {
        // The drones cross at (1, 1) but end in different corners.
        let mut mission = Mission::new(field(2.0, 2.0));
        mission
            .add_drone(Vec2::new(1.0, 0.0), parse_moves("NN").unwrap())
            .unwrap();
        mission
            .add_drone(Vec2::new(0.0, 1.0), parse_moves("EE").unwrap())
            .unwrap();
        let report = mission.run();

        let grid = final_grid(mission.field(), &report);
        assert_eq!(grid, ". D . \n. I D \n. . . \n");
    }
}
