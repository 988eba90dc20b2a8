//! Interactive console dialog over injected input and output.
//!
//! The dialog reads from any `BufRead` and writes to any `Write`, so the
//! whole session can be driven by a scripted string in tests. Recoverable
//! input problems (unparsable numbers, invalid movement symbols) re-prompt;
//! an initial position off the field grid aborts the run with an error and
//! no partial results.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use glam::Vec2;

use dronefield_core::flight::parse_moves;
use dronefield_core::{DetectionPolicy, Direction, Field, Mission, MissionReport, DEFAULT_TOLERANCE};

use crate::render;

/// Simulation knobs resolved from the command line.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Distance between adjacent grid points.
    pub pitch: f32,
    /// Coincidence tolerance for intersection detection.
    pub tolerance: f32,
    /// Which positions participate in detection.
    pub policy: DetectionPolicy,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            pitch: 1.0,
            tolerance: DEFAULT_TOLERANCE,
            policy: DetectionPolicy::default(),
        }
    }
}

/// The interactive session: prompts in, report text out.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input source and an output sink.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the setup dialog and returns the fully configured mission.
    ///
    /// Prompts for the field corner, the drone count, and each drone's
    /// start and movement string. Returns an error if the field dimensions
    /// are invalid, if input ends mid-dialog, or if a drone's initial
    /// position is not a grid point of the field.
    pub fn collect_mission(&mut self, options: &RunOptions) -> Result<Mission> {
        let max_x: f32 =
            self.prompt("Enter the X coordinate of the upper-right corner of the field: ")?;
        let max_y: f32 =
            self.prompt("Enter the Y coordinate of the upper-right corner of the field: ")?;
        let field = Field::with_pitch(max_x, max_y, options.pitch)?;

        writeln!(self.output, "Initial grid:")?;
        write!(self.output, "{}", render::initial_grid(&field))?;

        let drone_count = loop {
            let count: usize = self.prompt("Enter the number of drones: ")?;
            if count > 0 {
                break count;
            }
            writeln!(self.output, "At least one drone is required.")?;
        };

        let mut mission = Mission::new(field)
            .with_policy(options.policy)
            .with_tolerance(options.tolerance);

        for drone in 1..=drone_count {
            writeln!(self.output, "Setting up drone {drone}")?;
            let x: f32 = self.prompt("Enter the initial X coordinate of the drone: ")?;
            let y: f32 = self.prompt("Enter the initial Y coordinate of the drone: ")?;
            let moves = self.prompt_moves(drone)?;

            if let Err(err) = mission.add_drone(Vec2::new(x, y), moves) {
                writeln!(
                    self.output,
                    "{err}. Please restart and enter valid coordinates."
                )?;
                return Err(err.into());
            }
        }

        Ok(mission)
    }

    /// Writes the human-readable outcome of a finished mission.
    ///
    /// Order matches the dialog the inputs came from: truncation notices,
    /// final locations, intersections, then the rendered grid.
    pub fn present(&mut self, field: &Field, report: &MissionReport) -> Result<()> {
        for (index, path) in report.paths().iter().enumerate() {
            if let Some(truncation) = path.truncation() {
                writeln!(
                    self.output,
                    "Drone {} moved outside the field to ({}, {}). Movement stopped.",
                    index + 1,
                    truncation.attempted.x,
                    truncation.attempted.y
                )?;
            }
        }

        writeln!(self.output, "Final locations of all drones:")?;
        for (id, pos) in report.final_positions() {
            writeln!(self.output, "Drone {}: X: {}, Y: {}", id.number(), pos.x, pos.y)?;
        }

        if !report.intersections().is_empty() {
            writeln!(self.output, "Intersections detected:")?;
            for record in report.intersections() {
                writeln!(self.output, "{record}")?;
            }
        }

        writeln!(self.output, "Grid with drones:")?;
        write!(self.output, "{}", render::final_grid(field, report))?;
        Ok(())
    }

    /// Prompts until the answer parses as `T`.
    fn prompt<T: std::str::FromStr>(&mut self, question: &str) -> Result<T> {
        loop {
            let line = self.ask(question)?;
            match line.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    /// Prompts until the movement string contains only valid symbols.
    fn prompt_moves(&mut self, drone: usize) -> Result<Vec<Direction>> {
        loop {
            let line = self.ask(
                "Enter the movement string (N for up, S for down, E for right, W for left): ",
            )?;
            match parse_moves(line.trim()) {
                Ok(moves) => return Ok(moves),
                Err(err) => writeln!(
                    self.output,
                    "Invalid move '{}' in the movement string for drone {drone}. \
                     Please re-enter the movement string.",
                    err.symbol
                )?,
            }
        }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input ended before the dialog was complete");
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Runs a full scripted session and returns the transcript.
    fn scripted(input: &str, options: &RunOptions) -> Result<(String, MissionReport)> {
        let mut output = Vec::new();
        let result = {
            let mut console = Console::new(Cursor::new(input), &mut output);
            console.collect_mission(options).map(|mission| {
                let report = mission.run();
                console
                    .present(mission.field(), &report)
                    .expect("writing to a Vec cannot fail");
                report
            })
        };
        let transcript = String::from_utf8(output).expect("transcript is UTF-8");
        result.map(|report| (transcript, report))
    }

    #[test]
    fn scripted_session_reports_meeting_drones() {
        // Field (3,3); drone 1 at (0,0) moves EE, drone 2 at (2,0) stays.
        let input = "3\n3\n2\n0\n0\nEE\n2\n0\n\n";
        let (transcript, report) = scripted(input, &RunOptions::default()).unwrap();

        assert_eq!(report.drone_count(), 2);
        assert!(transcript.contains("Drone 1: X: 2, Y: 0"));
        assert!(transcript.contains("Drone 2: X: 2, Y: 0"));
        assert!(transcript.contains("Drone 1 and drone 2 intersect at (2, 0)"));
        assert!(transcript.contains("Grid with drones:"));
    }

    #[test]
    fn truncation_is_reported_not_fatal() {
        // Field (2,2); drone at (2,2) tries to move north.
        let input = "2\n2\n1\n2\n2\nN\n";
        let (transcript, report) = scripted(input, &RunOptions::default()).unwrap();

        assert!(report.paths()[0].is_truncated());
        assert!(transcript
            .contains("Drone 1 moved outside the field to (2, 3). Movement stopped."));
        assert!(transcript.contains("Drone 1: X: 2, Y: 2"));
    }

    #[test]
    fn invalid_movement_string_reprompts() {
        // First movement string has a bad symbol; second is accepted.
        let input = "3\n3\n1\n1\n1\nNEX\nNE\n";
        let (transcript, report) = scripted(input, &RunOptions::default()).unwrap();

        assert!(transcript.contains(
            "Invalid move 'X' in the movement string for drone 1. \
             Please re-enter the movement string."
        ));
        assert_eq!(report.paths()[0].final_position(), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn unparsable_number_reprompts() {
        let input = "three\n3\n3\n1\n0\n0\n\n";
        let (transcript, _) = scripted(input, &RunOptions::default()).unwrap();
        assert!(transcript.contains("Please enter a valid number."));
    }

    #[test]
    fn off_grid_start_aborts_the_run() {
        let input = "3\n3\n1\n1.5\n1\n\n";
        let err = scripted(input, &RunOptions::default()).unwrap_err();
        assert!(err
            .to_string()
            .contains("is not a grid point of the field"));
    }

    #[test]
    fn truncated_input_is_an_error() {
        let input = "3\n3\n";
        let err = scripted(input, &RunOptions::default()).unwrap_err();
        assert!(err.to_string().contains("input ended"));
    }

    #[test]
    fn final_only_policy_is_honored() {
        // Paths cross mid-flight but end apart: no intersections reported.
        let options = RunOptions {
            policy: DetectionPolicy::FinalOnly,
            ..RunOptions::default()
        };
        let input = "3\n3\n2\n1\n0\nNN\n0\n1\nEE\n";
        let (transcript, report) = scripted(input, &options).unwrap();

        assert!(report.intersections().is_empty());
        assert!(!transcript.contains("Intersections detected:"));
    }

    #[test]
    fn pitch_option_scales_the_dialog_grid() {
        // Square 5x5 field with pitch 2.5: starts at 2.5 are valid.
        let options = RunOptions {
            pitch: 2.5,
            ..RunOptions::default()
        };
        let input = "5\n5\n1\n2.5\n2.5\nNE\n";
        let (transcript, report) = scripted(input, &options).unwrap();

        assert_eq!(report.paths()[0].final_position(), Vec2::new(5.0, 5.0));
        assert!(transcript.contains("Drone 1: X: 5, Y: 5"));
    }
}
