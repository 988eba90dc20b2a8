//! Determinism verification tests.
//!
//! Identical setup must produce byte-identical reports, regardless of how
//! often the mission is run. This is what makes scripted console sessions
//! reproducible and the output order stable for comparison against
//! recorded expectations.

use crate::intersect::{detect_intersections, DetectionPolicy, DEFAULT_TOLERANCE};

use super::helpers::{flown, mission_with, unit_field};

fn build_report() -> crate::mission::MissionReport {
    mission_with(
        unit_field(3.0, 3.0),
        &[
            ((0.0, 0.0), "EENN"),
            ((2.0, 0.0), "NN"),
            ((2.0, 2.0), ""),
            ((3.0, 3.0), "SSWW"),
        ],
    )
    .run()
}

#[test]
fn identical_setup_identical_report() {
    let first = build_report();
    let second = build_report();
    assert_eq!(first, second);
}

#[test]
fn repeated_runs_of_one_mission_agree() {
    let mission = mission_with(
        unit_field(3.0, 3.0),
        &[((0.0, 0.0), "EENN"), ((2.0, 0.0), "NN")],
    );

    let reports: Vec<_> = (0..5).map(|_| mission.run()).collect();
    for report in &reports[1..] {
        assert_eq!(report, &reports[0]);
    }
}

#[test]
fn detection_is_idempotent_over_shared_paths() {
    let field = unit_field(3.0, 3.0);
    let paths = vec![
        flown(&field, (0.0, 0.0), "EENN"),
        flown(&field, (2.0, 0.0), "NN"),
        flown(&field, (2.0, 2.0), ""),
    ];

    for policy in [DetectionPolicy::FullPath, DetectionPolicy::FinalOnly] {
        let first = detect_intersections(&paths, policy, DEFAULT_TOLERANCE);
        let second = detect_intersections(&paths, policy, DEFAULT_TOLERANCE);
        assert_eq!(first, second);
    }
}

#[test]
fn intersection_order_is_stable_and_increasing() {
    let report = build_report();

    let mut previous = None;
    for record in report.intersections() {
        assert!(record.first < record.second);
        let pair = (record.first, record.second);
        if let Some(prev) = previous {
            assert!(pair >= prev, "pairs must be emitted in increasing order");
        }
        previous = Some(pair);
    }
}

#[test]
fn serialized_reports_are_byte_identical() {
    let first = serde_json::to_string(&build_report()).unwrap();
    let second = serde_json::to_string(&build_report()).unwrap();
    assert_eq!(first, second);
}
