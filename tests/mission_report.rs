// tests/mission_report.rs
use rover_fleet::{Heading, MissionControl, MissionReport, RoverError, RoverReport, parse_fleet};
use std::io::Cursor;

const SAMPLE: &str = "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n";

#[test]
fn test_sample_mission() {
    let mut mission = MissionControl::from_reader(&mut Cursor::new(SAMPLE)).unwrap();
    let report = mission.execute().unwrap();

    assert_eq!(report.to_text(), "1 3 N\n5 1 E\n");
    assert_eq!(
        report.rovers,
        vec![
            RoverReport {
                x: 1,
                y: 3,
                heading: Heading::North
            },
            RoverReport {
                x: 5,
                y: 1,
                heading: Heading::East
            },
        ]
    );
}

#[test]
fn test_report_preserves_input_order() {
    let text = "9 9\n9 9 S\nM\n0 0 N\nM\n4 4 E\nRRRR\n0 9 W\nL\n";
    let report = MissionControl::from_fleet(parse_fleet(text).unwrap())
        .execute()
        .unwrap();

    assert_eq!(report.to_text(), "9 8 S\n0 1 N\n4 4 E\n0 9 S\n");
}

#[test]
fn test_fleet_on_i32_max_plateau() {
    let text = "2147483647 2147483647\n2147483647 0 E\nM\n5 2147483647 N\nM\n";
    let report = MissionControl::from_fleet(parse_fleet(text).unwrap())
        .execute()
        .unwrap();
    assert_eq!(report.to_text(), "2147483647 0 E\n5 2147483647 N\n");
}

#[test]
fn test_execute_without_fleet() {
    let mut mission = MissionControl::new();
    assert!(mission.fleet().is_none());
    assert!(matches!(mission.execute(), Err(RoverError::NotInitialized)));
}

#[test]
fn test_first_failing_rover_aborts_mission() {
    let text = "5 5\n1 2 N\nM\n3 3 E\nMMX\n0 0 N\nM\n";
    let mut mission = MissionControl::from_fleet(parse_fleet(text).unwrap());

    match mission.execute() {
        Err(RoverError::UnsupportedInstruction('X')) => {}
        other => panic!("expected unsupported instruction, got {other:?}"),
    }

    let fleet = mission.fleet().unwrap();
    assert_eq!(fleet.entries()[1].rover.to_string(), "5 3 E");
    assert_eq!(fleet.entries()[2].rover.to_string(), "0 0 N");
}

#[test]
fn test_blank_instruction_line_fails_on_execute() {
    let mut mission = MissionControl::from_fleet(parse_fleet("5 5\n1 2 N\n\n").unwrap());
    assert!(matches!(
        mission.execute(),
        Err(RoverError::InvalidArgument("instructions"))
    ));
}

#[test]
fn test_load_replaces_fleet() {
    let mut mission = MissionControl::new();
    mission.load(parse_fleet("2 2\n0 0 N\nMM\n").unwrap());
    assert_eq!(mission.execute().unwrap().to_text(), "0 2 N\n");

    mission.load(parse_fleet("2 2\n2 2 W\nMM\n").unwrap());
    assert_eq!(mission.execute().unwrap().to_text(), "0 2 W\n");
}

#[test]
fn test_report_serializes_to_json() {
    let report = MissionControl::from_fleet(parse_fleet(SAMPLE).unwrap())
        .execute()
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["rovers"][0]["x"], 1);
    assert_eq!(json["rovers"][0]["y"], 3);
    assert_eq!(json["rovers"][1]["heading"], "East");

    let back: MissionReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_empty_report_text() {
    assert_eq!(MissionReport::default().to_text(), "");
}
