use {
    posture::{LandmarkIndex, PostureError},
    posture_watch::{Command, parse_command},
};

#[test]
fn test_parse_frame() {
    let line = r#"{"frame": {"nose": {"x": 0.5, "y": 0.3, "visibility": 0.9}}}"#;
    let Some(Command::Frame(frame)) = parse_command(line).unwrap() else {
        panic!("expected a frame");
    };
    assert_eq!(frame.at, None);
    assert_eq!(frame.landmarks.len(), 1);
    assert_eq!(frame.landmarks.get(LandmarkIndex::Nose).unwrap().position.y, 0.3);
}

#[test]
fn test_parse_timestamped_frame() {
    let line = r#"{"frame": {"t": 1200, "nose": {"x": 0.5, "y": 0.3, "visibility": 0.9}, "left_shoulder": {"x": 0.6, "y": 0.6, "visibility": 0.9}}}"#;
    let Some(Command::Frame(frame)) = parse_command(line).unwrap() else {
        panic!("expected a frame");
    };
    assert_eq!(frame.at, Some(1200));
    assert_eq!(frame.landmarks.len(), 2);
    assert_eq!(frame.landmarks.get(LandmarkIndex::LeftShoulder).unwrap().position.x, 0.6);
}

#[test]
fn test_parse_calibrate() {
    assert_eq!(parse_command(r#""calibrate""#).unwrap(), Some(Command::Calibrate));
}

#[test]
fn test_parse_threshold() {
    assert_eq!(
        parse_command(r#"{"threshold": 0.03}"#).unwrap(),
        Some(Command::Threshold(0.03))
    );
}

#[test]
fn test_parse_blank_line() {
    assert_eq!(parse_command("   ").unwrap(), None);
}

#[test]
fn test_parse_garbage() {
    assert!(matches!(parse_command("{not json"), Err(PostureError::Parse(_))));
    assert!(matches!(parse_command(r#""dance""#), Err(PostureError::Parse(_))));
}
