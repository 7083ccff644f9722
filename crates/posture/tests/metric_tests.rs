use posture::{Landmark, LandmarkIndex, Landmarks, compute_metric};

fn upper_body(nose_y: f32, left_shoulder_y: f32, right_shoulder_y: f32) -> Landmarks {
    Landmarks::new()
        .with(LandmarkIndex::Nose, Landmark::new(0.5, nose_y, 0.9))
        .with(LandmarkIndex::LeftShoulder, Landmark::new(0.6, left_shoulder_y, 0.9))
        .with(LandmarkIndex::RightShoulder, Landmark::new(0.4, right_shoulder_y, 0.9))
}

#[test]
fn test_metric_value() {
    let metric = compute_metric(&upper_body(0.25, 0.55, 0.55)).unwrap();
    assert!((metric - 0.30).abs() < 1e-6);
}

#[test]
fn test_metric_shrinks_when_head_drops() {
    let upright = compute_metric(&upper_body(0.25, 0.55, 0.55)).unwrap();
    let slumped = compute_metric(&upper_body(0.35, 0.55, 0.55)).unwrap();
    assert!(slumped < upright);
}

#[test]
fn test_metric_absent_without_required_landmarks() {
    for missing in [
        LandmarkIndex::Nose,
        LandmarkIndex::LeftShoulder,
        LandmarkIndex::RightShoulder,
    ] {
        let mut landmarks = upper_body(0.25, 0.55, 0.55);
        landmarks.remove(missing);
        assert_eq!(compute_metric(&landmarks), None, "missing {}", missing);
    }
    assert_eq!(compute_metric(&Landmarks::new()), None);
}

#[test]
fn test_metric_is_deterministic() {
    let landmarks = upper_body(0.2, 0.5, 0.6);
    assert_eq!(compute_metric(&landmarks), compute_metric(&landmarks));
}
