use crate::landmark::{LandmarkIndex, Landmarks};

/// A landmark counts as visible only above this confidence.
pub const VISIBILITY_THRESHOLD: f32 = 0.5;

fn visible(landmarks: &Landmarks, index: LandmarkIndex) -> bool {
    landmarks
        .get(index)
        .is_some_and(|landmark| landmark.is_visible(VISIBILITY_THRESHOLD))
}

/// Whether a person is confidently in frame.
///
/// Requires the nose, at least one ear, and both shoulders to be visible.
/// This is the only guard against empty scenes and non-human detections, so
/// it runs before both calibration and evaluation.
pub fn is_person_present(landmarks: &Landmarks) -> bool {
    let nose = visible(landmarks, LandmarkIndex::Nose);
    let ear = visible(landmarks, LandmarkIndex::LeftEar) || visible(landmarks, LandmarkIndex::RightEar);
    let shoulders = visible(landmarks, LandmarkIndex::LeftShoulder)
        && visible(landmarks, LandmarkIndex::RightShoulder);
    nose && ear && shoulders
}
