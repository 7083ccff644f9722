use crate::landmark::{LandmarkIndex, Landmarks};

/// Vertical distance from the nose up to the shoulder midpoint.
///
/// Frame y grows downward, so a larger value means the head sits higher above
/// the shoulders. Only positions are read; visibility gating is done by
/// `is_person_present`. Returns `None` when the nose or either shoulder is
/// missing.
pub fn compute_metric(landmarks: &Landmarks) -> Option<f32> {
    let nose = landmarks.get(LandmarkIndex::Nose)?;
    let left_shoulder = landmarks.get(LandmarkIndex::LeftShoulder)?;
    let right_shoulder = landmarks.get(LandmarkIndex::RightShoulder)?;

    let shoulder_mid = left_shoulder.position.midpoint(right_shoulder.position);
    Some(shoulder_mid.y - nose.position.y)
}
