use {
    base::Vec2,
    serde::{Deserialize, Deserializer},
    std::{collections::HashMap, fmt},
};

/// Number of landmarks in the COCO body layout
pub const LANDMARK_COUNT: usize = 17;

/// COCO landmark indices for a human body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkIndex {
    Nose = 0,
    LeftEye = 1,
    RightEye = 2,
    LeftEar = 3,
    RightEar = 4,
    LeftShoulder = 5,
    RightShoulder = 6,
    LeftElbow = 7,
    RightElbow = 8,
    LeftWrist = 9,
    RightWrist = 10,
    LeftHip = 11,
    RightHip = 12,
    LeftKnee = 13,
    RightKnee = 14,
    LeftAnkle = 15,
    RightAnkle = 16,
}

impl LandmarkIndex {
    pub const ALL: [LandmarkIndex; LANDMARK_COUNT] = [
        LandmarkIndex::Nose,
        LandmarkIndex::LeftEye,
        LandmarkIndex::RightEye,
        LandmarkIndex::LeftEar,
        LandmarkIndex::RightEar,
        LandmarkIndex::LeftShoulder,
        LandmarkIndex::RightShoulder,
        LandmarkIndex::LeftElbow,
        LandmarkIndex::RightElbow,
        LandmarkIndex::LeftWrist,
        LandmarkIndex::RightWrist,
        LandmarkIndex::LeftHip,
        LandmarkIndex::RightHip,
        LandmarkIndex::LeftKnee,
        LandmarkIndex::RightKnee,
        LandmarkIndex::LeftAnkle,
        LandmarkIndex::RightAnkle,
    ];

    /// snake_case name used on the wire (e.g. `"left_shoulder"`).
    pub fn name(self) -> &'static str {
        match self {
            LandmarkIndex::Nose => "nose",
            LandmarkIndex::LeftEye => "left_eye",
            LandmarkIndex::RightEye => "right_eye",
            LandmarkIndex::LeftEar => "left_ear",
            LandmarkIndex::RightEar => "right_ear",
            LandmarkIndex::LeftShoulder => "left_shoulder",
            LandmarkIndex::RightShoulder => "right_shoulder",
            LandmarkIndex::LeftElbow => "left_elbow",
            LandmarkIndex::RightElbow => "right_elbow",
            LandmarkIndex::LeftWrist => "left_wrist",
            LandmarkIndex::RightWrist => "right_wrist",
            LandmarkIndex::LeftHip => "left_hip",
            LandmarkIndex::RightHip => "right_hip",
            LandmarkIndex::LeftKnee => "left_knee",
            LandmarkIndex::RightKnee => "right_knee",
            LandmarkIndex::LeftAnkle => "left_ankle",
            LandmarkIndex::RightAnkle => "right_ankle",
        }
    }

    /// Parse a wire name. Matching is case-insensitive.
    pub fn from_name(name: &str) -> Option<LandmarkIndex> {
        let name = name.to_ascii_lowercase();
        Self::ALL.into_iter().find(|index| index.name() == name)
    }
}

impl fmt::Display for LandmarkIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<LandmarkIndex> for usize {
    fn from(index: LandmarkIndex) -> usize {
        index as usize
    }
}

impl TryFrom<usize> for LandmarkIndex {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(value).copied().ok_or_else(|| {
            format!(
                "Invalid landmark index: {}. Must be in range 0-{}.",
                value,
                LANDMARK_COUNT - 1
            )
        })
    }
}

/// A single landmark with normalized 2D position and visibility score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    /// Position in normalized frame coordinates, y grows downward.
    pub position: Vec2<f32>,
    /// Confidence in [0.0, 1.0] that the point is located and unoccluded.
    pub visibility: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, visibility: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            visibility,
        }
    }

    /// Strictly above `cutoff`.
    pub fn is_visible(&self, cutoff: f32) -> bool {
        self.visibility > cutoff
    }
}

/// One frame's landmarks. Any index may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Landmarks {
    points: [Option<Landmark>; LANDMARK_COUNT],
}

impl Landmarks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: LandmarkIndex) -> Option<&Landmark> {
        self.points[usize::from(index)].as_ref()
    }

    /// Insert a landmark, returning the one it replaced.
    pub fn insert(&mut self, index: LandmarkIndex, landmark: Landmark) -> Option<Landmark> {
        self.points[usize::from(index)].replace(landmark)
    }

    pub fn remove(&mut self, index: LandmarkIndex) -> Option<Landmark> {
        self.points[usize::from(index)].take()
    }

    /// Builder-style insert.
    pub fn with(mut self, index: LandmarkIndex, landmark: Landmark) -> Self {
        self.insert(index, landmark);
        self
    }

    /// Number of landmarks present.
    pub fn len(&self) -> usize {
        self.points.iter().filter(|point| point.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.points.iter().all(Option::is_none)
    }

    pub fn iter(&self) -> impl Iterator<Item = (LandmarkIndex, &Landmark)> {
        LandmarkIndex::ALL
            .into_iter()
            .zip(self.points.iter())
            .filter_map(|(index, point)| point.as_ref().map(|landmark| (index, landmark)))
    }
}

impl FromIterator<(LandmarkIndex, Landmark)> for Landmarks {
    fn from_iter<I: IntoIterator<Item = (LandmarkIndex, Landmark)>>(iter: I) -> Self {
        let mut landmarks = Landmarks::new();
        for (index, landmark) in iter {
            landmarks.insert(index, landmark);
        }
        landmarks
    }
}

#[derive(Deserialize)]
struct RawLandmark {
    x: f32,
    y: f32,
    #[serde(alias = "confidence")]
    visibility: f32,
}

// Wire form is a JSON object keyed by landmark name. Names outside the COCO
// layout (other estimators emit more points) are skipped.
impl<'de> Deserialize<'de> for Landmarks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = HashMap::<String, RawLandmark>::deserialize(deserializer)?;
        let mut landmarks = Landmarks::new();
        for (name, point) in raw {
            match LandmarkIndex::from_name(&name) {
                Some(index) => {
                    landmarks.insert(index, Landmark::new(point.x, point.y, point.visibility));
                }
                None => log::debug!("skipping unknown landmark {:?}", name),
            }
        }
        Ok(landmarks)
    }
}
