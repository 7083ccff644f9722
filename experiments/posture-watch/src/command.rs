use {
    posture::{Landmarks, PostureError, Timestamp},
    serde::Deserialize,
};

/// A landmark frame, optionally stamped with its capture time.
///
/// On the wire the landmarks and the timestamp share one object:
/// `{"t": 1200, "nose": {"x": .., "y": .., "visibility": ..}, ..}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Frame {
    /// Capture time in milliseconds. Frames without one are stamped by the
    /// monitor's clock when read.
    #[serde(default, rename = "t")]
    pub at: Option<Timestamp>,
    #[serde(flatten)]
    pub landmarks: Landmarks,
}

/// One line of input from the perception side or the user.
///
/// Lines are JSON: `{"frame": {..}}`, `"calibrate"`, or `{"threshold": 0.03}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Frame(Frame),
    Calibrate,
    Threshold(f32),
}

/// Parse an input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, PostureError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .map_err(|e| PostureError::Parse(e.to_string()))
}
