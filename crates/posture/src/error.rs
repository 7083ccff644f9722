use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PostureError {
    /// The calibration window saw no frame with a person and a metric.
    NoValidFrames,
    /// A finalize arrived for a calibration that has since been restarted.
    Stale { epoch: u64, current: u64 },
    NotCalibrating,
    Parse(String),
    Io(String),
}

impl fmt::Display for PostureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostureError::NoValidFrames => write!(f, "calibration failed: no valid frames"),
            PostureError::Stale { epoch, current } => {
                write!(f, "stale calibration epoch {epoch} (current {current})")
            }
            PostureError::NotCalibrating => write!(f, "no calibration in progress"),
            PostureError::Parse(msg) => write!(f, "parse error: {msg}"),
            PostureError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for PostureError {}

impl From<std::io::Error> for PostureError {
    fn from(err: std::io::Error) -> Self {
        PostureError::Io(err.to_string())
    }
}
