//! Forward-head posture monitoring.
//!
//! Landmark frames from an external pose estimator are gated by
//! [`is_person_present`], reduced to a scalar by [`compute_metric`], and fed to
//! a [`PostureSession`], which calibrates a personal baseline and turns the
//! per-frame deviation into a debounced good/bad status with rate-limited
//! alerts.

pub mod alert;
pub use alert::{Alert, ChannelNotifier, LogNotifier, Notifier};

pub mod calibration;
pub use calibration::Calibration;

pub mod clock;
pub use clock::{Clock, ManualClock, MonotonicClock, Timestamp};

pub mod config;
pub use config::*;

pub mod error;
pub use error::PostureError;

pub mod landmark;
pub use landmark::{LANDMARK_COUNT, Landmark, LandmarkIndex, Landmarks};

pub mod metric;
pub use metric::compute_metric;

pub mod presence;
pub use presence::{VISIBILITY_THRESHOLD, is_person_present};

pub mod session;
pub use session::{Evaluation, PostureSession, PostureStatus, SessionState};
