// Sensitivity bounds offered to UI callers
pub const MIN_THRESHOLD: f32 = 0.005;
pub const MAX_THRESHOLD: f32 = 0.1;
pub const DEFAULT_THRESHOLD: f32 = 0.05;

// continuous bad posture needed before the status flips to bad
pub const CONFIRMATION_DELAY_MS: u64 = 2000;

// minimum spacing between alerts
pub const ALERT_COOLDOWN_MS: u64 = 5000;

// how long the caller collects calibration frames before finalizing
pub const CALIBRATION_WINDOW_MS: u64 = 3000;

/// Clamp a sensitivity value into the recommended range.
///
/// The session itself accepts any threshold; this is for callers that want
/// to enforce the slider bounds.
pub fn clamp_threshold(value: f32) -> f32 {
    value.clamp(MIN_THRESHOLD, MAX_THRESHOLD)
}

/// Configuration for a posture session.
#[derive(Clone, Debug, PartialEq)]
pub struct PostureConfig {
    threshold: f32,
    confirmation_delay_ms: u64,
    alert_cooldown_ms: u64,
    calibration_window_ms: u64,
}

impl Default for PostureConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            confirmation_delay_ms: CONFIRMATION_DELAY_MS,
            alert_cooldown_ms: ALERT_COOLDOWN_MS,
            calibration_window_ms: CALIBRATION_WINDOW_MS,
        }
    }
}

impl PostureConfig {
    /// Set the deviation threshold above which a frame counts as bad.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_confirmation_delay_ms(mut self, confirmation_delay_ms: u64) -> Self {
        self.confirmation_delay_ms = confirmation_delay_ms;
        self
    }

    pub fn with_alert_cooldown_ms(mut self, alert_cooldown_ms: u64) -> Self {
        self.alert_cooldown_ms = alert_cooldown_ms;
        self
    }

    pub fn with_calibration_window_ms(mut self, calibration_window_ms: u64) -> Self {
        self.calibration_window_ms = calibration_window_ms;
        self
    }

    // Getters
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn confirmation_delay_ms(&self) -> u64 {
        self.confirmation_delay_ms
    }

    pub fn alert_cooldown_ms(&self) -> u64 {
        self.alert_cooldown_ms
    }

    pub fn calibration_window_ms(&self) -> u64 {
        self.calibration_window_ms
    }

    pub(crate) fn set_threshold(&mut self, threshold: f32) {
        self.threshold = threshold;
    }
}
