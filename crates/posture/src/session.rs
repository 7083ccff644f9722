use {
    crate::{
        alert::Notifier,
        calibration::Calibration,
        clock::Timestamp,
        config::PostureConfig,
        error::PostureError,
        landmark::Landmarks,
        metric::compute_metric,
        presence::is_person_present,
    },
    base::Epoch,
    serde::Serialize,
    std::fmt,
};

/// Calibration lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uncalibrated,
    Calibrating,
    Calibrated,
}

/// Display status derived from an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PostureStatus {
    /// Not calibrated, calibrating, or no readable person in frame.
    Waiting,
    Good,
    Bad,
}

impl fmt::Display for PostureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostureStatus::Waiting => write!(f, "waiting"),
            PostureStatus::Good => write!(f, "good"),
            PostureStatus::Bad => write!(f, "bad"),
        }
    }
}

/// Result of evaluating one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub status: PostureStatus,
    /// `baseline - metric`; positive means the head dropped. Zero while waiting.
    pub deviation: f32,
    pub alert_fired: bool,
}

impl Evaluation {
    fn waiting() -> Self {
        Self {
            status: PostureStatus::Waiting,
            deviation: 0.0,
            alert_fired: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Uncalibrated,
    // previous baseline is restored if this calibration fails
    Calibrating { previous: Option<f32> },
    Calibrated { baseline: f32 },
}

/// Posture evaluation state machine.
///
/// Owns the calibration accumulator, the baseline, the sensitivity threshold
/// and the bad-posture/alert timers. All mutation goes through `&mut self`, so
/// a multi-threaded host wraps the session in a single mutex or confines it
/// to one task. The session never reads a clock; every time value is passed
/// in by the caller.
pub struct PostureSession {
    config: PostureConfig,
    phase: Phase,
    calibration: Calibration,
    epoch: Epoch,
    bad_since: Option<Timestamp>,
    last_alert: Option<Timestamp>,
    status: PostureStatus,
    notifier: Option<Box<dyn Notifier>>,
}

impl fmt::Debug for PostureSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostureSession")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("calibration", &self.calibration)
            .field("epoch", &self.epoch.current())
            .field("bad_since", &self.bad_since)
            .field("last_alert", &self.last_alert)
            .field("status", &self.status)
            .field("notifier", &self.notifier.is_some())
            .finish()
    }
}

impl Default for PostureSession {
    fn default() -> Self {
        Self::new(PostureConfig::default())
    }
}

impl PostureSession {
    pub fn new(config: PostureConfig) -> Self {
        Self {
            config,
            phase: Phase::Uncalibrated,
            calibration: Calibration::new(),
            epoch: Epoch::new(),
            bad_since: None,
            last_alert: None,
            status: PostureStatus::Waiting,
            notifier: None,
        }
    }

    /// Attach the sink invoked whenever an evaluation fires an alert.
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn config(&self) -> &PostureConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::Uncalibrated => SessionState::Uncalibrated,
            Phase::Calibrating { .. } => SessionState::Calibrating,
            Phase::Calibrated { .. } => SessionState::Calibrated,
        }
    }

    /// The calibrated baseline. `Some` exactly when the state is `Calibrated`.
    pub fn baseline(&self) -> Option<f32> {
        match self.phase {
            Phase::Calibrated { baseline } => Some(baseline),
            _ => None,
        }
    }

    /// Baseline that a running recalibration would fall back to on failure.
    pub fn previous_baseline(&self) -> Option<f32> {
        match self.phase {
            Phase::Calibrating { previous } => previous,
            _ => None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.config.threshold()
    }

    /// Replace the sensitivity threshold. Not clamped; applies from the next
    /// evaluation on.
    pub fn set_threshold(&mut self, threshold: f32) {
        log::debug!("threshold {} -> {}", self.config.threshold(), threshold);
        self.config.set_threshold(threshold);
    }

    /// Status produced by the most recent evaluation.
    pub fn status(&self) -> PostureStatus {
        self.status
    }

    /// Shared calibration epoch, for timer tasks that want to check
    /// staleness before posting a finalize.
    pub fn epoch(&self) -> &Epoch {
        &self.epoch
    }

    /// Number of frames accumulated by the running calibration.
    pub fn calibration_count(&self) -> usize {
        self.calibration.count()
    }

    /// Begin (or restart) calibration.
    ///
    /// Clears the accumulator and advances the epoch; the returned epoch must
    /// be handed to `finalize_calibration` once the calibration window has
    /// elapsed. Any finalize scheduled by an earlier call becomes stale.
    pub fn start_calibration(&mut self) -> u64 {
        let previous = match self.phase {
            Phase::Uncalibrated => None,
            Phase::Calibrating { previous } => previous,
            Phase::Calibrated { baseline } => Some(baseline),
        };
        self.phase = Phase::Calibrating { previous };
        self.calibration.clear();
        self.bad_since = None;
        let epoch = self.epoch.advance();
        log::info!("calibration started (epoch {})", epoch);
        epoch
    }

    /// Feed a frame to the running calibration.
    ///
    /// Returns whether the frame contributed a metric. Frames without a
    /// present person or without a metric are skipped, as is everything
    /// outside of calibration.
    pub fn on_calibration_frame(&mut self, landmarks: &Landmarks) -> bool {
        if !matches!(self.phase, Phase::Calibrating { .. }) {
            return false;
        }
        if !is_person_present(landmarks) {
            return false;
        }
        match compute_metric(landmarks) {
            Some(metric) => {
                self.calibration.add(metric);
                log::debug!("calibration sample {:.4} ({} total)", metric, self.calibration.count());
                true
            }
            None => false,
        }
    }

    /// Finish the calibration started under `epoch`.
    ///
    /// On success the mean metric becomes the baseline. With no valid frames
    /// the session returns to its state before `start_calibration` (keeping
    /// an old baseline if there was one) and reports `NoValidFrames`; the
    /// caller decides whether to retry. A stale epoch leaves the running
    /// calibration untouched.
    pub fn finalize_calibration(&mut self, epoch: u64) -> Result<f32, PostureError> {
        let Phase::Calibrating { previous } = self.phase else {
            return Err(PostureError::NotCalibrating);
        };
        if !self.epoch.is_current(epoch) {
            let current = self.epoch.current();
            log::debug!("ignoring finalize for epoch {} (current {})", epoch, current);
            return Err(PostureError::Stale { epoch, current });
        }
        match self.calibration.finish() {
            Some(baseline) => {
                self.phase = Phase::Calibrated { baseline };
                self.bad_since = None;
                log::info!("calibration complete, baseline {:.4}", baseline);
                Ok(baseline)
            }
            None => {
                self.phase = match previous {
                    Some(baseline) => Phase::Calibrated { baseline },
                    None => Phase::Uncalibrated,
                };
                log::warn!("calibration failed: no person detected during the window");
                Err(PostureError::NoValidFrames)
            }
        }
    }

    /// Finalize against whatever epoch is current.
    pub fn finalize_current_calibration(&mut self) -> Result<f32, PostureError> {
        self.finalize_calibration(self.epoch.current())
    }

    /// Classify one frame at time `now` (milliseconds).
    pub fn evaluate_frame(&mut self, landmarks: &Landmarks, now: Timestamp) -> Evaluation {
        let Phase::Calibrated { baseline } = self.phase else {
            return self.waiting();
        };

        // presence loss and unreadable frames both reset the bad streak
        if !is_person_present(landmarks) {
            self.bad_since = None;
            return self.waiting();
        }
        let Some(metric) = compute_metric(landmarks) else {
            self.bad_since = None;
            return self.waiting();
        };

        let deviation = baseline - metric;
        let mut alert_fired = false;
        let status = if deviation > self.config.threshold() {
            match self.bad_since {
                None => {
                    self.bad_since = Some(now);
                    PostureStatus::Good
                }
                Some(since) if now.saturating_sub(since) > self.config.confirmation_delay_ms() => {
                    alert_fired = self.try_alert(now);
                    PostureStatus::Bad
                }
                Some(_) => PostureStatus::Good,
            }
        } else {
            self.bad_since = None;
            PostureStatus::Good
        };

        log::debug!("metric {:.4} deviation {:.4} -> {}", metric, deviation, status);
        self.set_status(status);
        Evaluation {
            status,
            deviation,
            alert_fired,
        }
    }

    /// Route a frame to calibration or evaluation depending on the state.
    pub fn process_frame(&mut self, landmarks: &Landmarks, now: Timestamp) -> Evaluation {
        if matches!(self.phase, Phase::Calibrating { .. }) {
            self.on_calibration_frame(landmarks);
            return self.waiting();
        }
        self.evaluate_frame(landmarks, now)
    }

    fn waiting(&mut self) -> Evaluation {
        self.set_status(PostureStatus::Waiting);
        Evaluation::waiting()
    }

    fn set_status(&mut self, status: PostureStatus) {
        if status != self.status {
            log::info!("posture {} -> {}", self.status, status);
            self.status = status;
        }
    }

    fn try_alert(&mut self, now: Timestamp) -> bool {
        let cooldown = self.config.alert_cooldown_ms();
        let due = self
            .last_alert
            .is_none_or(|last| now.saturating_sub(last) > cooldown);
        if !due {
            return false;
        }
        self.last_alert = Some(now);
        if let Some(notifier) = self.notifier.as_mut() {
            notifier.notify();
        }
        true
    }
}
