use {
    crate::command::{Command, parse_command},
    base::Stamped,
    posture::{Clock, Evaluation, PostureError, PostureSession, PostureStatus, SessionState, Timestamp},
    std::time::Duration,
    tokio::{
        io::{AsyncBufRead, AsyncBufReadExt},
        sync::mpsc,
        time::sleep,
    },
};

// pending calibration finalizes; one per calibration window
const FINALIZE_CAPACITY: usize = 4;

/// Drives a `PostureSession` from a line-oriented input.
///
/// All session mutation happens on the task that owns the monitor. For live
/// input the calibration window runs as a separate timer task which only
/// posts an epoch-stamped finalize request back; requests from superseded
/// calibrations are dropped. Recorded input (frames carrying `t`) closes the
/// window on its own timeline instead, so a replayed file calibrates and
/// evaluates exactly as it did when captured.
pub struct Monitor<C: Clock> {
    session: PostureSession,
    clock: C,
    finalize_tx: mpsc::Sender<Stamped<()>>,
    finalize_rx: mpsc::Receiver<Stamped<()>>,
    // recorded time of the first timestamped frame of the running calibration
    calibration_start: Option<Timestamp>,
    last_status: PostureStatus,
}

impl<C: Clock> Monitor<C> {
    pub fn new(session: PostureSession, clock: C) -> Self {
        let (finalize_tx, finalize_rx) = mpsc::channel(FINALIZE_CAPACITY);
        Self {
            session,
            clock,
            finalize_tx,
            finalize_rx,
            calibration_start: None,
            last_status: PostureStatus::Waiting,
        }
    }

    pub fn session(&self) -> &PostureSession {
        &self.session
    }

    /// Start calibrating and schedule the finalize for the end of the window.
    pub fn calibrate(&mut self) -> u64 {
        let epoch = self.session.start_calibration();
        self.calibration_start = None;
        let window = self.window();
        let current = self.session.epoch().clone();
        let finalize_tx = self.finalize_tx.clone();
        tokio::task::spawn(async move {
            sleep(Duration::from_millis(window)).await;
            if !current.is_current(epoch) {
                log::debug!("calibration epoch {} superseded, not finalizing", epoch);
                return;
            }
            if let Err(error) = finalize_tx.send(Stamped { epoch, inner: () }).await {
                log::error!("failed to post calibration finalize: {}", error);
            }
        });
        epoch
    }

    /// Wait for the next scheduled finalize request.
    pub async fn next_finalize(&mut self) -> Option<Stamped<()>> {
        self.finalize_rx.recv().await
    }

    /// Apply a finalize request and log its outcome.
    pub fn finish_calibration(&mut self, request: Stamped<()>) -> Result<f32, PostureError> {
        let result = self.session.finalize_calibration(request.epoch);
        match &result {
            Ok(baseline) => log::info!("baseline {:.4}, monitoring posture", baseline),
            Err(PostureError::NoValidFrames) => {
                log::warn!("no person seen during calibration, send \"calibrate\" to retry")
            }
            Err(PostureError::Stale { epoch, current }) => log::info!(
                "dropped finalize for superseded calibration {} (current {})",
                epoch,
                current
            ),
            Err(PostureError::NotCalibrating) => log::info!(
                "calibration {} already finished, ignoring finalize",
                request.epoch
            ),
            Err(error) => log::warn!("calibration finalize failed: {}", error),
        }
        result
    }

    /// Apply one command. Returns the evaluation for frames.
    pub fn handle(&mut self, command: Command) -> Option<Evaluation> {
        match command {
            Command::Frame(frame) => {
                let now = match frame.at {
                    Some(at) => {
                        self.close_recorded_window(at);
                        at
                    }
                    None => self.clock.now(),
                };
                Some(self.session.process_frame(&frame.landmarks, now))
            }
            Command::Calibrate => {
                self.calibrate();
                None
            }
            Command::Threshold(threshold) => {
                log::info!("threshold set to {}", threshold);
                self.session.set_threshold(threshold);
                None
            }
        }
    }

    /// Process input lines until EOF, interleaved with calibration finalizes.
    ///
    /// Evaluations that change the status or fire an alert are printed to
    /// stdout as JSON. Malformed lines are logged and skipped. A calibration
    /// still running at EOF is finalized before returning.
    pub async fn run<R: AsyncBufRead + Unpin>(&mut self, reader: R) -> Result<(), PostureError> {
        let mut lines = reader.lines();
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        break;
                    };
                    let command = match parse_command(&line) {
                        Ok(Some(command)) => command,
                        Ok(None) => continue,
                        Err(error) => {
                            log::warn!("skipping input line: {}", error);
                            continue;
                        }
                    };
                    if let Some(evaluation) = self.handle(command) {
                        self.report(&evaluation);
                    }
                }
                Some(request) = self.finalize_rx.recv() => {
                    self.on_timer(request);
                }
            }
        }
        log::info!("input closed");

        while self.session.state() == SessionState::Calibrating {
            if self.calibration_start.is_some() {
                // recording ended inside the window
                let request = self.session.epoch().stamp(());
                let _ = self.finish_calibration(request);
                break;
            }
            match self.finalize_rx.recv().await {
                Some(request) => self.on_timer(request),
                None => break,
            }
        }
        Ok(())
    }

    fn window(&self) -> u64 {
        self.session.config().calibration_window_ms()
    }

    // Finalize on the recorded timeline once a frame lands past the window.
    fn close_recorded_window(&mut self, at: Timestamp) {
        if self.session.state() != SessionState::Calibrating {
            return;
        }
        let start = *self.calibration_start.get_or_insert(at);
        if at.saturating_sub(start) >= self.window() {
            let request = self.session.epoch().stamp(());
            let _ = self.finish_calibration(request);
        }
    }

    fn on_timer(&mut self, request: Stamped<()>) {
        if self.calibration_start.is_some() {
            log::debug!("recorded timestamps drive calibration {}, ignoring timer", request.epoch);
            return;
        }
        // outcome is logged by finish_calibration
        let _ = self.finish_calibration(request);
    }

    fn report(&mut self, evaluation: &Evaluation) {
        if evaluation.status == self.last_status && !evaluation.alert_fired {
            return;
        }
        self.last_status = evaluation.status;
        match serde_json::to_string(evaluation) {
            Ok(json) => println!("{}", json),
            Err(error) => log::error!("failed to encode evaluation: {}", error),
        }
    }
}
