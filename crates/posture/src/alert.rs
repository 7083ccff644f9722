use tokio::sync::mpsc::{self, error::TrySendError};

/// "Sit up" signal. Carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert;

/// Sink for posture alerts.
///
/// Called synchronously from the evaluation, so implementations must not
/// block; delivery failures are theirs to handle.
pub trait Notifier: Send {
    fn notify(&mut self);
}

/// Writes alerts to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self) {
        log::warn!("bad posture: sit up straight");
    }
}

/// Forwards alerts into a channel for an async consumer (audio, UI, ...).
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: mpsc::Sender<Alert>,
}

impl ChannelNotifier {
    pub fn new(sender: mpsc::Sender<Alert>) -> Self {
        Self { sender }
    }

    /// Create a notifier together with the receiving end.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Alert>) {
        let (sender, receiver) = mpsc::channel(capacity);
        (Self::new(sender), receiver)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&mut self) {
        match self.sender.try_send(Alert) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => log::warn!("alert channel full, dropping alert"),
            Err(TrySendError::Closed(_)) => log::warn!("alert channel closed, dropping alert"),
        }
    }
}
