use posture::{Alert, ChannelNotifier, LogNotifier, Notifier};

#[test]
fn test_channel_notifier_delivers() {
    let (mut notifier, mut receiver) = ChannelNotifier::channel(4);
    notifier.notify();
    notifier.notify();
    assert_eq!(receiver.try_recv(), Ok(Alert));
    assert_eq!(receiver.try_recv(), Ok(Alert));
    assert!(receiver.try_recv().is_err());
}

#[test]
fn test_channel_notifier_full_channel_drops() {
    let (mut notifier, mut receiver) = ChannelNotifier::channel(1);
    notifier.notify();
    notifier.notify();
    assert_eq!(receiver.try_recv(), Ok(Alert));
    assert!(receiver.try_recv().is_err());
}

#[test]
fn test_channel_notifier_closed_channel() {
    let (mut notifier, receiver) = ChannelNotifier::channel(1);
    drop(receiver);
    notifier.notify();
}

#[test]
fn test_log_notifier() {
    let mut notifier = LogNotifier;
    notifier.notify();
}

#[tokio::test]
async fn test_channel_notifier_async_receiver() {
    let (mut notifier, mut receiver) = ChannelNotifier::channel(1);
    notifier.notify();
    assert_eq!(receiver.recv().await, Some(Alert));
}
