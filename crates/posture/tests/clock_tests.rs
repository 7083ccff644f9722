use posture::{Clock, ManualClock, MonotonicClock};

#[test]
fn test_manual_clock() {
    let clock = ManualClock::new(100);
    assert_eq!(clock.now(), 100);
    assert_eq!(clock.advance(250), 350);
    clock.set(42);
    assert_eq!(clock.now(), 42);
}

#[test]
fn test_manual_clock_clones_share_time() {
    let clock = ManualClock::default();
    let other = clock.clone();
    other.advance(1000);
    assert_eq!(clock.now(), 1000);
}

#[test]
fn test_monotonic_clock_never_goes_backwards() {
    let clock = MonotonicClock::new();
    let first = clock.now();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let second = clock.now();
    assert!(second >= first + 5);
}
