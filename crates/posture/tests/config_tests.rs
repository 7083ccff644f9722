use posture::{
    ALERT_COOLDOWN_MS, CALIBRATION_WINDOW_MS, CONFIRMATION_DELAY_MS, MAX_THRESHOLD, MIN_THRESHOLD,
    PostureConfig, clamp_threshold,
};

#[test]
fn test_config_defaults() {
    let config = PostureConfig::default();

    assert_eq!(config.threshold(), 0.05);
    assert_eq!(config.confirmation_delay_ms(), 2000);
    assert_eq!(config.alert_cooldown_ms(), 5000);
    assert_eq!(config.calibration_window_ms(), 3000);
}

#[test]
fn test_config_constants() {
    assert_eq!(CONFIRMATION_DELAY_MS, 2000);
    assert_eq!(ALERT_COOLDOWN_MS, 5000);
    assert_eq!(CALIBRATION_WINDOW_MS, 3000);
}

#[test]
fn test_config_builder() {
    let config = PostureConfig::default()
        .with_threshold(0.02)
        .with_confirmation_delay_ms(1500)
        .with_alert_cooldown_ms(10_000)
        .with_calibration_window_ms(5000);

    assert_eq!(config.threshold(), 0.02);
    assert_eq!(config.confirmation_delay_ms(), 1500);
    assert_eq!(config.alert_cooldown_ms(), 10_000);
    assert_eq!(config.calibration_window_ms(), 5000);
}

#[test]
fn test_config_partial_builder() {
    let config = PostureConfig::default().with_threshold(0.08);

    assert_eq!(config.threshold(), 0.08);
    assert_eq!(config.confirmation_delay_ms(), 2000); // default
}

#[test]
fn test_clamp_threshold() {
    assert_eq!(clamp_threshold(0.0), MIN_THRESHOLD);
    assert_eq!(clamp_threshold(1.0), MAX_THRESHOLD);
    assert_eq!(clamp_threshold(0.03), 0.03);
}
