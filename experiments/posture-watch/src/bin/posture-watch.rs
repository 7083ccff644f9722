use {
    posture::{ChannelNotifier, MonotonicClock, PostureConfig, PostureSession, clamp_threshold},
    posture_watch::Monitor,
    std::{env, path::PathBuf},
    tokio::io::{AsyncBufRead, BufReader},
};

// alerts waiting for the consumer task
const ALERT_CAPACITY: usize = 8;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match env::var("POSTURE_LOG_DIR") {
        Ok(dir) => base::init_file_logger(dir)?,
        Err(_) => base::init_stdout_logger(),
    }

    let mut config = PostureConfig::default();
    if let Ok(value) = env::var("POSTURE_THRESHOLD") {
        let threshold: f32 = value.parse()?;
        config = config.with_threshold(clamp_threshold(threshold));
    }
    log::info!("threshold {}", config.threshold());

    let (notifier, mut alerts) = ChannelNotifier::channel(ALERT_CAPACITY);
    tokio::task::spawn(async move {
        while alerts.recv().await.is_some() {
            // stand-in for the voice prompt
            log::warn!("sit up straight!");
        }
    });

    let session = PostureSession::new(config).with_notifier(Box::new(notifier));
    let mut monitor = Monitor::new(session, MonotonicClock::new());

    // input: landmark lines from a file argument, or stdin
    let reader: Box<dyn AsyncBufRead + Unpin + Send> = match env::args().nth(1) {
        Some(path) => {
            let path = PathBuf::from(path);
            log::info!("reading frames from {}", path.display());
            Box::new(BufReader::new(tokio::fs::File::open(path).await?))
        }
        None => {
            log::info!("reading frames from stdin");
            Box::new(BufReader::new(tokio::io::stdin()))
        }
    };

    log::info!("calibrating, hold a good posture");
    monitor.calibrate();
    monitor.run(reader).await?;

    Ok(())
}
