mod epoch;
pub use epoch::*;

pub mod log;
pub use self::log::{FileLogger, StdoutLogger, init_file_logger, init_stdout_logger};

mod vec2;
pub use vec2::*;
