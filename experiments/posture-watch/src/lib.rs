pub mod command;
pub use command::{Command, Frame, parse_command};

pub mod monitor;
pub use monitor::Monitor;
