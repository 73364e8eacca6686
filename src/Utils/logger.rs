//! terminal logging setup, the report itself goes to stdout so log records go to stderr
use log::{LevelFilter, info};
use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

/// install the global logger; returns false if logging is off or a logger was already installed
pub fn init_logger(level: LevelFilter) -> bool {
    if level == LevelFilter::Off {
        return false;
    }
    let logger_instance = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )]);
    match logger_instance {
        Ok(()) => {
            info!("logging started with level {}", level);
            true
        }
        // a second initialisation keeps the first logger
        Err(_) => false,
    }
}
