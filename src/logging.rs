use std::error::Error;
use std::fmt;
use std::fs::OpenOptions;
use std::io;
use std::io::prelude::*;
use std::path::PathBuf;
use std::process::exit;

use log::{LevelFilter, SetLoggerError};
use simplelog::{ColorChoice, ConfigBuilder, TerminalMode};

#[derive(Debug)]
pub enum LoggingError {
    Io(io::Error),
    Init(SetLoggerError),
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LoggingError::Io(ref err) => write!(f, "cannot open log file: {}", err),
            LoggingError::Init(ref err) => write!(f, "logger already set: {}", err),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            LoggingError::Io(ref err) => Some(err),
            LoggingError::Init(ref err) => Some(err),
        }
    }
}

impl From<SetLoggerError> for LoggingError {
    fn from(err: SetLoggerError) -> LoggingError {
        LoggingError::Init(err)
    }
}

impl From<io::Error> for LoggingError {
    fn from(err: io::Error) -> LoggingError {
        LoggingError::Io(err)
    }
}

/// Where the analyzer's diagnostics go. `-` on the command line means
/// stderr, anything else names a file that is truncated on start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    pub fn parse(arg: &str) -> LogTarget {
        match arg {
            "" | "-" => LogTarget::Stderr,
            path => LogTarget::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for LogTarget {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LogTarget::Stderr => write!(f, "stderr"),
            LogTarget::File(ref path) => write!(f, "{}", path.display()),
        }
    }
}

fn log_config() -> simplelog::Config {
    ConfigBuilder::new()
        .set_target_level(LevelFilter::Debug)
        .set_location_level(LevelFilter::Off)
        .build()
}

pub fn set_logger(target: &LogTarget, log_level: LevelFilter) -> Result<(), LoggingError> {
    let logger: Box<dyn simplelog::SharedLogger> = match *target {
        LogTarget::Stderr => simplelog::TermLogger::new(
            log_level,
            log_config(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
        LogTarget::File(ref path) => {
            let file = OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)?;
            simplelog::WriteLogger::new(log_level, log_config(), file)
        }
    };

    simplelog::CombinedLogger::init(vec![logger])?;

    Ok(())
}

pub fn set_logger_or_exit(target: &LogTarget, log_level: LevelFilter) {
    if let Err(err) = set_logger(target, log_level) {
        let _ = writeln!(io::stderr().lock(), "can't start logging to {}: {}", target, err);
        exit(-1);
    }
}
