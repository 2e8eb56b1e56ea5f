use argparse::{ArgumentParser, Print, Store, StoreOption};
use std::fs::File;
use std::io::{self, BufWriter, Write};

use log::LevelFilter;

use crate::error::AnalyzerError;
use crate::logging::LogTarget;
use crate::pipeline::PipelineConfig;

pub const DEFAULT_TOP_N: usize = 20;
pub const DEFAULT_MIN_LEN: usize = 1;

pub struct Config {
    pub input: String,
    pub stopwords: Option<String>,
    pub output: Option<String>,
    pub top_n: usize,
    pub min_len: usize,
    pub log_target: LogTarget,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn pipeline(&self) -> PipelineConfig {
        PipelineConfig {
            min_len: self.min_len,
            top_n: self.top_n,
        }
    }
}

/// Non-positive values fall back to the default of 20.
pub fn clamp_top_n(raw: i64) -> usize {
    if raw <= 0 {
        DEFAULT_TOP_N
    } else {
        raw as usize
    }
}

/// Values below 1 are raised to 1.
pub fn clamp_min_len(raw: i64) -> usize {
    if raw < 1 {
        DEFAULT_MIN_LEN
    } else {
        raw as usize
    }
}

pub fn parse_log_level(name: &str) -> LevelFilter {
    name.parse().unwrap_or(LevelFilter::Warn)
}

pub fn parse_args(description: &str) -> Config {
    let mut input = String::new();
    let mut stopwords: Option<String> = None;
    let mut output: Option<String> = None;
    let mut top_n: i64 = DEFAULT_TOP_N as i64;
    let mut min_len: i64 = DEFAULT_MIN_LEN as i64;
    let mut log_stream = "-".to_string();
    let mut log_level = "warn".to_string();

    {
        // this block limits scope of borrows by ap.refer() method
        let mut ap = ArgumentParser::new();

        ap.set_description(description);
        ap.add_option(
            &["-V", "--version"],
            Print(env!("CARGO_PKG_VERSION").to_string()),
            "Show version",
        );

        ap.refer(&mut input)
            .add_argument("input", Store, "input text file")
            .required();

        ap.refer(&mut top_n)
            .add_option(&["--top"], Store, "number of words to rank - default: 20");

        ap.refer(&mut min_len).add_option(
            &["--min-length"],
            Store,
            "minimum word length - default: 1",
        );

        ap.refer(&mut stopwords).add_option(
            &["--stopwords"],
            StoreOption,
            "file with one stopword per line",
        );

        ap.refer(&mut output).add_option(
            &["--out"],
            StoreOption,
            "report file - default: stdout",
        );

        ap.refer(&mut log_stream)
            .add_option(&["--log"], Store, "log file - default: - (stderr)");

        ap.refer(&mut log_level).add_option(
            &["--log-level"],
            Store,
            "off, error, warn, info, debug or trace - default: warn",
        );

        ap.parse_args_or_exit();
    }

    Config {
        input,
        stopwords,
        output,
        top_n: clamp_top_n(top_n),
        min_len: clamp_min_len(min_len),
        log_target: LogTarget::parse(&log_stream),
        log_level: parse_log_level(&log_level),
    }
}

pub fn open_input(path: &str) -> Result<File, AnalyzerError> {
    File::open(path).map_err(|source| AnalyzerError::OpenInput {
        path: path.to_string(),
        source,
    })
}

#[inline(never)]
pub fn open_output(conf: &Config) -> Result<Box<dyn Write>, AnalyzerError> {
    let output: Box<dyn Write> = match &conf.output {
        None => Box::new(BufWriter::new(io::stdout())),
        Some(filename) => {
            let file = File::create(filename).map_err(|source| AnalyzerError::OpenOutput {
                path: filename.clone(),
                source,
            })?;
            Box::new(BufWriter::new(file))
        }
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_top_n_falls_back_to_default() {
        assert_eq!(clamp_top_n(0), 20);
        assert_eq!(clamp_top_n(-3), 20);
        assert_eq!(clamp_top_n(7), 7);
    }

    #[test]
    fn min_len_is_at_least_one() {
        assert_eq!(clamp_min_len(0), 1);
        assert_eq!(clamp_min_len(-1), 1);
        assert_eq!(clamp_min_len(4), 4);
    }

    #[test]
    fn log_level_names() {
        assert_eq!(parse_log_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_log_level("INFO"), LevelFilter::Info);
        assert_eq!(parse_log_level("bogus"), LevelFilter::Warn);
    }

    #[test]
    fn missing_input_file_is_reported() {
        match open_input("/nonexistent/input.txt") {
            Err(AnalyzerError::OpenInput { path, .. }) => assert_eq!(path, "/nonexistent/input.txt"),
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        }
    }
}
