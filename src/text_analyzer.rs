use std::io::{self, Write};
use std::process::exit;
use std::time::Instant;

use log::info;

use word_freq::error::AnalyzerError;
use word_freq::logging::set_logger_or_exit;
use word_freq::report::{write_report, ReportHeader};
use word_freq::util::*;
use word_freq::{analyze, StopwordSet};

fn run(conf: &Config) -> Result<(), AnalyzerError> {
    let stopwords = match &conf.stopwords {
        Some(path) => StopwordSet::load_or_empty(path),
        None => StopwordSet::new(),
    };

    let mut input = io::BufReader::new(open_input(&conf.input)?);
    let analysis = analyze(&mut input, &stopwords, conf.pipeline()).map_err(AnalyzerError::Read)?;

    let stats = analysis.stats();
    info!(
        "{}: {} lines, {} bytes, {} words, {} unique",
        conf.input, stats.lines, stats.characters, stats.total_words, stats.unique_words
    );

    let header = ReportHeader {
        input: &conf.input,
        stopwords: conf.stopwords.as_deref(),
        min_len: conf.min_len,
        top_n: conf.top_n,
    };
    let mut output = open_output(conf)?;
    write_report(&mut output, &header, &analysis)
        .and_then(|_| output.flush())
        .map_err(AnalyzerError::Write)?;

    if let Some(path) = &conf.output {
        println!("Report written to: {}", path);
    }
    Ok(())
}

fn main() {
    let conf = parse_args("word frequency report for a text file");
    set_logger_or_exit(&conf.log_target, conf.log_level);
    let started = Instant::now();

    if let Err(err) = run(&conf) {
        let _ = writeln!(io::stderr().lock(), "Error: {}", err);
        exit(1);
    }

    info!("{} analyzed in {:?}", conf.input, started.elapsed());
}
