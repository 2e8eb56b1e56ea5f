//! One analysis run: raw byte counting, tokenizing, aggregation, ranking.
//!
//! The input is read twice. The first pass counts every byte and every
//! `\n`; the stream is then rewound and the second pass tokenizes it. A
//! `FrequencyPipeline` is consumed by `run`, so no state survives from one
//! run into the next.

use std::io::{self, Read, Seek, SeekFrom};

use log::debug;

use crate::chained_map::ChainedHashMap;
use crate::growable::GrowableSeq;
use crate::stats::{FileStats, WordStat};
use crate::stopwords::StopwordSet;
use crate::tokenizer::Tokenizer;

const READ_CHUNK: usize = 8192;

pub type FreqTable = ChainedHashMap<String, u64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Shortest token that is counted.
    pub min_len: usize,
    /// Ranking size used by `Analysis::top_words`.
    pub top_n: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            min_len: 1,
            top_n: 20,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Idle,
    CountingRaw,
    Tokenizing,
    Aggregating,
    Ranked,
}

pub struct FrequencyPipeline<'a> {
    config: PipelineConfig,
    stopwords: &'a StopwordSet,
    frequency: FreqTable,
    stats: FileStats,
}

fn transition(from: Stage, to: Stage) {
    debug!("pipeline: {:?} -> {:?}", from, to);
}

impl<'a> FrequencyPipeline<'a> {
    pub fn new(config: PipelineConfig, stopwords: &'a StopwordSet) -> Self {
        FrequencyPipeline {
            config,
            stopwords,
            frequency: FreqTable::new(),
            stats: FileStats::default(),
        }
    }

    pub fn run<R: Read + Seek>(mut self, input: &mut R) -> io::Result<Analysis> {
        transition(Stage::Idle, Stage::CountingRaw);
        self.count_raw(input)?;

        input.seek(SeekFrom::Start(0))?;
        transition(Stage::CountingRaw, Stage::Tokenizing);
        self.tokenize(input)?;

        transition(Stage::Tokenizing, Stage::Aggregating);
        self.aggregate();

        Ok(Analysis {
            config: self.config,
            frequency: self.frequency,
            stats: self.stats,
        })
    }

    fn count_raw<R: Read>(&mut self, input: &mut R) -> io::Result<()> {
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            let n = match input.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.stats.characters += n;
            self.stats.lines += chunk[..n].iter().filter(|&&b| b == b'\n').count();
        }
        Ok(())
    }

    fn tokenize<R: Read>(&mut self, input: &mut R) -> io::Result<()> {
        for word in Tokenizer::new(input) {
            let word = word?;
            if word.len() < self.config.min_len || self.stopwords.contains(&word) {
                continue;
            }
            self.stats.total_words += 1;
            let longer = match self.stats.longest_word {
                Some(ref longest) => word.len() > longest.len(),
                None => true,
            };
            if longer {
                self.stats.longest_word = Some(word.clone());
            }
            self.frequency.increment(word, 1);
        }
        Ok(())
    }

    fn aggregate(&mut self) {
        self.stats.unique_words = self.frequency.len();

        let mut letters: u64 = 0;
        self.frequency
            .for_each(|word, count| letters += word.len() as u64 * count);
        self.stats.average_word_length = if self.stats.total_words == 0 {
            0.0
        } else {
            letters as f64 / self.stats.total_words as f64
        };
    }
}

/// Finished run: final counts plus statistics.
#[derive(Debug)]
pub struct Analysis {
    config: PipelineConfig,
    frequency: FreqTable,
    stats: FileStats,
}

impl Analysis {
    pub fn stats(&self) -> &FileStats {
        &self.stats
    }

    pub fn frequencies(&self) -> &FreqTable {
        &self.frequency
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Snapshots the table, sorts it by descending count then word, and
    /// keeps the first `top_n` entries.
    pub fn ranking(&self, top_n: usize) -> GrowableSeq<WordStat> {
        let mut ranked = GrowableSeq::with_capacity(self.stats.unique_words);
        self.frequency.for_each(|word, &count| {
            ranked.push(WordStat {
                word: word.clone(),
                count,
            })
        });
        ranked.sort_by(WordStat::rank_cmp);
        ranked.truncate(top_n);
        transition(Stage::Aggregating, Stage::Ranked);
        ranked
    }

    /// `ranking` with the configured `top_n`.
    pub fn top_words(&self) -> GrowableSeq<WordStat> {
        self.ranking(self.config.top_n)
    }
}

pub fn analyze<R: Read + Seek>(
    input: &mut R,
    stopwords: &StopwordSet,
    config: PipelineConfig,
) -> io::Result<Analysis> {
    FrequencyPipeline::new(config, stopwords).run(input)
}
