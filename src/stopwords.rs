use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::iter::FromIterator;
use std::path::Path;

use log::{info, warn};

use crate::chained_map::ChainedHashMap;
use crate::error::AnalyzerError;
use crate::tokenizer::normalize;

/// Words excluded from counting. Entries are stored normalized, so lookups
/// take tokens exactly as the tokenizer emits them.
#[derive(Debug, Default)]
pub struct StopwordSet {
    words: ChainedHashMap<String, bool>,
}

impl StopwordSet {
    pub fn new() -> Self {
        StopwordSet {
            words: ChainedHashMap::new(),
        }
    }

    /// Normalizes `raw` and adds it. Returns false if nothing was left to add.
    pub fn insert(&mut self, raw: &str) -> bool {
        match normalize(raw.as_bytes()) {
            Some(word) => {
                self.words.put(word, true);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// One word per line; lines that normalize to nothing are ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<Self> {
        let mut set = StopwordSet::new();
        for line in reader.split(b'\n') {
            let line = line?;
            if let Some(word) = normalize(&line) {
                set.words.put(word, true);
            }
        }
        Ok(set)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, AnalyzerError> {
        let path = path.as_ref();
        let stopwords_err = |source| AnalyzerError::Stopwords {
            path: path.display().to_string(),
            source,
        };
        let file = File::open(path).map_err(stopwords_err)?;
        let set = StopwordSet::from_reader(BufReader::new(file)).map_err(stopwords_err)?;
        info!("loaded {} stopwords from {}", set.len(), path.display());
        Ok(set)
    }

    /// Like `load`, but a failure only logs a warning and yields an empty set.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match StopwordSet::load(path) {
            Ok(set) => set,
            Err(err) => {
                warn!("{}; continuing without stopwords", err);
                StopwordSet::new()
            }
        }
    }
}

impl<'a> FromIterator<&'a str> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = StopwordSet::new();
        for raw in iter {
            set.insert(raw);
        }
        set
    }
}
