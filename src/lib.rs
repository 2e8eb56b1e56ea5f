pub mod error;
pub mod logging;
pub mod util;

pub mod bucket_list;
pub mod chained_map;
pub mod growable;
pub mod tokenizer;

pub mod pipeline;
pub mod report;
mod stats;
pub mod stopwords;

pub use crate::chained_map::ChainedHashMap;
pub use crate::growable::GrowableSeq;
pub use crate::pipeline::{analyze, Analysis, FrequencyPipeline, PipelineConfig};
pub use crate::stats::{FileStats, WordStat};
pub use crate::stopwords::StopwordSet;
pub use crate::tokenizer::{normalize, normalize_bytes, Tokenizer};
