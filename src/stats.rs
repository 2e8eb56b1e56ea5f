use std::cmp::Ordering;

/// Aggregate numbers for one analysis run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileStats {
    /// Number of `\n` bytes in the input.
    pub lines: usize,
    /// Raw bytes read.
    pub characters: usize,
    /// Tokens that passed the length and stopword filters.
    pub total_words: usize,
    pub unique_words: usize,
    pub average_word_length: f64,
    /// First token of maximal length, `None` when nothing was counted.
    pub longest_word: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordStat {
    pub word: String,
    pub count: u64,
}

impl WordStat {
    /// Ranking order: higher count first, then alphabetical.
    pub fn rank_cmp(&self, other: &WordStat) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.word.cmp(&other.word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(word: &str, count: u64) -> WordStat {
        WordStat {
            word: word.to_string(),
            count,
        }
    }

    #[test]
    fn higher_count_ranks_first() {
        assert_eq!(stat("zebra", 3).rank_cmp(&stat("apple", 1)), Ordering::Less);
        assert_eq!(stat("apple", 1).rank_cmp(&stat("zebra", 3)), Ordering::Greater);
    }

    #[test]
    fn equal_counts_rank_alphabetically() {
        assert_eq!(stat("aa", 2).rank_cmp(&stat("bb", 2)), Ordering::Less);
        assert_eq!(stat("bb", 2).rank_cmp(&stat("bb", 2)), Ordering::Equal);
    }
}
