use std::io::Cursor;

use word_freq::{analyze, normalize, Analysis, ChainedHashMap, PipelineConfig, StopwordSet};

const GREETING: &str = "Hello, World! Hello.";

fn run(text: &str, min_len: usize, stopwords: &StopwordSet) -> Analysis {
    let config = PipelineConfig { min_len, top_n: 20 };
    analyze(&mut Cursor::new(text), stopwords, config).unwrap()
}

fn ranked(analysis: &Analysis, top_n: usize) -> Vec<(String, u64)> {
    analysis
        .ranking(top_n)
        .into_iter()
        .map(|ws| (ws.word, ws.count))
        .collect()
}

#[test]
fn counts_greeting() {
    let analysis = run(GREETING, 1, &StopwordSet::new());
    let stats = analysis.stats();

    assert_eq!(analysis.frequencies().get("hello"), Some(&2));
    assert_eq!(analysis.frequencies().get("world"), Some(&1));
    assert_eq!(stats.total_words, 3);
    assert_eq!(stats.unique_words, 2);
    assert_eq!(stats.longest_word.as_deref(), Some("hello"));
    assert_eq!(stats.average_word_length, 5.0);
    assert_eq!(stats.characters, GREETING.len());
    assert_eq!(stats.lines, 0);
}

#[test]
fn stopwords_are_excluded() {
    let stopwords: StopwordSet = vec!["hello"].into_iter().collect();
    let analysis = run(GREETING, 1, &stopwords);

    assert_eq!(analysis.frequencies().len(), 1);
    assert_eq!(analysis.frequencies().get("world"), Some(&1));
    assert!(!analysis.frequencies().contains("hello"));
    assert_eq!(analysis.stats().total_words, 1);
}

#[test]
fn min_length_can_exclude_everything() {
    let analysis = run(GREETING, 6, &StopwordSet::new());
    let stats = analysis.stats();

    assert_eq!(stats.total_words, 0);
    assert_eq!(stats.unique_words, 0);
    assert_eq!(stats.average_word_length, 0.0);
    assert_eq!(stats.longest_word, None);
    assert!(analysis.ranking(10).is_empty());
}

#[test]
fn seventh_key_triggers_one_rehash() {
    let mut map: ChainedHashMap<String, u64> = ChainedHashMap::new();
    let keys = ["one", "two", "three", "four", "five", "six", "seven"];
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(map.bucket_count(), 8);
        map.increment(key.to_string(), i as u64 + 1);
    }
    assert_eq!(map.bucket_count(), 16);
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(map.get(*key), Some(&(i as u64 + 1)));
    }
}

#[test]
fn equal_counts_rank_alphabetically() {
    let analysis = run("bb aa cc", 1, &StopwordSet::new());
    let words: Vec<String> = ranked(&analysis, 10).into_iter().map(|(w, _)| w).collect();
    assert_eq!(words, vec!["aa", "bb", "cc"]);
}

#[test]
fn ranking_order_over_larger_text() {
    let text = "It was the best of times, it was the worst of times, \
                it was the age of wisdom, it was the age of foolishness.";
    let analysis = run(text, 1, &StopwordSet::new());
    let top = ranked(&analysis, 5);

    assert_eq!(
        top,
        vec![
            ("it".to_string(), 4),
            ("of".to_string(), 4),
            ("the".to_string(), 4),
            ("was".to_string(), 4),
            ("age".to_string(), 2),
        ]
    );
    for pair in analysis.ranking(100).as_slice().windows(2) {
        assert!(pair[0].rank_cmp(&pair[1]) != std::cmp::Ordering::Greater);
    }
}

#[test]
fn stored_words_are_normalized() {
    let text = "'Quoted' WORDS -- state-of-the-ART don't\n'tis ---\nEND-";
    let analysis = run(text, 1, &StopwordSet::new());
    for (word, _) in analysis.frequencies() {
        assert_eq!(normalize(word.as_bytes()).as_deref(), Some(word.as_str()));
    }
    assert!(analysis.frequencies().contains("state-of-the-art"));
    assert!(analysis.frequencies().contains("don't"));
    assert!(analysis.frequencies().contains("end"));
    assert_eq!(analysis.stats().lines, 2);
}

#[test]
fn every_run_starts_fresh() {
    let stopwords = StopwordSet::new();
    let first = run("alpha beta alpha", 1, &stopwords);
    let second = run("gamma", 1, &stopwords);

    assert_eq!(first.stats().total_words, 3);
    assert_eq!(second.stats().total_words, 1);
    assert_eq!(second.frequencies().len(), 1);
    assert!(!second.frequencies().contains("alpha"));
}
