use std::io::{self, Write};

use crate::pipeline::Analysis;

/// What the report header echoes back about the run.
#[derive(Debug, Clone)]
pub struct ReportHeader<'a> {
    pub input: &'a str,
    pub stopwords: Option<&'a str>,
    pub min_len: usize,
    pub top_n: usize,
}

pub fn write_report<W: Write>(
    out: &mut W,
    header: &ReportHeader,
    analysis: &Analysis,
) -> io::Result<()> {
    let stats = analysis.stats();

    writeln!(out, "== Text File Analyzer Report ==")?;
    writeln!(out, "Input file      : {}", header.input)?;
    if let Some(stopwords) = header.stopwords {
        writeln!(out, "Stopwords       : {}", stopwords)?;
    }
    writeln!(out, "Min word length : {}", header.min_len)?;
    writeln!(out, "Top N           : {}", header.top_n)?;
    writeln!(out)?;

    writeln!(out, "-- File Statistics --")?;
    writeln!(out, "Lines                 : {}", stats.lines)?;
    writeln!(out, "Characters (raw)      : {}", stats.characters)?;
    writeln!(out, "Total words (counted) : {}", stats.total_words)?;
    writeln!(out, "Unique words          : {}", stats.unique_words)?;
    writeln!(out, "Average word length   : {:.2}", stats.average_word_length)?;
    writeln!(
        out,
        "Longest word          : {}",
        stats.longest_word.as_deref().unwrap_or("-")
    )?;
    writeln!(out)?;

    writeln!(out, "-- Top {} Words --", header.top_n)?;
    for (rank, ws) in analysis.ranking(header.top_n).iter().enumerate() {
        writeln!(out, "{}. {} : {}", rank + 1, ws.word, ws.count)?;
    }

    writeln!(out)?;
    writeln!(out, "(End of report)")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{analyze, PipelineConfig};
    use crate::stopwords::StopwordSet;
    use std::io::Cursor;

    fn render(text: &str, stopwords: Option<&str>, min_len: usize, top_n: usize) -> String {
        let config = PipelineConfig { min_len, top_n };
        let analysis = analyze(&mut Cursor::new(text), &StopwordSet::new(), config).unwrap();
        let header = ReportHeader {
            input: "input.txt",
            stopwords,
            min_len,
            top_n,
        };
        let mut out = Vec::new();
        write_report(&mut out, &header, &analysis).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn full_report_layout() {
        let report = render("Hello, World! Hello.\n", Some("stop.txt"), 1, 5);
        let expected = "\
== Text File Analyzer Report ==
Input file      : input.txt
Stopwords       : stop.txt
Min word length : 1
Top N           : 5

-- File Statistics --
Lines                 : 1
Characters (raw)      : 21
Total words (counted) : 3
Unique words          : 2
Average word length   : 5.00
Longest word          : hello

-- Top 5 Words --
1. hello : 2
2. world : 1

(End of report)
";
        assert_eq!(report, expected);
    }

    #[test]
    fn empty_run_shows_dash_for_longest_word() {
        let report = render("", None, 1, 3);
        assert!(report.contains("Longest word          : -\n"));
        assert!(report.contains("Average word length   : 0.00\n"));
        assert!(!report.contains("Stopwords"));
        assert!(report.contains("-- Top 3 Words --\n\n(End of report)\n"));
    }
}
