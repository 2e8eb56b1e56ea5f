use std::error::Error;
use std::fmt;
use std::io;

/// Faults raised around the analysis core: opening files, reading the
/// input stream, writing the report.
#[derive(Debug)]
pub enum AnalyzerError {
    OpenInput { path: String, source: io::Error },
    OpenOutput { path: String, source: io::Error },
    Stopwords { path: String, source: io::Error },
    Read(io::Error),
    Write(io::Error),
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            AnalyzerError::OpenInput { ref path, ref source } => {
                write!(f, "cannot open input file {}: {}", path, source)
            }
            AnalyzerError::OpenOutput { ref path, ref source } => {
                write!(f, "cannot open output file {}: {}", path, source)
            }
            AnalyzerError::Stopwords { ref path, ref source } => {
                write!(f, "could not load stopwords from {}: {}", path, source)
            }
            AnalyzerError::Read(ref err) => write!(f, "read error: {}", err),
            AnalyzerError::Write(ref err) => write!(f, "write error: {}", err),
        }
    }
}

impl Error for AnalyzerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            AnalyzerError::OpenInput { ref source, .. } => Some(source),
            AnalyzerError::OpenOutput { ref source, .. } => Some(source),
            AnalyzerError::Stopwords { ref source, .. } => Some(source),
            AnalyzerError::Read(ref err) => Some(err),
            AnalyzerError::Write(ref err) => Some(err),
        }
    }
}
