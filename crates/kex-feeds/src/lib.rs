//! kex-feeds — corpus source adapters for kex.
//!
//! Each source produces the corpus as an ordered `Vec<String>`, one entry per
//! line. Reading is async (tokio); the search that follows is not.

use std::path::PathBuf;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("failed to read corpus {source_name}: {error}")]
    Io {
        source_name: String,
        #[source]
        error: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FeedError>;

/// Where the corpus comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    /// The seven sample lines shipped with kex-core.
    Builtin,
    /// A UTF-8 text file, one entry per line.
    File(PathBuf),
    /// Standard input until EOF.
    Stdin,
}

impl CorpusSource {
    /// `""` selects the built-in corpus, `"-"` standard input, anything else a
    /// file path.
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "" => CorpusSource::Builtin,
            "-" => CorpusSource::Stdin,
            path => CorpusSource::File(PathBuf::from(path)),
        }
    }

    pub async fn read_lines(&self) -> Result<Vec<String>> {
        let lines = match self {
            CorpusSource::Builtin => kex_core::builtin::sample_corpus(),
            CorpusSource::File(path) => {
                let file = tokio::fs::File::open(path)
                    .await
                    .map_err(|error| self.io_error(error))?;
                read_all(file).await.map_err(|error| self.io_error(error))?
            }
            CorpusSource::Stdin => read_all(tokio::io::stdin())
                .await
                .map_err(|error| self.io_error(error))?,
        };
        tracing::debug!(source = %self, lines = lines.len(), "corpus loaded");
        Ok(lines)
    }

    fn io_error(&self, error: std::io::Error) -> FeedError {
        FeedError::Io {
            source_name: self.to_string(),
            error,
        }
    }
}

impl std::fmt::Display for CorpusSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CorpusSource::Builtin => write!(f, "builtin"),
            CorpusSource::File(path) => write!(f, "{}", path.display()),
            CorpusSource::Stdin => write!(f, "stdin"),
        }
    }
}

/// Read every line from `reader`. `lines()` strips `\n` and `\r\n`, so a
/// trailing newline does not produce an empty final entry.
pub async fn read_all<R: AsyncRead + Unpin>(reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = BufReader::new(reader).lines();
    let mut out = Vec::new();
    while let Some(line) = lines.next_line().await? {
        out.push(line);
    }
    Ok(out)
}
