use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WordNetError>;

#[derive(Error, Debug)]
pub enum WordNetError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{file} line {line}: {message}")]
    Parse {
        file: String,
        line: usize,
        message: String,
    },

    #[error("unknown part-of-speech tag '{0}'")]
    UnknownPartOfSpeech(char),

    #[error("database directory {0} is missing required file {1}")]
    MissingFile(PathBuf, String),
}

impl WordNetError {
    pub(crate) fn parse(file: &str, line: usize, message: impl Into<String>) -> Self {
        WordNetError::Parse {
            file: file.to_string(),
            line,
            message: message.into(),
        }
    }
}
