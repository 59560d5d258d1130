use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FitnessError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: not an integer: {value:?}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        value: String,
    },

    #[error("sequence {0} is empty; r1 is undefined")]
    EmptySequence(&'static str),

    #[cfg(test)]
    #[error("malformed result field: {0:?}")]
    MalformedResult(String),
}

pub type Result<T> = std::result::Result<T, FitnessError>;
