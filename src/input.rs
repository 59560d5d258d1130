use crate::error::{FitnessError, Result};
use std::path::Path;
use tracing::debug;

/// Reads one integer per non-empty line from `path`.
pub fn load_sequence(path: &Path) -> Result<Vec<i64>> {
    let content = std::fs::read_to_string(path).map_err(|source| FitnessError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let values = parse_sequence(path, &content)?;
    debug!(path = %path.display(), len = values.len(), "loaded sequence");
    Ok(values)
}

/// Empty lines are skipped; every other line must hold a single `i64`, with
/// surrounding whitespace allowed. A whitespace-only line is not empty and is
/// rejected. `path` is only used for error reporting.
pub fn parse_sequence(path: &Path, content: &str) -> Result<Vec<i64>> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_no, line)| {
            line.trim().parse::<i64>().map_err(|_| FitnessError::Parse {
                path: path.to_path_buf(),
                line: line_no,
                value: line.to_string(),
            })
        })
        .collect()
}
