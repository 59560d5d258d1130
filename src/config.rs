use std::path::{Path, PathBuf};

pub const FIRST_INPUT_FILE: &str = "dummy1";
pub const SECOND_INPUT_FILE: &str = "dummy2";

/// Output is printed only when the uniform draw is strictly above this value.
pub const SUPPRESS_THRESHOLD: f64 = 0.05;

pub const RESULT_TAG: &str = "[PYGGI_RESULT]";

/// Sequence length at which the length penalty of a score is zero.
pub const LENGTH_PIVOT: i64 = 20;

#[derive(Debug, Clone)]
pub struct InputPaths {
    pub first: PathBuf,
    pub second: PathBuf,
}

impl InputPaths {
    pub fn under(root: &Path) -> Self {
        Self {
            first: root.join(FIRST_INPUT_FILE),
            second: root.join(SECOND_INPUT_FILE),
        }
    }
}
