/// Everything derived from the two input sequences for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub a1: Vec<u64>,
    pub a2: Vec<u8>,
    pub t1: bool,
    pub t2: bool,
    /// Reported only; nothing gates on it.
    pub pass_all: bool,
    pub r1: i128,
    pub r2: i128,
    pub runtime: i128,
}
