use crate::config::LENGTH_PIVOT;
use crate::error::{FitnessError, Result};

// Scores are i128: a sum of u64 magnitudes doubled stays exact for any
// sequence that fits in memory.
fn length_penalty(len: usize) -> i128 {
    (len as i128 - i128::from(LENGTH_PIVOT)).pow(2)
}

/// `2 * sum / len` truncates toward zero.
pub fn score_r1(a1: &[u64]) -> Result<i128> {
    let doubled: i128 = 2 * a1.iter().map(|value| i128::from(*value)).sum::<i128>();
    let mean_term = doubled
        .checked_div(a1.len() as i128)
        .ok_or(FitnessError::EmptySequence("d1"))?;
    Ok(mean_term + length_penalty(a1.len()))
}

pub fn score_r2(a2: &[u8]) -> i128 {
    let sum: i128 = a2.iter().map(|count| i128::from(*count)).sum();
    2 * sum + length_penalty(a2.len())
}
