pub mod score;
pub mod transform;
pub mod uniqueness;

use crate::error::Result;
use crate::types::evaluation::Evaluation;
use tracing::debug;

pub fn evaluate(d1: &[i64], d2: &[i64]) -> Result<Evaluation> {
    let t1 = uniqueness::is_unique(d1);
    let t2 = uniqueness::is_unique(d2);

    let a1 = transform::abs_values(d1);
    let a2 = transform::window_false_counts(d2);

    let r1 = score::score_r1(&a1)?;
    let r2 = score::score_r2(&a2);
    debug!(t1, t2, r1, r2, "scored sequences");

    Ok(Evaluation {
        a1,
        a2,
        t1,
        t2,
        pass_all: t1 && t2,
        r1,
        r2,
        runtime: r1 + r2,
    })
}
