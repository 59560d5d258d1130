#[cfg(test)]
pub mod parse;

use crate::config::RESULT_TAG;
use crate::types::evaluation::Evaluation;
use std::fmt::Display;

fn join_pipe<T: Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("|")
}

/// Renders the single line the optimizer scrapes from stdout (without the
/// trailing newline).
pub fn render_result_line(evaluation: &Evaluation) -> String {
    format!(
        "{} {{ runtime: {}, pass_all: {}, a1: {}, a2: {}, t1: {}, t2: {}, r1: {}, r2: {}}}",
        RESULT_TAG,
        evaluation.r1 + evaluation.r2,
        evaluation.pass_all,
        join_pipe(&evaluation.a1),
        join_pipe(&evaluation.a2),
        evaluation.t1,
        evaluation.t2,
        evaluation.r1,
        evaluation.r2,
    )
}
