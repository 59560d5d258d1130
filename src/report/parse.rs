use crate::config::RESULT_TAG;
use crate::error::{FitnessError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static RESULT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{}\s*\{{(.*?)\}}\s", regex::escape(RESULT_TAG)))
        .expect("result pattern is a valid regex")
});

/// Key/value pairs of a result line, in the order they were printed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultFields {
    pub entries: Vec<(String, String)>,
}

impl ResultFields {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Extracts the first result line from captured stdout the way the optimizer
/// does. `Ok(None)` means no result was reported for this run.
pub fn parse_result_line(stdout: &str) -> Result<Option<ResultFields>> {
    let Some(captures) = RESULT_PATTERN.captures(stdout) else {
        return Ok(None);
    };
    let body = captures.get(1).map_or("", |m| m.as_str());

    let mut entries = Vec::new();
    for item in body.split(',') {
        let parts: Vec<&str> = item.split(':').collect();
        let [key, value] = parts.as_slice() else {
            return Err(FitnessError::MalformedResult(item.to_string()));
        };
        entries.push((key.trim().to_string(), value.trim().to_string()));
    }
    Ok(Some(ResultFields { entries }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::evaluate;
    use crate::report::render_result_line;

    #[test]
    fn rendered_line_is_readable_by_optimizer() {
        let evaluation = evaluate(&[-3, 5, -1], &[1, 2, 3, 2, 5]).expect("should evaluate");
        let stdout = format!("{}\n", render_result_line(&evaluation));

        let fields = parse_result_line(&stdout)
            .expect("line should be well formed")
            .expect("line should be found");
        let keys: Vec<&str> = fields.entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            ["runtime", "pass_all", "a1", "a2", "t1", "t2", "r1", "r2"]
        );
        assert_eq!(fields.get("runtime"), Some("590"));
        assert_eq!(fields.get("a1"), Some("3|5|1"));
        assert_eq!(fields.get("pass_all"), Some("false"));
        assert_eq!(fields.get("missing"), None);
    }

    #[test]
    fn missing_line_is_none() {
        assert_eq!(parse_result_line("compiled ok\n").expect("no error"), None);
        assert_eq!(parse_result_line("").expect("no error"), None);
    }

    #[test]
    fn line_without_trailing_whitespace_is_not_matched() {
        let parsed = parse_result_line("[PYGGI_RESULT] { runtime: 1}").expect("no error");
        assert_eq!(parsed, None);
    }

    #[test]
    fn first_of_several_lines_wins() {
        let stdout = "noise\n[PYGGI_RESULT] {runtime: 1}\n[PYGGI_RESULT] {runtime: 2}\n";
        let fields = parse_result_line(stdout)
            .expect("no error")
            .expect("line should be found");
        assert_eq!(fields.get("runtime"), Some("1"));
    }

    #[test]
    fn field_with_extra_colon_is_rejected() {
        let err = parse_result_line("[PYGGI_RESULT] { runtime: 1:2}\n").expect_err("should fail");
        assert!(matches!(err, FitnessError::MalformedResult(_)));
    }
}
