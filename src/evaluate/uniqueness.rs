use std::collections::HashSet;

pub fn is_unique(values: &[i64]) -> bool {
    let distinct: HashSet<&i64> = values.iter().collect();
    distinct.len() == values.len()
}
