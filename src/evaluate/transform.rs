/// Magnitudes as `u64` so `i64::MIN` has a representable absolute value.
pub fn abs_values(values: &[i64]) -> Vec<u64> {
    values.iter().map(|value| value.unsigned_abs()).collect()
}

/// For each run of three consecutive values `(x, y, z)`, counts how many of
/// `x < y`, `y < z`, `x < z` do not hold. Shorter inputs have no windows.
pub fn window_false_counts(values: &[i64]) -> Vec<u8> {
    values
        .windows(3)
        .map(|w| {
            let (x, y, z) = (w[0], w[1], w[2]);
            [x < y, y < z, x < z]
                .iter()
                .filter(|holds| !**holds)
                .count() as u8
        })
        .collect()
}
