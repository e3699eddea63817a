//! Small arithmetic helpers.

/// Returns the larger of two values, preferring `a` when they are equal.
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// Classic FizzBuzz for a single number.
///
/// ```rust
/// use shopkit_core::basics::fizz_buzz;
///
/// assert_eq!(fizz_buzz(15), "FizzBuzz");
/// assert_eq!(fizz_buzz(9), "Fizz");
/// assert_eq!(fizz_buzz(10), "Buzz");
/// assert_eq!(fizz_buzz(7), "7");
/// ```
pub fn fizz_buzz(n: i64) -> String {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => "FizzBuzz".to_string(),
        (true, false) => "Fizz".to_string(),
        (false, true) => "Buzz".to_string(),
        (false, false) => n.to_string(),
    }
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn calculate_average(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// `n!`, or `None` when `n` is negative or the result overflows `u64`.
pub fn factorial(n: i64) -> Option<u64> {
    if n < 0 {
        return None;
    }
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}
