//! Pure computations behind the `/bfhl` operations.
//!
//! All arithmetic is host-integer arithmetic; results that no longer fit
//! are reported as operation failures instead of wrapping.

use service_core::error::AppError;

/// First `count` Fibonacci numbers, starting 0, 1, 1, 2, ...
pub fn fibonacci(count: u64) -> Result<Vec<u64>, AppError> {
    let mut sequence = Vec::new();
    let (mut a, mut b) = (0u128, 1u128);

    for _ in 0..count {
        let value = u64::try_from(a).map_err(|_| {
            AppError::Operation("Fibonacci sequence exceeds integer range".to_string())
        })?;
        sequence.push(value);
        (a, b) = (b, a + b);
    }

    Ok(sequence)
}

/// Trial division up to the square root; anything below 2 is never prime.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }

    true
}

/// Order-preserving filter of `numbers` down to its primes.
pub fn filter_primes(numbers: &[i64]) -> Vec<i64> {
    numbers.iter().copied().filter(|&n| is_prime(n)).collect()
}

/// Euclidean gcd on absolute values; `gcd(a, 0) = |a|`.
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a as i64
}

fn lcm(a: i64, b: i64) -> Result<i64, AppError> {
    if a == 0 && b == 0 {
        return Ok(0);
    }

    let divisor = gcd(a, b);
    (a / divisor)
        .checked_mul(b)
        .and_then(i64::checked_abs)
        .ok_or_else(|| AppError::Operation("LCM result exceeds integer range".to_string()))
}

/// Left fold of the least common multiple across a non-empty slice.
pub fn fold_lcm(numbers: &[i64]) -> Result<i64, AppError> {
    let mut iter = numbers.iter().copied();
    let first = iter
        .next()
        .ok_or_else(|| AppError::Operation("Invalid LCM input".to_string()))?
        .checked_abs()
        .ok_or_else(|| AppError::Operation("LCM result exceeds integer range".to_string()))?;

    iter.try_fold(first, lcm)
}

/// Left fold of the Euclidean gcd across a non-empty slice.
pub fn fold_hcf(numbers: &[i64]) -> Result<i64, AppError> {
    numbers
        .iter()
        .copied()
        .reduce(gcd)
        .ok_or_else(|| AppError::Operation("Invalid HCF input".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fibonacci_base_cases() {
        assert_eq!(fibonacci(0).unwrap(), Vec::<u64>::new());
        assert_eq!(fibonacci(1).unwrap(), vec![0]);
        assert_eq!(fibonacci(5).unwrap(), vec![0, 1, 1, 2, 3]);
    }

    #[test]
    fn fibonacci_satisfies_recurrence() {
        for n in [2u64, 10, 30, 90] {
            let seq = fibonacci(n).unwrap();
            assert_eq!(seq.len() as u64, n);
            for i in 2..seq.len() {
                assert_eq!(seq[i], seq[i - 1] + seq[i - 2]);
            }
        }
    }

    #[test]
    fn fibonacci_rejects_sequences_past_u64() {
        // fib(93) still fits in u64; fib(94) does not.
        assert_eq!(fibonacci(94).unwrap().len(), 94);
        assert!(fibonacci(95).is_err());
    }

    #[test]
    fn prime_filter_keeps_order() {
        assert_eq!(filter_primes(&[1, 2, 3, 4, 5, 6, 7]), vec![2, 3, 5, 7]);
        assert_eq!(filter_primes(&[]), Vec::<i64>::new());
        assert_eq!(filter_primes(&[9, 15, 21]), Vec::<i64>::new());
    }

    #[test]
    fn small_and_negative_numbers_are_not_prime() {
        assert!(!is_prime(-7));
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(97));
        assert!(!is_prime(1_000_003 * 3));
    }

    #[test]
    fn lcm_folds_left_to_right() {
        assert_eq!(fold_lcm(&[4, 6]).unwrap(), 12);
        assert_eq!(fold_lcm(&[7]).unwrap(), 7);
        assert_eq!(fold_lcm(&[2, 3, 4]).unwrap(), 12);
    }

    #[test]
    fn hcf_folds_left_to_right() {
        assert_eq!(fold_hcf(&[12, 18]).unwrap(), 6);
        assert_eq!(fold_hcf(&[7]).unwrap(), 7);
        assert_eq!(fold_hcf(&[12, 18, 8]).unwrap(), 2);
    }

    #[test]
    fn folds_are_order_invariant() {
        let orderings: [&[i64]; 3] = [&[4, 6, 10], &[10, 4, 6], &[6, 10, 4]];
        for numbers in orderings {
            assert_eq!(fold_lcm(numbers).unwrap(), 60);
            assert_eq!(fold_hcf(numbers).unwrap(), 2);
        }
    }

    #[test]
    fn folds_normalize_signs_and_zeros() {
        assert_eq!(fold_lcm(&[-4, 6]).unwrap(), 12);
        assert_eq!(fold_hcf(&[-12, 18]).unwrap(), 6);
        assert_eq!(fold_lcm(&[0, 0]).unwrap(), 0);
        assert_eq!(fold_lcm(&[0, 5]).unwrap(), 0);
        assert_eq!(fold_hcf(&[0, 0]).unwrap(), 0);
        assert_eq!(fold_hcf(&[0, 5]).unwrap(), 5);
    }

    #[test]
    fn lcm_reports_overflow() {
        assert!(fold_lcm(&[i64::MAX, 2]).is_err());
    }
}
