/// Largest `n` for which [`binomial`] is exact for every `k`.
/// The running product `C(n, i) * (n - i)` stays below `u128::MAX` up to here.
pub const MAX_BINOMIAL_N: usize = 120;

/// Returns the binomial coefficient of `n` and `k`.
///
/// The multiplicative recurrence divides exactly at every step, so the result is an
/// exact integer. Returns `None` when the running product overflows `u128`, which
/// never happens for `n <= MAX_BINOMIAL_N`.
/// # Example
/// ```
/// use curvelab::prelude::binomial;
/// assert_eq!(binomial(5, 2), Some(10));
/// assert_eq!(binomial(5, 6), Some(0));
/// assert_eq!(binomial(200, 100), None);
/// ```
pub fn binomial(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    } else if k == 0 || k == n {
        return Some(1);
    }

    let k = k.min(n - k);
    let mut r: u128 = 1;
    for i in 0..k {
        r = r.checked_mul((n - i) as u128)? / (i + 1) as u128;
    }
    Some(r)
}

#[cfg(test)]
mod tests {
    use super::{binomial, MAX_BINOMIAL_N};

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(5, 0), Some(1));
        assert_eq!(binomial(5, 1), Some(5));
        assert_eq!(binomial(5, 2), Some(10));
        assert_eq!(binomial(5, 3), Some(10));
        assert_eq!(binomial(5, 4), Some(5));
        assert_eq!(binomial(5, 5), Some(1));
        assert_eq!(binomial(5, 6), Some(0));
        assert_eq!(binomial(0, 0), Some(1));
        assert_eq!(binomial(0, 1), Some(0));
    }

    #[test]
    fn test_binomial_symmetry() {
        for n in 0..=40 {
            assert_eq!(binomial(n, 0), Some(1));
            assert_eq!(binomial(n, n), Some(1));
            for k in 0..=n {
                assert_eq!(binomial(n, k), binomial(n, n - k));
            }
        }
    }

    #[test]
    fn test_pascal_rule() {
        for n in 1..=MAX_BINOMIAL_N {
            for k in 1..n {
                let sum = binomial(n - 1, k).zip(binomial(n - 1, k - 1)).map(|(a, b)| a + b);
                assert_eq!(binomial(n, k), sum);
            }
        }
    }

    #[test]
    fn test_binomial_upper_bound() {
        // C(120, 60)
        assert_eq!(
            binomial(MAX_BINOMIAL_N, MAX_BINOMIAL_N / 2),
            Some(96614908840363322603893139521372656_u128)
        );
        for k in 0..=MAX_BINOMIAL_N {
            assert!(binomial(MAX_BINOMIAL_N, k).is_some());
        }
    }

    #[test]
    fn test_binomial_overflow() {
        assert_eq!(binomial(130, 65), None);
        assert_eq!(binomial(200, 100), None);
        // small k stays exact past the bound
        assert_eq!(binomial(130, 2), Some(8385));
        assert_eq!(binomial(130, 128), Some(8385));
    }
}
