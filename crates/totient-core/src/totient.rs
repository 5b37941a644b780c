//! Euler's totient function.
//!
//! φ(n) is computed by trial-division factorization: start from n and, for
//! every distinct prime factor p, apply `result -= result / p`. Each value is
//! independent work; nothing is cached between calls.

use num_integer::Integer;

use crate::calculator::TotientError;

/// Compute φ(n), the count of integers in `[1, n]` coprime to `n`.
///
/// # Example
/// ```
/// use totient_core::totient;
///
/// assert_eq!(totient(1).unwrap(), 1);
/// assert_eq!(totient(9).unwrap(), 6);
/// assert!(totient(0).is_err());
/// ```
pub fn totient(n: i64) -> Result<u64, TotientError> {
    let n = domain(n)?;
    Ok(phi(n))
}

/// Compute φ(n) by counting `k` in `[1, n]` with `gcd(n, k) == 1`.
///
/// O(n log n) per value. Used as an independent reference for `totient`.
pub fn totient_by_gcd(n: i64) -> Result<u64, TotientError> {
    let n = domain(n)?;
    Ok((1..=n).filter(|k| n.gcd(k) == 1).map(|_| 1u64).sum())
}

/// φ(n) for a value already known to be `>= 1`.
pub(crate) fn totient_unchecked(n: i64) -> u64 {
    debug_assert!(n >= 1, "totient of {n} is undefined");
    phi(n.unsigned_abs())
}

fn domain(n: i64) -> Result<u64, TotientError> {
    if n < 1 {
        return Err(TotientError::InvalidInput(format!(
            "totient is undefined for {n}"
        )));
    }
    Ok(n.unsigned_abs())
}

fn phi(n: u64) -> u64 {
    let mut result = n;
    let mut m = n;
    let mut p = 2u64;
    // p * p <= m, written so it cannot overflow
    while p <= m / p {
        if m % p == 0 {
            while m % p == 0 {
                m /= p;
            }
            result -= result / p;
        }
        p += 1;
    }
    // Remaining cofactor is a prime larger than sqrt(n)
    if m > 1 {
        result -= result / m;
    }
    result
}
