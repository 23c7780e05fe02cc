//! Combinatorial counting: factorial, permutations, combinations.
//!
//! All functions take and return `f64`. Counts for large arguments
//! legitimately exceed the finite range of a double, so overflow is not an
//! error: the result saturates to `f64::INFINITY` and stays a valid output.
//! Invalid input (fractional arguments, negative selection sizes, selecting
//! more items than the pool holds) collapses to `0.0` in the plain
//! functions; the `try_` variants report the same rejections as a
//! [`CountError`] instead.
//!
//! # Algorithms
//!
//! - **Factorial / permutation count**: iterative falling-factorial
//!   products. `factorial(n)` is finite up to `n = 170` and infinite from
//!   `n = 171` on.
//! - **Combination count**: running product of per-step ratios
//!   `(n−i)/(r−i)` rather than a quotient of factorials. The intermediate
//!   values stay near the magnitude of the final result, so the function
//!   remains finite far beyond the point where either factorial alone would
//!   overflow (for `r = 500` the finite/infinite crossover sits between
//!   `n = 1029` and `n = 1030`).
//! - **Negative upper argument**: the reflection identity
//!   `C(−n, r) = (−1)^r · C(n + r − 1, r)` (and its falling-factorial
//!   analogue for permutations) extends both counts to negative `n`.

use tracing::{debug, trace};

/// Why a counting function rejected its input.
///
/// Returned by the `try_` variants. The plain functions collapse every
/// variant to `0.0`, indistinguishable from a legitimate zero count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CountError {
    /// An argument has a fractional part, or is NaN or infinite.
    #[error("argument is not an integer")]
    NonInteger,
    /// Factorial of a negative number is undefined.
    #[error("factorial argument is negative")]
    NegativeArgument,
    /// The selection size `r` is negative.
    #[error("selection size is negative")]
    NegativeSelection,
    /// The selection size `r` exceeds a positive pool size `n`.
    #[error("selection size exceeds pool size")]
    SelectionExceedsPool,
}

/// `true` when `x` is finite with no fractional part.
fn is_integer(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

/// (−1)^r for an integer-valued exponent.
fn parity_sign(r: f64) -> f64 {
    if r % 2.0 == 0.0 {
        1.0
    } else {
        -1.0
    }
}

// ============================================================================
// Factorial
// ============================================================================

/// Factorial `n!` with structured rejections.
///
/// `Ok` covers every defined case, including the overflow saturation to
/// `f64::INFINITY` for `n ≥ 171`.
///
/// # Returns
/// - `Err(CountError::NonInteger)` if `n` has a fractional part or is
///   NaN/infinite.
/// - `Err(CountError::NegativeArgument)` if `n < 0`.
///
/// # Examples
/// ```
/// use u_combin::counting::{try_factorial, CountError};
/// assert_eq!(try_factorial(5.0), Ok(120.0));
/// assert_eq!(try_factorial(-3.0), Err(CountError::NegativeArgument));
/// ```
pub fn try_factorial(n: f64) -> Result<f64, CountError> {
    if !is_integer(n) {
        return Err(CountError::NonInteger);
    }
    if n < 0.0 {
        return Err(CountError::NegativeArgument);
    }

    // 0! = 1! = 1: the loop body never runs for n < 2.
    let mut product = 1.0_f64;
    let mut i = 2.0_f64;
    while i <= n {
        product *= i;
        if product.is_infinite() {
            // Saturated; every remaining factor is ≥ 1.
            return Ok(f64::INFINITY);
        }
        i += 1.0;
    }
    Ok(product)
}

/// Factorial `n!` = n·(n−1)·…·1, with `0! = 1`.
///
/// Compatibility surface: every rejection collapses to `0.0`. Finite up to
/// `170!` ≈ 7.26 × 10³⁰⁶; `f64::INFINITY` from `171!` on.
///
/// # Returns
/// - `0.0` if `n` is not an integer or is negative.
///
/// # Examples
/// ```
/// use u_combin::counting::factorial;
/// assert_eq!(factorial(0.0), 1.0);
/// assert_eq!(factorial(5.0), 120.0);
/// assert_eq!(factorial(-3.0), 0.0);
/// assert_eq!(factorial(171.0), f64::INFINITY);
/// ```
pub fn factorial(n: f64) -> f64 {
    match try_factorial(n) {
        Ok(value) => {
            trace!(n, value, "factorial");
            value
        }
        Err(err) => {
            debug!(n, %err, "factorial rejected input");
            0.0
        }
    }
}

// ============================================================================
// Permutation Count
// ============================================================================

/// Permutation count `P(n, r)` with structured rejections.
///
/// # Returns
/// - `Err(CountError::NonInteger)` if either argument has a fractional
///   part or is NaN/infinite.
/// - `Err(CountError::NegativeSelection)` if `r < 0`.
/// - `Err(CountError::SelectionExceedsPool)` if `0 < n < r`.
///
/// # Examples
/// ```
/// use u_combin::counting::{try_permutation_count, CountError};
/// assert_eq!(try_permutation_count(4.0, 2.0), Ok(12.0));
/// assert_eq!(
///     try_permutation_count(3.0, 5.0),
///     Err(CountError::SelectionExceedsPool),
/// );
/// ```
pub fn try_permutation_count(n: f64, r: f64) -> Result<f64, CountError> {
    if !is_integer(n) || !is_integer(r) {
        return Err(CountError::NonInteger);
    }
    // Checked before the reflection below so the recursion target is
    // always non-negative and the depth is exactly one.
    if r < 0.0 {
        return Err(CountError::NegativeSelection);
    }
    if n < 0.0 {
        // Reflection identity: P(−n, r) = (−1)^r · P(n + r − 1, r).
        return Ok(parity_sign(r) * try_permutation_count(-n + r - 1.0, r)?);
    }
    if r == 0.0 {
        // One arrangement: the empty one.
        return Ok(1.0);
    }
    if n < r {
        // n = 0 is the legitimate zero count; a positive pool that is
        // still too small is a domain rejection.
        return if n == 0.0 {
            Ok(0.0)
        } else {
            Err(CountError::SelectionExceedsPool)
        };
    }

    let mut product = 1.0_f64;
    let mut i = 0.0_f64;
    while i < r {
        product *= n - i;
        if product.is_infinite() {
            return Ok(f64::INFINITY);
        }
        i += 1.0;
    }
    Ok(product)
}

/// Permutation count `P(n, r)` = n·(n−1)·…·(n−r+1), the number of ordered
/// selections of `r` items from `n` distinct items.
///
/// Compatibility surface: every rejection collapses to `0.0`. Negative `n`
/// is defined through the reflection identity
/// `P(−n, r) = (−1)^r · P(n + r − 1, r)`.
///
/// `P(n, n) = n!`, so like [`factorial`] the result is infinite once the
/// falling-factorial product exceeds the finite double range.
///
/// # Examples
/// ```
/// use u_combin::counting::permutation_count;
/// // AB, BA, AC, CA, AD, DA, BC, CB, BD, DB, CD, DC
/// assert_eq!(permutation_count(4.0, 2.0), 12.0);
/// assert_eq!(permutation_count(4.0, 0.0), 1.0);
/// assert_eq!(permutation_count(3.0, 5.0), 0.0);
/// assert_eq!(permutation_count(-2.0, 3.0), -24.0);
/// ```
pub fn permutation_count(n: f64, r: f64) -> f64 {
    match try_permutation_count(n, r) {
        Ok(value) => {
            trace!(n, r, value, "permutation_count");
            value
        }
        Err(err) => {
            debug!(n, r, %err, "permutation_count rejected input");
            0.0
        }
    }
}

// ============================================================================
// Combination Count
// ============================================================================

/// Combination count `C(n, r)` with structured rejections.
///
/// # Returns
/// - `Err(CountError::NonInteger)` if either argument has a fractional
///   part or is NaN/infinite.
/// - `Err(CountError::NegativeSelection)` if `r < 0`.
/// - `Err(CountError::SelectionExceedsPool)` if `0 < n < r`.
///
/// # Examples
/// ```
/// use u_combin::counting::{try_combination_count, CountError};
/// assert_eq!(try_combination_count(4.0, 2.0), Ok(6.0));
/// assert_eq!(try_combination_count(4.0, 1.5), Err(CountError::NonInteger));
/// ```
pub fn try_combination_count(n: f64, r: f64) -> Result<f64, CountError> {
    if !is_integer(n) || !is_integer(r) {
        return Err(CountError::NonInteger);
    }
    // As in `try_permutation_count`: keeps the reflection recursion at
    // depth one.
    if r < 0.0 {
        return Err(CountError::NegativeSelection);
    }
    if n < 0.0 {
        // Reflection identity: C(−n, r) = (−1)^r · C(n + r − 1, r).
        return Ok(parity_sign(r) * try_combination_count(-n + r - 1.0, r)?);
    }
    if r == 0.0 {
        return Ok(1.0);
    }
    if n < r {
        return if n == 0.0 {
            Ok(0.0)
        } else {
            Err(CountError::SelectionExceedsPool)
        };
    }

    // Running product of per-step ratios, not a quotient of factorials:
    // each partial product is itself a smaller combination-sized value,
    // so the computation stays finite for far larger n than n!/((n−r)!r!)
    // evaluated directly would.
    let mut product = 1.0_f64;
    let mut i = 0.0_f64;
    while i < r {
        product *= (n - i) / (r - i);
        if product.is_infinite() {
            return Ok(f64::INFINITY);
        }
        i += 1.0;
    }
    Ok(product)
}

/// Combination count `C(n, r)` = n! / ((n−r)!·r!), the number of unordered
/// selections of `r` items from `n` distinct items.
///
/// Compatibility surface: every rejection collapses to `0.0`. Negative `n`
/// is defined through the reflection identity
/// `C(−n, r) = (−1)^r · C(n + r − 1, r)`.
///
/// Computed as the running ratio product `(n/r)·((n−1)/(r−1))·…·((n−r+1)/1)`
/// so the usable range extends well past where the factorials themselves
/// overflow; for `r = 500` the result is still finite at `n = 1029`
/// (≈ 9.5097 × 10³⁰⁷) and infinite from `n = 1030`.
///
/// # Examples
/// ```
/// use u_combin::counting::combination_count;
/// // AB, AC, AD, BC, BD, CD
/// assert_eq!(combination_count(4.0, 2.0), 6.0);
/// assert_eq!(combination_count(4.0, 0.0), 1.0);
/// assert_eq!(combination_count(3.0, 5.0), 0.0);
/// ```
pub fn combination_count(n: f64, r: f64) -> f64 {
    match try_combination_count(n, r) {
        Ok(value) => {
            trace!(n, r, value, "combination_count");
            value
        }
        Err(err) => {
            debug!(n, r, %err, "combination_count rejected input");
            0.0
        }
    }
}
