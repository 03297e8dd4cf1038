//! Effective branching factor.
//!
//! For a search that generated `N` nodes and found a solution at depth `d`,
//! the effective branching factor `b*` is the branching factor a uniform tree
//! of depth `d` would need to contain `N + 1` nodes. It is the root above 1 of
//!
//! ```text
//! f(b) = b^(d+1) - (N+1)·b + N
//! ```
//!
//! `b = 1` is always a root. For `d ≥ 1`, `f` is convex on `b > 0` and
//! `f'(1) = d - N`, so a second root above 1 exists exactly when `N > d`. It
//! lies in `(1, N]` because `f(N) = N^(d+1) - N² ≥ 0`.

/// Bisection stops once the bracket is narrower than this.
const TOLERANCE: f64 = 1e-12;

/// Upper bound on bisection steps.
const MAX_ITERATIONS: u32 = 200;

/// Solve for `b*` given `generated` nodes and solution `depth`.
///
/// Returns `None` when no root above 1 exists (`depth == 0` or
/// `generated <= depth`).
#[must_use]
pub fn effective_branching_factor(generated: u64, depth: u32) -> Option<f64> {
    if depth == 0 || generated <= u64::from(depth) {
        return None;
    }
    let exponent = i32::try_from(depth).ok()?.checked_add(1)?;
    #[allow(clippy::cast_precision_loss)]
    let n = generated as f64;
    let f = |b: f64| b.powi(exponent) - (n + 1.0) * b + n;

    // Invariant: f(lo) <= 0 with lo <= b*, and f(hi) >= 0 with hi >= b*.
    let mut lo = 1.0_f64;
    let mut hi = n;
    for _ in 0..MAX_ITERATIONS {
        if hi - lo < TOLERANCE {
            break;
        }
        let mid = lo + (hi - lo) / 2.0;
        if f(mid) < 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Some(lo + (hi - lo) / 2.0)
}

/// `b*` formatted to five decimals, as printed and reported.
#[must_use]
pub fn format_branching_factor(b_star: f64) -> String {
    format!("{b_star:.5}")
}
