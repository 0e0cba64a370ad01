//! Sum of multiples below an exclusive bound
//!
//! Two interchangeable strategies implement the same contract: for every `m`
//! in `[1, upper_bound)`, add `m` exactly once if any factor divides it.
//!
//! - [`ScanSolver`] walks every candidate and stops at the first dividing
//!   factor. Cost is O(upper_bound × factor_count).
//! - [`InclusionExclusionSolver`] sums arithmetic series over the lcm of each
//!   factor subset with alternating signs. Cost depends on the number of
//!   subsets whose lcm stays below the bound, not on the bound itself.
//!
//! Both reject a zero factor before doing any work and report
//! [`SumError::Overflow`] when the true sum does not fit in a `u64`. Any bound
//! up to [`MAX_SAFE_UPPER_BOUND`] is guaranteed never to overflow.
//!
//! ```rust
//! use multisum::{sum_of_multiples, sum_of_multiples_with, Strategy};
//!
//! assert_eq!(sum_of_multiples(&[3, 5], 10).unwrap(), 23);
//! assert_eq!(
//!     sum_of_multiples_with(Strategy::InclusionExclusion, &[3, 5], 1000).unwrap(),
//!     233168
//! );
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

use crate::error::SumError;
use crate::factors::FactorSet;

/// Largest `upper_bound` for which the sum of every integer below it,
/// `N * (N - 1) / 2`, still fits in a `u64`.
pub const MAX_SAFE_UPPER_BOUND: u64 = 6_074_001_000;

/// A solver for the sum-of-multiples contract.
pub trait Solver: Send + Sync {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    /// Sum every integer in `[1, upper_bound)` divisible by at least one
    /// factor in `factors`.
    fn solve(&self, factors: &FactorSet, upper_bound: u64) -> Result<u64, SumError>;
}

/// Baseline solver: scan every candidate below the bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanSolver;

impl Solver for ScanSolver {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn solve(&self, factors: &FactorSet, upper_bound: u64) -> Result<u64, SumError> {
        let mut sum: u64 = 0;
        for multiple in 1..upper_bound {
            if factors.iter().any(|&factor| multiple % factor == 0) {
                sum = sum
                    .checked_add(multiple)
                    .ok_or(SumError::Overflow { upper_bound })?;
            }
        }
        Ok(sum)
    }
}

/// Closed-form solver using inclusion–exclusion over factor subsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct InclusionExclusionSolver;

impl Solver for InclusionExclusionSolver {
    fn name(&self) -> &'static str {
        "inclusion_exclusion"
    }

    fn solve(&self, factors: &FactorSet, upper_bound: u64) -> Result<u64, SumError> {
        let limit = upper_bound.saturating_sub(1);
        let reduced = factors.reduced();
        if limit == 0 || reduced.is_empty() {
            return Ok(0);
        }
        trace!(
            "Reduced {} factor(s) to {:?} below {}",
            factors.len(),
            reduced,
            upper_bound
        );

        // The union contains every singleton series, and every subset term is
        // bounded by the series of any of its members.
        for &factor in &reduced {
            if series_sum(factor, limit) > u128::from(u64::MAX) {
                return Err(SumError::Overflow { upper_bound });
            }
        }

        let mut total: i128 = 0;
        let mut terms = 0usize;
        accumulate(&reduced, 1, 1, limit, &mut total, &mut terms);
        debug!("Inclusion-exclusion summed {} subset term(s)", terms);

        u64::try_from(total).map_err(|_| SumError::Overflow { upper_bound })
    }
}

/// Sum of all multiples of `step` in `[1, limit]`.
fn series_sum(step: u64, limit: u64) -> u128 {
    let count = u128::from(limit / step);
    u128::from(step) * (count * (count + 1) / 2)
}

/// Add the signed series of every subset extending the current one.
///
/// Subsets whose lcm exceeds `limit` contribute nothing, and neither do any of
/// their supersets, so the walk stops there.
fn accumulate(
    factors: &[u64],
    lcm: u64,
    sign: i128,
    limit: u64,
    total: &mut i128,
    terms: &mut usize,
) {
    for (i, &factor) in factors.iter().enumerate() {
        let Some(next) = checked_lcm(lcm, factor).filter(|&next| next <= limit) else {
            continue;
        };
        // Bounded by u64::MAX after the singleton check in `solve`.
        *total += sign * series_sum(next, limit) as i128;
        *terms += 1;
        accumulate(&factors[i + 1..], next, -sign, limit, total, terms);
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn checked_lcm(a: u64, b: u64) -> Option<u64> {
    (a / gcd(a, b)).checked_mul(b)
}

/// Selects which solver computes a sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Scan,
    InclusionExclusion,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Scan, Strategy::InclusionExclusion];

    pub fn solver(self) -> &'static dyn Solver {
        match self {
            Strategy::Scan => &ScanSolver,
            Strategy::InclusionExclusion => &InclusionExclusionSolver,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.solver().name())
    }
}

/// Sum every integer below `upper_bound` divisible by any of `factors`,
/// using the baseline scan.
pub fn sum_of_multiples(factors: &[u64], upper_bound: u64) -> Result<u64, SumError> {
    sum_of_multiples_with(Strategy::Scan, factors, upper_bound)
}

/// Same as [`sum_of_multiples`] with an explicit strategy.
pub fn sum_of_multiples_with(
    strategy: Strategy,
    factors: &[u64],
    upper_bound: u64,
) -> Result<u64, SumError> {
    let factors = FactorSet::new(factors)?;
    strategy.solver().solve(&factors, upper_bound)
}
