//! Conformance harness for sum-of-multiples solvers
//!
//! Any [`Solver`] can be checked against an independent brute-force reference
//! on randomly sampled arguments. The reference builds the set union of every
//! factor's multiples and sums it, so it shares no logic with either strategy
//! in [`crate::solver`].
//!
//! ## Usage
//!
//! ```rust
//! use multisum::{ArgumentSampler, ConformanceTester, Strategy};
//! use rand::SeedableRng;
//!
//! let tester = ConformanceTester::new(ArgumentSampler::default())
//!     .unwrap()
//!     .with_test_count(20);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let report = tester.run(Strategy::InclusionExclusion.solver(), &mut rng);
//! assert!(report.all_passed());
//! ```
//!
//! Two solvers can also be compared directly with
//! [`ConformanceTester::compare`], which is how the scan and
//! inclusion–exclusion strategies are shown to agree.

use rand::distr::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{info, warn};

use crate::config::ConformanceConfig;
use crate::error::SumError;
use crate::factors::FactorSet;
use crate::solver::Solver;

/// Serializable arguments of a single solver call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverArguments {
    pub factors: Vec<u64>,
    pub upper_bound: u64,
}

impl SolverArguments {
    pub fn new(factors: &[u64], upper_bound: u64) -> Self {
        Self {
            factors: factors.to_vec(),
            upper_bound,
        }
    }
}

/// Samples [`SolverArguments`] from half-open ranges.
///
/// Factors are drawn independently and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgumentSampler {
    pub factor_count_min: usize,
    pub factor_count_max: usize,
    pub factor_min: u64,
    pub factor_max: u64,
    pub upper_bound_min: u64,
    pub upper_bound_max: u64,
}

impl Default for ArgumentSampler {
    fn default() -> Self {
        Self {
            factor_count_min: 1,
            factor_count_max: 8,
            factor_min: 2,
            factor_max: 256,
            upper_bound_min: 8,
            upper_bound_max: 65536,
        }
    }
}

impl ArgumentSampler {
    /// Check that every range is non-empty and cannot yield a zero factor.
    pub fn validate(&self) -> Result<(), SumError> {
        if self.factor_count_min >= self.factor_count_max {
            return Err(SumError::InvalidSampler(format!(
                "factor count range {}..{} is empty",
                self.factor_count_min, self.factor_count_max
            )));
        }
        if self.factor_min >= self.factor_max {
            return Err(SumError::InvalidSampler(format!(
                "factor range {}..{} is empty",
                self.factor_min, self.factor_max
            )));
        }
        if self.factor_min == 0 {
            return Err(SumError::InvalidSampler(
                "factor range must start above zero".to_string(),
            ));
        }
        if self.upper_bound_min >= self.upper_bound_max {
            return Err(SumError::InvalidSampler(format!(
                "upper bound range {}..{} is empty",
                self.upper_bound_min, self.upper_bound_max
            )));
        }
        Ok(())
    }
}

impl Distribution<SolverArguments> for ArgumentSampler {
    /// Panics on an empty range; [`ConformanceTester::new`] validates first.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SolverArguments {
        let factor_count = rng.random_range(self.factor_count_min..self.factor_count_max);
        let factors = (0..factor_count)
            .map(|_| rng.random_range(self.factor_min..self.factor_max))
            .collect();
        let upper_bound = rng.random_range(self.upper_bound_min..self.upper_bound_max);

        SolverArguments {
            factors,
            upper_bound,
        }
    }
}

/// Result of checking one set of arguments.
///
/// `expected` and `actual` are `None` when the corresponding side returned an
/// error; the solver's error message is kept in `error`.
#[derive(Debug, Clone, Serialize)]
pub struct TestOutcome {
    pub arguments: SolverArguments,
    pub expected: Option<u64>,
    pub actual: Option<u64>,
    pub error: Option<String>,
    pub success: bool,
}

impl TestOutcome {
    fn new(
        arguments: SolverArguments,
        expected: Result<u64, SumError>,
        actual: Result<u64, SumError>,
    ) -> Self {
        let success = expected == actual;
        Self {
            arguments,
            expected: expected.ok(),
            error: actual.as_ref().err().map(ToString::to_string),
            actual: actual.ok(),
            success,
        }
    }
}

/// Summary of a conformance run for one solver.
#[derive(Debug, Clone, Serialize)]
pub struct ConformanceReport {
    pub solver: String,
    pub timestamp: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub outcomes: Vec<TestOutcome>,
}

impl ConformanceReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &TestOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.success)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs solvers against the reference on sampled arguments.
#[derive(Debug, Clone)]
pub struct ConformanceTester {
    sampler: ArgumentSampler,
    test_count: usize,
}

impl ConformanceTester {
    pub const DEFAULT_TEST_COUNT: usize = 10;

    pub fn new(sampler: ArgumentSampler) -> Result<Self, SumError> {
        sampler.validate()?;
        Ok(Self {
            sampler,
            test_count: Self::DEFAULT_TEST_COUNT,
        })
    }

    pub fn from_config(config: &ConformanceConfig) -> Result<Self, SumError> {
        Ok(Self::new(config.sampler.clone())?.with_test_count(config.test_count))
    }

    pub fn with_test_count(mut self, test_count: usize) -> Self {
        self.test_count = test_count;
        self
    }

    pub fn sampler(&self) -> &ArgumentSampler {
        &self.sampler
    }

    pub fn test_count(&self) -> usize {
        self.test_count
    }

    /// Brute-force set-union reference.
    pub fn reference(factors: &[u64], upper_bound: u64) -> Result<u64, SumError> {
        let factors = FactorSet::new(factors)?;
        let mut multiples = BTreeSet::new();
        for &factor in factors.iter() {
            let step = usize::try_from(factor).unwrap_or(usize::MAX);
            multiples.extend((factor..upper_bound).step_by(step));
        }
        multiples
            .into_iter()
            .try_fold(0u64, |sum, multiple| sum.checked_add(multiple))
            .ok_or(SumError::Overflow { upper_bound })
    }

    /// Check one set of arguments against the reference.
    pub fn check<S: Solver + ?Sized>(solver: &S, arguments: SolverArguments) -> TestOutcome {
        let expected = Self::reference(&arguments.factors, arguments.upper_bound);
        let actual = solve_arguments(solver, &arguments);
        let outcome = TestOutcome::new(arguments, expected, actual);
        if !outcome.success {
            warn!(
                "{} disagrees with reference on {:?} below {}: expected {:?}, got {:?}",
                solver.name(),
                outcome.arguments.factors,
                outcome.arguments.upper_bound,
                outcome.expected,
                outcome.actual
            );
        }
        outcome
    }

    /// Check `count` sampled argument sets.
    pub fn random_checks<S: Solver + ?Sized, R: Rng + ?Sized>(
        &self,
        solver: &S,
        count: usize,
        rng: &mut R,
    ) -> Vec<TestOutcome> {
        (0..count)
            .map(|_| Self::check(solver, self.sampler.sample(rng)))
            .collect()
    }

    /// Run the configured number of checks and summarize them.
    pub fn run<S: Solver + ?Sized, R: Rng + ?Sized>(
        &self,
        solver: &S,
        rng: &mut R,
    ) -> ConformanceReport {
        let outcomes = self.random_checks(solver, self.test_count, rng);
        let passed = outcomes.iter().filter(|outcome| outcome.success).count();
        let failed = outcomes.len() - passed;
        info!(
            "{}: {}/{} conformance checks passed",
            solver.name(),
            passed,
            outcomes.len()
        );

        ConformanceReport {
            solver: solver.name().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            total: outcomes.len(),
            passed,
            failed,
            outcomes,
        }
    }

    /// Differential check: `left` supplies the expected value, `right` the
    /// actual one.
    pub fn compare<L, T, R>(
        &self,
        left: &L,
        right: &T,
        count: usize,
        rng: &mut R,
    ) -> Vec<TestOutcome>
    where
        L: Solver + ?Sized,
        T: Solver + ?Sized,
        R: Rng + ?Sized,
    {
        (0..count)
            .map(|_| {
                let arguments = self.sampler.sample(rng);
                let expected = solve_arguments(left, &arguments);
                let actual = solve_arguments(right, &arguments);
                let outcome = TestOutcome::new(arguments, expected, actual);
                if !outcome.success {
                    warn!(
                        "{} and {} disagree on {:?} below {}",
                        left.name(),
                        right.name(),
                        outcome.arguments.factors,
                        outcome.arguments.upper_bound
                    );
                }
                outcome
            })
            .collect()
    }
}

fn solve_arguments<S: Solver + ?Sized>(
    solver: &S,
    arguments: &SolverArguments,
) -> Result<u64, SumError> {
    let factors = FactorSet::new(&arguments.factors)?;
    solver.solve(&factors, arguments.upper_bound)
}

/// Seeded RNG when `seed` is given, otherwise one seeded from the OS.
pub fn conformance_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
