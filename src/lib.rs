//! Sum of multiples below a bound
//!
//! `multisum` sums every positive integer strictly below an upper bound that
//! is divisible by at least one of a set of factors. Two interchangeable
//! strategies implement that contract, and a conformance harness checks any
//! [`Solver`] against a brute-force reference on sampled inputs.
//!
//! ```rust
//! assert_eq!(multisum::sum_of_multiples(&[3, 5], 10).unwrap(), 3 + 5 + 6 + 9);
//! ```

pub mod config;
pub mod conformance;
pub mod error;
pub mod factors;
pub mod logging;
pub mod solver;

// Re-export the main types for easy access
pub use config::{Config, ConformanceConfig, LogOutput, LoggingConfig};
pub use conformance::{
    conformance_rng, ArgumentSampler, ConformanceReport, ConformanceTester, SolverArguments,
    TestOutcome,
};
pub use error::SumError;
pub use factors::FactorSet;
pub use logging::init_logging;
pub use solver::{
    sum_of_multiples, sum_of_multiples_with, InclusionExclusionSolver, ScanSolver, Solver,
    Strategy, MAX_SAFE_UPPER_BOUND,
};
