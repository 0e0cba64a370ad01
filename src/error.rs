use thiserror::Error;

/// Errors reported by the solvers and the argument sampler.
///
/// Bounds are `u64`, so a negative bound cannot be expressed and has no
/// variant here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SumError {
    /// A factor of zero was supplied.
    #[error("invalid factor {factor} at index {index}: factors must be positive")]
    InvalidFactor { index: usize, factor: u64 },

    /// The sum of multiples does not fit in a `u64`.
    #[error("sum of multiples below {upper_bound} overflows u64")]
    Overflow { upper_bound: u64 },

    /// A sampler range is empty or would produce a zero factor.
    #[error("invalid sampler: {0}")]
    InvalidSampler(String),
}
