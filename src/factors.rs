use serde::Serialize;

use crate::error::SumError;

/// A validated sequence of factors.
///
/// Every element is non-zero. Order is preserved as given, and duplicates are
/// kept since they cannot cause a multiple to be counted twice.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FactorSet(Vec<u64>);

impl FactorSet {
    /// Validate `factors`, rejecting the first zero found.
    pub fn new(factors: &[u64]) -> Result<Self, SumError> {
        if let Some(index) = factors.iter().position(|&factor| factor == 0) {
            return Err(SumError::InvalidFactor { index, factor: 0 });
        }
        Ok(Self(factors.to_vec()))
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &u64> {
        self.0.iter()
    }

    /// The smallest set of factors with exactly the same multiples.
    ///
    /// Sorted ascending, without duplicates, and without any factor that is a
    /// multiple of a smaller one.
    pub fn reduced(&self) -> Vec<u64> {
        let mut sorted = self.0.clone();
        sorted.sort_unstable();
        sorted.dedup();

        let mut kept: Vec<u64> = Vec::with_capacity(sorted.len());
        for factor in sorted {
            if kept.iter().all(|&smaller| factor % smaller != 0) {
                kept.push(factor);
            }
        }
        kept
    }
}

impl TryFrom<&[u64]> for FactorSet {
    type Error = SumError;

    fn try_from(factors: &[u64]) -> Result<Self, Self::Error> {
        Self::new(factors)
    }
}

impl TryFrom<Vec<u64>> for FactorSet {
    type Error = SumError;

    fn try_from(factors: Vec<u64>) -> Result<Self, Self::Error> {
        Self::new(&factors)
    }
}
