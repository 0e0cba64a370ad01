//! Contract tests shared by every solver strategy

use multisum::{
    sum_of_multiples, sum_of_multiples_with, ArgumentSampler, ConformanceTester, Strategy,
    SumError,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[test]
fn test_reference_scenarios() -> anyhow::Result<()> {
    assert_eq!(sum_of_multiples(&[3, 5], 10)?, 23);
    assert_eq!(sum_of_multiples(&[3, 5], 1000)?, 233168);

    for strategy in Strategy::ALL {
        assert_eq!(sum_of_multiples_with(strategy, &[3, 5], 10)?, 23);
        assert_eq!(sum_of_multiples_with(strategy, &[3, 5], 1000)?, 233168);
    }
    Ok(())
}

#[test]
fn test_zero_factor_fails_before_computing() {
    for strategy in Strategy::ALL {
        let err = sum_of_multiples_with(strategy, &[0, 5], 10).unwrap_err();
        assert_eq!(err, SumError::InvalidFactor { index: 0, factor: 0 });

        // Rejected even when the bound leaves nothing to scan.
        let err = sum_of_multiples_with(strategy, &[5, 0], 0).unwrap_err();
        assert_eq!(err, SumError::InvalidFactor { index: 1, factor: 0 });
    }
}

#[test]
fn test_trivial_bounds_and_factor_sets() -> anyhow::Result<()> {
    for strategy in Strategy::ALL {
        for factors in [&[3u64, 5][..], &[1][..], &[7, 7, 7][..]] {
            assert_eq!(sum_of_multiples_with(strategy, factors, 0)?, 0);
            assert_eq!(sum_of_multiples_with(strategy, factors, 1)?, 0);
        }
        for bound in [0, 1, 2, 100, 54321] {
            assert_eq!(sum_of_multiples_with(strategy, &[], bound)?, 0);
            assert_eq!(
                sum_of_multiples_with(strategy, &[1], bound)?,
                bound * bound.saturating_sub(1) / 2
            );
        }
    }
    Ok(())
}

#[test]
fn test_deterministic() -> anyhow::Result<()> {
    for strategy in Strategy::ALL {
        let first = sum_of_multiples_with(strategy, &[4, 6, 10], 5000)?;
        let second = sum_of_multiples_with(strategy, &[4, 6, 10], 5000)?;
        assert_eq!(first, second);
    }
    Ok(())
}

#[test]
fn test_no_double_counting_against_set_union() {
    let tester = ConformanceTester::new(ArgumentSampler::default())
        .unwrap()
        .with_test_count(100);
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for strategy in Strategy::ALL {
        let report = tester.run(strategy.solver(), &mut rng);
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "{} failed: {:?}", strategy, failures);
    }
}

#[test]
fn test_strategies_agree_on_random_inputs() {
    let sampler = ArgumentSampler {
        factor_count_min: 1,
        factor_count_max: 6,
        factor_min: 1,
        factor_max: 1000,
        upper_bound_min: 0,
        upper_bound_max: 1_000_001,
    };
    let tester = ConformanceTester::new(sampler).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    let outcomes = tester.compare(
        Strategy::Scan.solver(),
        Strategy::InclusionExclusion.solver(),
        100,
        &mut rng,
    );
    assert_eq!(outcomes.len(), 100);
    for outcome in &outcomes {
        assert!(outcome.success, "strategies disagree: {:?}", outcome);
    }
}

#[test]
fn test_inclusion_exclusion_beyond_scan_range() -> anyhow::Result<()> {
    // Closed form of 3 below 10^9 plus 5 below 10^9 minus 15 below 10^9.
    let limit: u128 = 999_999_999;
    let series = |step: u128| step * (limit / step) * (limit / step + 1) / 2;
    let expected = series(3) + series(5) - series(15);

    let sum = sum_of_multiples_with(Strategy::InclusionExclusion, &[3, 5], 1_000_000_000)?;
    assert_eq!(u128::from(sum), expected);
    Ok(())
}
