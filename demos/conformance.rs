//! Conformance run driven by `multisum.yaml`
//!
//! Checks the configured strategy against the brute-force reference, then
//! cross-checks both strategies, and prints the report as JSON.
//!
//! ```bash
//! RUST_LOG=debug cargo run --example conformance
//! ```

use anyhow::Result;
use multisum::{conformance_rng, init_logging, Config, ConformanceTester, Strategy};
use tracing::{info, warn};

fn main() -> Result<()> {
    let mut config = Config::load()?;
    // stdout carries the JSON report
    config.logging.output = multisum::LogOutput::Stderr;
    init_logging(&config.logging)?;

    let conformance = &config.conformance;
    info!(
        "Checking {} with {} sampled inputs",
        conformance.strategy, conformance.test_count
    );

    let tester = ConformanceTester::from_config(conformance)?;
    let mut rng = conformance_rng(conformance.seed);

    let report = tester.run(conformance.strategy.solver(), &mut rng);
    println!("{}", report.to_json()?);

    let disagreements = tester
        .compare(
            Strategy::Scan.solver(),
            Strategy::InclusionExclusion.solver(),
            conformance.test_count,
            &mut rng,
        )
        .into_iter()
        .filter(|outcome| !outcome.success)
        .count();
    if disagreements > 0 {
        warn!("Strategies disagreed on {} input(s)", disagreements);
    }

    if !report.all_passed() || disagreements > 0 {
        std::process::exit(1);
    }
    Ok(())
}
