//! Generic driver that executes a `TestSuite` using a pluggable engine.

use super::engine::KatEngine;
use super::error::{EngineError, Result};
use super::model::TestSuite;

/// Per-suite tally
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
}

/// Thin wrapper that walks suites and tallies results.
pub struct Runner<'e, E: KatEngine> {
    engine: &'e E,
}

impl<'e, E: KatEngine> Runner<'e, E> {
    pub fn new(engine: &'e E) -> Self {
        Self { engine }
    }

    /// Run every case, comparing the outcome with its expected verdict
    pub fn run_suite(&self, suite: &TestSuite) -> Summary {
        let mut summary = Summary::default();

        for group in &suite.test_groups {
            println!(
                "Running group {}: {} ({})",
                group.tg_id, group.algorithm, group.test_type
            );

            for case in &group.tests {
                match (self.engine.run(group, case), case.expects_valid()) {
                    (Ok(()), true) | (Err(EngineError::Rejected), false) => summary.passed += 1,
                    (Ok(()), false) => {
                        summary.failed += 1;
                        eprintln!("Case {} succeeded but expected {}", case.tc_id, case.expected_result);
                    }
                    (Err(e), _) => {
                        summary.failed += 1;
                        eprintln!("Case {} failed: {}", case.tc_id, e);
                    }
                }
            }
        }

        println!("{}: {} passed, {} failed", suite.name, summary.passed, summary.failed);
        summary
    }

    /// Run a suite and turn any failure into an error
    pub fn check_suite(&self, suite: &TestSuite) -> Result<()> {
        let summary = self.run_suite(suite);
        if summary.failed == 0 {
            Ok(())
        } else {
            Err(EngineError::Failures {
                failed: summary.failed,
                total: suite.case_count(),
            })
        }
    }
}
