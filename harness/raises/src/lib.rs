//! raises: an exception-contract test runner.
//!
//! A test unit declares the fault kinds it expects its body to raise. The
//! runner discovers tagged units, invokes each once, and checks that the
//! fault actually raised belongs to one of the declared kinds.
//!
//! # Architecture
//!
//! ```text
//! Target (candidates)
//!     │
//!     ▼
//! discover() ──► Registry
//!     │
//!     ▼
//! invoke() ──► Outcome
//!     │
//!     ▼
//! verify() ──► Verdict
//!     │
//!     ▼
//! Reporter ──► report lines + summary
//! ```
//!
//! # Example
//!
//! ```
//! use raises::test::{run_tests, Candidate, Target};
//! use raises::{division_by_zero, ARITHMETIC};
//!
//! let target = Target::new("math")
//!     .with(Candidate::new("divides", || Err(division_by_zero())).expect_fault(ARITHMETIC));
//!
//! let summary = run_tests(target).unwrap();
//! assert_eq!(summary.passed, 1);
//! ```

use std::sync::Once;

pub mod commands;
pub mod sample;

pub use raises_fault::*;
pub use test::{
    discover, Candidate, ExpectationSet, Registry, RegistryError, Reporter, RunSummary,
    RunnerConfig, Target, TestResult, TestRunner, TestUnit, UnitResult, Verdict,
};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=raises=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
