//! Corpus-driven testing helpers: seeded string generation and a linear-scan
//! reference index.

pub mod context;
pub mod invariants;

pub use context::CorpusContext;
pub use invariants::{InvariantViolation, ReferenceIndex};

/// Route library `tracing` events to the test output when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
