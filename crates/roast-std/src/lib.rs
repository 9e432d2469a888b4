//! Zero-cost seams over `std` and tokio for the roast bot crates.
//!
//! | Concern | Trait | Production | Test |
//! |---------|-------|------------|------|
//! | Env vars | [`ReadEnv`] | [`SystemEnv`] | [`InMemoryEnv`]* |
//! | Filesystem | [`ReadFile`] | [`SystemFs`] | [`MemFs`]* |
//! | Time | [`Clock`] | [`SystemClock`] | [`MockClock`]* |
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature.
//!
//! [`SystemClock`] and [`MockClock`] are `Send + Sync`; the clock is shared
//! between tokio tasks. [`InMemoryEnv`] and [`MemFs`] are `RefCell`-backed
//! and only meant for single-threaded setup code in tests.

pub mod env;
pub mod fs;
pub mod time;

pub use env::{ReadEnv, SystemEnv};
pub use fs::{ReadFile, SystemFs};
pub use time::{Clock, SystemClock};

#[cfg(any(test, feature = "test-support"))]
pub use env::InMemoryEnv;
#[cfg(any(test, feature = "test-support"))]
pub use fs::MemFs;
#[cfg(any(test, feature = "test-support"))]
pub use time::MockClock;
