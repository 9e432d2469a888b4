//! Clock abstraction for cooldowns and retry backoff.
//!
//! - [`SystemClock`]: `std::time::Instant` plus real `tokio::time::sleep`
//! - [`MockClock`]: manual time; `sleep()` returns immediately, advances the
//!   clock and records the requested duration
//!
//! ```ignore
//! use roast_std::time::{Clock, MockClock};
//! use std::time::Duration;
//!
//! let clock = MockClock::new();
//! let start = clock.now();
//! clock.sleep(Duration::from_millis(1200)).await;
//! assert_eq!(clock.now() - start, Duration::from_millis(1200));
//! assert_eq!(clock.sleeps(), vec![Duration::from_millis(1200)]);
//! ```

mod mock;
mod system;

use std::future::Future;
use std::time::{Duration, Instant};

#[cfg(any(test, feature = "test-support"))]
pub use mock::MockClock;
pub use system::SystemClock;

/// Monotonic time source with an awaitable sleep.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;

    fn elapsed(&self, since: Instant) -> Duration {
        self.now().saturating_duration_since(since)
    }
}
