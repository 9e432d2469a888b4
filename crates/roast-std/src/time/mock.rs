#[cfg(any(test, feature = "test-support"))]
use std::future::Future;
#[cfg(any(test, feature = "test-support"))]
use std::sync::{Arc, Mutex};
#[cfg(any(test, feature = "test-support"))]
use std::time::{Duration, Instant};

#[cfg(any(test, feature = "test-support"))]
use super::Clock;

/// Time only moves on [`advance`](MockClock::advance) or
/// [`sleep`](Clock::sleep). Clones share state.
#[cfg(any(test, feature = "test-support"))]
#[derive(Clone)]
pub struct MockClock {
    inner: Arc<Mutex<MockClockInner>>,
}

#[cfg(any(test, feature = "test-support"))]
struct MockClockInner {
    current: Instant,
    sleeps: Vec<Duration>,
}

#[cfg(any(test, feature = "test-support"))]
impl MockClock {
    /// Fixed at `Instant::now()` at construction time.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockClockInner {
                current: Instant::now(),
                sleeps: Vec::new(),
            })),
        }
    }

    pub fn advance(&self, duration: Duration) {
        self.inner.lock().unwrap().current += duration;
    }

    /// Every duration passed to `sleep`, in call order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.inner.lock().unwrap().sleeps.clone()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Clock for MockClock {
    fn now(&self) -> Instant {
        self.inner.lock().unwrap().current
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        {
            let mut inner = self.inner.lock().unwrap();
            inner.current += duration;
            inner.sleeps.push(duration);
        }
        std::future::ready(())
    }
}
