//! Per-chat roast cooldown

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use roast_std::time::{Clock, SystemClock};

/// Minimum interval between two roasts in the same chat.
pub const ROAST_COOLDOWN: Duration = Duration::from_secs(120);

/// Monotonic last-roast time per chat. A chat with no entry may roast now.
pub struct CooldownTracker<C: Clock = SystemClock> {
    clock: C,
    cooldown: Duration,
    last_roast: Mutex<HashMap<i64, Instant>>,
}

impl<C: Clock> CooldownTracker<C> {
    pub fn new(clock: C) -> Self {
        Self::with_cooldown(clock, ROAST_COOLDOWN)
    }

    pub fn with_cooldown(clock: C, cooldown: Duration) -> Self {
        Self {
            clock,
            cooldown,
            last_roast: Mutex::new(HashMap::new()),
        }
    }

    /// Claim the roast slot for `chat_id`.
    ///
    /// Returns `true` and records now iff the cooldown has fully elapsed (or
    /// the chat never roasted). Check and record happen under one lock.
    pub fn roast_allowed(&self, chat_id: i64) -> bool {
        let mut last_roast = self
            .last_roast
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let now = self.clock.now();

        let cooling_down = last_roast
            .get(&chat_id)
            .is_some_and(|&last| now.saturating_duration_since(last) < self.cooldown);
        if cooling_down {
            return false;
        }

        last_roast.insert(chat_id, now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roast_std::time::MockClock;

    #[test]
    fn test_first_roast_allowed() {
        let tracker = CooldownTracker::new(MockClock::new());
        assert!(tracker.roast_allowed(1));
    }

    #[test]
    fn test_second_roast_within_cooldown_denied() {
        let clock = MockClock::new();
        let tracker = CooldownTracker::new(clock.clone());

        assert!(tracker.roast_allowed(1));
        clock.advance(Duration::from_secs(119));
        assert!(!tracker.roast_allowed(1));
    }

    #[test]
    fn test_roast_allowed_again_after_cooldown() {
        let clock = MockClock::new();
        let tracker = CooldownTracker::new(clock.clone());

        assert!(tracker.roast_allowed(1));
        clock.advance(ROAST_COOLDOWN);
        assert!(tracker.roast_allowed(1));
        assert!(!tracker.roast_allowed(1));
    }

    #[test]
    fn test_denied_check_does_not_reset_timer() {
        let clock = MockClock::new();
        let tracker = CooldownTracker::new(clock.clone());

        assert!(tracker.roast_allowed(1));
        clock.advance(Duration::from_secs(100));
        assert!(!tracker.roast_allowed(1));
        clock.advance(Duration::from_secs(20));
        assert!(tracker.roast_allowed(1));
    }

    #[test]
    fn test_chats_have_independent_cooldowns() {
        let tracker = CooldownTracker::new(MockClock::new());

        assert!(tracker.roast_allowed(1));
        assert!(tracker.roast_allowed(2));
        assert!(!tracker.roast_allowed(1));
        assert!(!tracker.roast_allowed(2));
    }

    #[test]
    fn test_concurrent_checks_grant_one_slot() {
        use std::sync::Arc;

        let tracker = Arc::new(CooldownTracker::new(MockClock::new()));
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let tracker = Arc::clone(&tracker);
                std::thread::spawn(move || tracker.roast_allowed(9))
            })
            .collect();

        let granted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|allowed| *allowed)
            .count();
        assert_eq!(granted, 1);
    }
}
