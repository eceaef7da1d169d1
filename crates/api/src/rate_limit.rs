use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateDecision {
    Allowed { remaining: usize },
    Limited { retry_after: Duration },
}

/// Sliding-window request counter keyed by client address.
#[derive(Debug, Clone)]
pub struct IpRateLimiter {
    inner: Arc<Mutex<HashMap<String, VecDeque<Instant>>>>,
    window: Duration,
    max_requests: usize,
}

impl IpRateLimiter {
    pub fn new(window: Duration, max_requests: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            window,
            max_requests,
        }
    }

    pub fn check(&self, key: &str) -> RateDecision {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> RateDecision {
        let mut guard = self.inner.lock();
        // Idle keys would otherwise accumulate for every address ever seen.
        guard.retain(|_, hits| {
            while hits
                .front()
                .is_some_and(|front| now.duration_since(*front) > self.window)
            {
                hits.pop_front();
            }
            !hits.is_empty()
        });

        let hits = guard.entry(key.to_string()).or_default();
        if hits.len() >= self.max_requests {
            let retry_after = hits
                .front()
                .map(|oldest| self.window.saturating_sub(now.duration_since(*oldest)))
                .unwrap_or(self.window);
            return RateDecision::Limited { retry_after };
        }

        hits.push_back(now);
        RateDecision::Allowed {
            remaining: self.max_requests - hits.len(),
        }
    }

    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        self.inner.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_within_the_window_and_recovers_after_it() {
        let limiter = IpRateLimiter::new(Duration::from_secs(10), 2);
        let start = Instant::now();

        assert_eq!(
            limiter.check_at("1.2.3.4", start),
            RateDecision::Allowed { remaining: 1 }
        );
        assert_eq!(
            limiter.check_at("1.2.3.4", start + Duration::from_secs(1)),
            RateDecision::Allowed { remaining: 0 }
        );
        assert_eq!(
            limiter.check_at("1.2.3.4", start + Duration::from_secs(4)),
            RateDecision::Limited {
                retry_after: Duration::from_secs(6)
            }
        );
        assert!(matches!(
            limiter.check_at("5.6.7.8", start + Duration::from_secs(4)),
            RateDecision::Allowed { .. }
        ));
        assert!(matches!(
            limiter.check_at("1.2.3.4", start + Duration::from_secs(11)),
            RateDecision::Allowed { .. }
        ));
    }

    #[test]
    fn idle_addresses_are_forgotten() {
        let limiter = IpRateLimiter::new(Duration::from_secs(1), 5);
        let start = Instant::now();
        limiter.check_at("a", start);
        limiter.check_at("b", start);
        assert_eq!(limiter.tracked_keys(), 2);

        limiter.check_at("c", start + Duration::from_secs(5));
        assert_eq!(limiter.tracked_keys(), 1);
    }
}
