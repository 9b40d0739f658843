use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{Instant, sleep};

use crate::{common, config, matching::MatchMode};

/// Cooperative rate limiting between records.
///
/// The runner calls [`Pacer::pause`] once after every record that hit the catalog.
#[async_trait]
pub trait Pacer: Send {
    async fn pause(&mut self, mode: MatchMode);
}

/// Never waits. Meant for tests and for catalogs without rate limits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

#[async_trait]
impl Pacer for NoPacing {
    async fn pause(&mut self, _mode: MatchMode) {}
}

/// A fixed pause per record, longer in album mode for the extra lookup call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    track: Duration,
    album: Duration,
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(common::DEFAULT_TRACK_DELAY, common::DEFAULT_ALBUM_DELAY)
    }
}

impl FixedDelay {
    pub fn new(track: Duration, album: Duration) -> Self {
        Self { track, album }
    }

    pub fn from_env() -> Self {
        Self::new(config::track_delay(), config::album_delay())
    }

    pub fn delay_for(&self, mode: MatchMode) -> Duration {
        match mode {
            MatchMode::Track => self.track,
            MatchMode::Album => self.album,
        }
    }
}

#[async_trait]
impl Pacer for FixedDelay {
    async fn pause(&mut self, mode: MatchMode) {
        let delay = self.delay_for(mode);
        if !delay.is_zero() {
            sleep(delay).await;
        }
    }
}

/// Token bucket allowing bursts of `capacity` records, refilled one token per
/// `refill_every`. An album record costs two tokens (search plus lookup).
#[derive(Debug, Clone)]
pub struct TokenBucket {
    capacity: f64,
    refill_every: Duration,
    tokens: f64,
    last: Instant,
}

impl TokenBucket {
    pub fn new(capacity: u32, refill_every: Duration) -> Self {
        let capacity = f64::from(capacity.max(1));
        Self {
            capacity,
            refill_every,
            tokens: capacity,
            last: Instant::now(),
        }
    }

    fn cost(mode: MatchMode) -> f64 {
        match mode {
            MatchMode::Track => 1.0,
            MatchMode::Album => 2.0,
        }
    }

    fn refill(&mut self, now: Instant) {
        if self.refill_every.is_zero() {
            self.tokens = self.capacity;
            self.last = now;
            return;
        }
        let elapsed = now.saturating_duration_since(self.last);
        let earned = elapsed.as_secs_f64() / self.refill_every.as_secs_f64();
        if earned > 0.0 {
            self.tokens = (self.tokens + earned).min(self.capacity);
            self.last = now;
        }
    }

    /// Takes the tokens for one record and returns how long to wait before the next.
    pub fn take(&mut self, mode: MatchMode, now: Instant) -> Duration {
        self.refill(now);
        let cost = Self::cost(mode).min(self.capacity);
        if self.tokens >= cost {
            self.tokens -= cost;
            return Duration::ZERO;
        }

        let missing = cost - self.tokens;
        let wait = self.refill_every.mul_f64(missing);
        self.tokens = 0.0;
        self.last = now + wait;
        wait
    }
}

#[async_trait]
impl Pacer for TokenBucket {
    async fn pause(&mut self, mode: MatchMode) {
        let wait = self.take(mode, Instant::now());
        if !wait.is_zero() {
            sleep(wait).await;
        }
    }
}
