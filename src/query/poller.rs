use std::thread;
use std::time::{Duration, Instant};

pub use thirtyfour::query::ElementPoller;

/// Paces a polling loop according to an [`ElementPoller`].
///
/// Call [`tick`](Self::tick) after each unsuccessful attempt. It sleeps until the next
/// attempt is due and returns `false` once the poller's budget is spent.
#[derive(Debug)]
pub struct ElementPollerTicker {
    timeout: Option<Duration>,
    interval: Option<Duration>,
    min_tries: u32,
    start: Instant,
    cur_tries: u32,
}

impl ElementPollerTicker {
    pub fn new(poller: ElementPoller) -> Self {
        let mut ticker = Self {
            timeout: None,
            interval: None,
            min_tries: 0,
            start: Instant::now(),
            cur_tries: 0,
        };

        match poller {
            ElementPoller::NoWait => {}
            ElementPoller::TimeoutWithInterval(timeout, interval) => {
                ticker.timeout = Some(timeout);
                ticker.interval = Some(interval);
            }
            ElementPoller::NumTriesWithInterval(num_tries, interval) => {
                ticker.interval = Some(interval);
                ticker.min_tries = num_tries;
            }
            ElementPoller::TimeoutWithIntervalAndMinTries(timeout, interval, num_tries) => {
                ticker.timeout = Some(timeout);
                ticker.interval = Some(interval);
                ticker.min_tries = num_tries
            }
        }

        ticker
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn tries(&self) -> u32 {
        self.cur_tries
    }

    pub fn tick(&mut self) -> bool {
        self.cur_tries += 1;

        if self.timeout.filter(|t| &self.start.elapsed() < t).is_none()
            && self.cur_tries >= self.min_tries
        {
            return false;
        }

        if let Some(i) = self.interval {
            // Next poll is due no earlier than this long after the first poll started.
            let minimum_elapsed = i * self.cur_tries;

            // But this much time has elapsed since the first poll started.
            let actual_elapsed = self.start.elapsed();

            if actual_elapsed < minimum_elapsed {
                // So we need to wait this much longer.
                let remaining = minimum_elapsed - actual_elapsed;
                // Never sleep past the deadline.
                let remaining = match self.timeout {
                    Some(t) => remaining.min(t.saturating_sub(actual_elapsed)),
                    None => remaining,
                };
                thread::sleep(remaining);
            }
        }

        true
    }
}
