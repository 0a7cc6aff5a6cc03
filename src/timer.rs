use std::time::{Duration, Instant};

/// A cancellable repeating timer.
///
/// The ticker does not run anything itself. The owner asks it whether a
/// period has elapsed with [`Ticker::fire_if_due`] and performs the tick on
/// `true`. Disarming clears the deadline, so a disarmed ticker never reports
/// a due tick until it is armed again.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Ticker {
            interval,
            next_due: None,
        }
    }

    /// Arms the ticker so the first tick is due one interval after `now`.
    /// Re-arming an armed ticker restarts its period.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    /// Returns `true` if the ticker was armed.
    pub fn disarm(&mut self) -> bool {
        self.next_due.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Reports whether a tick is due at `now` and, if so, schedules the next one.
    ///
    /// Missed periods are not replayed: after a long stall a single tick fires
    /// and the following deadline is measured from `now`.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                let next = due + self.interval;
                self.next_due = Some(if next > now { next } else { now + self.interval });
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, or `None` while disarmed.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.checked_duration_since(now).unwrap_or(Duration::ZERO))
    }
}
