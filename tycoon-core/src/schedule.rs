//! Timer bookkeeping for the periodic refresh and the background auto-save.

use crate::config::ClientConfig;

/// A fixed-period timer fed with clock readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cadence {
    period_ms: u64,
    next_due_ms: Option<u64>,
}

impl Cadence {
    #[must_use]
    pub const fn new(period_ms: u64) -> Self {
        Self {
            period_ms,
            next_due_ms: None,
        }
    }

    /// Start counting from `now_ms`; the first firing is one period later.
    pub const fn arm(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms.saturating_add(self.period_ms));
    }

    /// Fires at most once per call, then reschedules from `now_ms`.
    ///
    /// Missed periods (e.g. a throttled background tab) collapse into a
    /// single firing.
    pub const fn poll(&mut self, now_ms: u64) -> bool {
        match self.next_due_ms {
            None => {
                self.arm(now_ms);
                false
            }
            Some(due) if now_ms >= due => {
                self.arm(now_ms);
                true
            }
            Some(_) => false,
        }
    }

    #[must_use]
    pub const fn period_ms(&self) -> u64 {
        self.period_ms
    }
}

/// Work that became due on a poll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Due {
    pub refresh: bool,
    pub save: bool,
}

/// The two independent timers of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    refresh: Cadence,
    autosave: Cadence,
}

impl Schedule {
    #[must_use]
    pub const fn new(config: &ClientConfig) -> Self {
        Self {
            refresh: Cadence::new(config.refresh_period_ms),
            autosave: Cadence::new(config.autosave_period_ms),
        }
    }

    pub const fn start(&mut self, now_ms: u64) {
        self.refresh.arm(now_ms);
        self.autosave.arm(now_ms);
    }

    pub const fn poll(&mut self, now_ms: u64) -> Due {
        Due {
            refresh: self.refresh.poll(now_ms),
            save: self.autosave.poll(now_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_fires_once_per_window_and_save_every_five_minutes() {
        let mut schedule = Schedule::new(&ClientConfig::default());
        schedule.start(0);
        let mut refreshes = Vec::new();
        let mut saves = Vec::new();
        for second in 1..=600_u64 {
            let now = second * 1_000;
            let due = schedule.poll(now);
            if due.refresh {
                refreshes.push(now);
            }
            if due.save {
                saves.push(now);
            }
        }
        assert_eq!(refreshes.len(), 20);
        assert!(refreshes.windows(2).all(|w| w[1] - w[0] <= 30_000));
        assert_eq!(saves, vec![300_000, 600_000]);
    }

    #[test]
    fn missed_periods_collapse_into_one_firing() {
        let mut cadence = Cadence::new(30_000);
        cadence.arm(0);
        assert!(cadence.poll(120_000));
        assert!(!cadence.poll(121_000));
        assert!(cadence.poll(150_000));
    }

    #[test]
    fn unarmed_cadence_arms_on_first_poll() {
        let mut cadence = Cadence::new(10);
        assert!(!cadence.poll(5));
        assert!(cadence.poll(15));
        assert_eq!(cadence.period_ms(), 10);
    }
}
