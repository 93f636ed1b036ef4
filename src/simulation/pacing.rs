use std::time::{Duration, Instant};

/// Soft real-time tick pacing.
///
/// Each tick gets a fixed budget; whatever the work did not use is slept
/// away. Overruns sleep zero and carry no backlog into the next tick.
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    last_processing: Duration,
    tick_count: u64,
}

impl FramePacer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last_processing: Duration::ZERO,
            tick_count: 0,
        }
    }

    pub fn begin(&self) -> Instant {
        Instant::now()
    }

    /// Close a tick started at `started` and sleep out its remaining budget.
    /// Returns the time slept.
    pub fn finish(&mut self, started: Instant) -> Duration {
        self.last_processing = started.elapsed();
        self.tick_count += 1;
        let remaining = remaining_budget(self.period, self.last_processing);
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        remaining
    }

    pub fn last_processing(&self) -> Duration {
        self.last_processing
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Frame rate implied by the last tick: the budget caps it from above.
    pub fn fps_estimate(&self) -> f64 {
        fps_for(self.period, self.last_processing())
    }
}

/// `max(0, period - elapsed)`
#[inline]
pub fn remaining_budget(period: Duration, elapsed: Duration) -> Duration {
    period.saturating_sub(elapsed)
}

pub fn fps_for(period: Duration, processing: Duration) -> f64 {
    let frame_ms = period.max(processing).as_secs_f64() * 1000.0;
    if frame_ms > 0.0 {
        1000.0 / frame_ms
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_budget() {
        let period = Duration::from_millis(5);
        assert_eq!(remaining_budget(period, Duration::from_millis(2)), Duration::from_millis(3));
        assert_eq!(remaining_budget(period, period), Duration::ZERO);
        assert_eq!(remaining_budget(period, Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn test_fps_is_capped_by_period() {
        let period = Duration::from_millis(5);
        assert!((fps_for(period, Duration::from_millis(1)) - 200.0).abs() < 1e-9);
        assert!((fps_for(period, Duration::from_millis(20)) - 50.0).abs() < 1e-9);
        assert_eq!(fps_for(Duration::ZERO, Duration::ZERO), 0.0);
    }

    #[test]
    fn test_finish_sleeps_out_budget() {
        let mut pacer = FramePacer::new(Duration::from_millis(5));
        let started = pacer.begin();
        let slept = pacer.finish(started);
        assert!(slept <= Duration::from_millis(5));
        assert!(started.elapsed() >= Duration::from_millis(5));
        assert_eq!(pacer.tick_count(), 1);
    }

    #[test]
    fn test_overrun_does_not_sleep() {
        let mut pacer = FramePacer::new(Duration::from_millis(1));
        let started = pacer.begin();
        std::thread::sleep(Duration::from_millis(3));
        assert_eq!(pacer.finish(started), Duration::ZERO);
        assert!(pacer.last_processing() >= Duration::from_millis(3));
    }
}
