//! Clock abstract Trait

/// Source of the `createdDate` stamp.
pub trait Clock: Send + Sync {
    /// Current time in epoch milliseconds.
    fn now_millis(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_in_epoch_millis() {
        // 2024-01-01T00:00:00Z
        assert!(SystemClock.now_millis() > 1_704_067_200_000);
    }
}
