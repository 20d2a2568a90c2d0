use std::sync::{atomic, Arc};
use std::time::UNIX_EPOCH;

pub trait Clock: Send + Sync + 'static {
    fn now_unix_micros(&self) -> u64;
}

pub struct StdClock;

impl Clock for StdClock {
    fn now_unix_micros(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(UNIX_EPOCH).unwrap_or_default()
            .as_micros() as u64
    }
}

#[derive(Default, Clone)]
pub struct TestClock(Arc<atomic::AtomicU64>);

impl TestClock {
    pub fn advance(&self, by: u64){
        self.0.fetch_add(by, atomic::Ordering::SeqCst);
    }
}

impl Clock for TestClock {
    fn now_unix_micros(&self) -> u64 {
        self.0.load(atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_only_moves_when_advanced() {
        let clock = TestClock::default();
        assert_eq!(clock.now_unix_micros(), 0);
        clock.advance(10_000);
        clock.advance(5);
        assert_eq!(clock.now_unix_micros(), 10_005);
    }

    #[test]
    fn std_clock_is_past_2020() {
        // 2020-01-01 in unix micros
        assert!(StdClock.now_unix_micros() > 1_577_836_800_000_000);
    }
}
