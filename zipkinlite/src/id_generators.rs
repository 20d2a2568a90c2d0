use crate::{SpanId, TraceId};
use std::sync::atomic;

/// Id construction is caller territory; the encoding core treats ids as
/// opaque. This is the convenience source most callers will plug in.
pub trait IdGenerator: Send + Sync + 'static {
    fn new_trace_id(&self) -> TraceId;
    fn new_span_id(&self) -> SpanId;
}

pub struct FastrandIdGenerator;

impl IdGenerator for FastrandIdGenerator {
    fn new_trace_id(&self) -> TraceId {
        TraceId(fastrand::u64(..))
    }

    fn new_span_id(&self) -> SpanId {
        SpanId(fastrand::u64(..))
    }
}

#[derive(Default)]
pub struct TestIdGenerator {
    next_trace_id: atomic::AtomicU64,
    next_span_id: atomic::AtomicU64,
}

impl IdGenerator for TestIdGenerator {
    fn new_trace_id(&self) -> TraceId {
        TraceId(self.next_trace_id.fetch_add(1, atomic::Ordering::SeqCst) + 1)
    }

    fn new_span_id(&self) -> SpanId {
        SpanId(self.next_span_id.fetch_add(1, atomic::Ordering::SeqCst) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_counts_up_from_one() {
        let generator = TestIdGenerator::default();
        assert_eq!(generator.new_trace_id(), TraceId(1));
        assert_eq!(generator.new_trace_id(), TraceId(2));
        assert_eq!(generator.new_span_id(), SpanId(1));
    }

    #[test]
    fn fastrand_generator_produces_ids() {
        fastrand::seed(7);
        let generator = FastrandIdGenerator;
        // ids are opaque; all we require is that generation never fails
        let _ = generator.new_trace_id();
        let _ = generator.new_span_id();
    }
}
