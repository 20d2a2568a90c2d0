// ++++++++++++++++++++ ids ++++++++++++++++++++

/// Opaque 64-bit trace identifier. Uniqueness is the caller's job,
/// see `id_generators`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TraceId(pub u64);

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpanId(pub u64);

impl std::fmt::Display for SpanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

// ++++++++++++++++++++ flags ++++++++++++++++++++

/// Sampling-related bits carried on a span. DEBUG means "collect regardless
/// of the sampling decision"; the bits are only transported here, samplers
/// interpret them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpanFlags(pub u32);

impl SpanFlags {
    pub const NONE: Self = Self(0);
    pub const SAMPLED: Self = Self(1 << 0);
    pub const DEBUG: Self = Self(1 << 1);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
    pub fn sampled(self) -> bool {
        self.contains(Self::SAMPLED)
    }
    pub fn debug(self) -> bool {
        self.contains(Self::DEBUG)
    }
}

impl std::ops::BitOr for SpanFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

// ++++++++++++++++++++ SpanState ++++++++++++++++++++

/// Identity of one traced unit of work.
///
/// `parent_span_id = None` is the only thing that makes a span a root;
/// `Some(SpanId(0))` is a legitimate, non-root parent reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanState {
    pub trace_id: TraceId,
    pub parent_span_id: Option<SpanId>,
    pub span_id: SpanId,
    pub flags: SpanFlags,
}

impl SpanState {
    pub fn new(trace_id: TraceId, parent_span_id: Option<SpanId>, span_id: SpanId, flags: SpanFlags) -> Self {
        Self{ trace_id, parent_span_id, span_id, flags }
    }

    pub fn is_root(&self) -> bool {
        self.parent_span_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_derived_from_parent_absence() {
        let root = SpanState::new(TraceId(1), None, SpanId(2), SpanFlags::NONE);
        assert!(root.is_root());

        let child = SpanState::new(TraceId(1), Some(SpanId(123456)), SpanId(2), SpanFlags::NONE);
        assert!(!child.is_root());

        // zero is a real parent id, not a root sentinel
        let zero_parent = SpanState::new(TraceId(1), Some(SpanId(0)), SpanId(2), SpanFlags::NONE);
        assert!(!zero_parent.is_root());
    }

    #[test]
    fn flags_bits() {
        assert!(!SpanFlags::NONE.debug());
        assert!(!SpanFlags::NONE.sampled());

        let flags = SpanFlags::SAMPLED | SpanFlags::DEBUG;
        assert!(flags.sampled());
        assert!(flags.debug());
        assert!(SpanFlags::DEBUG.debug());
        assert!(!SpanFlags::DEBUG.sampled());
    }

    #[test]
    fn ids_display_as_fixed_width_hex() {
        assert_eq!(TraceId(0x1a2b).to_string(), "0000000000001a2b");
        assert_eq!(SpanId(u64::MAX).to_string(), "ffffffffffffffff");
    }
}
