use crate::{Annotation, AnnotationValue, BinaryAnnotation, BinaryAnnotationKind, SpanState};
use std::net::SocketAddrV4;

/// One traced unit of work.
///
/// A span has a single writer during its active phase (appends only, nothing
/// is ever edited or removed) and a single reader at encode time. The crate
/// adds no locking to the append path; callers that share a span across
/// threads must order the last append before the encode themselves.
#[derive(Debug, Clone)]
pub struct Span {
    pub state: SpanState,
    pub name: Option<String>,
    pub endpoint: Option<SocketAddrV4>,
    pub service_name: Option<String>,
    /// Unix micros captured at construction. A model-side reference only,
    /// never written to the wire record.
    pub started_at: u64,
    annotations: Vec<Annotation>,
    binary_annotations: Vec<BinaryAnnotation>,
}

impl Span {
    pub fn new(state: SpanState, started_at: u64) -> Self {
        Self{
            state,
            name: None,
            endpoint: None,
            service_name: None,
            started_at,
            annotations: vec![],
            binary_annotations: vec![],
        }
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        Self{ name: Some(name.into()), ..self }
    }
    pub fn endpoint(self, endpoint: SocketAddrV4) -> Self {
        Self{ endpoint: Some(endpoint), ..self }
    }
    pub fn service_name(self, service_name: impl Into<String>) -> Self {
        Self{ service_name: Some(service_name.into()), ..self }
    }

    pub fn is_root(&self) -> bool {
        self.state.is_root()
    }

    /// Irreversible append; insertion order is what ends up on the wire.
    pub fn add_annotation(&mut self, timestamp: u64, value: impl Into<AnnotationValue>) {
        self.annotations.push(Annotation{ timestamp, value: value.into() });
    }

    /// Irreversible append; insertion order is what ends up on the wire.
    pub fn add_binary_annotation(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>, kind: BinaryAnnotationKind) {
        self.binary_annotations.push(BinaryAnnotation{
            key: key.into(),
            value: value.into(),
            kind,
        });
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
    pub fn binary_annotations(&self) -> &[BinaryAnnotation] {
        &self.binary_annotations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SpanFlags, SpanId, TraceId};

    #[test]
    fn appends_preserve_insertion_order() {
        let state = SpanState::new(TraceId(1), None, SpanId(2), SpanFlags::NONE);
        let mut span = Span::new(state, 0);

        span.add_annotation(30, "cr");
        span.add_annotation(10, "cs");
        span.add_annotation(20, "SomethingHappenedHere");
        span.add_binary_annotation("http.uri", b"/".to_vec(), BinaryAnnotationKind::String);

        let labels: Vec<_> = span.annotations().iter().map(|a| a.value.as_str().to_owned()).collect();
        assert_eq!(labels, ["cr", "cs", "SomethingHappenedHere"]);
        assert_eq!(span.binary_annotations().len(), 1);
        assert_eq!(span.binary_annotations()[0].key, "http.uri");
    }
}
