//! Span -> collector record conversion plus the thrift binary-protocol
//! writer for the v1 span schema. Everything here is deterministic and
//! side-effect-free; the source span is never mutated.

use crate::{resolve_duration, BinaryAnnotationKind, Endpoint, Span, SpanDefaults};
use bytes::{BufMut, BytesMut};

/// Fallback RPC method label; the collector requires a non-empty span name.
pub const DEFAULT_RPC_METHOD: &str = "UnknownRpc";

// ++++++++++++++++++++ wire records ++++++++++++++++++++

/// The collector's span record. `trace_id`, `name` and `id` are always
/// populated by construction; a record missing one of them cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireSpan {
    pub trace_id: u64,
    pub name: String,
    pub id: u64,
    pub parent_id: Option<u64>,
    pub annotations: Vec<WireAnnotation>,
    pub binary_annotations: Vec<WireBinaryAnnotation>,
    pub debug: bool,
    pub duration: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireAnnotation {
    pub timestamp: u64,
    pub value: String,
    pub host: Endpoint,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireBinaryAnnotation {
    pub key: String,
    pub value: Vec<u8>,
    pub kind: BinaryAnnotationKind,
    pub host: Endpoint,
}

// ++++++++++++++++++++ conversion ++++++++++++++++++++

/// Converts a finished span into its wire record. Total over well-formed
/// input: required fields are filled from `defaults` up front, never
/// validated after the fact.
///
/// The endpoint is resolved once and the same resolved host is attached to
/// every annotation and binary annotation of the span.
pub fn encode(span: &Span, defaults: &SpanDefaults) -> WireSpan {
    let host = Endpoint::resolve(span.endpoint, span.service_name.as_deref(), defaults);

    let annotations = span.annotations().iter()
        .map(|ann| WireAnnotation{
            timestamp: ann.timestamp,
            value: ann.value.as_str().to_owned(),
            host: host.clone(),
        })
        .collect();

    let binary_annotations = span.binary_annotations().iter()
        .map(|ann| WireBinaryAnnotation{
            key: ann.key.clone(),
            value: ann.value.clone(),
            kind: ann.kind,
            host: host.clone(),
        })
        .collect();

    let name = match span.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => DEFAULT_RPC_METHOD.to_owned(),
    };

    WireSpan{
        trace_id: span.state.trace_id.0,
        name,
        id: span.state.span_id.0,
        // root-ness governs the field, not the raw parent value
        parent_id: span.state.parent_span_id.map(|id| id.0),
        annotations,
        binary_annotations,
        debug: span.state.flags.debug(),
        duration: resolve_duration(span.annotations()),
    }
}

// ++++++++++++++++++++ thrift binary protocol ++++++++++++++++++++

// TBinaryProtocol type codes used by the v1 span schema.
const T_STOP: u8 = 0;
const T_BOOL: u8 = 2;
const T_I16: u8 = 6;
const T_I32: u8 = 8;
const T_I64: u8 = 10;
const T_STRING: u8 = 11;
const T_STRUCT: u8 = 12;
const T_LIST: u8 = 15;

fn write_field_header(buf: &mut BytesMut, field_type: u8, field_id: i16) {
    buf.put_u8(field_type);
    buf.put_i16(field_id);
}

fn write_binary(buf: &mut BytesMut, value: &[u8]) {
    buf.put_i32(value.len() as i32);
    buf.put_slice(value);
}

fn write_list_header(buf: &mut BytesMut, elem_type: u8, len: usize) {
    buf.put_u8(elem_type);
    buf.put_i32(len as i32);
}

fn write_endpoint(buf: &mut BytesMut, host: &Endpoint) {
    write_field_header(buf, T_I32, 1);
    buf.put_i32(host.ipv4);
    write_field_header(buf, T_I16, 2);
    buf.put_i16(host.port);
    write_field_header(buf, T_STRING, 3);
    write_binary(buf, host.service_name.as_bytes());
    buf.put_u8(T_STOP);
}

impl WireAnnotation {
    fn write_to(&self, buf: &mut BytesMut) {
        write_field_header(buf, T_I64, 1);
        buf.put_i64(self.timestamp as i64);
        write_field_header(buf, T_STRING, 2);
        write_binary(buf, self.value.as_bytes());
        write_field_header(buf, T_STRUCT, 3);
        write_endpoint(buf, &self.host);
        buf.put_u8(T_STOP);
    }
}

impl WireBinaryAnnotation {
    fn write_to(&self, buf: &mut BytesMut) {
        write_field_header(buf, T_STRING, 1);
        write_binary(buf, self.key.as_bytes());
        write_field_header(buf, T_STRING, 2);
        write_binary(buf, &self.value);
        write_field_header(buf, T_I32, 3);
        buf.put_i32(self.kind as i32);
        write_field_header(buf, T_STRUCT, 4);
        write_endpoint(buf, &self.host);
        buf.put_u8(T_STOP);
    }
}

impl WireSpan {
    /// Canonical big-endian TBinaryProtocol struct encoding consumed by the
    /// v1 collector. Field ids follow zipkinCore.thrift; absent optionals
    /// (parent_id, duration) are skipped entirely rather than written empty.
    pub fn write_to(&self, buf: &mut BytesMut) {
        write_field_header(buf, T_I64, 1);
        buf.put_i64(self.trace_id as i64);
        write_field_header(buf, T_STRING, 3);
        write_binary(buf, self.name.as_bytes());
        write_field_header(buf, T_I64, 4);
        buf.put_i64(self.id as i64);
        if let Some(parent_id) = self.parent_id {
            write_field_header(buf, T_I64, 5);
            buf.put_i64(parent_id as i64);
        }

        write_field_header(buf, T_LIST, 6);
        write_list_header(buf, T_STRUCT, self.annotations.len());
        for ann in &self.annotations {
            ann.write_to(buf);
        }

        write_field_header(buf, T_LIST, 8);
        write_list_header(buf, T_STRUCT, self.binary_annotations.len());
        for ann in &self.binary_annotations {
            ann.write_to(buf);
        }

        write_field_header(buf, T_BOOL, 9);
        buf.put_u8(self.debug as u8);
        if let Some(duration) = self.duration {
            write_field_header(buf, T_I64, 11);
            buf.put_i64(duration as i64);
        }
        buf.put_u8(T_STOP);
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = BytesMut::new();
        self.write_to(&mut buf);
        buf.to_vec()
    }
}

/// The batch form POSTed to the collector: a thrift `list<Span>`.
pub fn write_span_list(spans: &[WireSpan], buf: &mut BytesMut) {
    write_list_header(buf, T_STRUCT, spans.len());
    for span in spans {
        span.write_to(buf);
    }
}
