use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4, UdpSocket};

/// The (ipv4, port, service name) triple identifying where an annotation
/// occurred, in the exact numeric shape of the collector schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub ipv4: i32,
    pub port: i16,
    pub service_name: String,
}

/// Process-wide fallbacks applied at encode time when a span carries no
/// endpoint or service name of its own. Threaded explicitly into
/// `wire::encode` instead of living in a global, so the conversion stays
/// pure. Making sure these are configured at all is the caller's job.
#[derive(Debug, Clone)]
pub struct SpanDefaults {
    pub endpoint: SocketAddrV4,
    pub service_name: String,
}

impl SpanDefaults {
    pub fn new(endpoint: SocketAddrV4, service_name: impl Into<String>) -> Self {
        Self{ endpoint, service_name: service_name.into() }
    }
}

/// Network byte order: most-significant octet first, reinterpreted as a
/// two's-complement i32 to match the wire field.
pub fn ip_to_int(addr: Ipv4Addr) -> i32 {
    i32::from_be_bytes(addr.octets())
}

impl Endpoint {
    /// Pure and total: the candidate wins field-by-field, the defaults fill
    /// the rest. Whitespace in the winning service name becomes `_` (the
    /// collector rejects spaces in service names).
    pub fn resolve(
        candidate: Option<SocketAddrV4>,
        candidate_service_name: Option<&str>,
        defaults: &SpanDefaults,
    ) -> Endpoint {
        let service_name = match candidate_service_name {
            Some(name) if !name.is_empty() => name,
            _ => defaults.service_name.as_str(),
        };
        let addr = candidate.unwrap_or(defaults.endpoint);

        Endpoint{
            ipv4: ip_to_int(*addr.ip()),
            port: addr.port() as i16,
            service_name: sanitize_service_name(service_name),
        }
    }
}

fn sanitize_service_name(name: &str) -> String {
    name.chars().map(|c| if c.is_whitespace() { '_' } else { c }).collect()
}

/// Best-effort local non-loopback IPv4, one possible source for
/// `SpanDefaults`. Nothing in this crate calls it.
pub fn local_ipv4() -> Option<Ipv4Addr> {
    // connecting a UDP socket sends no traffic, it only asks the OS which
    // interface would route there
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    match socket.local_addr().ok()? {
        SocketAddr::V4(addr) if !addr.ip().is_loopback() => Some(*addr.ip()),
        _ => None,
    }
}
