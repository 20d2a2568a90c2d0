// ++++++++++++++++++++ annotations ++++++++++++++++++++

/// Label of a timed span event. The four core labels are what duration
/// resolution pattern-matches on; every other label rides along as an
/// application-level `Custom` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationValue {
    ClientSend,
    ClientRecv,
    ServerSend,
    ServerRecv,
    Custom(String),
}

impl AnnotationValue {
    pub fn as_str(&self) -> &str {
        match self {
            Self::ClientSend => "cs",
            Self::ClientRecv => "cr",
            Self::ServerSend => "ss",
            Self::ServerRecv => "sr",
            Self::Custom(s) => s,
        }
    }
}

impl From<&str> for AnnotationValue {
    fn from(s: &str) -> Self {
        match s {
            "cs" => Self::ClientSend,
            "cr" => Self::ClientRecv,
            "ss" => Self::ServerSend,
            "sr" => Self::ServerRecv,
            _ => Self::Custom(s.to_owned()),
        }
    }
}

impl From<String> for AnnotationValue {
    fn from(s: String) -> Self {
        match s.as_str() {
            "cs" => Self::ClientSend,
            "cr" => Self::ClientRecv,
            "ss" => Self::ServerSend,
            "sr" => Self::ServerRecv,
            _ => Self::Custom(s),
        }
    }
}

/// A timed event on a span. `timestamp` is unix micros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    pub timestamp: u64,
    pub value: AnnotationValue,
}

// ++++++++++++++++++++ binary annotations ++++++++++++++++++++

/// Value codes of the collector's `annotation_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum BinaryAnnotationKind {
    Bool = 0,
    Bytes = 1,
    I16 = 2,
    I32 = 3,
    I64 = 4,
    Double = 5,
    String = 6,
}

/// A keyed, typed metadata value on a span. The value bytes are carried
/// verbatim; interpreting them per `kind` is the collector's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryAnnotation {
    pub key: String,
    pub value: Vec<u8>,
    pub kind: BinaryAnnotationKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_labels_round_trip() {
        for label in ["cs", "cr", "ss", "sr"] {
            let value = AnnotationValue::from(label);
            assert!(!matches!(value, AnnotationValue::Custom(_)), "{label} must map to a core variant");
            assert_eq!(value.as_str(), label);
        }

        let custom = AnnotationValue::from("SomethingHappenedHere");
        assert_eq!(custom, AnnotationValue::Custom("SomethingHappenedHere".to_owned()));
        assert_eq!(custom.as_str(), "SomethingHappenedHere");
    }

    #[test]
    fn kind_codes_match_collector_schema() {
        assert_eq!(BinaryAnnotationKind::Bool as i32, 0);
        assert_eq!(BinaryAnnotationKind::Bytes as i32, 1);
        assert_eq!(BinaryAnnotationKind::I16 as i32, 2);
        assert_eq!(BinaryAnnotationKind::I32 as i32, 3);
        assert_eq!(BinaryAnnotationKind::I64 as i32, 4);
        assert_eq!(BinaryAnnotationKind::Double as i32, 5);
        assert_eq!(BinaryAnnotationKind::String as i32, 6);
    }
}
