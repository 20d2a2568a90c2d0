use crate::{Annotation, AnnotationValue};

/// Infers the elapsed time of a span from its core annotation pairs.
///
/// Client duration is `cr - cs`, server duration is `ss - sr`; the client
/// pair wins when both are computable. A duration is only reported when the
/// winning pair is complete and strictly positive. Clock skew or
/// ordering-inverted events therefore yield `None` instead of a bogus value,
/// and an incomplete span (e.g. the peer never answered) is a normal
/// no-duration outcome, not an error.
///
/// Timestamps drive the result, not append order.
pub fn resolve_duration(annotations: &[Annotation]) -> Option<u64> {
    let (mut cs, mut cr, mut ss, mut sr) = (None, None, None, None);

    for ann in annotations {
        let slot = match ann.value {
            AnnotationValue::ClientSend => &mut cs,
            AnnotationValue::ClientRecv => &mut cr,
            AnnotationValue::ServerSend => &mut ss,
            AnnotationValue::ServerRecv => &mut sr,
            AnnotationValue::Custom(_) => continue,
        };
        *slot = Some(ann.timestamp);
    }

    // pick the winner first, only then apply the positivity policy: a
    // complete-but-inverted client pair must not fall back to the server pair
    let winner = elapsed(cs, cr).or(elapsed(sr, ss))?;
    if winner > 0 { Some(winner as u64) } else { None }
}

fn elapsed(start: Option<u64>, end: Option<u64>) -> Option<i64> {
    Some(end? as i64 - start? as i64)
}
