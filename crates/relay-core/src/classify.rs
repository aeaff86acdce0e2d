//! Fault classification
//!
//! Decides how the middleware treats a fault. Tagged detection is an
//! ordered chain of independent detectors because a tagged fault may
//! arrive in three shapes: wrapped by an outer fault (marker on the
//! cause's bag), raised directly (marker on its own bag), or rebuilt from
//! a flattened text form that lost the bag but kept the token at the end
//! of the message.

use crate::fault::{Fault, MARKER_KEY, MARKER_VALUE};

/// Handling category for a fault
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Application-tagged, client-error semantics
    Tagged,
    /// Division by zero, treated as a client error by this service
    Arithmetic,
    /// Everything else, server-error semantics
    Unclassified,
}

type Detector = fn(&Fault) -> bool;

/// Tagged detectors in fallback order; any single match is sufficient
const TAGGED_DETECTORS: [Detector; 3] = [marker_on_cause, marker_on_self, marker_in_message];

/// Classify a fault
///
/// Tagged detection runs first and wins over everything, including a
/// divide-by-zero fault that somehow acquired the marker.
#[must_use]
pub fn classify(fault: &Fault) -> Classification {
    if TAGGED_DETECTORS.iter().any(|detect| detect(fault)) {
        Classification::Tagged
    } else if fault.is_divide_by_zero() {
        Classification::Arithmetic
    } else {
        Classification::Unclassified
    }
}

/// The cause exists, has a non-empty bag, and the bag carries the marker
fn marker_on_cause(fault: &Fault) -> bool {
    fault.cause().is_some_and(has_marker)
}

fn marker_on_self(fault: &Fault) -> bool {
    has_marker(fault)
}

/// Last `,`-separated segment of the message equals the marker value
///
/// No trimming, case-insensitive. An ordinary message that happens to end
/// with `,CustomException` is mistaken for a tagged fault; that ambiguity
/// is part of the wire contract and deliberately kept.
fn marker_in_message(fault: &Fault) -> bool {
    if fault.message().is_empty() {
        return false;
    }

    fault
        .message()
        .split(',')
        .next_back()
        .is_some_and(|tail| tail.eq_ignore_ascii_case(MARKER_VALUE))
}

fn has_marker(fault: &Fault) -> bool {
    fault
        .data()
        .get(MARKER_KEY)
        .is_some_and(|value| value.eq_ignore_ascii_case(MARKER_VALUE))
}
