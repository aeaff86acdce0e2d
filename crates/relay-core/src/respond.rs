//! Mapping from classified faults to wire responses
//!
//! Pure construction: no logging, no retries, no mutation of the fault.
//! The envelope `statusCode` is a finer-grained application code carried
//! inside the transport status; callers that want more discrimination
//! than 400-vs-500 read it out of the body.
//!
//! Envelope messages embed backtrace text. That is the demonstration
//! contract; redact before exposing such a service publicly.

use http::StatusCode;

use crate::classify::Classification;
use crate::envelope::ErrorEnvelope;
use crate::fault::Fault;

/// Envelope code for tagged faults
pub const CODE_TAGGED: u16 = 224;

/// Envelope code for divide-by-zero faults
pub const CODE_ARITHMETIC: u16 = 221;

/// Envelope code for unclassified faults
pub const CODE_UNCLASSIFIED: u16 = 222;

/// Build the transport status and envelope for a classified fault
///
/// `service` identifies the producing service in the envelope `content`.
/// Tagged and arithmetic faults also name the handler that fired.
#[must_use]
pub fn respond_to(service: &str, classification: Classification, fault: &Fault) -> (StatusCode, ErrorEnvelope) {
    match classification {
        Classification::Tagged => (StatusCode::BAD_REQUEST, tagged_envelope(service, fault)),
        Classification::Arithmetic => (StatusCode::BAD_REQUEST, arithmetic_envelope(service, fault)),
        Classification::Unclassified => {
            (StatusCode::INTERNAL_SERVER_ERROR, unclassified_envelope(service, fault))
        }
    }
}

fn tagged_envelope(service: &str, fault: &Fault) -> ErrorEnvelope {
    ErrorEnvelope {
        content: format!("error response sent by {service} from the tagged fault handler"),
        message: format!("tagged fault raised, backtrace: {}", fault.trace()),
        status_code: CODE_TAGGED,
    }
}

fn arithmetic_envelope(service: &str, fault: &Fault) -> ErrorEnvelope {
    ErrorEnvelope {
        content: format!("error response sent by {service} from the divide-by-zero fault handler"),
        message: format!("divide by zero fault raised, backtrace: {}", fault.trace()),
        status_code: CODE_ARITHMETIC,
    }
}

/// No tighter classification was possible, so the message keeps the full
/// diagnostic detail: kind, original message, and trace
fn unclassified_envelope(service: &str, fault: &Fault) -> ErrorEnvelope {
    ErrorEnvelope {
        content: format!("error response sent by {service}"),
        message: format!(
            "unhandled {} fault: {}, backtrace: {}",
            fault.kind(),
            fault.message(),
            fault.trace()
        ),
        status_code: CODE_UNCLASSIFIED,
    }
}
