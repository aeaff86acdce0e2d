//! Fault values carried through the request pipeline
//!
//! A [`Fault`] is the value-level stand-in for a raised exception: a
//! concrete kind name, a human message, an auxiliary string bag, an
//! optional cause, and the backtrace captured where the fault was
//! constructed. Handlers return faults, the fault middleware consumes
//! them; nothing here panics or unwinds.

use std::backtrace::Backtrace;
use std::collections::BTreeMap;
use std::fmt;

/// Bag key under which tagged faults carry their marker
pub const MARKER_KEY: &str = "ExceptionType";

/// Marker value identifying an application-tagged fault
pub const MARKER_VALUE: &str = "CustomException";

/// Kind name of faults built by [`Fault::tagged`] and [`Fault::wrap`]
pub const TAGGED_KIND: &str = "tagged";

/// Kind name of faults built by [`Fault::divide_by_zero`]
pub const DIVIDE_BY_ZERO_KIND: &str = "divide_by_zero";

/// A failure raised somewhere in the request pipeline
///
/// The auxiliary `data` bag exists so a fault can carry its marker through
/// wrapping and re-serialization; classification reads the bag, the cause
/// chain, and the message text, never the Rust type system.
#[derive(Debug, Clone)]
pub struct Fault {
    kind: String,
    message: String,
    data: BTreeMap<String, String>,
    cause: Option<Box<Fault>>,
    trace: String,
}

impl Fault {
    /// An application-tagged fault
    ///
    /// Installs the `ExceptionType = CustomException` marker in the bag at
    /// construction time. This is the only constructor that sets it.
    pub fn tagged(message: impl Into<String>) -> Self {
        let mut fault = Self::new(TAGGED_KIND, message);
        fault.data.insert(MARKER_KEY.to_owned(), MARKER_VALUE.to_owned());
        fault
    }

    /// Wrap an existing fault, adopting its message
    ///
    /// Mirrors a copy constructor: the marker is *not* re-installed, so a
    /// wrapped tagged fault is only recognizable through the cause's bag
    /// or, failing that, its message text.
    #[must_use]
    pub fn wrap(cause: Self) -> Self {
        let mut fault = Self::new(TAGGED_KIND, cause.message.clone());
        fault.cause = Some(Box::new(cause));
        fault
    }

    /// An integer division-by-zero fault
    ///
    /// Carries no marker; classified by kind identity alone.
    #[must_use]
    pub fn divide_by_zero() -> Self {
        Self::new(DIVIDE_BY_ZERO_KIND, "attempted to divide by zero")
    }

    /// Any other runtime failure
    pub fn other(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(kind, message)
    }

    fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
            data: BTreeMap::new(),
            cause: None,
            // Captured eagerly: the mapper embeds trace text in envelopes,
            // and by then the construction site is long gone.
            trace: Backtrace::force_capture().to_string(),
        }
    }

    /// Attach an auxiliary bag entry
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Attach a cause
    #[must_use]
    pub fn with_cause(mut self, cause: Self) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Concrete kind name
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The auxiliary bag
    #[must_use]
    pub const fn data(&self) -> &BTreeMap<String, String> {
        &self.data
    }

    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        self.cause.as_deref()
    }

    /// Backtrace text captured at construction
    #[must_use]
    pub fn trace(&self) -> &str {
        &self.trace
    }

    /// Whether this fault is the arithmetic division-by-zero kind
    #[must_use]
    pub fn is_divide_by_zero(&self) -> bool {
        self.kind == DIVIDE_BY_ZERO_KIND
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fault: {}", self.kind, self.message)
    }
}

impl std::error::Error for Fault {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
