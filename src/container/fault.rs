//! Captured faults for the `Exception` state.
//!
//! A [`CapturedFault`] is the single opaque fault object stored by a
//! container in `Exception` state. Faults originate in exactly one place,
//! the call-wrapping adapter, and come in two shapes:
//!
//! - a panic payload intercepted while the wrapped callable ran
//! - a typed error value the wrapped callable returned
//!
//! Either way the fault's identity is preserved: its message stays
//! reachable and the originating type can be recovered by downcasting.
//! Faults are kept distinct from domain errors and are never converted
//! into them.

use std::any::Any;
use std::error::Error as StdError;
use std::fmt;

/// A single fault captured during wrapped execution.
///
/// # Examples
///
/// ```rust
/// use std::io;
///
/// use union_containers::container::CapturedFault;
///
/// let fault = CapturedFault::from_error(io::Error::new(
///     io::ErrorKind::ConnectionRefused,
///     "endpoint unreachable",
/// ));
/// assert_eq!(fault.message(), "endpoint unreachable");
/// assert!(!fault.is_panic());
/// assert!(fault.downcast_ref::<io::Error>().is_some());
/// ```
pub struct CapturedFault {
    kind: FaultKind,
}

enum FaultKind {
    /// A panic payload intercepted by the call-wrapping adapter.
    Panic {
        message: String,
        payload: Box<dyn Any + Send>,
    },
    /// A typed error value surfaced by the wrapped callable.
    Error {
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl CapturedFault {
    /// Wraps a panic payload, extracting the panic message when the
    /// payload is a string.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(text) = payload.downcast_ref::<&'static str>() {
            (*text).to_string()
        } else if let Some(text) = payload.downcast_ref::<String>() {
            text.clone()
        } else {
            "panic with a non-string payload".to_string()
        };
        Self {
            kind: FaultKind::Panic { message, payload },
        }
    }

    /// Wraps a typed error value.
    pub fn from_error<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self {
            kind: FaultKind::Error {
                source: Box::new(error),
            },
        }
    }

    /// The human-readable message describing this fault.
    pub fn message(&self) -> String {
        match &self.kind {
            FaultKind::Panic { message, .. } => message.clone(),
            FaultKind::Error { source } => source.to_string(),
        }
    }

    /// Returns `true` if this fault was captured from a panic.
    #[inline]
    pub const fn is_panic(&self) -> bool {
        matches!(self.kind, FaultKind::Panic { .. })
    }

    /// Attempts to recover the originating typed error.
    ///
    /// Works for both origins: a typed error source is downcast directly,
    /// a panic payload is downcast through its [`Any`] payload (a panic
    /// raised with a typed error value keeps its type).
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        match &self.kind {
            FaultKind::Panic { payload, .. } => payload.downcast_ref::<E>(),
            FaultKind::Error { source } => source.downcast_ref::<E>(),
        }
    }

    /// Returns the typed error source, if this fault wraps one.
    pub fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            FaultKind::Panic { .. } => None,
            FaultKind::Error { source } => Some(source.as_ref()),
        }
    }

    /// Returns the raw panic payload, if this fault was captured from a panic.
    pub fn panic_payload(&self) -> Option<&(dyn Any + Send)> {
        match &self.kind {
            FaultKind::Panic { payload, .. } => Some(payload.as_ref()),
            FaultKind::Error { .. } => None,
        }
    }
}

impl fmt::Display for CapturedFault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FaultKind::Panic { message, .. } => write!(formatter, "panic: {message}"),
            FaultKind::Error { source } => write!(formatter, "{source}"),
        }
    }
}

impl fmt::Debug for CapturedFault {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FaultKind::Panic { message, .. } => formatter
                .debug_struct("CapturedFault")
                .field("panic", message)
                .finish(),
            FaultKind::Error { source } => formatter
                .debug_struct("CapturedFault")
                .field("error", source)
                .finish(),
        }
    }
}

// Any typed error converts into a fault. `CapturedFault` itself therefore
// implements `Display` but not `std::error::Error`, keeping this blanket
// conversion coherent.
impl<E> From<E> for CapturedFault
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::from_error(error)
    }
}
