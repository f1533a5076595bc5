//! Domain error contract for union containers.
//!
//! Containers accumulate domain errors as an ordered list of boxed
//! [`ContainerError`] trait objects. The trait asks for a single
//! capability, a human-readable message; concrete kinds are free to carry
//! additional structured fields and can be recovered from the list by
//! downcast filtering via [`UnionContainer::errors_of`].
//!
//! [`UnionContainer::errors_of`]: crate::container::UnionContainer::errors_of
//!
//! # Examples
//!
//! ```rust
//! use union_containers::container::{StatusError, UnionContainer};
//!
//! let mut container: UnionContainer<i32> = UnionContainer::from_value(7);
//! container.add_error(StatusError::new(502, "bad gateway"));
//!
//! let codes: Vec<u16> = container.errors_of::<StatusError>().map(StatusError::code).collect();
//! assert_eq!(codes, vec![502]);
//! ```

use std::any::Any;
use std::fmt;

use crate::container::state::ContainerState;

/// Object-safe upcast to [`Any`].
///
/// Implemented for every `'static` type, so any concrete error kind stored
/// behind a `dyn ContainerError` can be recovered with
/// [`Any::downcast_ref`] without reflection.
pub trait AsAny {
    /// Returns `self` as a [`Any`] trait object with its concrete type preserved.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A domain error that can be accumulated inside a union container.
///
/// The only required capability is a message; concrete kinds may carry any
/// additional structured fields. Errors must be `Send + Sync` so that
/// containers can cross `await` points inside the asynchronous adapter.
pub trait ContainerError: AsAny + fmt::Debug + Send + Sync {
    /// The human-readable message describing this error.
    fn message(&self) -> String;
}

// =============================================================================
// Concrete Error Kinds
// =============================================================================

/// A plain text domain error.
///
/// # Examples
///
/// ```rust
/// use union_containers::container::{ContainerError, MessageError};
///
/// let error = MessageError::new("no seats left");
/// assert_eq!(error.message(), "no seats left");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageError {
    message: String,
}

impl MessageError {
    /// Creates a new plain text error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for MessageError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

impl std::error::Error for MessageError {}

impl ContainerError for MessageError {
    fn message(&self) -> String {
        self.message.clone()
    }
}

/// A domain error carrying a status code alongside its message.
///
/// # Examples
///
/// ```rust
/// use union_containers::container::{ContainerError, StatusError};
///
/// let error = StatusError::new(404, "manager not found");
/// assert_eq!(error.code(), 404);
/// assert_eq!(error.message(), "status 404: manager not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    code: u16,
    message: String,
}

impl StatusError {
    /// Creates a new status error.
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Returns the status code.
    pub const fn code(&self) -> u16 {
        self.code
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "status {}: {}", self.code, self.message)
    }
}

impl std::error::Error for StatusError {}

impl ContainerError for StatusError {
    fn message(&self) -> String {
        self.to_string()
    }
}

/// The error returned when extracting a payload from a container in the
/// wrong state.
///
/// Returned by [`UnionContainer::try_into_value`] when the container's
/// state is not `Result`.
///
/// [`UnionContainer::try_into_value`]: crate::container::UnionContainer::try_into_value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStateError {
    expected: ContainerState,
    actual: ContainerState,
}

impl InvalidStateError {
    pub(crate) const fn new(expected: ContainerState, actual: ContainerState) -> Self {
        Self { expected, actual }
    }

    /// The state the extraction required.
    pub const fn expected(&self) -> ContainerState {
        self.expected
    }

    /// The state the container was actually in.
    pub const fn actual(&self) -> ContainerState {
        self.actual
    }
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "expected container state `{}`, found `{}`",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for InvalidStateError {}

impl ContainerError for InvalidStateError {
    fn message(&self) -> String {
        self.to_string()
    }
}
