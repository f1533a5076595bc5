//! Container states and payload carriers.
//!
//! This module provides [`ContainerState`], the tag that determines which
//! payload of a union container is meaningful, together with the payload
//! carrier types returned by container queries:
//!
//! - [`ValuePayload`]: the success value of a `Result`-state container
//! - [`ErrorPayload`]: the ordered error list of an `Error`-state container
//! - [`ExceptionPayload`]: the captured fault of an `Exception`-state container
//! - [`EmptyPayload`]: the [`Empty`] marker of an `Empty`-state container
//!
//! Exactly one payload is active at any time; the active flag of each
//! carrier mirrors whether its state is the container's current state.
//! Carriers are produced on demand and are never the container's storage.

use std::fmt;

use crate::container::error::ContainerError;
use crate::container::fault::CapturedFault;

/// The active state of a union container.
///
/// The state is the single source of truth for which payload of the
/// container is meaningful:
///
/// - `Empty`: a deliberate "no value" outcome
/// - `Result`: a typed success value
/// - `Error`: an ordered, accumulated list of domain errors
/// - `Exception`: a single captured fault
///
/// A freshly constructed container always has a determinate state;
/// `Empty` is the default.
///
/// # Examples
///
/// ```rust
/// use union_containers::container::{ContainerState, UnionContainer};
///
/// let container: UnionContainer<i32> = UnionContainer::new();
/// assert_eq!(container.state(), ContainerState::Empty);
/// assert_eq!(ContainerState::default(), ContainerState::Empty);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContainerState {
    /// The container deliberately holds no value.
    #[default]
    Empty,
    /// The container holds a success value.
    Result,
    /// The container holds one or more domain errors.
    Error,
    /// The container holds a captured fault.
    Exception,
}

impl fmt::Display for ContainerState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Result => "result",
            Self::Error => "error",
            Self::Exception => "exception",
        };
        formatter.write_str(name)
    }
}

/// Zero-size marker for a deliberate "no value" outcome.
///
/// `Empty` is the payload of an `Empty`-state container. It represents an
/// intentional absence, as opposed to a container that was never
/// constructed: building a container without a value, error, or fault
/// still yields a determinate `Empty` state carrying this marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Empty;

// =============================================================================
// Payload Carriers
// =============================================================================

/// The success payload of a container, paired with its activity flag.
///
/// Active iff the queried container is in `Result` state.
#[derive(Debug, Clone, Copy)]
pub struct ValuePayload<V> {
    active: bool,
    value: Option<V>,
}

impl<V> ValuePayload<V> {
    pub(crate) const fn engaged(value: V) -> Self {
        Self {
            active: true,
            value: Some(value),
        }
    }

    pub(crate) const fn disengaged() -> Self {
        Self {
            active: false,
            value: None,
        }
    }

    /// Returns `true` if this payload belongs to the container's current state.
    #[inline]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the carried value, if any.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    /// Consumes the payload and returns the carried value, if any.
    #[inline]
    pub fn into_value(self) -> Option<V> {
        self.value
    }
}

/// The error payload of a container, paired with its activity flag.
///
/// Active iff the queried container is in `Error` state. The error slice
/// preserves insertion order.
#[derive(Debug, Clone, Copy)]
pub struct ErrorPayload<'a> {
    active: bool,
    errors: &'a [Box<dyn ContainerError>],
}

impl<'a> ErrorPayload<'a> {
    pub(crate) const fn engaged(errors: &'a [Box<dyn ContainerError>]) -> Self {
        Self {
            active: true,
            errors,
        }
    }

    pub(crate) const fn disengaged() -> Self {
        Self {
            active: false,
            errors: &[],
        }
    }

    /// Returns `true` if this payload belongs to the container's current state.
    #[inline]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the carried errors in insertion order.
    #[inline]
    pub const fn errors(&self) -> &'a [Box<dyn ContainerError>] {
        self.errors
    }
}

/// The fault payload of a container, paired with its activity flag.
///
/// Active iff the queried container is in `Exception` state.
#[derive(Debug, Clone, Copy)]
pub struct ExceptionPayload<'a> {
    active: bool,
    fault: Option<&'a CapturedFault>,
}

impl<'a> ExceptionPayload<'a> {
    pub(crate) const fn engaged(fault: &'a CapturedFault) -> Self {
        Self {
            active: true,
            fault: Some(fault),
        }
    }

    pub(crate) const fn disengaged() -> Self {
        Self {
            active: false,
            fault: None,
        }
    }

    /// Returns `true` if this payload belongs to the container's current state.
    #[inline]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the carried fault, if any.
    #[inline]
    pub const fn fault(&self) -> Option<&'a CapturedFault> {
        self.fault
    }
}

/// The empty payload of a container, paired with its activity flag.
///
/// Active iff the queried container is in `Empty` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyPayload {
    active: bool,
    marker: Empty,
}

impl EmptyPayload {
    pub(crate) const fn new(active: bool) -> Self {
        Self {
            active,
            marker: Empty,
        }
    }

    /// Returns `true` if this payload belongs to the container's current state.
    #[inline]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the "no value" marker.
    #[inline]
    pub const fn marker(&self) -> Empty {
        self.marker
    }
}

// The marker must stay zero-size and the state tag trivially copyable.
static_assertions::assert_eq_size!(Empty, ());
static_assertions::assert_impl_all!(ContainerState: Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_state_is_empty() {
        assert_eq!(ContainerState::default(), ContainerState::Empty);
    }

    #[rstest]
    #[case(ContainerState::Empty, "empty")]
    #[case(ContainerState::Result, "result")]
    #[case(ContainerState::Error, "error")]
    #[case(ContainerState::Exception, "exception")]
    fn state_display_names(#[case] state: ContainerState, #[case] expected: &str) {
        assert_eq!(state.to_string(), expected);
    }

    #[rstest]
    fn engaged_value_payload_carries_value() {
        let payload = ValuePayload::engaged(42);
        assert!(payload.is_active());
        assert_eq!(payload.into_value(), Some(42));
    }

    #[rstest]
    fn disengaged_value_payload_is_inactive() {
        let payload: ValuePayload<i32> = ValuePayload::disengaged();
        assert!(!payload.is_active());
        assert_eq!(payload.value(), None);
    }

    #[rstest]
    fn disengaged_error_payload_has_no_errors() {
        let payload = ErrorPayload::disengaged();
        assert!(!payload.is_active());
        assert!(payload.errors().is_empty());
    }

    #[rstest]
    fn empty_payload_exposes_marker() {
        let payload = EmptyPayload::new(true);
        assert!(payload.is_active());
        assert_eq!(payload.marker(), Empty);
    }
}
