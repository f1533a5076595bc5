//! The union container itself.
//!
//! [`UnionContainer<T>`] is a tagged outcome wrapper holding exactly one
//! of: a typed success value, the deliberate "no value" marker, an ordered
//! list of domain errors, or a captured fault. The active
//! [`ContainerState`] determines which payload is meaningful; callers
//! dispatch on it with [`UnionContainer::match_state`] or
//! [`UnionContainer::for_state`] before extracting data.
//!
//! # Examples
//!
//! ```rust
//! use union_containers::container::{ContainerState, MessageError, UnionContainer};
//!
//! let mut container = UnionContainer::from_value(200);
//! assert_eq!(container.state(), ContainerState::Result);
//!
//! // A caller that dislikes the value can append domain errors;
//! // accumulation forces the `Error` state.
//! container.add_error(MessageError::new("unexpected status code"));
//! assert_eq!(container.state(), ContainerState::Error);
//! assert!(container.has_errors());
//! ```

use smallvec::SmallVec;

use crate::container::error::{AsAny, ContainerError, InvalidStateError};
use crate::container::fault::CapturedFault;
use crate::container::state::{
    ContainerState, Empty, EmptyPayload, ErrorPayload, ExceptionPayload, ValuePayload,
};

#[cfg(feature = "control")]
use crate::control::Condition;

/// Error-list storage; stays inline for the common one-or-two-error case.
type ErrorList = SmallVec<[Box<dyn ContainerError>; 2]>;

/// A tagged outcome wrapper over a success type `T`.
///
/// For operations producing several values at once, `T` is a tuple; see
/// [`UnionContainer2`](crate::container::UnionContainer2) and
/// [`UnionContainer3`](crate::container::UnionContainer3) for the
/// convenience surface over small arities.
///
/// # State transitions
///
/// - Construction fixes the initial state (`Empty`, `Result`, `Error`, or
///   `Exception`); a container always has a determinate state.
/// - [`add_errors`](Self::add_errors) appends to the error list and forces
///   the `Error` state, except that an `Exception` state is never
///   downgraded: errors still accumulate, but the fault keeps precedence
///   for dispatch.
/// - Nothing else mutates the state from outside the crate.
///
/// # Extraction policy
///
/// Accessing a payload that does not belong to the current state is not a
/// supported path. The primary extraction surface is therefore total:
/// [`value`](Self::value) and [`into_value`](Self::into_value) return
/// `None` outside the `Result` state. The fail-fast reading is explicit
/// ([`try_into_value`](Self::try_into_value) and the panicking
/// [`unwrap_value`](Self::unwrap_value)), and the default-substituting
/// reading is explicitly named ([`value_or_default`](Self::value_or_default)).
#[derive(Debug)]
pub struct UnionContainer<T> {
    state: ContainerState,
    value: Option<T>,
    errors: Option<ErrorList>,
    fault: Option<CapturedFault>,
}

impl<T> UnionContainer<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a container in `Empty` state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use union_containers::container::{ContainerState, UnionContainer};
    ///
    /// let container: UnionContainer<String> = UnionContainer::new();
    /// assert_eq!(container.state(), ContainerState::Empty);
    /// assert!(!container.has_errors());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            state: ContainerState::Empty,
            value: None,
            errors: None,
            fault: None,
        }
    }

    /// Creates a container in `Result` state holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use union_containers::container::{ContainerState, UnionContainer};
    ///
    /// let container = UnionContainer::from_value(42);
    /// assert_eq!(container.state(), ContainerState::Result);
    /// assert_eq!(container.value(), Some(&42));
    /// ```
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self {
            state: ContainerState::Result,
            value: Some(value),
            errors: None,
            fault: None,
        }
    }

    /// Creates a container in `Error` state holding one domain error.
    pub fn from_error<E>(error: E) -> Self
    where
        E: ContainerError + 'static,
    {
        let mut container = Self::new();
        container.add_error(error);
        container
    }

    /// Creates a container from a sequence of domain errors.
    ///
    /// Equivalent to [`add_errors`](Self::add_errors) on a fresh empty
    /// container: with at least one error the state becomes `Error`, with
    /// none it stays `Empty`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use union_containers::container::{ContainerError, ContainerState, MessageError, UnionContainer};
    ///
    /// let errors: Vec<Box<dyn ContainerError>> = vec![
    ///     Box::new(MessageError::new("first")),
    ///     Box::new(MessageError::new("second")),
    /// ];
    /// let container: UnionContainer<i32> = UnionContainer::from_errors(errors);
    /// assert_eq!(container.state(), ContainerState::Error);
    /// assert_eq!(container.errors().len(), 2);
    ///
    /// let none: UnionContainer<i32> = UnionContainer::from_errors(Vec::new());
    /// assert_eq!(none.state(), ContainerState::Empty);
    /// ```
    pub fn from_errors<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn ContainerError>>,
    {
        let mut container = Self::new();
        container.add_errors(errors);
        container
    }

    /// Creates a container in `Exception` state holding the captured fault.
    ///
    /// The error list is left untouched.
    pub fn from_fault(fault: impl Into<CapturedFault>) -> Self {
        Self {
            state: ContainerState::Exception,
            value: None,
            errors: None,
            fault: Some(fault.into()),
        }
    }

    // =========================================================================
    // Error Accumulation
    // =========================================================================

    /// Appends one domain error to the container.
    ///
    /// The error list is created lazily on first use. The state becomes
    /// `Error` unless it already is, or unless the container is in
    /// `Exception` state, which keeps precedence.
    pub fn add_error<E>(&mut self, error: E)
    where
        E: ContainerError + 'static,
    {
        self.add_errors([Box::new(error) as Box<dyn ContainerError>]);
    }

    /// Appends a sequence of domain errors to the container.
    ///
    /// Errors accumulate in insertion order and are never overwritten or
    /// truncated. Appending at least one error forces the `Error` state
    /// (idempotently), except on an `Exception`-state container, whose
    /// fault keeps precedence for dispatch. Appending zero errors changes
    /// nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use union_containers::container::{ContainerError, ContainerState, MessageError, UnionContainer};
    ///
    /// let mut container = UnionContainer::from_value(1);
    /// container.add_errors([
    ///     Box::new(MessageError::new("first")) as _,
    ///     Box::new(MessageError::new("second")) as _,
    /// ]);
    /// assert_eq!(container.state(), ContainerState::Error);
    ///
    /// let messages: Vec<String> =
    ///     container.errors().iter().map(|error| error.message()).collect();
    /// assert_eq!(messages, vec!["first", "second"]);
    /// ```
    pub fn add_errors<I>(&mut self, errors: I)
    where
        I: IntoIterator<Item = Box<dyn ContainerError>>,
    {
        let list = self.errors.get_or_insert_with(ErrorList::new);
        let length_before = list.len();
        list.extend(errors);

        let appended = list.len() > length_before;
        let downgradable = !matches!(
            self.state,
            ContainerState::Error | ContainerState::Exception
        );
        if appended && downgradable {
            self.state = ContainerState::Error;
        }
    }

    /// Appends one domain error if the lazily evaluated condition holds.
    ///
    /// The condition is only evaluated here, never earlier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use union_containers::container::{ContainerState, MessageError, UnionContainer};
    /// use union_containers::control::Condition;
    ///
    /// let status = 503;
    /// let mut container = UnionContainer::from_value(status);
    /// container.add_error_if(
    ///     Condition::new(move || status >= 500),
    ///     MessageError::new("server-side failure"),
    /// );
    /// assert_eq!(container.state(), ContainerState::Error);
    /// ```
    #[cfg(feature = "control")]
    pub fn add_error_if<C, E>(&mut self, condition: C, error: E)
    where
        C: Into<Condition>,
        E: ContainerError + 'static,
    {
        if condition.into().evaluate() {
            self.add_error(error);
        }
    }

    /// Forces the container into the given state.
    ///
    /// Only owning code paths may override the state; the payload fields
    /// are left as they are, so callers of this setter are responsible for
    /// keeping state and payload consistent.
    pub(crate) fn set_state(&mut self, state: ContainerState) {
        self.state = state;
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Returns the current state.
    #[inline]
    pub const fn state(&self) -> ContainerState {
        self.state
    }

    /// Returns `true` if the state is `Empty`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.state, ContainerState::Empty)
    }

    /// Returns `true` if the state is `Result`.
    #[inline]
    pub const fn is_result(&self) -> bool {
        matches!(self.state, ContainerState::Result)
    }

    /// Returns `true` if the state is `Error`.
    #[inline]
    pub const fn is_error(&self) -> bool {
        matches!(self.state, ContainerState::Error)
    }

    /// Returns `true` if the state is `Exception`.
    #[inline]
    pub const fn is_exception(&self) -> bool {
        matches!(self.state, ContainerState::Exception)
    }

    /// Returns `true` if the error list exists and is non-empty.
    ///
    /// Derived from the list alone, never from the state: a container can
    /// carry leftover error entries while in a different state after an
    /// internal override, and those stay observable here.
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }

    /// Returns the accumulated errors in insertion order.
    ///
    /// Empty when no error was ever added; this accessor never fails.
    pub fn errors(&self) -> &[Box<dyn ContainerError>] {
        self.errors.as_deref().unwrap_or(&[])
    }

    /// Returns the accumulated errors of one concrete kind, in their
    /// original relative order.
    ///
    /// Yields nothing when no error of that kind exists; this accessor
    /// never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use union_containers::container::{MessageError, StatusError, UnionContainer};
    ///
    /// let mut container: UnionContainer<()> = UnionContainer::new();
    /// container.add_error(MessageError::new("plain"));
    /// container.add_error(StatusError::new(429, "slow down"));
    ///
    /// let codes: Vec<u16> = container.errors_of::<StatusError>().map(StatusError::code).collect();
    /// assert_eq!(codes, vec![429]);
    /// assert_eq!(container.errors_of::<MessageError>().count(), 1);
    /// ```
    pub fn errors_of<K>(&self) -> impl Iterator<Item = &K>
    where
        K: ContainerError + 'static,
    {
        self.errors()
            .iter()
            .filter_map(|error| (**error).as_any().downcast_ref::<K>())
    }

    /// Returns the captured fault, if the container holds one.
    #[inline]
    pub const fn fault(&self) -> Option<&CapturedFault> {
        self.fault.as_ref()
    }

    // =========================================================================
    // Payload Queries
    // =========================================================================

    /// Returns the success payload carrier; active only in `Result` state.
    pub fn value_payload(&self) -> ValuePayload<&T> {
        match (self.state, self.value.as_ref()) {
            (ContainerState::Result, Some(value)) => ValuePayload::engaged(value),
            _ => ValuePayload::disengaged(),
        }
    }

    /// Returns the error payload carrier; active only in `Error` state.
    pub fn error_payload(&self) -> ErrorPayload<'_> {
        if self.is_error() {
            ErrorPayload::engaged(self.errors())
        } else {
            ErrorPayload::disengaged()
        }
    }

    /// Returns the fault payload carrier; active only in `Exception` state.
    pub fn exception_payload(&self) -> ExceptionPayload<'_> {
        match (self.state, self.fault.as_ref()) {
            (ContainerState::Exception, Some(fault)) => ExceptionPayload::engaged(fault),
            _ => ExceptionPayload::disengaged(),
        }
    }

    /// Returns the empty payload carrier; active only in `Empty` state.
    pub const fn empty_payload(&self) -> EmptyPayload {
        EmptyPayload::new(matches!(self.state, ContainerState::Empty))
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns a reference to the success value while in `Result` state.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self.state {
            ContainerState::Result => self.value.as_ref(),
            _ => None,
        }
    }

    /// Consumes the container and returns the success value while in
    /// `Result` state.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self.state {
            ContainerState::Result => self.value,
            _ => None,
        }
    }

    /// Consumes the container and returns the success value, or the
    /// default value of `T` outside the `Result` state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use union_containers::container::UnionContainer;
    ///
    /// let empty: UnionContainer<i32> = UnionContainer::new();
    /// assert_eq!(empty.value_or_default(), 0);
    /// ```
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.into_value().unwrap_or_default()
    }

    /// Consumes the container and returns the success value, or an
    /// [`InvalidStateError`] naming the state it was actually in.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use union_containers::container::{ContainerState, UnionContainer};
    ///
    /// let empty: UnionContainer<i32> = UnionContainer::new();
    /// let error = empty.try_into_value().unwrap_err();
    /// assert_eq!(error.expected(), ContainerState::Result);
    /// assert_eq!(error.actual(), ContainerState::Empty);
    /// ```
    pub fn try_into_value(self) -> Result<T, InvalidStateError> {
        let actual = self.state;
        self.into_value()
            .ok_or(InvalidStateError::new(ContainerState::Result, actual))
    }

    /// Consumes the container and returns the success value.
    ///
    /// # Panics
    ///
    /// Panics if the state is not `Result`.
    pub fn unwrap_value(self) -> T {
        match self.into_value() {
            Some(value) => value,
            None => panic!(
                "called `UnionContainer::unwrap_value()` on a container whose state is not `Result`"
            ),
        }
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Dispatches to exactly one branch, selected solely by the current
    /// state, and returns that branch's result unchanged.
    ///
    /// All four branches must be supplied; the side-effecting form is the
    /// `R = ()` instantiation. An `Exception`-state container dispatches
    /// to `on_exception` even when errors were appended after the fault
    /// was captured.
    ///
    /// # Panics
    ///
    /// Panics if an internal state override left the container without
    /// the payload its state promises.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use union_containers::container::{MessageError, UnionContainer};
    ///
    /// let container: UnionContainer<i32> = UnionContainer::from_error(MessageError::new("nope"));
    /// let description = container.match_state(
    ///     |value| format!("result: {value}"),
    ///     |_empty| "no value".to_string(),
    ///     |errors| format!("{} error(s)", errors.len()),
    ///     |fault| format!("fault: {fault}"),
    /// );
    /// assert_eq!(description, "1 error(s)");
    /// ```
    pub fn match_state<R>(
        self,
        on_result: impl FnOnce(T) -> R,
        on_empty: impl FnOnce(Empty) -> R,
        on_error: impl FnOnce(Vec<Box<dyn ContainerError>>) -> R,
        on_exception: impl FnOnce(CapturedFault) -> R,
    ) -> R {
        match self.state {
            ContainerState::Empty => on_empty(Empty),
            ContainerState::Result => match self.value {
                Some(value) => on_result(value),
                None => panic!("UnionContainer internal error: Result state without a stored value"),
            },
            ContainerState::Error => {
                on_error(self.errors.map(ErrorList::into_vec).unwrap_or_default())
            }
            ContainerState::Exception => match self.fault {
                Some(fault) => on_exception(fault),
                None => {
                    panic!("UnionContainer internal error: Exception state without a captured fault")
                }
            },
        }
    }

    /// Runs `action` iff the current state equals `state`.
    ///
    /// Side-effecting only; a non-matching state is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use union_containers::container::{ContainerState, UnionContainer};
    ///
    /// let container = UnionContainer::from_value(5);
    /// let mut seen = None;
    /// container.for_state(ContainerState::Result, |c| seen = c.value().copied());
    /// assert_eq!(seen, Some(5));
    /// ```
    pub fn for_state<F>(&self, state: ContainerState, action: F)
    where
        F: FnOnce(&Self),
    {
        if self.state == state {
            action(self);
        }
    }

    /// Runs each arm whose state matches the current state; for every arm
    /// that does not match, runs the default action instead, when one is
    /// given.
    ///
    /// Because every arm is visited, the default action runs once per
    /// non-matching arm and can therefore fire several times in a single
    /// call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cell::Cell;
    ///
    /// use union_containers::container::{ContainerState, UnionContainer};
    ///
    /// let container = UnionContainer::from_value(5);
    /// let misses = Cell::new(0);
    /// let on_miss = |_: &UnionContainer<i32>| misses.set(misses.get() + 1);
    ///
    /// container.for_states(
    ///     Some(&on_miss),
    ///     &[
    ///         (ContainerState::Empty, &|_| unreachable!()),
    ///         (ContainerState::Result, &|c| assert_eq!(c.value(), Some(&5))),
    ///         (ContainerState::Error, &|_| unreachable!()),
    ///     ],
    /// );
    /// // The default ran for each of the two non-matching arms.
    /// assert_eq!(misses.get(), 2);
    /// ```
    pub fn for_states(
        &self,
        default_action: Option<&dyn Fn(&Self)>,
        arms: &[(ContainerState, &dyn Fn(&Self))],
    ) {
        for (state, action) in arms {
            if self.state == *state {
                action(self);
            } else if let Some(default_action) = default_action {
                default_action(self);
            }
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Maps the success value, carrying state, errors, and fault through
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use union_containers::container::UnionContainer;
    ///
    /// let container = UnionContainer::from_value(21).map_value(|x| x * 2);
    /// assert_eq!(container.value(), Some(&42));
    ///
    /// let empty: UnionContainer<i32> = UnionContainer::new();
    /// assert!(empty.map_value(|x| x * 2).is_empty());
    /// ```
    pub fn map_value<U, F>(self, function: F) -> UnionContainer<U>
    where
        F: FnOnce(T) -> U,
    {
        UnionContainer {
            state: self.state,
            value: self.value.map(function),
            errors: self.errors,
            fault: self.fault,
        }
    }
}

impl<T> Default for UnionContainer<T> {
    /// Creates a container in `Empty` state.
    fn default() -> Self {
        Self::new()
    }
}

// Containers cross `await` points inside the asynchronous adapter.
static_assertions::assert_impl_all!(UnionContainer<i32>: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::error::MessageError;
    use rstest::rstest;

    #[rstest]
    fn adding_errors_after_a_fault_keeps_exception_precedence() {
        let mut container: UnionContainer<i32> =
            UnionContainer::from_fault(CapturedFault::from_panic(Box::new("kaput")));
        container.add_error(MessageError::new("late arrival"));

        assert_eq!(container.state(), ContainerState::Exception);
        assert!(container.has_errors());
        assert_eq!(container.errors().len(), 1);
    }

    #[rstest]
    fn appending_zero_errors_changes_nothing() {
        let mut container = UnionContainer::from_value(1);
        container.add_errors(Vec::new());
        assert_eq!(container.state(), ContainerState::Result);
        assert!(!container.has_errors());
    }

    #[rstest]
    fn has_errors_stays_decoupled_from_the_state() {
        let mut container: UnionContainer<i32> =
            UnionContainer::from_error(MessageError::new("leftover"));
        container.set_state(ContainerState::Empty);

        assert_eq!(container.state(), ContainerState::Empty);
        assert!(container.has_errors());
        assert!(!container.error_payload().is_active());
    }

    #[rstest]
    fn payload_activity_follows_the_state() {
        let container = UnionContainer::from_value("payload");
        assert!(container.value_payload().is_active());
        assert!(!container.error_payload().is_active());
        assert!(!container.exception_payload().is_active());
        assert!(!container.empty_payload().is_active());
    }

    #[rstest]
    fn value_extraction_is_state_gated() {
        let mut container = UnionContainer::from_value(9);
        container.add_error(MessageError::new("spoiled"));
        // The stored value is no longer reachable once the state moved on.
        assert_eq!(container.value(), None);
        assert_eq!(container.into_value(), None);
    }
}
