//! Outcome classification for the call-wrapping adapter.
//!
//! [`IntoUnionContainer`] maps the return value of a wrapped callable onto
//! a container state:
//!
//! - a plain value becomes a `Result`-state container
//! - an already-constructed container passes through unchanged
//! - `Option` renders the deliberate "no value" outcome as `Empty`
//! - `Result` renders a typed failure as a captured fault

use crate::container::fault::CapturedFault;
use crate::container::union_container::UnionContainer;

/// Conversion of a callable outcome into a union container over `T`.
pub trait IntoUnionContainer<T> {
    /// Classifies `self` into a container state and payload.
    fn into_union_container(self) -> UnionContainer<T>;
}

/// A plain value wraps as a `Result`-state container.
impl<T> IntoUnionContainer<T> for T {
    #[inline]
    fn into_union_container(self) -> UnionContainer<T> {
        UnionContainer::from_value(self)
    }
}

/// An already-constructed container propagates its state and payload
/// unchanged; it is not re-wrapped.
impl<T> IntoUnionContainer<T> for UnionContainer<T> {
    #[inline]
    fn into_union_container(self) -> UnionContainer<T> {
        self
    }
}

/// `Some` wraps as `Result`, `None` as a deliberate `Empty` outcome.
impl<T> IntoUnionContainer<T> for Option<T> {
    #[inline]
    fn into_union_container(self) -> UnionContainer<T> {
        match self {
            Some(value) => UnionContainer::from_value(value),
            None => UnionContainer::new(),
        }
    }
}

/// `Ok` wraps as `Result`, `Err` as a captured fault in `Exception` state.
impl<T, E> IntoUnionContainer<T> for Result<T, E>
where
    E: Into<CapturedFault>,
{
    #[inline]
    fn into_union_container(self) -> UnionContainer<T> {
        match self {
            Ok(value) => UnionContainer::from_value(value),
            Err(error) => UnionContainer::from_fault(error),
        }
    }
}
