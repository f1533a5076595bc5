//! Call-wrapping adapters.
//!
//! [`method_to_container`] bridges arbitrary fallible work into the
//! container model: the callable runs under a guarded scope, its outcome
//! is classified through [`IntoUnionContainer`], and a panic raised
//! anywhere during the invocation is captured as exactly one fault. The
//! fault is never rethrown and never logged; downstream code decides what
//! to do with it via dispatch.
//!
//! The asynchronous form [`method_to_container_async`] extends the guard
//! across the awaited completion of the produced future, so synchronous
//! and suspendable callables normalize to the same container contract.
//!
//! # Examples
//!
//! ```rust
//! use union_containers::container::{ContainerState, UnionContainer, method_to_container};
//!
//! fn divide(numerator: i32, denominator: i32) -> i32 {
//!     numerator / denominator
//! }
//!
//! let fine: UnionContainer<i32> = method_to_container(|| divide(10, 2));
//! assert_eq!(fine.state(), ContainerState::Result);
//!
//! let faulted: UnionContainer<i32> = method_to_container(|| divide(1, 0));
//! assert_eq!(faulted.state(), ContainerState::Exception);
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::container::convert::IntoUnionContainer;
use crate::container::fault::CapturedFault;
use crate::container::union_container::UnionContainer;

#[cfg(feature = "async")]
use std::future::Future;

/// Runs a callable under a guarded scope and classifies its outcome into
/// a container.
///
/// The callable may return a plain value (wrapped as `Result` state), an
/// `Option` or `Result` (classified per [`IntoUnionContainer`]), or an
/// already-constructed container (propagated unchanged for composition
/// across calls). A panic during the invocation is captured as a single
/// [`CapturedFault`] in `Exception` state.
///
/// # Examples
///
/// ```rust
/// use union_containers::container::{ContainerState, UnionContainer, method_to_container};
///
/// // Composition: an inner container's state passes through unchanged.
/// let inner: UnionContainer<i32> = UnionContainer::new();
/// let outer: UnionContainer<i32> = method_to_container(move || inner);
/// assert_eq!(outer.state(), ContainerState::Empty);
/// ```
pub fn method_to_container<T, R, F>(callable: F) -> UnionContainer<T>
where
    F: FnOnce() -> R,
    R: IntoUnionContainer<T>,
{
    match catch_unwind(AssertUnwindSafe(callable)) {
        Ok(outcome) => outcome.into_union_container(),
        Err(payload) => UnionContainer::from_fault(CapturedFault::from_panic(payload)),
    }
}

/// Runs a suspendable callable under a guarded scope and classifies its
/// outcome into a container.
///
/// The guard covers the whole invocation: a panic while producing the
/// future and a panic while awaiting it are both captured as one fault.
/// Cancellation of the wrapped work, where the underlying operation
/// supports it, surfaces through the same classification as any other
/// outcome; the adapter adds no timeout policy of its own. For the same
/// completed outcome this adapter agrees with [`method_to_container`].
///
/// # Examples
///
/// ```rust
/// use union_containers::container::{ContainerState, UnionContainer, method_to_container_async};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let container: UnionContainer<i32> = method_to_container_async(|| async { 21 * 2 }).await;
/// assert_eq!(container.state(), ContainerState::Result);
/// assert_eq!(container.value(), Some(&42));
/// # }
/// ```
#[cfg(feature = "async")]
pub async fn method_to_container_async<T, R, F, Fut>(callable: F) -> UnionContainer<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = R>,
    R: IntoUnionContainer<T>,
{
    use futures::FutureExt;

    let future = match catch_unwind(AssertUnwindSafe(callable)) {
        Ok(future) => future,
        Err(payload) => return UnionContainer::from_fault(CapturedFault::from_panic(payload)),
    };
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(outcome) => outcome.into_union_container(),
        Err(payload) => UnionContainer::from_fault(CapturedFault::from_panic(payload)),
    }
}
