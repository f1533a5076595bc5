//! # union-containers
//!
//! A functional-style union container for Rust: a tagged outcome wrapper
//! that holds exactly one of a typed success value, a deliberate "no value"
//! marker, an ordered list of domain errors, or a captured fault.
//!
//! ## Overview
//!
//! Instead of raising, a fallible operation returns a [`container::UnionContainer`]
//! whose state the caller inspects before extracting data:
//!
//! - **State model**: the [`container::ContainerState`] tag plus typed
//!   payload carriers, exactly one of which is meaningful at any time.
//! - **Union container**: construction from values, errors, or faults;
//!   ordered error accumulation; pattern-style dispatch via
//!   [`container::UnionContainer::match_state`] and
//!   [`container::UnionContainer::for_state`].
//! - **Call-wrapping adapter**: [`container::method_to_container`] runs an
//!   arbitrary callable under a guarded scope and classifies its outcome
//!   into a container, uniformly for synchronous and asynchronous work.
//!
//! ## Feature Flags
//!
//! - `container`: The state model, union container, and call-wrapping adapter
//! - `control`: Lazily evaluated boolean conditions
//! - `helpers`: Iteration and string utility functions
//! - `async`: The asynchronous call-wrapping adapter
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use union_containers::container::{UnionContainer, method_to_container};
//!
//! let container: UnionContainer<i32> = method_to_container(|| 21 * 2);
//!
//! let description = container.match_state(
//!     |value| format!("result: {value}"),
//!     |_empty| "no value".to_string(),
//!     |errors| format!("{} error(s)", errors.len()),
//!     |fault| format!("fault: {fault}"),
//! );
//! assert_eq!(description, "result: 42");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use union_containers::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "container")]
    pub use crate::container::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "helpers")]
    pub use crate::helpers::*;
}

#[cfg(feature = "container")]
pub mod container;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "helpers")]
pub mod helpers;
