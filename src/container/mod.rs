//! The union container core.
//!
//! Two layers compose this module:
//!
//! - **State model**: [`ContainerState`] plus the typed payload carriers
//!   ([`ValuePayload`], [`ErrorPayload`], [`ExceptionPayload`],
//!   [`EmptyPayload`]); exactly one payload is meaningful per state.
//! - **Union container**: [`UnionContainer`], a generic tagged outcome
//!   wrapper with construction, ordered error accumulation, and
//!   pattern-style dispatch.
//!
//! The [`method_to_container`] adapter bridges arbitrary fallible calls
//! into the container model, capturing panics as [`CapturedFault`]s
//! uniformly for synchronous and asynchronous work.
//!
//! # Examples
//!
//! ```rust
//! use union_containers::container::{ContainerState, MessageError, UnionContainer};
//!
//! // Errors accumulate in order; accumulation forces the `Error` state.
//! let mut container: UnionContainer<u32> = UnionContainer::new();
//! container.add_error(MessageError::new("name must not be blank"));
//! container.add_error(MessageError::new("quantity must be positive"));
//!
//! assert_eq!(container.state(), ContainerState::Error);
//! assert_eq!(container.errors().len(), 2);
//! ```

mod adapter;
mod arity;
mod convert;
mod error;
mod fault;
mod state;
mod union_container;

pub use adapter::method_to_container;
#[cfg(feature = "async")]
pub use adapter::method_to_container_async;
pub use arity::{UnionContainer2, UnionContainer3};
pub use convert::IntoUnionContainer;
pub use error::{AsAny, ContainerError, InvalidStateError, MessageError, StatusError};
pub use fault::CapturedFault;
pub use state::{
    ContainerState, Empty, EmptyPayload, ErrorPayload, ExceptionPayload, ValuePayload,
};
pub use union_container::UnionContainer;
