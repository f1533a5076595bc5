//! Control structures for deferred evaluation.
//!
//! This module provides [`Condition`], a lazily evaluated boolean
//! predicate with memoization, used for conditional error-guard
//! expressions around union containers.
//!
//! # Examples
//!
//! ```rust
//! use union_containers::control::Condition;
//!
//! let condition = Condition::new(|| {
//!     println!("Evaluating...");
//!     1 + 1 == 2
//! });
//! // "Evaluating..." is not printed yet
//!
//! assert!(condition.evaluate());
//! // Now "Evaluating..." has been printed exactly once
//! ```

mod condition;

pub use condition::Condition;
