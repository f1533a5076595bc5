//! Lazily evaluated boolean conditions.
//!
//! This module provides the [`Condition`] type, a deferred boolean
//! predicate. The predicate is not run when the condition is built; it
//! runs on the first call to [`Condition::evaluate`] and the outcome is
//! cached for subsequent calls. Conditions back conditional error-guard
//! expressions such as
//! [`UnionContainer::add_error_if`](crate::container::UnionContainer::add_error_if).
//!
//! # Examples
//!
//! ```rust
//! use union_containers::control::Condition;
//!
//! let threshold = 10;
//! let condition = Condition::new(move || threshold > 5);
//! // The predicate has not run yet.
//! assert!(!condition.is_evaluated());
//!
//! assert!(condition.evaluate());
//! assert!(condition.is_evaluated());
//! ```

use std::cell::RefCell;
use std::fmt;

/// The internal state of a [`Condition`].
enum ConditionState {
    /// The predicate has not been evaluated yet.
    Pending(Box<dyn FnOnce() -> bool>),
    /// The predicate has been evaluated to this outcome.
    Evaluated(bool),
    /// The predicate panicked during evaluation.
    Poisoned,
}

/// A lazily evaluated boolean predicate with memoization.
///
/// A `Condition` is built either from a predicate closure
/// ([`Condition::new`]) or from an already-known boolean (`From<bool>`,
/// the explicit form of a literal condition). Evaluation is deferred
/// until [`evaluate`](Self::evaluate) and happens at most once.
///
/// # Thread Safety
///
/// This type is NOT thread-safe; it is meant for single-writer call
/// sites, matching the ownership model of the containers it guards.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use union_containers::control::Condition;
///
/// let calls = Rc::new(Cell::new(0));
/// let calls_inside = Rc::clone(&calls);
/// let condition = Condition::new(move || {
///     calls_inside.set(calls_inside.get() + 1);
///     true
/// });
///
/// assert_eq!(calls.get(), 0); // Not called yet
///
/// assert!(condition.evaluate());
/// assert!(condition.evaluate());
/// assert_eq!(calls.get(), 1); // Still only once - memoized
/// ```
pub struct Condition {
    state: RefCell<ConditionState>,
}

impl Condition {
    /// Creates a condition from a predicate.
    ///
    /// The predicate will not run until [`evaluate`](Self::evaluate) is
    /// invoked.
    pub fn new<F>(predicate: F) -> Self
    where
        F: FnOnce() -> bool + 'static,
    {
        Self {
            state: RefCell::new(ConditionState::Pending(Box::new(predicate))),
        }
    }

    /// Evaluates the condition, running the predicate on first use.
    ///
    /// # Panics
    ///
    /// - If the predicate panics, the condition becomes poisoned and all
    ///   future calls to `evaluate()` panic.
    /// - If the condition is already poisoned from a previous panic.
    pub fn evaluate(&self) -> bool {
        let needs_evaluation = {
            let state = self.state.borrow();
            match &*state {
                ConditionState::Evaluated(_) => false,
                ConditionState::Poisoned => panic!("Condition instance has been poisoned"),
                ConditionState::Pending(_) => true,
            }
        };
        // Borrow is released here

        if needs_evaluation {
            self.run_predicate();
        }

        match &*self.state.borrow() {
            ConditionState::Evaluated(outcome) => *outcome,
            _ => panic!("Condition should be evaluated at this point"),
        }
    }

    /// Runs the predicate and stores the outcome.
    ///
    /// The predicate is taken out of the state, which transitions to
    /// `Poisoned` first; if the predicate panics, the state stays
    /// `Poisoned`.
    fn run_predicate(&self) {
        let mut state = self.state.borrow_mut();

        match &*state {
            ConditionState::Evaluated(_) => return,
            ConditionState::Poisoned => panic!("Condition instance has been poisoned"),
            ConditionState::Pending(_) => {}
        }

        let ConditionState::Pending(predicate) =
            std::mem::replace(&mut *state, ConditionState::Poisoned)
        else {
            unreachable!()
        };

        let outcome = predicate();

        *state = ConditionState::Evaluated(outcome);
    }

    /// Returns whether the predicate has been evaluated.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        matches!(&*self.state.borrow(), ConditionState::Evaluated(_))
    }

    /// Returns whether the condition has been poisoned.
    ///
    /// A condition becomes poisoned if its predicate panics.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), ConditionState::Poisoned)
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Combines two conditions conjunctively, without evaluating either.
    ///
    /// The combined condition short-circuits: the right-hand predicate
    /// does not run when the left-hand one evaluates to `false`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use union_containers::control::Condition;
    ///
    /// let both = Condition::from(true).and(Condition::new(|| 2 > 1));
    /// assert!(both.evaluate());
    /// ```
    pub fn and(self, other: Self) -> Self {
        Self::new(move || self.evaluate() && other.evaluate())
    }

    /// Combines two conditions disjunctively, without evaluating either.
    ///
    /// The combined condition short-circuits: the right-hand predicate
    /// does not run when the left-hand one evaluates to `true`.
    pub fn or(self, other: Self) -> Self {
        Self::new(move || self.evaluate() || other.evaluate())
    }

    /// Negates the condition, without evaluating it.
    pub fn negate(self) -> Self {
        Self::new(move || !self.evaluate())
    }
}

impl From<bool> for Condition {
    /// Creates an already-evaluated condition from a literal boolean.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use union_containers::control::Condition;
    ///
    /// let condition = Condition::from(true);
    /// assert!(condition.is_evaluated());
    /// assert!(condition.evaluate());
    /// ```
    fn from(value: bool) -> Self {
        Self {
            state: RefCell::new(ConditionState::Evaluated(value)),
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            ConditionState::Pending(_) => formatter.debug_tuple("Condition").field(&"<pending>").finish(),
            ConditionState::Evaluated(outcome) => {
                formatter.debug_tuple("Condition").field(outcome).finish()
            }
            ConditionState::Poisoned => {
                formatter.debug_tuple("Condition").field(&"<poisoned>").finish()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    fn evaluation_is_deferred_until_requested() {
        let ran = Rc::new(Cell::new(false));
        let ran_inside = Rc::clone(&ran);
        let condition = Condition::new(move || {
            ran_inside.set(true);
            true
        });

        assert!(!ran.get());
        assert!(condition.evaluate());
        assert!(ran.get());
    }

    #[rstest]
    fn evaluation_is_memoized() {
        let calls = Rc::new(Cell::new(0));
        let calls_inside = Rc::clone(&calls);
        let condition = Condition::new(move || {
            calls_inside.set(calls_inside.get() + 1);
            false
        });

        assert!(!condition.evaluate());
        assert!(!condition.evaluate());
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn literal_conditions_are_already_evaluated() {
        let condition = Condition::from(false);
        assert!(condition.is_evaluated());
        assert!(!condition.evaluate());
    }

    #[rstest]
    fn and_short_circuits_on_false() {
        let calls = Rc::new(Cell::new(0));
        let calls_inside = Rc::clone(&calls);
        let right = Condition::new(move || {
            calls_inside.set(calls_inside.get() + 1);
            true
        });

        let combined = Condition::from(false).and(right);
        assert!(!combined.evaluate());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn or_short_circuits_on_true() {
        let calls = Rc::new(Cell::new(0));
        let calls_inside = Rc::clone(&calls);
        let right = Condition::new(move || {
            calls_inside.set(calls_inside.get() + 1);
            false
        });

        let combined = Condition::from(true).or(right);
        assert!(combined.evaluate());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn negate_inverts_the_outcome() {
        assert!(Condition::from(false).negate().evaluate());
        assert!(!Condition::from(true).negate().evaluate());
    }

    #[rstest]
    fn a_panicking_predicate_poisons_the_condition() {
        let condition = Condition::new(|| panic!("predicate failed"));

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            condition.evaluate()
        }));
        assert!(outcome.is_err());
        assert!(condition.is_poisoned());
    }
}
