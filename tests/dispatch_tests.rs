//! Unit tests for container dispatch.
//!
//! `match_state` must invoke exactly one branch, selected solely by the
//! current state; `for_state` runs its action iff the states match; the
//! multi-arm `for_states` runs the default action once per non-matching
//! arm, which is an observable contract of the combinator.

#![cfg(feature = "container")]

use std::cell::Cell;

use rstest::rstest;
use union_containers::container::{
    CapturedFault, ContainerError, ContainerState, MessageError, UnionContainer,
};

// =============================================================================
// match_state
// =============================================================================

#[rstest]
fn match_state_dispatches_the_result_branch() {
    let container = UnionContainer::from_value(21);
    let outcome = container.match_state(
        |value| value * 2,
        |_empty| -1,
        |_errors| -2,
        |_fault| -3,
    );
    assert_eq!(outcome, 42);
}

#[rstest]
fn match_state_dispatches_the_empty_branch() {
    let container: UnionContainer<i32> = UnionContainer::new();
    let outcome = container.match_state(
        |_value| "result",
        |_empty| "empty",
        |_errors| "error",
        |_fault| "exception",
    );
    assert_eq!(outcome, "empty");
}

#[rstest]
fn match_state_hands_the_error_branch_the_full_list() {
    let mut container: UnionContainer<i32> = UnionContainer::new();
    container.add_error(MessageError::new("first"));
    container.add_error(MessageError::new("second"));

    let messages = container.match_state(
        |_value| Vec::new(),
        |_empty| Vec::new(),
        |errors| errors.iter().map(|error| error.message()).collect(),
        |_fault| Vec::new(),
    );
    assert_eq!(messages, vec!["first", "second"]);
}

#[rstest]
fn match_state_prefers_the_exception_branch_over_late_errors() {
    let mut container: UnionContainer<i32> =
        UnionContainer::from_fault(CapturedFault::from_panic(Box::new("fault")));
    container.add_error(MessageError::new("appended after the fault"));

    let branch = container.match_state(
        |_value| "result",
        |_empty| "empty",
        |_errors| "error",
        |_fault| "exception",
    );
    assert_eq!(branch, "exception");
}

#[rstest]
fn match_state_invokes_exactly_one_branch() {
    let visits = Cell::new(0);
    let container = UnionContainer::from_value(5);
    container.match_state(
        |_value| visits.set(visits.get() + 1),
        |_empty| visits.set(visits.get() + 1),
        |_errors| visits.set(visits.get() + 1),
        |_fault| visits.set(visits.get() + 1),
    );
    assert_eq!(visits.get(), 1);
}

#[rstest]
fn match_state_returns_the_branch_result_unchanged() {
    let container: UnionContainer<i32> = UnionContainer::from_error(MessageError::new("nope"));
    let outcome: Result<i32, String> = container.match_state(
        Ok,
        |_empty| Err("empty".to_string()),
        |errors| Err(format!("{} error(s)", errors.len())),
        |fault| Err(fault.message()),
    );
    assert_eq!(outcome, Err("1 error(s)".to_string()));
}

// =============================================================================
// for_state
// =============================================================================

#[rstest]
fn for_state_runs_the_action_on_a_matching_state() {
    let container = UnionContainer::from_value(7);
    let mut seen = None;
    container.for_state(ContainerState::Result, |c| seen = c.value().copied());
    assert_eq!(seen, Some(7));
}

#[rstest]
#[case(ContainerState::Empty)]
#[case(ContainerState::Error)]
#[case(ContainerState::Exception)]
fn for_state_is_a_no_op_on_a_non_matching_state(#[case] requested: ContainerState) {
    let container = UnionContainer::from_value(7);
    let mut ran = false;
    container.for_state(requested, |_| ran = true);
    assert!(!ran);
}

// =============================================================================
// for_states
// =============================================================================

#[rstest]
fn for_states_runs_the_matching_arm() {
    let container: UnionContainer<i32> = UnionContainer::from_error(MessageError::new("bad"));
    let matched = Cell::new(false);
    let on_error = |c: &UnionContainer<i32>| matched.set(c.has_errors());

    container.for_states(
        None,
        &[
            (ContainerState::Result, &|_| panic!("wrong arm")),
            (ContainerState::Error, &on_error),
        ],
    );
    assert!(matched.get());
}

#[rstest]
fn for_states_without_a_default_skips_non_matching_arms() {
    let container = UnionContainer::from_value(1);
    let visits = Cell::new(0);
    let count = |_: &UnionContainer<i32>| visits.set(visits.get() + 1);

    container.for_states(
        None,
        &[
            (ContainerState::Empty, &count),
            (ContainerState::Error, &count),
        ],
    );
    assert_eq!(visits.get(), 0);
}

#[rstest]
fn for_states_default_runs_per_non_matching_arm() {
    // The default action is invoked once for every arm that does not
    // match, not once per call; three misses mean three invocations.
    let container = UnionContainer::from_value(1);
    let defaults = Cell::new(0);
    let matches = Cell::new(0);
    let on_default = |_: &UnionContainer<i32>| defaults.set(defaults.get() + 1);
    let on_match = |_: &UnionContainer<i32>| matches.set(matches.get() + 1);

    container.for_states(
        Some(&on_default),
        &[
            (ContainerState::Empty, &|_| panic!("wrong arm")),
            (ContainerState::Result, &on_match),
            (ContainerState::Error, &|_| panic!("wrong arm")),
            (ContainerState::Exception, &|_| panic!("wrong arm")),
        ],
    );

    assert_eq!(matches.get(), 1);
    assert_eq!(defaults.get(), 3);
}
