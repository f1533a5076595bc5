//! Iteration and string utility functions.
//!
//! Pure helper functions with no shared state; they sit outside the
//! container state machine:
//!
//! - [`for_each`]: side-effecting iteration over any iterable
//! - [`is_blank`] / [`is_none_or_blank`]: blank-text checks
//! - [`comma_join`]: comma-joins displayable items

use std::fmt;

/// Applies an action to every item of an iterable, in order.
///
/// # Examples
///
/// ```rust
/// use union_containers::helpers::for_each;
///
/// let mut total = 0;
/// for_each([1, 2, 3], |value| total += value);
/// assert_eq!(total, 6);
/// ```
pub fn for_each<I, F>(items: I, mut action: F)
where
    I: IntoIterator,
    F: FnMut(I::Item),
{
    for item in items {
        action(item);
    }
}

/// Returns `true` if the text is empty or consists only of whitespace.
///
/// # Examples
///
/// ```rust
/// use union_containers::helpers::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("   \t\n"));
/// assert!(!is_blank(" manager "));
/// ```
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Returns `true` if the text is absent, empty, or consists only of
/// whitespace.
///
/// # Examples
///
/// ```rust
/// use union_containers::helpers::is_none_or_blank;
///
/// assert!(is_none_or_blank(None));
/// assert!(is_none_or_blank(Some("  ")));
/// assert!(!is_none_or_blank(Some("manager")));
/// ```
pub fn is_none_or_blank(text: Option<&str>) -> bool {
    text.is_none_or(is_blank)
}

/// Joins the items of an iterable with `", "`.
///
/// # Examples
///
/// ```rust
/// use union_containers::helpers::comma_join;
///
/// assert_eq!(comma_join([1, 2, 3]), "1, 2, 3");
/// assert_eq!(comma_join(Vec::<i32>::new()), "");
/// ```
pub fn comma_join<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut output = String::new();
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            output.push_str(", ");
        }
        output.push_str(&item.to_string());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn for_each_visits_items_in_order() {
        let mut seen = Vec::new();
        for_each(["a", "b", "c"], |item| seen.push(item));
        assert_eq!(seen, vec!["a", "b", "c"]);
    }

    #[rstest]
    #[case("", true)]
    #[case("   ", true)]
    #[case("\t\n", true)]
    #[case("x", false)]
    #[case(" x ", false)]
    fn is_blank_cases(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_blank(text), expected);
    }

    #[rstest]
    fn comma_join_of_a_single_item_has_no_separator() {
        assert_eq!(comma_join(["solo"]), "solo");
    }
}
