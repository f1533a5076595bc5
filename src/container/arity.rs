//! Convenience surface for containers over several result types.
//!
//! A container over multiple result types reuses the single state machine
//! with a tuple payload; this module only adds aliases, constructors that
//! take the individual values, and positional accessors for the common
//! small arities.
//!
//! # Examples
//!
//! ```rust
//! use union_containers::container::{ContainerState, UnionContainer2};
//!
//! let container: UnionContainer2<i32, String> =
//!     UnionContainer2::from_parts(7, "seven".to_string());
//! assert_eq!(container.state(), ContainerState::Result);
//! assert_eq!(container.first(), Some(&7));
//! assert_eq!(container.second().map(String::as_str), Some("seven"));
//! ```

use paste::paste;

use crate::container::union_container::UnionContainer;

macro_rules! union_container_arity {
    ($arity:literal, $(($type_param:ident, $accessor:ident, $index:tt)),+ $(,)?) => {
        paste! {
            #[doc = concat!("A union container holding ", stringify!($arity), " typed result values.")]
            pub type [<UnionContainer $arity>]<$($type_param),+> = UnionContainer<($($type_param,)+)>;

            impl<$($type_param),+> UnionContainer<($($type_param,)+)> {
                #[doc = concat!(
                    "Creates a container in `Result` state from ",
                    stringify!($arity),
                    " individual values."
                )]
                pub fn from_parts($($accessor: $type_param),+) -> Self {
                    Self::from_value(($($accessor,)+))
                }

                $(
                    #[doc = concat!(
                        "Returns the `",
                        stringify!($accessor),
                        "` result value while in `Result` state."
                    )]
                    pub fn $accessor(&self) -> Option<&$type_param> {
                        self.value().map(|values| &values.$index)
                    }
                )+
            }
        }
    };
}

union_container_arity!(2, (T1, first, 0), (T2, second, 1));
union_container_arity!(3, (T1, first, 0), (T2, second, 1), (T3, third, 2));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::error::MessageError;
    use crate::container::state::ContainerState;
    use rstest::rstest;

    #[rstest]
    fn pair_container_exposes_both_components() {
        let container = UnionContainer2::from_parts(1, "one");
        assert_eq!(container.first(), Some(&1));
        assert_eq!(container.second(), Some(&"one"));
    }

    #[rstest]
    fn triple_container_exposes_all_components() {
        let container = UnionContainer3::from_parts(1, 2.5, "three");
        assert_eq!(container.first(), Some(&1));
        assert_eq!(container.second(), Some(&2.5));
        assert_eq!(container.third(), Some(&"three"));
    }

    #[rstest]
    fn accessors_are_state_gated() {
        let mut container = UnionContainer2::from_parts(1, 2);
        container.add_error(MessageError::new("torn down"));
        assert_eq!(container.state(), ContainerState::Error);
        assert_eq!(container.first(), None);
        assert_eq!(container.second(), None);
    }
}
