//! Resolution of a type-level position to the element type declared there.
//!
//! Both layouts answer "what is the type at position `I`?" with the same lookup, performed on the
//! inductive list form of their shape. A position past the end has no [`Select`] implementation,
//! so out-of-range lookups are rejected by the compiler.

use crate::{
    layout::Layout,
    tuple::Tuple,
    unary::{Unary, UnaryOf, S, Z},
};

/// Index into a type-level list of element types.
///
/// # Examples
///
/// ```
/// use hetero::select::Select;
/// use hetero::unary::UnaryOf;
/// use static_assertions::assert_type_eq_all;
///
/// type Elements = (u8, (&'static str, (f64, ())));
///
/// assert_type_eq_all!(<Elements as Select<UnaryOf<0>>>::Selected, u8);
/// assert_type_eq_all!(<Elements as Select<UnaryOf<2>>>::Selected, f64);
/// ```
///
/// Selecting past the end does not compile:
///
/// ```compile_fail
/// use hetero::select::Select;
/// use hetero::unary::UnaryOf;
///
/// type Elements = (u8, (f64, ()));
/// let _: Option<<Elements as Select<UnaryOf<2>>>::Selected> = None;
/// ```
pub trait Select<N: Unary>: sealed::Select<N> {
    /// The element type at position `N`.
    type Selected;
}

impl<T, Rest> Select<Z> for (T, Rest) {
    type Selected = T;
}

impl<T, Rest, N> Select<S<N>> for (T, Rest)
where
    N: Unary,
    Rest: Select<N>,
{
    type Selected = Rest::Selected;
}

/// The declared type of the element at type-level position `I` of the layout `L`.
pub type Element<L, I> = <<<L as Layout>::Shape as Tuple>::AsList as Select<I>>::Selected;

/// The declared type of the element at position `N` of the layout `L`.
pub type ElementAt<L, const N: usize> = Element<L, UnaryOf<N>>;

mod sealed {
    use super::*;

    pub trait Select<N> {}
    impl<T, Rest> Select<Z> for (T, Rest) {}
    impl<T, Rest: Select<N>, N> Select<S<N>> for (T, Rest) {}
}
