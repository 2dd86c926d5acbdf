//! Conversions back and forth between flat tuples like `(P, Q, R)` and their corresponding
//! inductive structures like `(P, (Q, (R, ())))`.
//!
//! Both tuple layouts name their shape with an ordinary tuple type, but reason about it as an
//! inductive type-level list. The traits here convert between the two equivalent representations,
//! at the type level and at the value level.
//!
//! At present, tuples up to size 16 are supported.

use crate::unary::*;

/// Convert a tuple into its corresponding inductive list structure.
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;

    /// Rearrange the values of this tuple into its inductive list.
    fn into_list(self) -> Self::AsList;

    /// Rearrange the values of an inductive list into the corresponding tuple.
    fn from_list(list: Self::AsList) -> Self;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait List: HasLength + Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;

    /// Rearrange the values of this list into the corresponding tuple.
    fn into_tuple(self) -> Self::AsTuple {
        <Self::AsTuple as Tuple>::from_list(self)
    }
}

/// Take the length of a type-level list as a unary type-level number.
pub trait HasLength {
    /// The length of a type-level list.
    type Length: Unary;
}

impl HasLength for () {
    type Length = Z;
}

impl<T, Ts: HasLength> HasLength for (T, Ts) {
    type Length = S<Ts::Length>;
}

/// Infallibly convert a tuple of values into a tuple of type `T`, component by component.
///
/// This is implemented for every tuple `(V0, V1, ...)` whose components each implement
/// `Into<Ti>`, so a tuple layout can be built from values that are merely convertible to its
/// declared element types.
///
/// # Examples
///
/// ```
/// use hetero::tuple::Coerce;
///
/// let coerced: (f64, String) = (2i32, "two").coerce();
/// assert_eq!(coerced, (2.0, "two".to_owned()));
/// ```
pub trait Coerce<T: Tuple> {
    /// Convert each component into the corresponding component of `T`.
    fn coerce(self) -> T;
}

hetero_macro::impl_tuples!(16);

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(<(u8, u16, u32) as Tuple>::AsList, (u8, (u16, (u32, ()))));
    assert_type_eq_all!(<(u8, (u16, ())) as List>::AsTuple, (u8, u16));
    assert_type_eq_all!(<(u8, (u16, ())) as HasLength>::Length, S<S<Z>>);
    assert_type_eq_all!(<() as Tuple>::AsList, ());

    #[test]
    fn values_survive_the_list_form() {
        let list = (1u8, "two", 3.0f64).into_list();
        assert_eq!(list, (1, ("two", (3.0, ()))));
        assert_eq!(list.into_tuple(), (1, "two", 3.0));
    }

    #[test]
    fn singleton_tuple() {
        assert_eq!((7u8,).into_list(), (7, ()));
        assert_eq!(<(u8,)>::from_list((7, ())), (7,));
    }

    #[test]
    fn coercion_widens_each_component() {
        let coerced: (u64, i64, f64) = (1u8, -2i16, 3.5f32).coerce();
        assert_eq!(coerced, (1, -2, 3.5));
    }
}
