//! The flat layout: every element is a sibling field of one tuple of position-tagged slots.
//!
//! A `Flat<(A, B, C)>` stores `(Slot<_0, A>, Slot<_1, B>, Slot<_2, C>)`. Because each slot's tag is
//! its position, two elements of the same type are still distinct fields, and the generated
//! [`Field`] table maps each tag straight to its field without any recursion.

use std::{fmt::Debug, hash::Hash};

use crate::{
    layout::{By, Decompose, Destructure, Get, Layout, Mut, Ref, Val},
    nested::{Link, Nested},
    select::Select,
    slot::Slot,
    tuple::{Coerce, Tuple},
    unary::{Unary, Z},
};

/// A native tuple that can be spread over a tuple of position-tagged slots.
pub trait Compose: Tuple {
    /// The slot tuple: `(Slot<_0, T0>, Slot<_1, T1>, ...)`.
    type Slots;

    /// Place each value in its slot.
    fn into_slots(self) -> Self::Slots;

    /// Take each value back out of its slot.
    fn from_slots(slots: Self::Slots) -> Self;
}

/// The accessor for the slot tagged `I` in a tuple of slots.
pub trait Field<I: Unary>: Sized {
    /// The declared element type at `I`.
    type Element;

    /// Borrow the slot tagged `I`.
    fn field(&self) -> &Slot<I, Self::Element>;

    /// Mutably borrow the slot tagged `I`.
    fn field_mut(&mut self) -> &mut Slot<I, Self::Element>;

    /// Move out the slot tagged `I`.
    fn into_field(self) -> Slot<I, Self::Element>;
}

hetero_macro::impl_slots!(16);

/// A heterogeneous tuple whose elements all live at one level.
///
/// # Examples
///
/// ```
/// use hetero::prelude::*;
///
/// let mut d = 2;
/// let e = 4;
/// let mut tuple: Flat<(i32, &i32, &mut i32)> = Flat::new((1, &e, &mut d));
///
/// assert_eq!(**tuple.get::<1>(), 4);
/// **tuple.get_mut::<2>() = 3;
/// assert_eq!(**tuple.get::<2>(), 3);
/// # drop(tuple);
/// # assert_eq!(d, 3);
/// ```
///
/// Reading past the end is rejected when compiling:
///
/// ```compile_fail
/// use hetero::prelude::*;
///
/// let tuple = Flat::new(('a', "b"));
/// let _ = tuple.get::<2>();
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = "T::Slots: Debug"),
    Clone(bound = "T::Slots: Clone"),
    Copy(bound = "T::Slots: Copy"),
    PartialEq(bound = "T::Slots: PartialEq"),
    Eq(bound = "T::Slots: Eq"),
    Hash(bound = "T::Slots: Hash"),
    Default(bound = "T::Slots: Default")
)]
pub struct Flat<T: Compose> {
    slots: T::Slots,
}

impl<T: Compose> Flat<T> {
    /// Build a tuple from its elements.
    pub fn new(values: T) -> Self {
        Flat {
            slots: values.into_slots(),
        }
    }

    /// Build a tuple from values that each convert into the declared element type.
    ///
    /// ```
    /// use hetero::prelude::*;
    ///
    /// let tuple: Flat<(f64, String)> = Flat::from_values((2i32, "two"));
    /// assert_eq!(*tuple.get::<0>(), 2.0);
    /// ```
    pub fn from_values<V: Coerce<T>>(values: V) -> Self {
        Self::new(values.coerce())
    }

    /// Unwrap the tuple into its elements.
    pub fn into_inner(self) -> T {
        T::from_slots(self.slots)
    }
}

impl<T: Compose> From<T> for Flat<T> {
    fn from(values: T) -> Self {
        Self::new(values)
    }
}

impl<T> From<Nested<T>> for Flat<T>
where
    T: Compose,
    T::AsList: Link<Z>,
{
    fn from(nested: Nested<T>) -> Self {
        Self::new(nested.into_inner())
    }
}

impl<T: Compose> Layout for Flat<T> {
    type Shape = T;
}

impl<T, I> Get<I> for Flat<T>
where
    T: Compose,
    I: Unary,
    T::AsList: Select<I>,
    T::Slots: Field<I, Element = <T::AsList as Select<I>>::Selected>,
{
    type Element = <T::AsList as Select<I>>::Selected;

    fn slot(&self) -> &Slot<I, Self::Element> {
        <T::Slots as Field<I>>::field(&self.slots)
    }

    fn slot_mut(&mut self) -> &mut Slot<I, Self::Element> {
        <T::Slots as Field<I>>::field_mut(&mut self.slots)
    }

    fn into_slot(self) -> Slot<I, Self::Element> {
        <T::Slots as Field<I>>::into_field(self.slots)
    }
}

impl<'a, T> Destructure<'a, Val> for Flat<T>
where
    T: Compose + 'a,
{
    type Bindings = T;

    fn destructure(this: <Self as By<'a, Val>>::Type) -> T {
        call_by::to_val::<Self>(this).into_inner()
    }
}

impl<'a, T> Destructure<'a, Ref> for Flat<T>
where
    T: Compose + 'a,
    T::Slots: Decompose<'a, Ref>,
{
    type Bindings = <T::Slots as Decompose<'a, Ref>>::Output;

    fn destructure(this: <Self as By<'a, Ref>>::Type) -> Self::Bindings {
        let this: &'a Self = call_by::to_ref::<Self>(this);
        <T::Slots as Decompose<'a, Ref>>::decompose(call_by::from_ref::<T::Slots>(&this.slots))
    }
}

impl<'a, T> Destructure<'a, Mut> for Flat<T>
where
    T: Compose + 'a,
    T::Slots: Decompose<'a, Mut>,
{
    type Bindings = <T::Slots as Decompose<'a, Mut>>::Output;

    fn destructure(this: <Self as By<'a, Mut>>::Type) -> Self::Bindings {
        let this: &'a mut Self = call_by::to_mut::<Self>(this);
        <T::Slots as Decompose<'a, Mut>>::decompose(call_by::from_mut::<T::Slots>(&mut this.slots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Access;
    use crate::unary::S;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(
        <(u8, u8) as Compose>::Slots,
        (Slot<Z, u8>, Slot<S<Z>, u8>)
    );

    #[test]
    fn equal_types_at_different_positions_stay_apart() {
        let mut tuple = Flat::new((1u8, 2u8, 3u8));
        *tuple.get_mut::<1>() = 20;
        assert_eq!(tuple.into_inner(), (1, 20, 3));
    }

    #[test]
    fn unit_tuple_has_no_elements() {
        let tuple = Flat::new(());
        assert_eq!(tuple.size(), 0);
        let () = tuple.unpack_ref();
    }

    #[test]
    fn set_returns_the_previous_element() {
        let mut tuple = Flat::new(("first".to_owned(), 2));
        assert_eq!(tuple.set::<0>("second".to_owned()), "first");
        assert_eq!(tuple.get::<0>(), "second");
    }

    #[test]
    fn take_moves_an_element_out() {
        let tuple = Flat::new((vec![1, 2], String::from("rest")));
        assert_eq!(tuple.take::<0>(), vec![1, 2]);
    }

    #[test]
    fn debug_shows_elements_in_order() {
        let tuple = Flat::new((1u8, 'x'));
        assert_eq!(
            format!("{:?}", tuple),
            "Flat { slots: (Slot { value: 1 }, Slot { value: 'x' }) }"
        );
    }
}
