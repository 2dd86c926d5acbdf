//! The storage unit shared by both tuple layouts.
//!
//! A [`Slot<I, T>`](Slot) holds one element of declared type `T` at the type-level position `I`.
//! The position is a phantom tag: it costs nothing at runtime, but two slots with the same element
//! type at different positions are different types, so a layout can never confuse them.
//!
//! The binding mode of a slot is its declared type:
//!
//! - an owned value is declared as `T`;
//! - a read-only reference to data owned elsewhere is declared as `&'a T`;
//! - a mutable reference to data owned elsewhere is declared as `&'a mut T`, and writes through
//!   it reach the original;
//! - a transferable value is declared as `T`, moved in on construction and moved out again with
//!   [`into_inner`](Slot::into_inner).
//!
//! Reference slots never own their referent. The lifetime `'a` is part of the slot's type, so the
//! referent is statically required to outlive the tuple.

use std::{fmt::Debug, hash::Hash, marker::PhantomData, mem};

use crate::unary::Unary;

/// One element of declared type `T` stored at position `I`.
#[repr(transparent)]
#[derive(Derivative)]
#[derivative(
    Debug(bound = "T: Debug"),
    Clone(bound = "T: Clone"),
    Copy(bound = "T: Copy"),
    PartialEq(bound = "T: PartialEq"),
    Eq(bound = "T: Eq"),
    Hash(bound = "T: Hash"),
    Default(bound = "T: Default")
)]
pub struct Slot<I, T> {
    value: T,
    #[derivative(Debug = "ignore")]
    position: PhantomData<I>,
}

impl<I, T> Slot<I, T> {
    /// Store `value` in a new slot.
    pub const fn new(value: T) -> Self {
        Slot {
            value,
            position: PhantomData,
        }
    }

    /// Borrow the element.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Mutably borrow the element.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Store a new element, returning the old one.
    pub fn replace(&mut self, value: T) -> T {
        mem::replace(&mut self.value, value)
    }

    /// Move the element out of the slot.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<I: Unary, T> Slot<I, T> {
    /// The position of this slot within its tuple.
    pub const POSITION: usize = I::VALUE;

    /// The position of this slot within its tuple.
    pub fn position(&self) -> usize {
        Self::POSITION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unary::{S, Z};

    #[test]
    fn position_comes_from_the_tag() {
        let slot: Slot<S<S<Z>>, &str> = Slot::new("third");
        assert_eq!(slot.position(), 2);
        assert_eq!(Slot::<Z, ()>::POSITION, 0);
    }

    #[test]
    fn replace_returns_the_old_element() {
        let mut slot: Slot<Z, String> = Slot::new("old".to_owned());
        assert_eq!(slot.replace("new".to_owned()), "old");
        assert_eq!(slot.get(), "new");
    }

    #[test]
    fn mutable_reference_slot_writes_through() {
        let mut external = 1;
        {
            let mut slot: Slot<Z, &mut i32> = Slot::new(&mut external);
            **slot.get_mut() = 5;
            assert_eq!(**slot.get(), 5);
        }
        assert_eq!(external, 5);
    }

    #[test]
    fn debug_hides_the_tag() {
        let slot: Slot<S<Z>, u8> = Slot::new(3);
        assert_eq!(format!("{:?}", slot), "Slot { value: 3 }");
    }
}
