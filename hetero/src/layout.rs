//! The surface shared by both tuple layouts.
//!
//! A layout is anything implementing [`Layout`]: it names its shape with a native tuple type and
//! from that gets its arity. [`Get<I>`](Get) gives access to the slot at each position, and
//! [`Destructure`] unpacks the whole tuple at once under one of the three calling conventions
//! [`Val`], [`Ref`] and [`Mut`]. The [`Access`] extension trait wraps all of these into the
//! methods most code uses, indexed by plain `const` positions:
//!
//! ```
//! use hetero::prelude::*;
//!
//! let mut external = 1;
//! let mut tuple = Flat::new((1, &mut external, 2.0));
//!
//! assert_eq!(tuple.size(), 3);
//! assert_eq!(*tuple.get::<0>(), 1);
//! assert_eq!(**tuple.get::<1>(), 1);
//! assert_eq!(*tuple.get::<2>(), 2.0);
//!
//! *tuple.get_mut::<2>() = 3.0;
//! **tuple.get_mut::<1>() = 2;
//!
//! let (x, y, z) = tuple.unpack_ref();
//! assert_eq!((*x, **y, *z), (1, 2, 3.0));
//! # drop(tuple);
//! # assert_eq!(external, 2);
//! ```

#[doc(no_inline)]
pub use call_by::{By, Convention, Mut, Ref, Val};

use crate::{
    slot::Slot,
    tuple::{HasLength, Tuple},
    unary::{Number, ToUnary, Unary, UnaryOf},
};

/// A fixed-arity heterogeneous tuple, whatever its internal layout.
pub trait Layout: Sized {
    /// The native tuple naming this layout's element types, in order.
    type Shape: Tuple;

    /// The number of elements.
    const ARITY: usize = <<<Self::Shape as Tuple>::AsList as HasLength>::Length as Unary>::VALUE;
}

/// Access to the slot at type-level position `I`.
///
/// Implementations exist only for positions inside the tuple, with `Element` equal to the type
/// the shared [`Select`](crate::select::Select) lookup resolves for `I`.
pub trait Get<I: Unary>: Layout {
    /// The declared type of the element at `I`, binding mode included.
    type Element;

    /// Borrow the slot at `I`.
    fn slot(&self) -> &Slot<I, Self::Element>;

    /// Mutably borrow the slot at `I`.
    fn slot_mut(&mut self) -> &mut Slot<I, Self::Element>;

    /// Move the slot at `I` out of the tuple, dropping the others.
    fn into_slot(self) -> Slot<I, Self::Element>;
}

/// Unpack a tuple into a native tuple of bindings, one per element, under the calling convention
/// `C`.
///
/// - By [`Val`], the bindings are the elements themselves.
/// - By [`Ref`], each binding is `&'a Ti`.
/// - By [`Mut`], each binding is `&'a mut Ti`, and writing through it writes into the tuple.
///
/// In every case a `&mut` element still refers to its original referent, so writes through it
/// reach data outside the tuple.
pub trait Destructure<'a, C: Convention>: Layout + By<'a, C> {
    /// A native tuple with one binding per element.
    type Bindings;

    /// Unpack `this`.
    fn destructure(this: <Self as By<'a, C>>::Type) -> Self::Bindings;
}

/// Unpack a layout's storage into an inductive list or native tuple of borrowed elements.
///
/// This is the storage-level half of [`Destructure`]: the flat layout implements it on its tuple
/// of slots, the nested layout on its chain of nodes.
pub trait Decompose<'a, C: Convention>: By<'a, C> {
    /// The borrowed elements.
    type Output;

    /// Borrow every element of `this`.
    fn decompose(this: <Self as By<'a, C>>::Type) -> Self::Output;
}

/// Indexed access and destructuring for every [`Layout`], with positions written as `const`
/// integers.
///
/// An index outside the tuple is a compile-time error:
///
/// ```compile_fail
/// use hetero::prelude::*;
///
/// let tuple = Nested::new((1u8, 2u16));
/// let _ = tuple.get::<2>();
/// ```
///
/// And so is reading an element as the wrong type:
///
/// ```compile_fail
/// use hetero::prelude::*;
///
/// let tuple = Flat::new((1u8, 2u16));
/// let _: &u16 = tuple.get::<0>();
/// ```
pub trait Access: Layout {
    /// The number of elements.
    fn size(&self) -> usize {
        Self::ARITY
    }

    /// Borrow the element at position `N`.
    fn get<const N: usize>(&self) -> &<Self as Get<UnaryOf<N>>>::Element
    where
        Number<N>: ToUnary,
        Self: Get<UnaryOf<N>>,
    {
        <Self as Get<UnaryOf<N>>>::slot(self).get()
    }

    /// Mutably borrow the element at position `N`.
    fn get_mut<const N: usize>(&mut self) -> &mut <Self as Get<UnaryOf<N>>>::Element
    where
        Number<N>: ToUnary,
        Self: Get<UnaryOf<N>>,
    {
        <Self as Get<UnaryOf<N>>>::slot_mut(self).get_mut()
    }

    /// Replace the element at position `N`, returning the old element.
    fn set<const N: usize>(
        &mut self,
        value: <Self as Get<UnaryOf<N>>>::Element,
    ) -> <Self as Get<UnaryOf<N>>>::Element
    where
        Number<N>: ToUnary,
        Self: Get<UnaryOf<N>>,
    {
        <Self as Get<UnaryOf<N>>>::slot_mut(self).replace(value)
    }

    /// Move the element at position `N` out of the tuple, dropping the others.
    fn take<const N: usize>(self) -> <Self as Get<UnaryOf<N>>>::Element
    where
        Number<N>: ToUnary,
        Self: Get<UnaryOf<N>>,
    {
        <Self as Get<UnaryOf<N>>>::into_slot(self).into_inner()
    }

    /// Unpack the tuple into its elements.
    fn unpack<'a>(self) -> <Self as Destructure<'a, Val>>::Bindings
    where
        Self: Destructure<'a, Val>,
    {
        Self::destructure(call_by::from_val::<Self>(self))
    }

    /// Unpack the tuple into shared references to its elements.
    fn unpack_ref<'a>(&'a self) -> <Self as Destructure<'a, Ref>>::Bindings
    where
        Self: Destructure<'a, Ref>,
    {
        Self::destructure(call_by::from_ref::<Self>(self))
    }

    /// Unpack the tuple into mutable references to its elements.
    fn unpack_mut<'a>(&'a mut self) -> <Self as Destructure<'a, Mut>>::Bindings
    where
        Self: Destructure<'a, Mut>,
    {
        Self::destructure(call_by::from_mut::<Self>(self))
    }
}

impl<L: Layout> Access for L {}
