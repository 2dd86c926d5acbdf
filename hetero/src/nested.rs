//! The nested layout: each element is the head of a node whose tail holds the rest.
//!
//! A `Nested<(A, B, C)>` stores `Node<Slot<_0, A>, Node<Slot<_1, B>, Node<Slot<_2, C>, Nil>>>`.
//! Reading position `N` peels `N` nodes off the front with [`Peel`], one trait selection per
//! level; nothing is decided at runtime.

use std::{fmt::Debug, hash::Hash};

use crate::{
    flat::{Compose, Flat},
    layout::{By, Decompose, Destructure, Get, Layout, Mut, Ref, Val},
    select::Select,
    slot::Slot,
    tuple::{Coerce, List, Tuple},
    unary::{Unary, S, Z},
};

/// The end of a chain of nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nil;

/// One level of a chain: an element and the rest of the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Node<H, T> {
    head: H,
    tail: T,
}

impl<H, T> Node<H, T> {
    /// The element at this level.
    pub fn head(&self) -> &H {
        &self.head
    }

    /// The rest of the chain.
    pub fn tail(&self) -> &T {
        &self.tail
    }
}

/// Build the chain for an inductive list whose first element sits at position `P`.
pub trait Link<P: Unary> {
    /// The chain of nodes.
    type Chain;

    /// Move the list's values into a chain.
    fn link(self) -> Self::Chain;

    /// Move a chain's values back into a list.
    fn unlink(chain: Self::Chain) -> Self;
}

impl<P: Unary> Link<P> for () {
    type Chain = Nil;

    fn link(self) -> Nil {
        Nil
    }

    fn unlink(_: Nil) -> Self {}
}

impl<P: Unary, H, R: Link<S<P>>> Link<P> for (H, R) {
    type Chain = Node<Slot<P, H>, R::Chain>;

    fn link(self) -> Self::Chain {
        let (head, rest) = self;
        Node {
            head: Slot::new(head),
            tail: rest.link(),
        }
    }

    fn unlink(chain: Self::Chain) -> Self {
        (chain.head.into_inner(), R::unlink(chain.tail))
    }
}

/// The chain storing a tuple of shape `T`.
pub type Chain<T> = <<T as Tuple>::AsList as Link<Z>>::Chain;

/// Descend `N` levels into a chain.
pub trait Peel<N: Unary> {
    /// The head found `N` levels down.
    type Target;

    /// Borrow the head `N` levels down.
    fn peel(&self) -> &Self::Target;

    /// Mutably borrow the head `N` levels down.
    fn peel_mut(&mut self) -> &mut Self::Target;

    /// Move out the head `N` levels down, dropping the rest.
    fn into_peeled(self) -> Self::Target;
}

impl<H, T> Peel<Z> for Node<H, T> {
    type Target = H;

    fn peel(&self) -> &H {
        &self.head
    }

    fn peel_mut(&mut self) -> &mut H {
        &mut self.head
    }

    fn into_peeled(self) -> H {
        self.head
    }
}

impl<H, T: Peel<N>, N: Unary> Peel<S<N>> for Node<H, T> {
    type Target = T::Target;

    fn peel(&self) -> &T::Target {
        self.tail.peel()
    }

    fn peel_mut(&mut self) -> &mut T::Target {
        self.tail.peel_mut()
    }

    fn into_peeled(self) -> T::Target {
        self.tail.into_peeled()
    }
}

impl<'a> Decompose<'a, Ref> for Nil {
    type Output = ();

    fn decompose(_: <Self as By<'a, Ref>>::Type) -> Self::Output {}
}

impl<'a> Decompose<'a, Mut> for Nil {
    type Output = ();

    fn decompose(_: <Self as By<'a, Mut>>::Type) -> Self::Output {}
}

impl<'a, I, H, T> Decompose<'a, Ref> for Node<Slot<I, H>, T>
where
    I: Unary,
    H: 'a,
    T: Decompose<'a, Ref> + 'a,
{
    type Output = (&'a H, T::Output);

    fn decompose(this: <Self as By<'a, Ref>>::Type) -> Self::Output {
        let this: &'a Self = call_by::to_ref::<Self>(this);
        (
            this.head.get(),
            T::decompose(call_by::from_ref::<T>(&this.tail)),
        )
    }
}

impl<'a, I, H, T> Decompose<'a, Mut> for Node<Slot<I, H>, T>
where
    I: Unary,
    H: 'a,
    T: Decompose<'a, Mut> + 'a,
{
    type Output = (&'a mut H, T::Output);

    fn decompose(this: <Self as By<'a, Mut>>::Type) -> Self::Output {
        let Node { head, tail } = call_by::to_mut::<Self>(this);
        (head.get_mut(), T::decompose(call_by::from_mut::<T>(tail)))
    }
}

/// A heterogeneous tuple stored as a chain of nodes, one element per level.
///
/// Observably the same as [`Flat`]: every position holds the same element, with the same type,
/// under every kind of access.
///
/// # Examples
///
/// ```
/// use hetero::prelude::*;
///
/// let mut b = 1;
/// let mut tuple = Nested::new((0u8, &mut b, "c"));
///
/// let (x, y, z) = tuple.unpack_mut();
/// *x = 10;
/// **y = 11;
/// *z = "z";
///
/// assert_eq!(*tuple.get::<0>(), 10);
/// assert_eq!(*tuple.get::<2>(), "z");
/// # drop(tuple);
/// # assert_eq!(b, 11);
/// ```
#[derive(Derivative)]
#[derivative(
    Debug(bound = "Chain<T>: Debug"),
    Clone(bound = "Chain<T>: Clone"),
    Copy(bound = "Chain<T>: Copy"),
    PartialEq(bound = "Chain<T>: PartialEq"),
    Eq(bound = "Chain<T>: Eq"),
    Hash(bound = "Chain<T>: Hash"),
    Default(bound = "Chain<T>: Default")
)]
pub struct Nested<T: Tuple>
where
    T::AsList: Link<Z>,
{
    chain: Chain<T>,
}

impl<T: Tuple> Nested<T>
where
    T::AsList: Link<Z>,
{
    /// Build a tuple from its elements.
    pub fn new(values: T) -> Self {
        Nested {
            chain: values.into_list().link(),
        }
    }

    /// Build a tuple from values that each convert into the declared element type.
    pub fn from_values<V: Coerce<T>>(values: V) -> Self {
        Self::new(values.coerce())
    }

    /// Unwrap the tuple into its elements.
    pub fn into_inner(self) -> T {
        T::from_list(<T::AsList as Link<Z>>::unlink(self.chain))
    }

    /// Borrow the chain of nodes.
    pub fn chain(&self) -> &Chain<T> {
        &self.chain
    }
}

impl<T: Tuple> From<T> for Nested<T>
where
    T::AsList: Link<Z>,
{
    fn from(values: T) -> Self {
        Self::new(values)
    }
}

impl<T> From<Flat<T>> for Nested<T>
where
    T: Compose,
    T::AsList: Link<Z>,
{
    fn from(flat: Flat<T>) -> Self {
        Self::new(flat.into_inner())
    }
}

impl<T: Tuple> Layout for Nested<T>
where
    T::AsList: Link<Z>,
{
    type Shape = T;
}

impl<T, I> Get<I> for Nested<T>
where
    T: Tuple,
    I: Unary,
    T::AsList: Link<Z> + Select<I>,
    Chain<T>: Peel<I, Target = Slot<I, <T::AsList as Select<I>>::Selected>>,
{
    type Element = <T::AsList as Select<I>>::Selected;

    fn slot(&self) -> &Slot<I, Self::Element> {
        <Chain<T> as Peel<I>>::peel(&self.chain)
    }

    fn slot_mut(&mut self) -> &mut Slot<I, Self::Element> {
        <Chain<T> as Peel<I>>::peel_mut(&mut self.chain)
    }

    fn into_slot(self) -> Slot<I, Self::Element> {
        <Chain<T> as Peel<I>>::into_peeled(self.chain)
    }
}

impl<'a, T> Destructure<'a, Val> for Nested<T>
where
    T: Tuple + 'a,
    T::AsList: Link<Z>,
{
    type Bindings = T;

    fn destructure(this: <Self as By<'a, Val>>::Type) -> T {
        call_by::to_val::<Self>(this).into_inner()
    }
}

impl<'a, T> Destructure<'a, Ref> for Nested<T>
where
    T: Tuple + 'a,
    T::AsList: Link<Z>,
    Chain<T>: Decompose<'a, Ref>,
    <Chain<T> as Decompose<'a, Ref>>::Output: List,
{
    type Bindings = <<Chain<T> as Decompose<'a, Ref>>::Output as List>::AsTuple;

    fn destructure(this: <Self as By<'a, Ref>>::Type) -> Self::Bindings {
        let this: &'a Self = call_by::to_ref::<Self>(this);
        <Chain<T> as Decompose<'a, Ref>>::decompose(call_by::from_ref::<Chain<T>>(&this.chain))
            .into_tuple()
    }
}

impl<'a, T> Destructure<'a, Mut> for Nested<T>
where
    T: Tuple + 'a,
    T::AsList: Link<Z>,
    Chain<T>: Decompose<'a, Mut>,
    <Chain<T> as Decompose<'a, Mut>>::Output: List,
{
    type Bindings = <<Chain<T> as Decompose<'a, Mut>>::Output as List>::AsTuple;

    fn destructure(this: <Self as By<'a, Mut>>::Type) -> Self::Bindings {
        let this: &'a mut Self = call_by::to_mut::<Self>(this);
        <Chain<T> as Decompose<'a, Mut>>::decompose(call_by::from_mut::<Chain<T>>(&mut this.chain))
            .into_tuple()
    }
}
