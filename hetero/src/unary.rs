//! The unary numbers, represented by zero [`Z`] and successor [`S`].
//!
//! Tuple positions are unary numbers at the type level, so that looking up a position is a matter
//! of trait selection rather than arithmetic. At the API surface positions are written as plain
//! `const` integers and converted with [`UnaryOf`].

/// The number zero.
///
/// # Examples
///
/// ```
/// use hetero::unary::Z;
///
/// let zero: Z = Z;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Z;

/// The successor of `N` (i.e. `N + 1`).
///
/// # Examples
///
/// ```
/// use hetero::unary::{S, Z};
///
/// let one: S<Z> = S(Z);
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct S<N>(pub N);

/// A convenient type synonym for writing out unary types using constants.
pub type UnaryOf<const N: usize> = <Number<N> as ToUnary>::AsUnary;

/// All unary numbers can be converted to their value-level equivalent `usize`.
///
/// # Examples
///
/// ```
/// use hetero::unary::*;
///
/// assert_eq!(<UnaryOf<0>>::VALUE, 0);
/// assert_eq!(<UnaryOf<1>>::VALUE, 1);
/// assert_eq!(<UnaryOf<16>>::VALUE, 16);
/// ```
pub trait Unary: sealed::Unary + Sized + Sync + Send + 'static {
    /// The runtime value of this type-level number, as a `usize`.
    const VALUE: usize;
}

impl Unary for Z {
    const VALUE: usize = 0;
}

impl<N: Unary> Unary for S<N> {
    const VALUE: usize = N::VALUE + 1;
}

/// A trait marking wrapped type-level constants.
pub trait Constant: sealed::Constant {}

/// A wrapper for type-level `usize` values to allow implementing traits on them.
#[allow(missing_debug_implementations)]
pub struct Number<const N: usize>;

impl<const N: usize> Constant for Number<N> {}

/// A trait which allows conversion from a wrapper type over a type-level `usize` to a unary
/// type-level number representation.
///
/// Only numbers up to the largest supported tuple arity have a conversion, so a position written
/// past that bound does not compile:
///
/// ```compile_fail
/// use hetero::unary::*;
///
/// let _ = <UnaryOf<17>>::VALUE;
/// ```
pub trait ToUnary {
    /// The result of conversion.
    type AsUnary: Unary + ToConstant<AsConstant = Self>;
}

/// A trait which allows conversion from a unary type-level representation to a wrapper over a
/// type-level `usize`.
pub trait ToConstant: Unary {
    /// The result of conversion.
    type AsConstant: Constant + ToUnary<AsUnary = Self>;
}

hetero_macro::generate_unary_conversion_impls!(16);

mod sealed {
    use super::*;
    pub trait Unary: 'static {}
    impl Unary for Z {}
    impl<N: Unary> Unary for S<N> {}

    pub trait Constant: 'static {}
    impl<const N: usize> Constant for Number<N> {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_type_eq_all;

    assert_type_eq_all!(UnaryOf<0>, Z);
    assert_type_eq_all!(UnaryOf<3>, S<S<S<Z>>>);
    assert_type_eq_all!(<S<S<Z>> as ToConstant>::AsConstant, Number<2>);

    #[test]
    fn values_count_successors() {
        assert_eq!(Z::VALUE, 0);
        assert_eq!(<S<S<S<Z>>>>::VALUE, 3);
        assert_eq!(<UnaryOf<12>>::VALUE, 12);
    }
}
