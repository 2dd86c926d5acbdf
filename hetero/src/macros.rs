/// Build a [`Flat`](crate::Flat) tuple from a list of elements.
///
/// # Examples
///
/// ```
/// use hetero::prelude::*;
///
/// let mut external = 4;
/// let tuple = flat![1u8, "two", &mut external];
/// assert_eq!(tuple.size(), 3);
/// assert_eq!(*tuple.get::<1>(), "two");
/// ```
#[macro_export]
macro_rules! flat {
    ($($value:expr),* $(,)?) => {
        $crate::Flat::new(($($value,)*))
    };
}

/// Build a [`Nested`](crate::Nested) tuple from a list of elements.
///
/// # Examples
///
/// ```
/// use hetero::prelude::*;
///
/// let tuple = nested![1u8, 'b'];
/// assert_eq!(tuple.unpack(), (1, 'b'));
///
/// let empty = nested![];
/// assert_eq!(empty.size(), 0);
/// ```
#[macro_export]
macro_rules! nested {
    ($($value:expr),* $(,)?) => {
        $crate::Nested::new(($($value,)*))
    };
}
