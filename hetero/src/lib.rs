/*!
Heterogeneous fixed-arity tuples with compile-time indexed access, in two interchangeable
layouts, and a thread-safe shared handle with a lock-guarded reference count.

## Tuples

A tuple's shape is written as an ordinary Rust tuple type, and the layout wraps it:

- [`Flat<T>`] stores every element side by side, in a tuple of position-tagged slots.
- [`Nested<T>`] stores the first element next to a nested tuple holding the rest.

The two are observably identical. Both offer, through the [`Access`](layout::Access) trait:

- `get::<N>()`, `get_mut::<N>()`, `set::<N>(..)` and `take::<N>()`, where `N` is a `const`
  position checked at compile time;
- `size()`, the arity;
- `unpack()`, `unpack_ref()` and `unpack_mut()`, which destructure the tuple into a native tuple
  of bindings in one step.

Each element keeps the binding mode of its declared type: an owned `T`, a read-only `&'a T`, or
a mutable `&'a mut T` whose writes reach the data it refers to.

```
use hetero::prelude::*;

let mut b = 0;
let mut tuple: Nested<(i32, &mut i32, f64)> = Nested::new((1, &mut b, 2.0));

let (x, y, z) = tuple.unpack_mut();
*x = 5;
**y = 6;
*z = 7.0;

assert_eq!(*tuple.get::<0>(), 5);
assert_eq!(**tuple.get::<1>(), 6);
assert_eq!(*tuple.get::<2>(), 7.0);
# drop(tuple);
# assert_eq!(b, 6);
```
*/
#![cfg_attr(
    feature = "shared",
    doc = r#"
## Shared handles

[`Shared<T>`] owns a heap-allocated resource jointly with its clones. The number of live
handles is kept under a per-resource lock, so handles may be cloned and dropped from any number
of threads; the resource is freed exactly once, by whichever handle is dropped last.

```
use hetero::Shared;

let handle = Shared::new(String::from("resource"));
let clone = handle.clone();
assert_eq!(handle.count(), 2);

std::thread::spawn(move || drop(clone)).join().unwrap();
assert_eq!(handle.count(), 1);
```
"#
)]

#![recursion_limit = "256"]
#![allow(clippy::type_complexity)]
#![warn(missing_docs)]
#![warn(missing_copy_implementations, missing_debug_implementations)]
#![warn(unused_qualifications, unused_results)]
#![warn(future_incompatible)]
#![warn(unused)]
// Documentation configuration
#![forbid(broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Generated implementations name this crate as `hetero`, so the name must resolve from inside it.
extern crate self as hetero;

#[macro_use]
extern crate derivative;

pub mod flat;
pub mod layout;
pub mod nested;
pub mod select;
pub mod slot;
pub mod tuple;
pub mod unary;

#[cfg(feature = "shared")]
#[cfg_attr(docsrs, doc(cfg(feature = "shared")))]
pub mod shared;

mod macros;

pub use flat::Flat;
pub use nested::Nested;
#[cfg(feature = "shared")]
pub use shared::{HandleError, Shared};

#[doc(hidden)]
pub use call_by;

/// The prelude module for quickly getting started.
///
/// This module is designed to be imported as `use hetero::prelude::*;`, which brings into scope
/// both layouts, the traits their methods come from, and the constructor macros.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::layout::{Access, Destructure, Get, Layout};
    #[doc(no_inline)]
    pub use crate::{flat, nested, Flat, Nested};
    #[cfg(feature = "shared")]
    #[doc(no_inline)]
    pub use crate::{HandleError, Shared};
    #[doc(no_inline)]
    pub use call_by::{Mut, Ref, Val};
}
