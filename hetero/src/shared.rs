//! A thread-safe shared handle to one heap-allocated resource.
//!
//! Every [`Shared<T>`](Shared) pointing at the same resource shares one heap box holding the
//! resource and a count of the handles pointing at it. The count is guarded by a [`Mutex`]: each
//! increment and decrement happens with the lock held, and the handle whose decrement takes the
//! count from one to zero frees the box, exactly once, after releasing the lock.
//!
//! A handle can also be empty, pointing at nothing. Empty handles report a count of zero, and
//! reading through one is an error rather than undefined behavior.
//!
//! ```
//! use hetero::Shared;
//!
//! let first = Shared::new(5);
//! assert_eq!(first.count(), 1);
//!
//! let second = first.clone();
//! let third = second.clone();
//! assert_eq!(third.count(), 3);
//!
//! drop(second);
//! assert_eq!(first.count(), 2);
//! assert_eq!(third.get(), Ok(&5));
//! ```

use std::{
    fmt::{self, Debug},
    marker::PhantomData,
    mem,
    process,
    ptr::NonNull,
    sync::{Mutex, MutexGuard, PoisonError},
};

use thiserror::Error;

/// An error reading through a [`Shared`] handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum HandleError {
    /// The handle is empty.
    #[error("dereferenced an empty shared handle")]
    Empty,
    /// Mutable access was requested, but other handles share the resource.
    #[error("cannot borrow mutably: the resource is shared by {count} handles")]
    Shared {
        /// The number of handles sharing the resource.
        count: usize,
    },
}

/// The heap box behind a set of handles.
struct Inner<T> {
    count: Mutex<usize>,
    resource: T,
}

impl<T> Inner<T> {
    // The critical sections are single integer updates, so a poisoned lock still guards a
    // consistent count.
    fn lock(&self) -> MutexGuard<'_, usize> {
        self.count.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A reference-counted handle to a shared `T`, usable from many threads at once.
///
/// Cloning a handle adds one to the count, and dropping (or [`reset`](Shared::reset)ting) one
/// subtracts one; the resource is dropped when the last handle goes.
pub struct Shared<T> {
    inner: Option<NonNull<Inner<T>>>,
    owns: PhantomData<Inner<T>>,
}

unsafe impl<T: Send + Sync> Send for Shared<T> {}
unsafe impl<T: Send + Sync> Sync for Shared<T> {}

static_assertions::assert_impl_all!(Shared<u32>: Send, Sync);
static_assertions::assert_not_impl_any!(Shared<std::rc::Rc<u32>>: Send, Sync);
static_assertions::assert_not_impl_any!(Shared<std::cell::Cell<u32>>: Send, Sync);

impl<T> Shared<T> {
    /// Move `resource` to the heap and return the first handle to it.
    pub fn new(resource: T) -> Self {
        let inner = NonNull::from(Box::leak(Box::new(Inner {
            count: Mutex::new(1),
            resource,
        })));
        log::trace!("allocated shared box {:p}", inner);
        Shared {
            inner: Some(inner),
            owns: PhantomData,
        }
    }

    /// Take ownership of an already boxed resource.
    pub fn from_box(resource: Box<T>) -> Self {
        Self::new(*resource)
    }

    /// A handle that points at nothing.
    pub const fn empty() -> Self {
        Shared {
            inner: None,
            owns: PhantomData,
        }
    }

    fn inner(&self) -> Option<&Inner<T>> {
        // SAFETY: while this handle holds a count the box stays allocated.
        self.inner.map(|inner| unsafe { &*inner.as_ptr() })
    }

    /// The number of handles sharing the resource, or zero for an empty handle.
    pub fn count(&self) -> usize {
        self.inner().map_or(0, |inner| *inner.lock())
    }

    /// Whether this handle points at nothing.
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Borrow the resource.
    ///
    /// # Errors
    ///
    /// Returns [`HandleError::Empty`] if the handle is empty.
    pub fn get(&self) -> Result<&T, HandleError> {
        self.inner()
            .map(|inner| &inner.resource)
            .ok_or(HandleError::Empty)
    }

    /// Mutably borrow the resource, provided no other handle shares it.
    ///
    /// # Errors
    ///
    /// Returns [`HandleError::Empty`] if the handle is empty, or [`HandleError::Shared`] if other
    /// handles point at the same resource.
    pub fn get_mut(&mut self) -> Result<&mut T, HandleError> {
        let inner = self.inner.ok_or(HandleError::Empty)?;
        // SAFETY: this handle holds a count, so the box is allocated.
        let count = *unsafe { inner.as_ref() }.lock();
        if count != 1 {
            return Err(HandleError::Shared { count });
        }
        // SAFETY: this is the only handle and it is borrowed mutably, so nothing else can reach
        // the resource until the borrow ends. Only the resource is borrowed, never the lock.
        Ok(unsafe { &mut (*inner.as_ptr()).resource })
    }

    /// Whether two handles point at the same resource. Two empty handles are equal.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }

    /// Move this handle's resource out, leaving it empty.
    ///
    /// The count is unchanged: the returned handle carries the count this one held.
    pub fn take(&mut self) -> Self {
        Shared {
            inner: self.inner.take(),
            owns: PhantomData,
        }
    }

    /// Release this handle's share of the resource, leaving it empty.
    ///
    /// Resetting an empty handle does nothing.
    pub fn reset(&mut self) {
        let inner = match self.inner.take() {
            Some(inner) => inner,
            None => return,
        };
        let last = {
            // SAFETY: the count this handle held keeps the box allocated until the decrement.
            let mut count = unsafe { inner.as_ref() }.lock();
            *count -= 1;
            *count == 0
        };
        if last {
            log::trace!("releasing shared box {:p}", inner);
            // SAFETY: the count reached zero under the lock, so no other handle exists, and the
            // guard was dropped above.
            drop(unsafe { Box::from_raw(inner.as_ptr()) });
        }
    }

    /// Recover the resource if this is the only handle to it.
    ///
    /// # Errors
    ///
    /// Returns the handle unchanged if it is empty or shared.
    pub fn try_unwrap(self) -> Result<T, Self> {
        let inner = match self.inner {
            Some(inner) => inner,
            None => return Err(self),
        };
        // SAFETY: this handle holds a count, so the box is allocated.
        if *unsafe { inner.as_ref() }.lock() != 1 {
            return Err(self);
        }
        mem::forget(self);
        // SAFETY: this was the only handle, and it has been forgotten without releasing.
        let Inner { resource, .. } = *unsafe { Box::from_raw(inner.as_ptr()) };
        Ok(resource)
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        if let Some(inner) = self.inner() {
            let mut count = inner.lock();
            *count = match count.checked_add(1) {
                Some(count) => count,
                None => process::abort(),
            };
            log::trace!("shared box {:p} now has {} handles", inner, *count);
        }
        Shared {
            inner: self.inner,
            owns: PhantomData,
        }
    }

    /// Release the current share first, then share `source`'s resource.
    fn clone_from(&mut self, source: &Self) {
        if self.ptr_eq(source) {
            return;
        }
        self.reset();
        *self = source.clone();
    }
}

impl<T> Drop for Shared<T> {
    fn drop(&mut self) {
        self.reset();
    }
}

impl<T> Default for Shared<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<T> for Shared<T> {
    fn from(resource: T) -> Self {
        Self::new(resource)
    }
}

impl<T> From<Box<T>> for Shared<T> {
    fn from(resource: Box<T>) -> Self {
        Self::from_box(resource)
    }
}

impl<T: Debug> Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner() {
            Some(inner) => {
                let count = *inner.lock();
                f.debug_struct("Shared")
                    .field("count", &count)
                    .field("resource", &inner.resource)
                    .finish()
            }
            None => f.write_str("Shared(<empty>)"),
        }
    }
}
