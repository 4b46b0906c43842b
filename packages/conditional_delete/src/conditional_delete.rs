use std::any::type_name;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use tracing::trace;

use crate::{DefaultDelete, Deleter};

/// A deletion strategy that destroys its pointee only if it was told at construction time that
/// the pointee is owned.
///
/// Plugged into a [`UniquePtr`][crate::UniquePtr], this lets a single handle type either own its
/// target (destroying it when the handle goes away) or merely reference a target owned elsewhere
/// (never destroying it). The choice is made once per instance and cannot change afterward.
///
/// The default is to own the pointee, matching the behavior of [`DefaultDelete`].
///
/// # Examples
///
/// ```
/// use conditional_delete::{ConditionalDelete, UniquePtr};
///
/// let owning = UniquePtr::from_box_with(Box::new(42), ConditionalDelete::new());
/// assert!(owning.deleter().owns());
///
/// let borrowing = ConditionalDelete::<u32>::borrowing();
/// assert!(!borrowing.owns());
/// ```
///
/// # Thread safety
///
/// The strategy is a plain flag, so it is both `Send` and `Sync` regardless of `T`. Whether a
/// container using it can cross threads is decided by the container.
pub struct ConditionalDelete<T: ?Sized> {
    owns: bool,

    _target: PhantomData<fn(*mut T)>,
}

impl<T: ?Sized> ConditionalDelete<T> {
    /// Creates a strategy that owns (and will destroy) its pointee.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self::with_owns(true)
    }

    /// Creates a strategy with an explicit ownership flag.
    ///
    /// `true` means the pointee is owned and will be destroyed on deletion. `false` means the
    /// pointee is borrowed and deletion leaves it alone.
    #[must_use]
    #[inline]
    pub const fn with_owns(owns: bool) -> Self {
        Self {
            owns,
            _target: PhantomData,
        }
    }

    /// Shorthand for `with_owns(true)`.
    #[must_use]
    #[inline]
    pub const fn owning() -> Self {
        Self::with_owns(true)
    }

    /// Shorthand for `with_owns(false)`.
    #[must_use]
    #[inline]
    pub const fn borrowing() -> Self {
        Self::with_owns(false)
    }

    /// Whether deletion through this strategy destroys the pointee.
    #[must_use]
    #[inline]
    pub const fn owns(&self) -> bool {
        self.owns
    }
}

impl<T: ?Sized> Deleter<T> for ConditionalDelete<T> {
    unsafe fn delete(&self, ptr: *mut T) {
        if ptr.is_null() {
            trace!(pointee = type_name::<T>(), "null pointer, nothing to delete");
            return;
        }

        if !self.owns {
            trace!(pointee = type_name::<T>(), "pointee is borrowed, leaving it alive");
            return;
        }

        trace!(pointee = type_name::<T>(), "pointee is owned, deleting it");

        // SAFETY: Forwarding safety guarantees from the caller.
        unsafe {
            DefaultDelete.delete(ptr);
        }
    }
}

impl<T: ?Sized> Default for ConditionalDelete<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> From<bool> for ConditionalDelete<T> {
    #[inline]
    fn from(owns: bool) -> Self {
        Self::with_owns(owns)
    }
}

impl<T: ?Sized> Clone for ConditionalDelete<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ConditionalDelete<T> {}

impl<T: ?Sized> PartialEq for ConditionalDelete<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.owns == other.owns
    }
}

impl<T: ?Sized> Eq for ConditionalDelete<T> {}

impl<T: ?Sized> Hash for ConditionalDelete<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.owns.hash(state);
    }
}

impl<T: ?Sized> fmt::Debug for ConditionalDelete<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionalDelete")
            .field("owns", &self.owns)
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::Cell;
    use std::collections::HashSet;
    use std::fmt::Display;
    use std::ptr;
    use std::rc::Rc;

    use static_assertions::assert_impl_all;

    use super::*;

    // The flag is all there is, so the pointee type must not affect auto traits.
    assert_impl_all!(ConditionalDelete<u32>: Send, Sync, Copy, Default);
    assert_impl_all!(ConditionalDelete<Rc<u32>>: Send, Sync, Copy, Default);
    assert_impl_all!(ConditionalDelete<Cell<u32>>: Send, Sync);
    assert_impl_all!(ConditionalDelete<dyn Display>: Send, Sync, Copy, Default);

    struct DropCounter {
        drops: Rc<Cell<usize>>,
    }

    impl DropCounter {
        fn boxed_raw(drops: &Rc<Cell<usize>>) -> *mut Self {
            Box::into_raw(Box::new(Self {
                drops: Rc::clone(drops),
            }))
        }
    }

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.drops.set(self.drops.get().wrapping_add(1));
        }
    }

    #[test]
    fn default_owns() {
        assert!(ConditionalDelete::<u32>::new().owns());
        assert!(ConditionalDelete::<String>::default().owns());
        assert!(ConditionalDelete::<[u8]>::default().owns());
        assert!(ConditionalDelete::<dyn Display>::default().owns());
    }

    #[test]
    fn explicit_flag_is_reported() {
        for owns in [true, false] {
            let deleter = ConditionalDelete::<u32>::with_owns(owns);

            assert_eq!(deleter.owns(), owns);
            assert_eq!(deleter.owns(), owns);
            assert_eq!(ConditionalDelete::<u32>::from(owns).owns(), owns);
        }
    }

    #[test]
    fn named_constructors() {
        assert!(ConditionalDelete::<u32>::owning().owns());
        assert!(!ConditionalDelete::<u32>::borrowing().owns());
        assert_eq!(ConditionalDelete::<u32>::owning(), ConditionalDelete::new());
        assert_ne!(ConditionalDelete::<u32>::owning(), ConditionalDelete::borrowing());
    }

    #[test]
    fn usable_in_const_context() {
        const BORROWING: ConditionalDelete<u32> = ConditionalDelete::borrowing();
        const OWNS: bool = BORROWING.owns();

        assert!(!OWNS);
    }

    #[test]
    fn null_is_never_deleted() {
        for owns in [true, false] {
            let deleter = ConditionalDelete::<DropCounter>::with_owns(owns);

            // SAFETY: Null is always acceptable.
            unsafe {
                deleter.delete(ptr::null_mut());
            }
        }
    }

    #[test]
    fn owning_deletes_exactly_once() {
        let drops = Rc::new(Cell::new(0));
        let raw = DropCounter::boxed_raw(&drops);

        // SAFETY: The pointer came from Box::into_raw() and is not used again.
        unsafe {
            ConditionalDelete::<DropCounter>::owning().delete(raw);
        }

        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn borrowing_leaves_pointee_alive() {
        let drops = Rc::new(Cell::new(0));
        let raw = DropCounter::boxed_raw(&drops);

        // SAFETY: The borrowing strategy does not touch the pointee.
        unsafe {
            ConditionalDelete::<DropCounter>::borrowing().delete(raw);
        }

        assert_eq!(drops.get(), 0);

        // SAFETY: Still alive, since nothing has released it.
        let still_alive = unsafe { &*raw };
        assert!(Rc::ptr_eq(&still_alive.drops, &drops));

        // SAFETY: The pointer came from Box::into_raw() and is not used again.
        drop(unsafe { Box::from_raw(raw) });
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn copies_share_the_flag() {
        let original = ConditionalDelete::<u32>::borrowing();
        let copy = original;

        assert_eq!(original, copy);
        assert!(!copy.owns());
    }

    #[test]
    fn hash_follows_flag() {
        let mut set = HashSet::new();

        set.insert(ConditionalDelete::<u32>::owning());
        set.insert(ConditionalDelete::<u32>::new());
        set.insert(ConditionalDelete::<u32>::borrowing());

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn debug_shows_flag() {
        let rendered = format!("{:?}", ConditionalDelete::<u32>::borrowing());

        assert!(rendered.contains("owns: false"), "{rendered}");
    }
}
