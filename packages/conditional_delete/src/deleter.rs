/// A deletion strategy that a [`UniquePtr`][crate::UniquePtr] invokes when it lets go of its
/// pointee.
///
/// The strategy receives the raw pointer and decides what (if anything) to do with it. It is
/// invoked at most once per pointer held by the container: on reset, on clear, or when the
/// container is dropped.
///
/// Implementations must treat a null pointer as a no-op and must not panic on their own account.
///
/// The safe constructors of [`UniquePtr`][crate::UniquePtr] hand the strategy pointers that came
/// from a [`Box<T>`], so an implementation that frees its pointee must free it the way
/// [`Box<T>`] does (e.g. via [`Box::from_raw()`]) and never through another allocator. An
/// implementation may instead leave the pointee alone.
pub trait Deleter<T: ?Sized> {
    /// Disposes of the pointee in whatever way this strategy defines.
    ///
    /// # Safety
    ///
    /// If `ptr` is not null, it must point to a live `T` and either:
    ///
    /// 1. have been obtained from [`Box::into_raw()`] (or an equivalent leak of a box) and not be
    ///    freed by anything else, or
    /// 2. be a pointee owned elsewhere, in which case this deleter must be one that leaves the
    ///    pointee alone (e.g. a borrowing [`ConditionalDelete`][crate::ConditionalDelete]).
    ///
    /// If the deleter destroys the pointee, the caller must not use `ptr` afterward.
    unsafe fn delete(&self, ptr: *mut T);
}

impl<T: ?Sized, D: Deleter<T> + ?Sized> Deleter<T> for &D {
    unsafe fn delete(&self, ptr: *mut T) {
        // SAFETY: Forwarding safety guarantees from the caller.
        unsafe { (**self).delete(ptr) }
    }
}

/// The unconditional deletion strategy: destroys and deallocates a boxed pointee.
///
/// This is what a plain [`Box<T>`] does when dropped and is the default strategy of
/// [`UniquePtr`][crate::UniquePtr].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[expect(clippy::exhaustive_structs, reason = "intentionally an empty struct")]
pub struct DefaultDelete;

impl<T: ?Sized> Deleter<T> for DefaultDelete {
    unsafe fn delete(&self, ptr: *mut T) {
        if ptr.is_null() {
            return;
        }

        // SAFETY: Not null, and the caller guarantees that the pointer came from
        // `Box::into_raw()` and has not been freed yet.
        drop(unsafe { Box::from_raw(ptr) });
    }
}
