use std::ptr::NonNull;

use crate::{ConditionalDelete, Error, Result, UniquePtr};

/// A handle that either owns its pointee or borrows it from an owner elsewhere, as decided when
/// the handle was created.
///
/// An owning handle destroys its pointee when dropped, exactly like a [`Box<T>`]. A borrowing
/// handle never destroys its pointee; the owner remains responsible for it and must outlive the
/// handle.
///
/// # Examples
///
/// ```
/// use conditional_delete::MaybeOwning;
///
/// let owner = MaybeOwning::owning(Box::new(String::from("shared")));
/// assert!(owner.owns());
///
/// // SAFETY: `owner` outlives `view` and is not mutated while `view` is in use.
/// let view = unsafe { owner.to_borrowing() };
/// assert!(!view.owns());
/// assert_eq!(view.get().map(String::as_str), Some("shared"));
///
/// // Dropping the borrowing handle leaves the value alone.
/// drop(view);
/// assert_eq!(owner.get().map(String::as_str), Some("shared"));
/// ```
pub type MaybeOwning<T> = UniquePtr<T, ConditionalDelete<T>>;

impl<T: ?Sized> UniquePtr<T, ConditionalDelete<T>> {
    /// Creates a handle that owns `value` and destroys it when dropped.
    #[must_use]
    #[inline]
    pub fn owning(value: Box<T>) -> Self {
        Self::from_box_with(value, ConditionalDelete::owning())
    }

    /// Creates a handle that references `target` without ever destroying it.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that:
    ///
    /// 1. `target` stays alive for the entire lifetime of the handle. Whoever owns it must
    ///    outlive the handle.
    /// 2. While a reference obtained from the handle is alive, the target is not accessed
    ///    through any other path in a way that violates the aliasing rules.
    /// 3. Unless `T` is [`Sync`], the target is not accessed through any other path from a
    ///    thread other than the one using the handle while the handle is alive.
    #[must_use]
    #[inline]
    pub unsafe fn borrowing(target: NonNull<T>) -> Self {
        // SAFETY: A borrowing strategy never frees anything, so the only requirements left are
        // liveness, aliasing and thread confinement, which are forwarded from the caller.
        unsafe { Self::from_raw(target.as_ptr(), ConditionalDelete::borrowing()) }
    }

    /// Whether this handle destroys its pointee when it lets go of it.
    #[must_use]
    #[inline]
    pub fn owns(&self) -> bool {
        self.deleter().owns()
    }

    /// Creates a borrowing handle to the same pointee as this one.
    ///
    /// Borrowing from a null handle yields a null borrowing handle.
    ///
    /// # Safety
    ///
    /// The same requirements as for [`borrowing()`](Self::borrowing) apply, with this handle's
    /// pointee as the target. In particular, if this handle is the owner, it must outlive the
    /// returned handle. The returned handle can only be moved to another thread if `T` is
    /// [`Sync`], in which case both handles may read the pointee concurrently.
    #[must_use]
    #[inline]
    pub unsafe fn to_borrowing(&self) -> Self {
        match self.as_ptr() {
            // SAFETY: Forwarding safety guarantees from the caller.
            Some(target) => unsafe { Self::borrowing(target) },
            None => Self::null_with(ConditionalDelete::borrowing()),
        }
    }

    /// Takes the pointee back out as a box, if this handle owns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Null`] if the handle holds no pointer and [`Error::Borrowed`] if the
    /// handle does not own its pointee. In both cases nothing is destroyed.
    pub fn into_box(self) -> Result<Box<T>> {
        let (ptr, deleter) = self.into_raw();

        let Some(ptr) = ptr else {
            return Err(Error::Null);
        };

        if !deleter.owns() {
            return Err(Error::Borrowed);
        }

        // SAFETY: Owning handles only ever hold pointers that came from a box (a requirement
        // of the constructors), and `into_raw()` guarantees the strategy did not free it.
        Ok(unsafe { Box::from_raw(ptr.as_ptr()) })
    }
}
