use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;
use std::mem::{self, ManuallyDrop};
use std::ptr::{self, NonNull};

use tracing::trace;

use crate::{DefaultDelete, Deleter};

/// A single-owner pointer whose pointee is disposed of by a pluggable [`Deleter`].
///
/// The container holds an optional pointer (`None` plays the role of a null pointer) plus an
/// instance of the deletion strategy `D`. When the container lets go of a pointer, either by
/// being dropped or by having its pointer replaced, it invokes the strategy with that pointer
/// exactly once. Pointers given up via [`release()`](Self::release) or
/// [`into_raw()`](Self::into_raw) are never passed to the strategy.
///
/// With the default [`DefaultDelete`] strategy this behaves like a nullable [`Box<T>`]. With a
/// [`ConditionalDelete`][crate::ConditionalDelete] strategy it becomes a
/// [`MaybeOwning`][crate::MaybeOwning] handle that may or may not destroy its pointee.
///
/// # Examples
///
/// ```
/// use conditional_delete::UniquePtr;
///
/// let mut value = UniquePtr::<String>::from_box(Box::new("hello".to_string()));
///
/// if let Some(value) = value.get_mut() {
///     value.push_str(", world");
/// }
///
/// assert_eq!(value.get().map(String::as_str), Some("hello, world"));
///
/// value.clear();
/// assert!(value.is_null());
/// ```
///
/// # Thread safety
///
/// The container may be moved to another thread if the deletion strategy is `Send` and the
/// pointee is both `Send` and `Sync`. The pointee must be `Sync` because a container may be one of
/// several handles to the same pointee (see [`MaybeOwning`][crate::MaybeOwning]), so moving it is
/// like moving a shared reference. The container is never `Sync`; access from multiple threads
/// requires external synchronization.
pub struct UniquePtr<T, D = DefaultDelete>
where
    // Trait objects and slices are supported, hence `?Sized`.
    T: ?Sized,
    D: Deleter<T>,
{
    ptr: Option<NonNull<T>>,

    deleter: D,

    // We may drop a `T` when we ourselves are dropped.
    _pointee: PhantomData<T>,
}

impl<T: ?Sized, D: Deleter<T>> UniquePtr<T, D> {
    /// Creates a container that takes over a boxed value, using a default-constructed strategy.
    #[must_use]
    #[inline]
    pub fn from_box(value: Box<T>) -> Self
    where
        D: Default,
    {
        Self::from_box_with(value, D::default())
    }

    /// Creates a container that takes over a boxed value, using the provided strategy.
    #[must_use]
    #[inline]
    pub fn from_box_with(value: Box<T>, deleter: D) -> Self {
        Self {
            ptr: Some(NonNull::from(Box::leak(value))),
            deleter,
            _pointee: PhantomData,
        }
    }

    /// Creates a container from a raw pointer and a strategy. A null pointer yields an empty
    /// container.
    ///
    /// # Safety
    ///
    /// If `ptr` is not null, the caller must guarantee that:
    ///
    /// 1. `ptr` satisfies the requirements of [`Deleter::delete()`]: it came from
    ///    [`Box::into_raw()`] and nothing else will free it, or `deleter` leaves the pointee alone.
    /// 2. The pointee stays alive for as long as the container holds the pointer.
    /// 3. While a reference obtained from the container is alive, the pointee is not accessed
    ///    through any other path in a way that violates the aliasing rules.
    /// 4. If another path to the pointee exists, it is not used from another thread while the
    ///    container is alive, unless `T` is [`Sync`].
    #[must_use]
    #[inline]
    pub unsafe fn from_raw(ptr: *mut T, deleter: D) -> Self {
        Self {
            ptr: NonNull::new(ptr),
            deleter,
            _pointee: PhantomData,
        }
    }

    /// Creates an empty container with a default-constructed strategy.
    #[must_use]
    #[inline]
    pub fn null() -> Self
    where
        D: Default,
    {
        Self::null_with(D::default())
    }

    /// Creates an empty container with the provided strategy.
    #[must_use]
    #[inline]
    pub fn null_with(deleter: D) -> Self {
        Self {
            ptr: None,
            deleter,
            _pointee: PhantomData,
        }
    }

    /// The pointer held by the container, if any.
    #[must_use]
    #[inline]
    pub fn as_ptr(&self) -> Option<NonNull<T>> {
        self.ptr
    }

    /// Whether the container holds no pointer.
    #[must_use]
    #[inline]
    pub fn is_null(&self) -> bool {
        self.ptr.is_none()
    }

    /// A shared reference to the pointee, if any.
    #[must_use]
    #[inline]
    pub fn get(&self) -> Option<&T> {
        // SAFETY: Every way to put a pointer into the container requires it to stay valid while
        // held, and we tie the reference to a borrow of the container.
        self.ptr.map(|ptr| unsafe { ptr.as_ref() })
    }

    /// An exclusive reference to the pointee, if any.
    #[must_use]
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        // SAFETY: Every way to put a pointer into the container requires it to stay valid while
        // held and to not be aliased while we hand out references. This is an exclusive borrow
        // of the container, so no other reference obtained from it can be alive.
        self.ptr.map(|mut ptr| unsafe { ptr.as_mut() })
    }

    /// The deletion strategy of the container.
    #[must_use]
    #[inline]
    pub fn deleter(&self) -> &D {
        &self.deleter
    }

    /// Gives up the pointer without invoking the deletion strategy, leaving the container empty.
    ///
    /// The caller becomes responsible for whatever the strategy would have done.
    #[must_use = "the released pointer is no longer disposed of by the container"]
    #[inline]
    pub fn release(&mut self) -> Option<NonNull<T>> {
        self.ptr.take()
    }

    /// Replaces the held pointer with `ptr`, then invokes the deletion strategy on the
    /// previously held pointer (if there was one).
    ///
    /// # Safety
    ///
    /// The same requirements as for [`from_raw()`](Self::from_raw) apply to `ptr`.
    #[inline]
    pub unsafe fn reset(&mut self, ptr: *mut T) {
        self.replace(NonNull::new(ptr));
    }

    /// Empties the container, invoking the deletion strategy on the previously held pointer
    /// (if there was one).
    #[inline]
    pub fn clear(&mut self) {
        self.replace(None);
    }

    /// Decomposes the container into its pointer and strategy without invoking the strategy.
    #[must_use]
    #[inline]
    pub fn into_raw(self) -> (Option<NonNull<T>>, D) {
        let this = ManuallyDrop::new(self);

        // SAFETY: `this` is never dropped or used again, so the strategy is moved out exactly
        // once and nothing observes the moved-from field.
        let deleter = unsafe { ptr::read(&this.deleter) };

        (this.ptr, deleter)
    }

    fn replace(&mut self, ptr: Option<NonNull<T>>) {
        let previous = mem::replace(&mut self.ptr, ptr);

        if let Some(previous) = previous {
            trace!(pointee = type_name::<T>(), "handing pointee to deletion strategy");

            // SAFETY: We held this pointer, so it satisfies the strategy's requirements
            // (guaranteed when it was put into the container) and we no longer hold it,
            // so it cannot be handed to the strategy a second time.
            unsafe {
                self.deleter.delete(previous.as_ptr());
            }
        }
    }
}

impl<T: ?Sized, D: Deleter<T>> Drop for UniquePtr<T, D> {
    fn drop(&mut self) {
        self.replace(None);
    }
}

impl<T: ?Sized, D: Deleter<T> + Default> Default for UniquePtr<T, D> {
    #[inline]
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized, D: Deleter<T> + Default> From<Box<T>> for UniquePtr<T, D> {
    #[inline]
    fn from(value: Box<T>) -> Self {
        Self::from_box(value)
    }
}

impl<T: ?Sized, D: Deleter<T> + fmt::Debug> fmt::Debug for UniquePtr<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UniquePtr")
            .field("ptr", &self.ptr)
            .field("deleter", &self.deleter)
            .finish()
    }
}

// SAFETY: Moving the container moves access to the pointee, including the right to drop it,
// which requires `T: Send`. Other handles to the same pointee may stay behind on the original
// thread and read it concurrently, which requires `T: Sync`. The strategy travels along, so it
// must be `Send`.
unsafe impl<T: ?Sized + Send + Sync, D: Deleter<T> + Send> Send for UniquePtr<T, D> {}
