use std::ops::Deref;

/// A value that is either owned or borrowed, with the distinction enforced by the type system.
///
/// This is the compile-time counterpart of [`MaybeOwning`][crate::MaybeOwning]: the borrowing
/// variant carries a lifetime, so the borrow checker guarantees that the owner outlives it and
/// no `unsafe` is needed to create one. Prefer this type wherever the owning and borrowing cases
/// can be told apart statically.
///
/// # Examples
///
/// ```
/// use conditional_delete::MaybeOwned;
///
/// fn describe(value: &MaybeOwned<'_, str>) -> String {
///     let how = if value.owns() { "owned" } else { "borrowed" };
///     format!("{how}: {}", &**value)
/// }
///
/// let owned = MaybeOwned::from(Box::<str>::from("mine"));
/// let borrowed = MaybeOwned::from("yours");
///
/// assert_eq!(describe(&owned), "owned: mine");
/// assert_eq!(describe(&borrowed), "borrowed: yours");
/// ```
#[derive(Debug)]
#[expect(
    clippy::exhaustive_enums,
    reason = "a value is either owned or borrowed, there is no third way"
)]
pub enum MaybeOwned<'a, T: ?Sized> {
    /// The value is owned and is dropped together with this instance.
    Owned(Box<T>),

    /// The value is owned elsewhere and outlives this instance.
    Borrowed(&'a T),
}

impl<T: ?Sized> MaybeOwned<'_, T> {
    /// Whether dropping this instance drops the value.
    #[must_use]
    #[inline]
    pub fn owns(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    /// Borrows the value, regardless of whether this instance owns it.
    #[must_use]
    #[inline]
    pub fn as_borrowed(&self) -> MaybeOwned<'_, T> {
        MaybeOwned::Borrowed(&**self)
    }
}

impl<T: Clone> MaybeOwned<'_, T> {
    /// Converts into an owned value, cloning it if it was borrowed.
    #[must_use]
    pub fn into_owned(self) -> Box<T> {
        match self {
            Self::Owned(value) => value,
            Self::Borrowed(value) => Box::new(value.clone()),
        }
    }
}

impl<T: ?Sized> Deref for MaybeOwned<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        match self {
            Self::Owned(value) => &**value,
            Self::Borrowed(value) => *value,
        }
    }
}

impl<T: ?Sized> AsRef<T> for MaybeOwned<'_, T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &**self
    }
}

impl<T: ?Sized> From<Box<T>> for MaybeOwned<'_, T> {
    #[inline]
    fn from(value: Box<T>) -> Self {
        Self::Owned(value)
    }
}

impl<'a, T: ?Sized> From<&'a T> for MaybeOwned<'a, T> {
    #[inline]
    fn from(value: &'a T) -> Self {
        Self::Borrowed(value)
    }
}
