use thiserror::Error;

/// Errors that can occur when converting a maybe-owning handle back into an owned value.
#[derive(Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The handle borrows its pointee, so it has no ownership to give up.
    #[error("the handle borrows its pointee and cannot give up ownership of it")]
    Borrowed,

    /// The handle holds no pointer.
    #[error("the handle is null")]
    Null,
}

/// A specialized `Result` type for handle conversions, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
