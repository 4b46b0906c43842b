#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Handles that decide at runtime, per instance, whether they own their pointee.
//!
//! The core of this crate is [`ConditionalDelete<T>`], a deletion strategy that is told once,
//! at construction time, whether the pointee is owned. When a container hands it a pointer, it
//! destroys the pointee only if it owns it and otherwise leaves the pointee alone.
//!
//! The strategy plugs into [`UniquePtr<T, D>`], a single-owner pointer parameterized by any
//! [`Deleter<T>`]. The combination is available as [`MaybeOwning<T>`]: a single handle type whose
//! instances either own their target or merely reference a target owned elsewhere.
//!
//! # Key Features
//!
//! - **Per-instance ownership**: the owns-flag is fixed at construction and never changes
//! - **Owning by default**: a default-constructed strategy behaves like a plain [`Box<T>`]
//! - **Null-tolerant**: deleting a null pointer is always a no-op
//! - **Pluggable strategies**: [`UniquePtr`] accepts any [`Deleter`], with [`DefaultDelete`]
//!   as the unconditional default
//! - **Static alternative**: [`MaybeOwned<'a, T>`] encodes ownership in the type system where
//!   that is practical, eliminating the need for `unsafe` when borrowing
//!
//! # Examples
//!
//! ## Owning and borrowing handles of the same type
//!
//! ```rust
//! use std::ptr::NonNull;
//!
//! use conditional_delete::MaybeOwning;
//!
//! fn total_len(handles: &[MaybeOwning<String>]) -> usize {
//!     handles.iter().filter_map(|h| h.get()).map(String::len).sum()
//! }
//!
//! let mut long_lived = String::from("borrowed");
//!
//! let handles = vec![
//!     MaybeOwning::owning(Box::new(String::from("owned"))),
//!     // SAFETY: `long_lived` outlives the handles and is not touched while they exist.
//!     unsafe { MaybeOwning::borrowing(NonNull::from(&mut long_lived)) },
//! ];
//!
//! assert_eq!(total_len(&handles), 13);
//!
//! // Drops the owned string; leaves `long_lived` alone.
//! drop(handles);
//!
//! assert_eq!(long_lived, "borrowed");
//! ```
//!
//! ## Choosing the strategy explicitly
//!
//! ```rust
//! use conditional_delete::{ConditionalDelete, UniquePtr};
//!
//! let strategy = ConditionalDelete::with_owns(true);
//! let handle = UniquePtr::from_box_with(Box::new(42_u64), strategy);
//!
//! assert!(handle.deleter().owns());
//! assert_eq!(handle.get(), Some(&42));
//! ```
//!
//! # Safety
//!
//! This crate does not detect misuse. Wrapping one pointer in two owning handles leads to a
//! double free, and letting a borrowing handle outlive the pointee's owner leads to a dangling
//! reference. The `unsafe` constructors document these requirements.

mod conditional_delete;
mod deleter;
mod error;
mod maybe_owned;
mod maybe_owning;
mod unique_ptr;

pub use conditional_delete::*;
pub use deleter::*;
pub use error::Error;
pub(crate) use error::Result;
pub use maybe_owned::*;
pub use maybe_owning::*;
pub use unique_ptr::*;
