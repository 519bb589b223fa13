//! ## Intro
//!
//! A contiguous sequence container with a capacity fixed at compile time,
//! whose storage lives inline in the container itself.
//!
//! [`FixedVec<T, N>`] behaves like a `Vec<T>` that can never grow past `N`
//! elements. It never touches the heap: the backing block is `N` uninitialized
//! slots, and only the first `len` of them hold live elements. Element
//! construction and destruction happen exactly when elements are added and
//! removed, never for the unused tail.
//!
//! Use it when the maximum size is known in advance and allocation is either
//! too slow or not available at all.
//!
//! ```
//! # use fixed_vector::{fixedvec, FixedVec};
//! let mut vec: FixedVec<i32, 10> = fixedvec![1, 2, 3];
//! assert_eq!(vec.capacity(), 10);
//!
//! vec.push(4);
//! vec.insert(0, 0);
//! assert_eq!(vec, [0, 1, 2, 3, 4]);
//!
//! vec.erase(1..3);
//! assert_eq!(vec, [0, 3, 4]);
//! ```
//!
//! ## Capacity violations
//!
//! Every operation that could exceed the capacity comes in up to three forms:
//!
//! - the plain method **panics** (`push`, `insert`, `insert_n`, ...);
//! - a `try_*` method returns a [`CapacityError`] and leaves the vector untouched;
//! - an `unsafe` `*_unchecked` method skips the check in release builds.
//!
//! ```
//! # use fixed_vector::{fixedvec, FixedVec};
//! let mut vec: FixedVec<u8, 2> = fixedvec![1, 2];
//! let err = vec.try_push(3).unwrap_err();
//! assert_eq!(err.element(), 3);
//! assert_eq!(vec, [1, 2]);
//! ```
//!
//! ## Positions
//!
//! Besides plain indices, a [`Cursor`] (read-only) or [`CursorMut`] names a
//! position in a vector, including the one-past-the-end position. Cursors are
//! tied to the vector they come from by a borrow, so a position can never
//! outlive a mutation of its vector.
//!
//! ```
//! # use fixed_vector::{fixedvec, FixedVec};
//! let mut vec: FixedVec<i32, 8> = fixedvec![1, 4];
//! let mut cursor = vec.cursor_at_mut(1);
//! cursor.insert_iter([2, 3]);
//! assert_eq!(cursor.get(), Some(&2));
//! assert_eq!(vec, [1, 2, 3, 4]);
//! ```
//!
//! ## `Copy` elements
//!
//! For `T: Copy`, [`FixedVec::copied`], [`FixedVec::copy_from`] and
//! [`FixedVec::extend_from_copy_slice`] move elements as one block copy
//! instead of one clone per element.
//!
//! ## `no_std` support
//!
//! This crate requires only `core`. It does not even need `alloc`.
//!
//! ## Optional features
//!
//! ### `std`
//!
//! Implements [`std::io::Write`] for `FixedVec<u8, N>`.
//!
//! ### `serde`
//!
//! When this optional dependency is enabled,
//! [`FixedVec`] implements the [`serde::Serialize`] and [`serde::Deserialize`] traits.
//! Deserializing more than `N` elements is an error.
//!
//! [`serde::Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`serde::Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html
//! [`std::io::Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod slots;
mod utils;

pub mod cursor;
pub mod fixed_vec;

#[cfg(feature = "serde")]
mod serde;

#[cfg(feature = "std")]
mod std_io;

pub use error::CapacityError;

#[doc(inline)]
pub use fixed_vec::{FixedVec, IntoIter};

#[doc(inline)]
pub use cursor::{Cursor, CursorMut};
