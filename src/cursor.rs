//! Positional cursors over a [`FixedVec`].
//!
//! A cursor is a back-reference to its vector plus an index in `0..=len`
//! (`len` being the one-past-the-end position). The element address is
//! computed from the vector on every access, never cached, so a cursor
//! always observes the vector's current contents.
//!
//! - [`Cursor`] is `Copy`, supports random offsets and distances, and compares
//!   by (vector identity, index). [`Cursor::iter`] walks forward from it.
//! - [`CursorMut`] holds the vector exclusively and can insert or erase at its
//!   position. It converts into a [`Cursor`], never the reverse.

use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
    ptr, slice,
};

use crate::FixedVec;

#[inline]
fn offset_index(index: usize, offset: isize, len: usize) -> usize {
    match index.checked_add_signed(offset) {
        Some(moved) if moved <= len => moved,
        _ => panic!("cursor moved out of bounds"),
    }
}

/// A read-only position inside a [`FixedVec`].
///
/// # Examples
///
/// ```
/// # use fixed_vector::{FixedVec, fixedvec};
/// let vec: FixedVec<_, 8> = fixedvec![1, 2, 3, 4];
///
/// let mut cursor = vec.cursor_front();
/// cursor += 2;
/// assert_eq!(cursor.get(), Some(&3));
/// assert_eq!(cursor.peek(-1), Some(&2));
/// assert_eq!(vec.cursor_end() - cursor, 2);
///
/// // The elements from the position to the end.
/// assert!(cursor.iter().copied().eq([3, 4]));
/// ```
pub struct Cursor<'a, T, const N: usize> {
    vec: &'a FixedVec<T, N>,
    index: usize,
}

impl<'a, T, const N: usize> Cursor<'a, T, N> {
    #[inline]
    pub(crate) const fn new(vec: &'a FixedVec<T, N>, index: usize) -> Self {
        Self { vec, index }
    }

    /// The position of the cursor, in `0..=len`.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` at the one-past-the-end position.
    #[inline]
    pub const fn is_end(&self) -> bool {
        self.index == self.vec.len()
    }

    /// The element under the cursor, or `None` at the end.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.vec.as_slice().get(self.index)
    }

    /// The element `offset` positions away, or `None` outside `0..len`.
    #[inline]
    pub fn peek(&self, offset: isize) -> Option<&'a T> {
        let index = self.index.checked_add_signed(offset)?;
        self.vec.as_slice().get(index)
    }

    /// Steps one position forward.
    ///
    /// # Panics
    /// Panics if the cursor is already at the end.
    #[inline]
    pub fn move_next(&mut self) {
        self.seek(1);
    }

    /// Steps one position back.
    ///
    /// # Panics
    /// Panics if the cursor is at position 0.
    #[inline]
    pub fn move_prev(&mut self) {
        self.seek(-1);
    }

    /// Moves the cursor by `offset` positions.
    ///
    /// # Panics
    /// Panics if the result falls outside `0..=len`.
    #[inline]
    pub fn seek(&mut self, offset: isize) {
        self.index = offset_index(self.index, offset, self.vec.len());
    }

    /// Iterates over the elements from the cursor to the end.
    ///
    /// The cursor itself does not move.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'a, T> {
        let vec: &'a FixedVec<T, N> = self.vec;
        vec.as_slice()[self.index..].iter()
    }

    /// The whole vector this cursor points into.
    #[inline]
    pub const fn as_vec(&self) -> &'a FixedVec<T, N> {
        self.vec
    }
}

impl<T, const N: usize> Clone for Cursor<'_, T, N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for Cursor<'_, T, N> {}

impl<T, const N: usize> PartialEq for Cursor<'_, T, N> {
    /// Two cursors are equal when they point into the same vector at the same index.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.vec, other.vec) && self.index == other.index
    }
}

impl<T, const N: usize> Eq for Cursor<'_, T, N> {}

impl<T, const N: usize> PartialOrd for Cursor<'_, T, N> {
    /// Cursors into different vectors are unordered.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if ptr::eq(self.vec, other.vec) {
            Some(self.index.cmp(&other.index))
        } else {
            None
        }
    }
}

impl<T, const N: usize> Add<isize> for Cursor<'_, T, N> {
    type Output = Self;

    #[inline]
    fn add(mut self, offset: isize) -> Self {
        self.seek(offset);
        self
    }
}

impl<T, const N: usize> Sub<isize> for Cursor<'_, T, N> {
    type Output = Self;

    #[inline]
    fn sub(mut self, offset: isize) -> Self {
        self.seek(-offset);
        self
    }
}

impl<T, const N: usize> AddAssign<isize> for Cursor<'_, T, N> {
    #[inline]
    fn add_assign(&mut self, offset: isize) {
        self.seek(offset);
    }
}

impl<T, const N: usize> SubAssign<isize> for Cursor<'_, T, N> {
    #[inline]
    fn sub_assign(&mut self, offset: isize) {
        self.seek(-offset);
    }
}

impl<T, const N: usize> Sub for Cursor<'_, T, N> {
    type Output = isize;

    /// The signed distance between two positions of the same vector.
    #[inline]
    fn sub(self, other: Self) -> isize {
        debug_assert!(ptr::eq(self.vec, other.vec), "cursors into different vectors");
        self.index as isize - other.index as isize
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Cursor<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("current", &self.get())
            .finish()
    }
}

/// A position inside a [`FixedVec`] that can edit the vector around it.
///
/// Insertions happen before the cursor and leave it on the first inserted
/// element; removals leave it on the element that followed the removed ones.
///
/// # Examples
///
/// ```
/// # use fixed_vector::{FixedVec, fixedvec};
/// let mut vec: FixedVec<_, 8> = fixedvec![1, 2, 4, 5];
///
/// let mut cursor = vec.cursor_at_mut(2);
/// cursor.insert(3);
/// assert_eq!(cursor.get(), Some(&3));
///
/// cursor.seek(-1);
/// cursor.erase(3);
/// assert_eq!(cursor.get(), Some(&5));
///
/// assert_eq!(vec, [1, 5]);
/// ```
pub struct CursorMut<'a, T, const N: usize> {
    vec: &'a mut FixedVec<T, N>,
    index: usize,
}

impl<'a, T, const N: usize> CursorMut<'a, T, N> {
    #[inline]
    pub(crate) const fn new(vec: &'a mut FixedVec<T, N>, index: usize) -> Self {
        Self { vec, index }
    }

    /// The position of the cursor, in `0..=len`.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` at the one-past-the-end position.
    #[inline]
    pub const fn is_end(&self) -> bool {
        self.index == self.vec.len()
    }

    /// The element under the cursor, or `None` at the end.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.vec.as_slice().get(self.index)
    }

    /// The element under the cursor, mutably.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.vec.as_mut_slice().get_mut(self.index)
    }

    /// Steps one position forward.
    ///
    /// # Panics
    /// Panics if the cursor is already at the end.
    #[inline]
    pub fn move_next(&mut self) {
        self.seek(1);
    }

    /// Steps one position back.
    ///
    /// # Panics
    /// Panics if the cursor is at position 0.
    #[inline]
    pub fn move_prev(&mut self) {
        self.seek(-1);
    }

    /// Moves the cursor by `offset` positions.
    ///
    /// # Panics
    /// Panics if the result falls outside `0..=len`.
    #[inline]
    pub fn seek(&mut self, offset: isize) {
        self.index = offset_index(self.index, offset, self.vec.len());
    }

    /// A read-only cursor at the same position, borrowing this one.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T, N> {
        Cursor::new(self.vec, self.index)
    }

    /// Inserts `value` before the cursor; the cursor then points at it.
    ///
    /// At the end position this is a plain push.
    ///
    /// # Panics
    /// Panics if the vector is full.
    #[inline]
    pub fn insert(&mut self, value: T) {
        self.vec.insert(self.index, value);
    }

    /// Inserts every element of `iter` before the cursor; the cursor then
    /// points at the first inserted element.
    ///
    /// # Panics
    /// Panics if the elements do not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 8> = fixedvec!['a', 'e'];
    /// let mut cursor = vec.cursor_at_mut(1);
    /// cursor.insert_iter(['b', 'c', 'd']);
    /// assert_eq!(cursor.get(), Some(&'b'));
    /// assert_eq!(vec, ['a', 'b', 'c', 'd', 'e']);
    /// ```
    #[inline]
    pub fn insert_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.index = self.vec.insert_iter(self.index, iter);
    }

    /// Removes the element under the cursor and returns it; the cursor then
    /// points at the following element. Returns `None` at the end.
    #[inline]
    pub fn remove(&mut self) -> Option<T> {
        if self.is_end() {
            None
        } else {
            Some(self.vec.remove(self.index))
        }
    }

    /// Removes `count` elements starting at the cursor; the cursor then
    /// points at the element that followed them.
    ///
    /// # Panics
    /// Panics if fewer than `count` elements follow the cursor.
    #[inline]
    pub fn erase(&mut self, count: usize) {
        let end = self.index + count;
        self.index = self.vec.erase(self.index..end);
    }

    /// Gives back the exclusive borrow of the vector.
    #[inline]
    pub fn into_vec(self) -> &'a mut FixedVec<T, N> {
        self.vec
    }
}

impl<T: Clone, const N: usize> CursorMut<'_, T, N> {
    /// Inserts `count` clones of `value` before the cursor; the cursor then
    /// points at the first of them.
    ///
    /// # Panics
    /// Panics if the clones do not fit.
    #[inline]
    pub fn insert_n(&mut self, count: usize, value: T) {
        self.index = self.vec.insert_n(self.index, count, value);
    }
}

impl<'a, T, const N: usize> From<CursorMut<'a, T, N>> for Cursor<'a, T, N> {
    /// Downgrades to a read-only cursor at the same position.
    #[inline]
    fn from(cursor: CursorMut<'a, T, N>) -> Self {
        let index = cursor.index;
        Cursor::new(cursor.vec, index)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for CursorMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("current", &self.get())
            .finish()
    }
}
