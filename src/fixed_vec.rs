use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    iter::FusedIterator,
    mem::{self, ManuallyDrop, MaybeUninit},
    ops::{Deref, DerefMut, Index, IndexMut, RangeBounds},
    slice::{self, SliceIndex},
};

use crate::{
    cursor::{Cursor, CursorMut},
    error::CapacityError,
    slots::Slots,
    utils::{IsZST, cold_path, split_range_bound, zst_init},
};

/// A contiguous vector with a fixed capacity `N`, stored inline.
///
/// The storage is one block of `N` uninitialized slots that lives inside the
/// `FixedVec` value itself: nothing is ever allocated. Slots `0..len` hold
/// live elements, slots `len..N` hold nothing.
///
/// It mirrors most of the API of `Vec`, but never grows past `N`.
///
/// # Panics
/// Any checked operation that would make `len > N`. Each of these has a
/// `try_*` variant returning [`CapacityError`] and, where it matters on hot
/// paths, an `unsafe` `*_unchecked` variant that only debug-asserts.
///
/// # Examples
///
/// ```
/// use fixed_vector::FixedVec;
///
/// let mut vec: FixedVec<String, 4> = FixedVec::new();
///
/// assert_eq!(vec.len(), 0);
/// assert_eq!(vec.capacity(), 4);
///
/// vec.push("Hello".to_string());
/// vec.push("world".to_string());
/// vec.insert(1, ", ".to_string());
///
/// assert_eq!(vec, ["Hello", ", ", "world"]);
/// assert!(vec.has_space());
/// ```
///
/// # ZST support
///
/// Zero sized element types occupy no storage; only the length changes,
/// but the capacity `N` still bounds it.
pub struct FixedVec<T, const N: usize> {
    pub(crate) slots: Slots<T, N>,
    pub(crate) len: usize,
}

impl<T, const N: usize> Drop for FixedVec<T, N> {
    fn drop(&mut self) {
        // SAFETY: exactly `0..len` is live.
        unsafe { self.slots.destroy_range(0, self.len) }
    }
}

/// Creates a [`FixedVec`] containing the arguments.
///
/// The syntax is similar to `vec!`. The capacity comes from the
/// annotated type; the number of elements cannot exceed it.
///
/// # Panics
/// Panics if the number of elements exceeds the capacity.
///
/// # Examples
///
/// ```
/// # use fixed_vector::{fixedvec, FixedVec};
/// let vec: FixedVec<String, 10> = fixedvec![];
/// let vec: FixedVec<i64, 10> = fixedvec![1; 5];
/// let vec: FixedVec<_, 10> = fixedvec![1, 2, 3, 4];
/// assert_eq!(vec, [1, 2, 3, 4]);
/// ```
#[macro_export]
macro_rules! fixedvec {
    [] => { $crate::FixedVec::new() };
    [$elem:expr; $n:expr] => { $crate::FixedVec::from_elem($elem, $n) };
    [$($item:expr),+ $(,)?] => { $crate::FixedVec::from_buf([ $($item),+ ]) };
}

impl<T, const N: usize> FixedVec<T, N> {
    /// The fixed capacity of every `FixedVec<T, N>`.
    pub const CAPACITY: usize = N;

    /// Constructs a new, empty `FixedVec`. No element is constructed.
    ///
    /// The whole block lives inline, so keep `N * size_of::<T>()` modest
    /// when the vector sits on the stack.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVec;
    /// let vec: FixedVec<i32, 8> = FixedVec::new();
    /// assert!(vec.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Slots::new(),
            len: 0,
        }
    }

    /// Returns the number of live elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{fixedvec, FixedVec};
    /// let vec: FixedVec<_, 5> = fixedvec![1, 2];
    /// assert_eq!(vec.len(), 2);
    /// ```
    #[inline(always)]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if one more element fits (`len < N`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVec;
    /// let mut v = FixedVec::<i32, 1>::new();
    /// assert!(v.has_space());
    /// v.push(1);
    /// assert!(!v.has_space());
    /// ```
    #[inline(always)]
    pub const fn has_space(&self) -> bool {
        self.len < N
    }

    /// Returns `true` if `len == N`.
    #[inline(always)]
    pub const fn is_full(&self) -> bool {
        self.len >= N
    }

    /// Returns `N - len`, the number of elements that can still be pushed.
    #[inline(always)]
    pub const fn remaining(&self) -> usize {
        N - self.len
    }

    /// Returns the maximum number of elements the vector can hold: `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVec;
    /// let vec = FixedVec::<String, 5>::new();
    /// assert_eq!(vec.capacity(), 5);
    /// ```
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Same as [`capacity`](FixedVec::capacity), usable without a value.
    ///
    /// ```
    /// # use fixed_vector::FixedVec;
    /// assert_eq!(FixedVec::<u8, 12>::max_size(), 12);
    /// ```
    #[inline(always)]
    pub const fn max_size() -> usize {
        N
    }

    /// Returns a raw pointer to the first slot.
    ///
    /// The pointer stays valid as long as the vector is neither moved nor
    /// dropped; no operation ever relocates the storage.
    #[inline(always)]
    pub const fn as_ptr(&self) -> *const T {
        self.slots.as_ptr()
    }

    /// Returns a raw mutable pointer to the first slot.
    #[inline(always)]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.slots.as_mut_ptr()
    }

    /// Forces the length of the vector to `new_len`.
    ///
    /// # Safety
    /// - `new_len <= N`.
    /// - When growing, slots `len..new_len` have been initialized.
    /// - When shrinking, the caller takes over the dropped elements.
    #[inline(always)]
    pub const unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= N);
        self.len = new_len
    }

    /// Extracts a slice of the live elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let vec: FixedVec<_, 5> = fixedvec![1, 2, 3, 4];
    /// assert_eq!(vec.as_slice(), [1, 2, 3, 4]);
    /// ```
    #[inline(always)]
    pub const fn as_slice(&self) -> &[T] {
        // SAFETY: exactly `0..len` is live.
        unsafe { self.slots.live(self.len) }
    }

    /// Extracts a mutable slice of the live elements.
    #[inline(always)]
    pub const fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: exactly `0..len` is live.
        unsafe { self.slots.live_mut(self.len) }
    }

    /// Returns the vacant slots as `MaybeUninit<T>`.
    ///
    /// Fill them, then publish with [`set_len`](FixedVec::set_len).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVec;
    /// let mut v = FixedVec::<i32, 10>::new();
    ///
    /// let uninit = v.spare_capacity_mut();
    /// uninit[0].write(0);
    /// uninit[1].write(1);
    ///
    /// unsafe { v.set_len(2) };
    /// assert_eq!(v, [0, 1]);
    /// ```
    #[inline(always)]
    pub const fn spare_capacity_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self.slots.vacant_mut(self.len)
    }

    /// Creates a [`FixedVec`] from an array, moving its elements.
    ///
    /// # Panics
    /// Panics if `P > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVec;
    /// let vec: FixedVec<i32, 5> = FixedVec::from_buf([1, 2, 3]);
    /// assert_eq!(vec.len(), 3);
    /// ```
    #[inline]
    pub const fn from_buf<const P: usize>(arr: [T; P]) -> Self {
        assert!(P <= N, "length overflow during `from_buf`");

        let mut vec = Self::new();
        // SAFETY: the `P <= N` values move into vacant slots and `arr` is forgotten.
        unsafe { vec.slots.bulk_move_from_ptr(0, arr.as_ptr(), P) };
        mem::forget(arr);
        vec.len = P;
        vec
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let vec: FixedVec<_, 4> = fixedvec!['a', 'b'];
    /// assert_eq!(*vec.at(1), 'b');
    /// ```
    #[inline]
    pub const fn at(&self, index: usize) -> &T {
        assert!(index < self.len, "index out of bounds during `at`");
        // SAFETY: checked above.
        unsafe { self.at_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    pub const fn at_mut(&mut self, index: usize) -> &mut T {
        assert!(index < self.len, "index out of bounds during `at_mut`");
        // SAFETY: checked above.
        unsafe { &mut *self.slots.as_mut_ptr().add(index) }
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    /// `index < len`.
    #[inline(always)]
    pub const unsafe fn at_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index out of bounds during `at_unchecked`");
        unsafe { &*self.slots.as_ptr().add(index) }
    }

    /// Returns the first element.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 4> = fixedvec![1, 2, 3];
    /// assert_eq!(*vec.front(), 1);
    /// *vec.back_mut() = 7;
    /// assert_eq!(*vec.back(), 7);
    /// ```
    #[inline]
    pub const fn front(&self) -> &T {
        assert!(self.len > 0, "`front` called on an empty vector");
        unsafe { self.at_unchecked(0) }
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[inline]
    pub const fn front_mut(&mut self) -> &mut T {
        assert!(self.len > 0, "`front_mut` called on an empty vector");
        self.at_mut(0)
    }

    /// Returns the last element.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[inline]
    pub const fn back(&self) -> &T {
        assert!(self.len > 0, "`back` called on an empty vector");
        unsafe { self.at_unchecked(self.len - 1) }
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    /// Panics if the vector is empty.
    #[inline]
    pub const fn back_mut(&mut self) -> &mut T {
        assert!(self.len > 0, "`back_mut` called on an empty vector");
        self.at_mut(self.len - 1)
    }

    /// Appends an element to the back of the vector.
    ///
    /// # Panics
    /// Panics if the vector is full.
    ///
    /// # Time complexity
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVec;
    /// let mut vec = FixedVec::<i32, 5>::new();
    /// vec.push(1);
    /// vec.push(2);
    /// assert_eq!(vec, [1, 2]);
    /// ```
    #[inline(always)]
    pub const fn push(&mut self, value: T) {
        self.push_mut(value);
    }

    /// Appends an element and returns a reference to it.
    ///
    /// # Panics
    /// Panics if the vector is full.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVec;
    /// let mut vec = FixedVec::<String, 2>::new();
    /// let s = vec.push_mut(String::from("ab"));
    /// s.push('c');
    /// assert_eq!(vec, ["abc"]);
    /// ```
    #[inline(always)]
    pub const fn push_mut(&mut self, value: T) -> &mut T {
        assert!(self.len < N, "length overflow during `push`");
        // SAFETY: checked above.
        unsafe { self.push_unchecked(value) }
    }

    /// Appends an element, or hands it back if the vector is full.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVec;
    /// let mut vec = FixedVec::<i32, 1>::new();
    /// assert!(vec.try_push(1).is_ok());
    /// assert_eq!(vec.try_push(2).unwrap_err().element(), 2);
    /// assert_eq!(vec, [1]);
    /// ```
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<&mut T, CapacityError<T>> {
        if self.len < N {
            // SAFETY: checked above.
            Ok(unsafe { self.push_unchecked(value) })
        } else {
            cold_path();
            Err(CapacityError::new(value))
        }
    }

    /// Appends an element without checking the capacity.
    ///
    /// # Safety
    /// `len < N` before the call.
    #[inline(always)]
    pub const unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
        debug_assert!(self.len < N, "length overflow during `push_unchecked`");
        let len = self.len;
        self.len = len + 1;
        // SAFETY: slot `len` is the first vacant one.
        unsafe { self.slots.construct_at(len, value) }
    }

    /// Removes the last element and returns it, or `None` if empty.
    ///
    /// # Time complexity
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVec;
    /// let mut vec = FixedVec::<i32, 5>::new();
    /// vec.push(1);
    ///
    /// assert_eq!(vec.pop(), Some(1));
    /// assert_eq!(vec.pop(), None);
    /// ```
    #[inline(always)]
    pub const fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            cold_path();
            None
        } else {
            self.len -= 1;
            unsafe {
                if T::IS_ZST {
                    Some(zst_init())
                } else {
                    // SAFETY: slot `len` was the last live one and is now vacant.
                    Some(self.slots.take_at(self.len))
                }
            }
        }
    }

    /// Shortens the vector to `len`, dropping the rest.
    ///
    /// Has no effect if `len >= self.len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec![1; 5];
    /// vec.truncate(2);
    /// assert_eq!(vec.len(), 2);
    /// ```
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len;
        if old_len > len {
            // Lower the count first: a panicking destructor then leaks instead of double-dropping.
            self.len = len;
            unsafe { self.slots.destroy_range(len, old_len) }
        }
    }

    /// Drops every element.
    ///
    /// For element types without drop glue only the length is reset.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut v: FixedVec<i32, 5> = fixedvec![1, 2, 3];
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Inserts `element` at `index`, shifting everything after it one slot
    /// to the right, and returns `index` (the position of the new element).
    ///
    /// Inserting at `len` is a plain push: nothing is shifted.
    ///
    /// # Panics
    /// Panics if `index > len` or if the vector is full.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec![1, 2, 4, 5];
    /// let at = vec.insert(2, 3);
    /// assert_eq!(vec[at], 3);
    /// assert_eq!(vec, [1, 2, 3, 4, 5]);
    /// ```
    #[inline]
    pub const fn insert(&mut self, index: usize, element: T) -> usize {
        assert!(index <= self.len, "insertion index should be <= len");
        assert!(self.len < N, "length overflow during `insert`");

        unsafe { self.insert_unchecked(index, element) };
        index
    }

    /// Inserts `element` at `index` and returns `index`, or hands the element
    /// back if the vector is full.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 3> = fixedvec![1, 3];
    /// assert_eq!(vec.try_insert(1, 2), Ok(1));
    /// assert!(vec.try_insert(0, 0).is_err());
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    pub fn try_insert(&mut self, index: usize, element: T) -> Result<usize, CapacityError<T>> {
        assert!(index <= self.len, "insertion index should be <= len");
        if self.len == N {
            cold_path();
            return Err(CapacityError::new(element));
        }
        unsafe { self.insert_unchecked(index, element) };
        Ok(index)
    }

    /// Inserts `element` at `index` without any checks.
    ///
    /// # Safety
    /// `index <= len` and `len < N`.
    #[inline(always)]
    pub const unsafe fn insert_unchecked(&mut self, index: usize, element: T) {
        debug_assert!(index <= self.len, "insertion index should be <= len");
        debug_assert!(self.len < N, "length overflow during `insert`");

        unsafe {
            // Open a hole at `index` by moving `index..len` one slot back.
            self.slots.shift(index, index + 1, self.len - index);
            self.slots.construct_at(index, element);
        }
        self.len += 1;
    }

    /// Inserts every element yielded by `iter` at `index`, in order, and
    /// returns `index` (the position of the first inserted element).
    ///
    /// The new elements are pushed at the back and then rotated into place,
    /// so no placeholder value is ever needed.
    ///
    /// # Panics
    /// Panics if `index > len` or if the iterator yields more elements than
    /// there is space for. The elements inserted before the panic stay
    /// at the back.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 6> = fixedvec![1, 5];
    /// let at = vec.insert_iter(1, [2, 3, 4]);
    /// assert_eq!(at, 1);
    /// assert_eq!(vec, [1, 2, 3, 4, 5]);
    /// ```
    pub fn insert_iter<I: IntoIterator<Item = T>>(&mut self, index: usize, iter: I) -> usize {
        assert!(index <= self.len, "insertion index should be <= len");
        let old_len = self.len;
        for item in iter {
            self.push(item);
        }
        let inserted = self.len - old_len;
        if inserted > 0 && index < old_len {
            self.as_mut_slice()[index..].rotate_right(inserted);
        }
        index
    }

    /// Removes and returns the element at `index`, shifting everything after
    /// it one slot to the left.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec![1, 2, 3];
    /// assert_eq!(vec.remove(1), 2);
    /// assert_eq!(vec, [1, 3]);
    /// ```
    #[inline]
    pub const fn remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "removal index should be < len");

        unsafe {
            let value = if T::IS_ZST {
                zst_init()
            } else {
                self.slots.take_at(index)
            };
            self.slots.shift(index + 1, index, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Removes the elements in `range`, shifting the tail left to close the
    /// gap, and returns the range start: the position of the element that now
    /// follows the removed ones (or `len` if the range reached the end).
    ///
    /// An empty range is a no-op.
    ///
    /// # Panics
    /// Panics if the start is greater than the end or the end is past `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec![1, 2, 3, 4, 5];
    /// let at = vec.erase(1..4);
    /// assert_eq!(at, 1);
    /// assert_eq!(vec, [1, 5]);
    ///
    /// assert_eq!(vec.erase(1..1), 1);
    /// assert_eq!(vec, [1, 5]);
    /// ```
    pub fn erase<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        let len = self.len;
        let (start, end) = split_range_bound(&range, len);
        assert!(start <= end, "erase range start should be <= end");
        assert!(end <= len, "erase range end should be <= len");

        if start == end {
            return start;
        }

        // While the range drops, only the prefix counts as live:
        // a panicking destructor leaks the tail instead of double-dropping it.
        self.len = start;
        unsafe {
            self.slots.destroy_range(start, end);
            self.slots.shift(end, start, len - end);
        }
        self.len = len - (end - start);
        start
    }

    /// Retains only the elements for which `f` returns `true`, preserving
    /// their order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec![1, 2, 3, 4];
    /// vec.retain(|v| *v % 2 == 0);
    /// assert_eq!(vec, [2, 4]);
    /// ```
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        let old_len = self.len;
        // Guard against double drops if `f` or a destructor panics.
        self.len = 0;
        let mut kept = 0usize;
        for index in 0..old_len {
            unsafe {
                if f(&*self.slots.as_ptr().add(index)) {
                    self.slots.shift(index, kept, 1);
                    kept += 1;
                    self.len = kept;
                } else {
                    self.slots.destroy_at(index);
                }
            }
        }
    }

    /// Splits the collection into two at `at`.
    ///
    /// # Panics
    /// Panics if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec!['a', 'b', 'c'];
    /// let vec2 = vec.split_off(1);
    ///
    /// assert_eq!(vec, ['a']);
    /// assert_eq!(vec2, ['b', 'c']);
    /// ```
    #[inline]
    pub const fn split_off(&mut self, at: usize) -> Self {
        assert!(at <= self.len, "the `at` of split off should be <= len");
        let mut other = Self::new();
        let moved = self.len - at;
        unsafe {
            other
                .slots
                .bulk_move_from_ptr(0, self.slots.as_ptr().add(at), moved);
        }
        other.len = moved;
        self.len = at;
        other
    }

    /// Moves all the elements of `other` to the back of `self`, leaving
    /// `other` empty.
    ///
    /// # Panics
    /// Panics if the new length exceeds `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec1: FixedVec<_, 6> = fixedvec![1, 2, 3, 4];
    /// let mut vec2: FixedVec<_, 4> = fixedvec![5, 6];
    /// vec1.append(&mut vec2);
    /// assert_eq!(vec1, [1, 2, 3, 4, 5, 6]);
    /// assert!(vec2.is_empty());
    /// ```
    #[inline]
    pub const fn append<const P: usize>(&mut self, other: &mut FixedVec<T, P>) {
        let other_len = other.len;
        assert!(self.len + other_len <= N, "length overflow during `append`");

        unsafe { self.slots.bulk_move(self.len, &other.slots, other_len) };
        self.len += other_len;
        other.len = 0;
    }

    /// Moves every element out into a new vector, leaving `self` empty but
    /// still usable.
    ///
    /// This is one block copy of the live prefix: no per-element work.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut a: FixedVec<String, 4> = fixedvec!["1".into(), "2".into(), "3".into()];
    /// let b = a.take();
    /// assert_eq!(b, ["1", "2", "3"]);
    /// assert_eq!(a.len(), 0);
    /// ```
    #[inline]
    pub const fn take(&mut self) -> Self {
        let mut other = Self::new();
        other.append(self);
        other
    }

    /// Replaces the contents of `self` with the elements of `source`,
    /// leaving `source` empty.
    ///
    /// The current elements of `self` are dropped first.
    ///
    /// # Panics
    /// Panics if `source.len() > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut a: FixedVec<_, 4> = fixedvec![9, 9];
    /// let mut b: FixedVec<_, 8> = fixedvec![1, 2, 3];
    /// a.move_from(&mut b);
    /// assert_eq!(a, [1, 2, 3]);
    /// assert!(b.is_empty());
    /// ```
    #[inline]
    pub fn move_from<const P: usize>(&mut self, source: &mut FixedVec<T, P>) {
        self.clear();
        self.append(source);
    }

    /// Resizes in place so that `len == new_len`, filling with `f()`.
    ///
    /// # Panics
    /// Panics if `new_len > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec![1, 2, 3, 4];
    /// vec.resize_with(2, Default::default);
    /// assert_eq!(vec, [1, 2]);
    ///
    /// let mut p = 1;
    /// vec.resize_with(5, || { p *= 2; p });
    /// assert_eq!(vec, [1, 2, 2, 4, 8]);
    /// ```
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) {
        assert!(new_len <= N, "length overflow during `resize_with`");

        if new_len < self.len {
            self.truncate(new_len);
        } else {
            while self.len < new_len {
                unsafe { self.push_unchecked(f()) };
            }
        }
    }

    /// Returns a read-only cursor on the first element (or at the end if empty).
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let vec: FixedVec<_, 4> = fixedvec![10, 20, 30];
    /// let first = vec.cursor_front();
    /// let end = vec.cursor_end();
    /// assert_eq!(end - first, 3);
    /// assert_eq!((first + 2).get(), Some(&30));
    /// ```
    #[inline]
    pub const fn cursor_front(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, 0)
    }

    /// Returns a read-only cursor one past the last element.
    #[inline]
    pub const fn cursor_end(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, self.len)
    }

    /// Returns a read-only cursor at `index`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[inline]
    pub const fn cursor_at(&self, index: usize) -> Cursor<'_, T, N> {
        assert!(index <= self.len, "cursor position should be <= len");
        Cursor::new(self, index)
    }

    /// Returns a mutating cursor on the first element.
    #[inline]
    pub const fn cursor_front_mut(&mut self) -> CursorMut<'_, T, N> {
        CursorMut::new(self, 0)
    }

    /// Returns a mutating cursor one past the last element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 4> = fixedvec![1, 2];
    /// let mut cursor = vec.cursor_end_mut();
    /// cursor.insert(3);
    /// assert_eq!(cursor.get(), Some(&3));
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    #[inline]
    pub const fn cursor_end_mut(&mut self) -> CursorMut<'_, T, N> {
        let len = self.len;
        CursorMut::new(self, len)
    }

    /// Returns a mutating cursor at `index`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[inline]
    pub const fn cursor_at_mut(&mut self, index: usize) -> CursorMut<'_, T, N> {
        assert!(index <= self.len, "cursor position should be <= len");
        CursorMut::new(self, index)
    }
}

impl<T: Clone, const N: usize> FixedVec<T, N> {
    /// Creates a [`FixedVec`] with `num` copies of `elem`.
    ///
    /// # Panics
    /// Panics if `num > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVec;
    /// let vec: FixedVec<i32, 5> = FixedVec::from_elem(1, 4);
    /// assert_eq!(vec, [1, 1, 1, 1]);
    /// ```
    #[inline]
    pub fn from_elem(elem: T, num: usize) -> Self {
        assert!(num <= N, "length overflow during `from_elem`");

        let mut vec = Self::new();
        if num != 0 {
            for _ in 1..num {
                unsafe { vec.push_unchecked(elem.clone()) };
            }
            // The last slot takes `elem` itself: one clone fewer.
            unsafe { vec.push_unchecked(elem) };
        }
        vec
    }

    /// Resizes in place so that `len == new_len`, filling with clones of
    /// `value`.
    ///
    /// # Panics
    /// Panics if `new_len > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec!["hello"];
    /// vec.resize(3, "world");
    /// assert_eq!(vec, ["hello", "world", "world"]);
    ///
    /// vec.resize(1, "_");
    /// assert_eq!(vec, ["hello"]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T) {
        assert!(new_len <= N, "length overflow during `resize`");

        if new_len < self.len {
            self.truncate(new_len);
        } else if new_len > self.len {
            while self.len + 1 < new_len {
                unsafe { self.push_unchecked(value.clone()) };
            }
            unsafe { self.push_unchecked(value) };
        }
    }

    /// Inserts `count` clones of `value` at `index` and returns `index`.
    ///
    /// Inserting zero elements is a no-op.
    ///
    /// # Panics
    /// Panics if `index > len` or `len + count > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 6> = fixedvec![1, 4];
    /// vec.insert_n(1, 2, 0);
    /// assert_eq!(vec, [1, 0, 0, 4]);
    /// ```
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> usize {
        assert!(index <= self.len, "insertion index should be <= len");
        assert!(self.len + count <= N, "length overflow during `insert_n`");
        if count == 0 {
            return index;
        }
        let old_len = self.len;
        for _ in 1..count {
            unsafe { self.push_unchecked(value.clone()) };
        }
        unsafe { self.push_unchecked(value) };
        if index < old_len {
            self.as_mut_slice()[index..].rotate_right(count);
        }
        index
    }

    /// Inserts clones of every element of `other` at `index` and returns
    /// `index`.
    ///
    /// # Panics
    /// Panics if `index > len` or `len + other.len() > N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 6> = fixedvec!['a', 'd'];
    /// vec.insert_from_slice(1, &['b', 'c']);
    /// assert_eq!(vec, ['a', 'b', 'c', 'd']);
    /// ```
    pub fn insert_from_slice(&mut self, index: usize, other: &[T]) -> usize {
        assert!(
            self.len + other.len() <= N,
            "length overflow during `insert_from_slice`"
        );
        self.insert_iter(index, other.iter().cloned())
    }

    /// Appends clones of every element of `other`.
    ///
    /// # Panics
    /// Panics if the length exceeds `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 5> = fixedvec![1];
    /// vec.extend_from_slice(&[2, 3, 4]);
    /// assert_eq!(vec, [1, 2, 3, 4]);
    /// ```
    pub fn extend_from_slice(&mut self, other: &[T]) {
        assert!(
            self.len + other.len() <= N,
            "length overflow during `extend_from_slice`"
        );

        for item in other {
            unsafe { self.push_unchecked(item.clone()) };
        }
    }

    /// Appends clones of every element of `other`, or leaves `self`
    /// untouched if they do not all fit.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<_, 3> = fixedvec![1];
    /// assert!(vec.try_extend_from_slice(&[2, 3, 4]).is_err());
    /// assert_eq!(vec, [1]);
    /// vec.try_extend_from_slice(&[2, 3]).unwrap();
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    pub fn try_extend_from_slice(&mut self, other: &[T]) -> Result<(), CapacityError> {
        if self.len + other.len() > N {
            return Err(CapacityError::new(()));
        }
        for item in other {
            unsafe { self.push_unchecked(item.clone()) };
        }
        Ok(())
    }
}

impl<T: Copy, const N: usize> FixedVec<T, N> {
    /// Returns a copy of `self` made with a single block copy.
    ///
    /// Equivalent to [`Clone::clone`] for `Copy` elements, minus the
    /// per-element loop.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let a: FixedVec<u32, 8> = fixedvec![1, 2, 3];
    /// let mut b = a.copied();
    /// b.pop();
    /// assert_eq!(a, [1, 2, 3]);
    /// assert_eq!(b, [1, 2]);
    /// ```
    #[inline]
    pub const fn copied(&self) -> Self {
        let mut vec = Self::new();
        unsafe { vec.slots.bulk_copy(0, self.as_slice()) };
        vec.len = self.len;
        vec
    }

    /// Replaces the contents of `self` with a block copy of `source`.
    ///
    /// # Panics
    /// Panics if `source.len() > N`.
    #[inline]
    pub const fn copy_from<const P: usize>(&mut self, source: &FixedVec<T, P>) {
        assert!(source.len <= N, "length overflow during `copy_from`");
        // `T: Copy` has no drop glue: discarding the old elements is a count reset.
        unsafe { self.slots.bulk_copy(0, source.as_slice()) };
        self.len = source.len;
    }

    /// Appends a block copy of `other`.
    ///
    /// # Panics
    /// Panics if the length exceeds `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let mut vec: FixedVec<u8, 8> = fixedvec![b'a'];
    /// vec.extend_from_copy_slice(b"bcd");
    /// assert_eq!(vec, b"abcd");
    /// ```
    #[inline]
    pub const fn extend_from_copy_slice(&mut self, other: &[T]) {
        assert!(
            self.len + other.len() <= N,
            "length overflow during `extend_from_copy_slice`"
        );
        unsafe { self.slots.bulk_copy(self.len, other) };
        self.len += other.len();
    }
}

impl<T, const N: usize> Default for FixedVec<T, N> {
    /// Same as [`FixedVec::new`].
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for FixedVec<T, N> {
    /// Clones every live element in ascending order.
    ///
    /// ```
    /// # use fixed_vector::{FixedVec, fixedvec};
    /// let a: FixedVec<String, 4> = fixedvec!["x".into(), "y".into()];
    /// let mut b = a.clone();
    /// b.pop();
    /// assert_eq!(a, ["x", "y"]);
    /// assert_eq!(b, ["x"]);
    /// ```
    fn clone(&self) -> Self {
        let mut vec = Self::new();
        for item in self.as_slice() {
            unsafe { vec.push_unchecked(item.clone()) };
        }
        vec
    }

    /// Drops the current elements, then clones `source` in.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for item in source.as_slice() {
            unsafe { self.push_unchecked(item.clone()) };
        }
    }
}

impl<'a, T: 'a + Clone, const N: usize> Extend<&'a T> for FixedVec<T, N> {
    /// # Panics
    /// Insufficient capacity.
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item.clone());
        }
    }
}

impl<T, const N: usize> Extend<T> for FixedVec<T, N> {
    /// # Panics
    /// Insufficient capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVec;
    /// let mut vec: FixedVec<i32, 5> = FixedVec::new();
    /// vec.extend([1, 2, 3]);
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T, const N: usize> Deref for FixedVec<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for FixedVec<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedVec<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedVec<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> Borrow<[T]> for FixedVec<T, N> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> BorrowMut<[T]> for FixedVec<T, N> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for FixedVec<T, N> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &I::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for FixedVec<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Hashes like the slice of live elements, so it agrees with `Borrow<[T]>`.
impl<T: Hash, const N: usize> Hash for FixedVec<T, N> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVec<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T: Eq, const N: usize> Eq for FixedVec<T, N> {}

// Equality against the plain slice and array forms of the live elements.
macro_rules! eq_live_elements {
    ($([$($gen:tt)*] $rhs:ty),+ $(,)?) => {$(
        impl<T, U, const N: usize, $($gen)*> PartialEq<$rhs> for FixedVec<T, N>
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                self.as_slice() == &other[..]
            }
        }
    )+};
}

eq_live_elements! {
    [] [U],
    [] &[U],
    [] &mut [U],
    [const P: usize] [U; P],
    [const P: usize] &[U; P],
}

impl<T, U, const N: usize, const P: usize> PartialEq<FixedVec<U, P>> for FixedVec<T, N>
where
    T: PartialEq<U>,
{
    /// Equal iff both hold the same number of elements and they compare
    /// equal pairwise, in order.
    #[inline]
    fn eq(&self, other: &FixedVec<U, P>) -> bool {
        PartialEq::eq(self.as_slice(), other.as_slice())
    }
}

impl<T: Clone, const N: usize> From<&[T]> for FixedVec<T, N> {
    /// # Panics
    /// Insufficient capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVec;
    /// let vec = <FixedVec<i32, 3>>::from([1, 2, 3].as_slice());
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    fn from(value: &[T]) -> Self {
        assert!(value.len() <= N, "length overflow when `from`");
        let mut vec = Self::new();
        vec.extend_from_slice(value);
        vec
    }
}

impl<T: Clone, const N: usize> From<&mut [T]> for FixedVec<T, N> {
    #[inline]
    fn from(value: &mut [T]) -> Self {
        <Self as From<&[T]>>::from(value)
    }
}

impl<T, const N: usize, const P: usize> From<[T; P]> for FixedVec<T, N> {
    /// # Panics
    /// Insufficient capacity.
    #[inline]
    fn from(value: [T; P]) -> Self {
        Self::from_buf(value)
    }
}

impl<T, const N: usize> FromIterator<T> for FixedVec<T, N> {
    /// Pushes every element yielded by the iterator.
    ///
    /// # Panics
    /// Insufficient capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// # use fixed_vector::FixedVec;
    /// let vec: FixedVec<i32, 3> = (1..=3).collect();
    /// assert_eq!(vec, [1, 2, 3]);
    /// ```
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

/// An iterator that consumes a [`FixedVec`] and yields its items by value.
///
/// # Examples
///
/// ```
/// # use fixed_vector::{FixedVec, fixedvec};
/// let vec: FixedVec<&'static str, 3> = fixedvec!["1", "2", "3"];
/// let mut iter = vec.into_iter();
///
/// assert_eq!(iter.next(), Some("1"));
/// assert_eq!(iter.next_back(), Some("3"));
/// assert_eq!(iter.as_slice(), ["2"]);
/// ```
pub struct IntoIter<T, const N: usize> {
    vec: ManuallyDrop<FixedVec<T, N>>,
    index: usize,
}

impl<T, const N: usize> IntoIterator for FixedVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            vec: ManuallyDrop::new(self),
            index: 0,
        }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.vec.len {
            self.index += 1;
            // SAFETY: `index - 1` is live and is never read again.
            unsafe { Some(self.vec.slots.take_at(self.index - 1)) }
        } else {
            None
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let v = self.vec.len - self.index;
        (v, Some(v))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.index < self.vec.len {
            let last = self.vec.len - 1;
            self.vec.len = last;
            // SAFETY: the old last slot is live and now outside `index..len`.
            unsafe { Some(self.vec.slots.take_at(last)) }
        } else {
            None
        }
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let len = self.vec.len;
        unsafe { self.vec.slots.destroy_range(self.index, len) }
    }
}

impl<T, const N: usize> IntoIter<T, N> {
    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        &self.vec.as_slice()[self.index..]
    }

    /// The elements not yet yielded, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let index = self.index;
        &mut self.vec.as_mut_slice()[index..]
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
