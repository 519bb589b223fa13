//! Raw slot storage backing [`FixedVec`](crate::FixedVec).
//!
//! `Slots<T, N>` is `N` correctly aligned, uninitialized places for a `T`.
//! It knows nothing about which slots are live: the owning container keeps
//! that count and calls these primitives only on slots it knows to be vacant
//! (construct) or live (destroy, read). Every `T` that enters or leaves the
//! inline block passes through this module.

use core::{
    mem::{self, MaybeUninit},
    ptr, slice,
};

use crate::utils::IsZST;

pub(crate) struct Slots<T, const N: usize> {
    data: [MaybeUninit<T>; N],
}

impl<T, const N: usize> Slots<T, N> {
    /// A block with every slot vacant. No `T` is constructed.
    #[inline(always)]
    pub(crate) const fn new() -> Self {
        Self {
            data: [const { MaybeUninit::uninit() }; N],
        }
    }

    #[inline(always)]
    pub(crate) const fn as_ptr(&self) -> *const T {
        &raw const self.data as *const T
    }

    #[inline(always)]
    pub(crate) const fn as_mut_ptr(&mut self) -> *mut T {
        &raw mut self.data as *mut T
    }

    /// Moves `value` into slot `index` and returns a reference to it.
    ///
    /// # Safety
    /// `index < N` and the slot is vacant (otherwise the old value leaks).
    #[inline(always)]
    pub(crate) const unsafe fn construct_at(&mut self, index: usize, value: T) -> &mut T {
        debug_assert!(index < N);
        unsafe {
            let slot = self.as_mut_ptr().add(index);
            if T::IS_ZST {
                mem::forget(value);
            } else {
                ptr::write(slot, value);
            }
            &mut *slot
        }
    }

    /// Runs the destructor of the value in slot `index`, leaving it vacant.
    ///
    /// Compiles to nothing when `T` has no drop glue.
    ///
    /// # Safety
    /// The slot is live and is not read again until reconstructed.
    #[inline(always)]
    pub(crate) unsafe fn destroy_at(&mut self, index: usize) {
        debug_assert!(index < N);
        if mem::needs_drop::<T>() {
            unsafe { ptr::drop_in_place(self.as_mut_ptr().add(index)) }
        }
    }

    /// Destroys every value in `start..end`.
    ///
    /// # Safety
    /// Every slot in the range is live and `end <= N`.
    #[inline]
    pub(crate) unsafe fn destroy_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= N);
        if mem::needs_drop::<T>() && start < end {
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                    self.as_mut_ptr().add(start),
                    end - start,
                ));
            }
        }
    }

    /// Moves the value out of slot `index`, leaving it vacant.
    ///
    /// # Safety
    /// The slot is live and is treated as vacant afterwards.
    #[inline(always)]
    pub(crate) const unsafe fn take_at(&mut self, index: usize) -> T {
        debug_assert!(index < N);
        unsafe { ptr::read(self.as_ptr().add(index)) }
    }

    /// Shifts `count` slots starting at `from` so that they start at `to`.
    ///
    /// The ranges may overlap. Ownership moves with the bytes: the source
    /// slots not covered by the destination become vacant.
    ///
    /// # Safety
    /// Both ranges lie within `0..N` and every source slot is live.
    #[inline(always)]
    pub(crate) const unsafe fn shift(&mut self, from: usize, to: usize, count: usize) {
        debug_assert!(from + count <= N && to + count <= N);
        if !T::IS_ZST && count > 0 {
            unsafe {
                let base = self.as_mut_ptr();
                ptr::copy(base.add(from), base.add(to), count);
            }
        }
    }

    /// Moves the first `len` values of `src` into slots `at..at + len` of `self`
    /// with one block copy.
    ///
    /// # Safety
    /// - `src[..len]` is live and is treated as vacant afterwards.
    /// - `self[at..at + len]` is vacant and `at + len <= N`.
    #[inline(always)]
    pub(crate) const unsafe fn bulk_move<const P: usize>(
        &mut self,
        at: usize,
        src: &Slots<T, P>,
        len: usize,
    ) {
        debug_assert!(at + len <= N && len <= P);
        if !T::IS_ZST {
            unsafe { ptr::copy_nonoverlapping(src.as_ptr(), self.as_mut_ptr().add(at), len) }
        }
    }

    /// Moves `len` values from a raw pointer into slots `at..at + len`.
    ///
    /// # Safety
    /// `src` points to `len` live values that the caller gives up ownership of,
    /// and `self[at..at + len]` is vacant with `at + len <= N`.
    #[inline(always)]
    pub(crate) const unsafe fn bulk_move_from_ptr(&mut self, at: usize, src: *const T, len: usize) {
        debug_assert!(at + len <= N);
        if !T::IS_ZST {
            unsafe { ptr::copy_nonoverlapping(src, self.as_mut_ptr().add(at), len) }
        }
    }

    /// The live prefix `0..len` as a slice.
    ///
    /// # Safety
    /// Every slot in `0..len` is live and `len <= N`.
    #[inline(always)]
    pub(crate) const unsafe fn live(&self, len: usize) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), len) }
    }

    /// The live prefix `0..len` as a mutable slice.
    ///
    /// # Safety
    /// Every slot in `0..len` is live and `len <= N`.
    #[inline(always)]
    pub(crate) const unsafe fn live_mut(&mut self, len: usize) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    /// The vacant suffix `len..N`.
    #[inline(always)]
    pub(crate) const fn vacant_mut(&mut self, len: usize) -> &mut [MaybeUninit<T>] {
        let (_, tail) = self.data.split_at_mut(len);
        tail
    }
}

impl<T: Copy, const N: usize> Slots<T, N> {
    /// Copies the first `len` values of `src` into slots `at..at + len`.
    ///
    /// `T: Copy` guarantees the copy has no side effects and that neither
    /// side needs a destructor, so one block copy stands in for `len` clones.
    ///
    /// # Safety
    /// `src[..len]` is live, `self[at..at + len]` is vacant and `at + len <= N`.
    #[inline(always)]
    pub(crate) const unsafe fn bulk_copy(&mut self, at: usize, src: &[T]) {
        debug_assert!(at + src.len() <= N);
        if !T::IS_ZST {
            unsafe { ptr::copy_nonoverlapping(src.as_ptr(), self.as_mut_ptr().add(at), src.len()) }
        }
    }
}
