/// Compile-time knowledge about zero sized types.
///
/// For ZSTs no bytes are ever copied: only the live count moves.
pub(crate) trait IsZST {
    const IS_ZST: bool;
}

impl<T> IsZST for T {
    const IS_ZST: bool = core::mem::size_of::<T>() == 0;
}

/// Produce a value of a zero sized type.
///
/// # Safety
/// `T` must be a ZST whose values are all interchangeable.
#[inline(always)]
pub(crate) const unsafe fn zst_init<T>() -> T {
    debug_assert!(core::mem::size_of::<T>() == 0);
    unsafe { core::ptr::NonNull::<T>::dangling().as_ptr().read() }
}

/// Marks the unlikely branch of a hot operation.
#[cold]
#[inline(always)]
pub(crate) const fn cold_path() {}

#[inline(always)]
pub(crate) fn split_range_bound(
    src: &impl core::ops::RangeBounds<usize>,
    len: usize,
) -> (usize, usize) {
    let start = match src.start_bound() {
        core::ops::Bound::Included(&i) => i,
        core::ops::Bound::Excluded(&i) => i + 1,
        core::ops::Bound::Unbounded => 0,
    };

    let end = match src.end_bound() {
        core::ops::Bound::Included(&i) => i + 1,
        core::ops::Bound::Excluded(&i) => i,
        core::ops::Bound::Unbounded => len,
    };
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_bounds_are_normalised() {
        assert_eq!(split_range_bound(&(..), 7), (0, 7));
        assert_eq!(split_range_bound(&(2..), 7), (2, 7));
        assert_eq!(split_range_bound(&(..=3), 7), (0, 4));
        assert_eq!(split_range_bound(&(1..5), 7), (1, 5));
    }

    #[test]
    fn zst_detection() {
        assert!(<() as IsZST>::IS_ZST);
        assert!(<[u64; 0] as IsZST>::IS_ZST);
        assert!(!<u8 as IsZST>::IS_ZST);
    }
}
