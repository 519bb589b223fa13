use std::io::{IoSlice, Write};

use crate::FixedVec;

/// Write is implemented for `FixedVec<u8, N>` by appending to the vector.
///
/// Writes are short when the remaining capacity is smaller than the buffer;
/// once the vector is full, [`Write::write`] returns `Ok(0)`.
///
/// # Examples
///
/// ```
/// # use fixed_vector::FixedVec;
/// use std::io::Write;
///
/// let mut out: FixedVec<u8, 16> = FixedVec::new();
/// write!(out, "{}-{}", 4, 2).unwrap();
/// assert_eq!(out, b"4-2");
/// ```
impl<const N: usize> Write for FixedVec<u8, N> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let num = core::cmp::min(self.remaining(), buf.len());
        self.extend_from_copy_slice(&buf[..num]);
        Ok(num)
    }

    #[inline(always)]
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }

    #[inline]
    fn write_vectored(&mut self, bufs: &[IoSlice<'_>]) -> std::io::Result<usize> {
        let mut num = 0;
        for buf in bufs {
            if self.is_full() {
                break;
            }
            num += self.write(buf)?;
        }
        Ok(num)
    }
}
