//! Error type for the fallible `try_*` operations.

use core::{error::Error, fmt};

const CAPACITY_EXCEEDED: &str = "insufficient capacity";

/// The container was full: the operation did not modify it.
///
/// The rejected element is handed back so it is never silently dropped.
///
/// # Examples
///
/// ```
/// # use fixed_vector::{FixedVec, CapacityError};
/// let mut vec: FixedVec<String, 1> = FixedVec::new();
/// vec.try_push("a".to_string()).unwrap();
///
/// let err: CapacityError<String> = vec.try_push("b".to_string()).unwrap_err();
/// assert_eq!(err.element(), "b");
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapacityError<T = ()> {
    element: T,
}

impl<T> CapacityError<T> {
    /// Creates a new `CapacityError` carrying the rejected `element`.
    #[inline]
    pub const fn new(element: T) -> Self {
        Self { element }
    }

    /// Extracts the element that did not fit.
    #[inline]
    pub fn element(self) -> T {
        self.element
    }

    /// Drops the carried element, keeping only the error.
    #[inline]
    pub fn simplify(self) -> CapacityError {
        CapacityError { element: () }
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(CAPACITY_EXCEEDED)
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CapacityError: {CAPACITY_EXCEEDED}")
    }
}

impl<T> Error for CapacityError<T> {}

#[cfg(test)]
mod tests {
    use super::CapacityError;
    use core::error::Error;
    use std::string::{String, ToString};

    fn describe(e: &dyn Error) -> String {
        e.to_string()
    }

    #[test]
    fn displays_and_hands_back_element() {
        let err = CapacityError::new(42u8);
        assert_eq!(describe(&err), "insufficient capacity");
        assert_eq!(std::format!("{err:?}"), "CapacityError: insufficient capacity");
        assert_eq!(err.element(), 42);
    }

    #[test]
    fn simplify_discards_element() {
        let err = CapacityError::new("payload".to_string());
        assert_eq!(err.simplify(), CapacityError::new(()));
    }
}
