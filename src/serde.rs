use core::marker::PhantomData;

use serde_core::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
    ser::SerializeSeq,
};

use crate::FixedVec;

impl<T: Serialize, const N: usize> Serialize for FixedVec<T, N> {
    /// Serialize a `FixedVec` as a sequence of its live elements.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for FixedVec<T, N> {
    /// Deserialize a `FixedVec` from a sequence.
    ///
    /// Fails, rather than panics, if the sequence holds more than `N` elements.
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FixedVecVisitor<T, const N: usize> {
            _marker: PhantomData<T>,
        }

        impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for FixedVecVisitor<T, N> {
            type Value = FixedVec<T, N>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                write!(formatter, "a sequence of at most {N} elements")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                if let Some(hint) = seq.size_hint() {
                    if hint > N {
                        return Err(de::Error::invalid_length(hint, &self));
                    }
                }

                let mut vec = FixedVec::new();

                while let Some(element) = seq.next_element()? {
                    if let Err(_overflow) = vec.try_push(element) {
                        return Err(de::Error::custom(format_args!(
                            "FixedVec capacity {N} exceeded while deserializing sequence"
                        )));
                    }
                }

                Ok(vec)
            }
        }

        deserializer.deserialize_seq(FixedVecVisitor {
            _marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{FixedVec, fixedvec};
    use std::string::{String, ToString};

    #[test]
    fn fixedvec_json() {
        let v: FixedVec<_, 5> = fixedvec![1, 2, 3];
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let r: FixedVec<i32, 5> = serde_json::from_str(&s).unwrap();
        assert_eq!(r, [1, 2, 3]);
    }

    #[test]
    fn non_trivial_elements_json() {
        let v: FixedVec<String, 3> = fixedvec!["a".to_string(), "b".to_string()];
        let s = serde_json::to_string(&v).unwrap();
        let r: FixedVec<String, 3> = serde_json::from_str(&s).unwrap();
        assert_eq!(r, v);
    }

    #[test]
    fn overflow_is_an_error() {
        let r: Result<FixedVec<i32, 2>, _> = serde_json::from_str("[1,2,3]");
        let err = r.unwrap_err().to_string();
        assert!(err.contains("capacity 2 exceeded"), "{err}");
    }
}
