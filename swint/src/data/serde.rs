use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::Word;

/// A `serde_support` impl
impl Serialize for Word {
    /// Serializes the raw value as a `u32`
    ///
    /// ```
    /// // Example using the `ron` crate.
    /// use swint::{word, Word};
    ///
    /// let w = word(0xabcdef);
    /// assert_eq!(ron::to_string(&w).unwrap(), "11259375");
    /// assert_eq!(ron::from_str::<Word>("11259375").unwrap(), w);
    /// ```
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.get())
    }
}

/// A `serde_support` impl
impl<'de> Deserialize<'de> for Word {
    /// Deserializes a `u32` and re-checks the 24-bit invariant, rejecting
    /// out-of-range input through the deserializer's error path
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let x = u32::deserialize(deserializer)?;
        match Word::new(x) {
            Some(w) => Ok(w),
            None => Err(de::Error::custom("value does not fit in a 24-bit `Word`")),
        }
    }
}
