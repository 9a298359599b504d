use crate::Word;

/// `rand_support` functions
impl Word {
    // this is tested by `testcrate/tests/rand.rs`

    /// Generates a uniformly random `Word` using a `rand_core::RngCore`
    /// random number generator, masking the generator output down to 24
    /// bits.
    ///
    /// ```
    /// // Example using the `rand_xoshiro` crate.
    /// use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
    /// use swint::Word;
    ///
    /// let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    /// let w = Word::rand_using(&mut rng);
    /// assert!(w <= Word::MAX);
    /// ```
    pub fn rand_using<R>(rng: &mut R) -> Word
    where
        R: rand_core::RngCore,
    {
        Word::masked(rng.next_u32())
    }
}
