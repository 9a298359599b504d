use crate::Word;

/// # Division
///
/// Terminology: we use "quo" for quotient, "rem" for remainder, and "div"
/// for divisor. That leaves a name clash with dividend, so we use the
/// shorthand "duo", from the fact that the dividend is subtracted from in
/// the internal algorithm until it becomes the remainder, serving two
/// purposes.
impl Word {
    /// Unsigned-divides `duo` by `div` using only addition, subtraction,
    /// and comparison, returning `(quotient, remainder)`. Returns `None`
    /// if `div` is zero.
    ///
    /// A doubling chain of `div` is built up until another doubling would
    /// exceed `duo`, then walked back down, subtracting every double that
    /// still fits into what remains of `duo` and accumulating its power of
    /// two into the quotient.
    #[must_use]
    pub const fn udivide(duo: Self, div: Self) -> Option<(Self, Self)> {
        if div.0 == 0 {
            return None
        }
        let mut duo = duo.0;
        let mut d = div.0;
        // parallel chains: `dbl[i]` is `div` doubled `i` times, `pow[i]` is 2^i
        let mut dbl = [0u32; 24];
        let mut pow = [0u32; 24];
        pow[0] = 1;
        let mut i = 0;
        loop {
            dbl[i] = d;
            let next = d.wrapping_add(d);
            // `next < d` is the wraparound stop
            if next > duo || next < d {
                break
            }
            pow[i + 1] = pow[i] + pow[i];
            d = next;
            i += 1;
        }
        let mut quo = 0;
        loop {
            if duo >= dbl[i] {
                quo += pow[i];
                duo -= dbl[i];
            }
            if i == 0 {
                break
            }
            i -= 1;
        }
        Some((Word(quo), Word(duo)))
    }

    /// Returns the quotient of `self` unsigned-divided by `div`, or `None`
    /// if `div` is zero
    #[must_use]
    pub const fn udiv(self, div: Self) -> Option<Self> {
        if div.0 == 1 {
            return Some(self)
        }
        match Self::udivide(self, div) {
            Some((quo, _)) => Some(quo),
            None => None,
        }
    }

    /// Returns the remainder of `self` unsigned-divided by `div`, or
    /// `None` if `div` is zero
    #[must_use]
    pub const fn urem(self, div: Self) -> Option<Self> {
        match Self::udivide(self, div) {
            Some((_, rem)) => Some(rem),
            None => None,
        }
    }
}
