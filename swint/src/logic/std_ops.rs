use core::ops::{BitAnd, BitOr, BitXor, Div, Mul, Not, Rem, Shl, Shr};

use crate::Word;

// These forward to the named operations; the division impls unwrap and
// panic on a zero divisor like the primitive integer ops do.

impl Mul for Word {
    type Output = Word;

    fn mul(self, rhs: Self) -> Word {
        Word::mul(self, rhs)
    }
}

impl Div for Word {
    type Output = Word;

    fn div(self, rhs: Self) -> Word {
        self.udiv(rhs).expect("division by zero")
    }
}

impl Rem for Word {
    type Output = Word;

    fn rem(self, rhs: Self) -> Word {
        self.urem(rhs).expect("division by zero")
    }
}

impl BitAnd for Word {
    type Output = Word;

    fn bitand(self, rhs: Self) -> Word {
        self.and(rhs)
    }
}

impl BitOr for Word {
    type Output = Word;

    fn bitor(self, rhs: Self) -> Word {
        self.or(rhs)
    }
}

impl BitXor for Word {
    type Output = Word;

    fn bitxor(self, rhs: Self) -> Word {
        self.xor(rhs)
    }
}

impl Not for Word {
    type Output = Word;

    fn not(self) -> Word {
        self.not_()
    }
}

impl Shl<u32> for Word {
    type Output = Word;

    fn shl(self, s: u32) -> Word {
        Word::shl(self, s)
    }
}

impl Shr<u32> for Word {
    type Output = Word;

    fn shr(self, s: u32) -> Word {
        Word::shr(self, s)
    }
}
