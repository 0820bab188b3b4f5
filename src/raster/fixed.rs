//! 16.16 fixed point for line slopes

/// Signed 16.16 fixed-point value.
///
/// Division truncates toward zero and [`Fixed16::scale`] floors through an
/// arithmetic shift, so a slope stepped along a line lands on exactly the same
/// pixels on every target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fixed16(i32);

impl Fixed16 {
    pub const FRAC_BITS: u32 = 16;
    pub const ONE: Fixed16 = Fixed16(1 << Self::FRAC_BITS);
    pub const ZERO: Fixed16 = Fixed16(0);

    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    /// `num / den`, or `None` when `den` is zero or the quotient overflows.
    pub fn ratio(num: i32, den: i32) -> Option<Self> {
        if den == 0 {
            return None;
        }
        let quotient = (i64::from(num) << Self::FRAC_BITS) / i64::from(den);
        i32::try_from(quotient).ok().map(Self)
    }

    /// Whole part of `steps * self`
    pub fn scale(self, steps: i32) -> i32 {
        ((i64::from(steps) * i64::from(self.0)) >> Self::FRAC_BITS) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_truncates_toward_zero() {
        assert_eq!(Fixed16::ratio(1, 3).unwrap().raw(), 21845);
        assert_eq!(Fixed16::ratio(-1, 3).unwrap().raw(), -21845);
        assert_eq!(Fixed16::ratio(3, 10).unwrap().raw(), 19660);
        assert_eq!(Fixed16::ratio(4, 4), Some(Fixed16::ONE));
        assert_eq!(Fixed16::ratio(1, 0), None);
    }

    #[test]
    fn scale_floors() {
        let third = Fixed16::ratio(1, 3).unwrap();
        assert_eq!(third.scale(3), 0);
        assert_eq!(third.scale(4), 1);

        let neg_half = Fixed16::ratio(-5, 10).unwrap();
        assert_eq!(neg_half.scale(1), -1);
        assert_eq!(neg_half.scale(3), -2);
        assert_eq!(neg_half.scale(5), -3);
        assert_eq!(Fixed16::ZERO.scale(100), 0);
    }
}
