use std::fmt::{Display, Formatter};


/// A point on the extended integer line.
///
/// Variant order defines the ordering: `NegInf` sorts below every finite
/// value and `PosInf` above.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Bound {
    NegInf,
    Finite(i64),
    PosInf
}


impl Bound {
    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self, Bound::Finite(_))
    }

    #[inline]
    pub fn finite(&self) -> Option<i64> {
        match self {
            Bound::Finite(n) => Some(*n),
            _ => None
        }
    }

    /// `self + 1`, absorbing at infinity.
    ///
    /// `i64::MAX + 1` saturates to `PosInf`, so adjacency checks against
    /// the last representable integer still hold.
    #[inline]
    pub fn succ(self) -> Bound {
        match self {
            Bound::Finite(n) => n.checked_add(1).map_or(Bound::PosInf, Bound::Finite),
            inf => inf
        }
    }

    /// `self - 1`, absorbing at infinity.
    #[inline]
    pub fn pred(self) -> Bound {
        match self {
            Bound::Finite(n) => n.checked_sub(1).map_or(Bound::NegInf, Bound::Finite),
            inf => inf
        }
    }
}


impl From<i64> for Bound {
    #[inline]
    fn from(value: i64) -> Self {
        Bound::Finite(value)
    }
}


impl PartialEq<i64> for Bound {
    fn eq(&self, other: &i64) -> bool {
        *self == Bound::Finite(*other)
    }
}


/// Negative values are parenthesized, matching the text syntax.
/// `-inf` and `+inf` are diagnostic forms only; the parser does not accept them.
impl Display for Bound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::NegInf => f.write_str("-inf"),
            Bound::PosInf => f.write_str("+inf"),
            Bound::Finite(n) if *n < 0 => write!(f, "({})", n),
            Bound::Finite(n) => write!(f, "{}", n)
        }
    }
}
