use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

use crate::bound::Bound;
use crate::error::Error;


pub(crate) mod arith;


/// Closed interval `[min, max]` over the extended integer line.
///
/// Ordering is by `min`, then by `max`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Range {
    min: Bound,
    max: Bound
}


impl Range {
    pub fn new(min: impl Into<Bound>, max: impl Into<Bound>) -> Result<Self, Error> {
        let min = min.into();
        let max = max.into();
        if min > max || min == Bound::PosInf || max == Bound::NegInf {
            return Err(Error::InvalidRange { min, max })
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub(crate) fn new_unchecked(min: Bound, max: Bound) -> Self {
        debug_assert!(min <= max && min != Bound::PosInf && max != Bound::NegInf);
        Self { min, max }
    }

    #[inline]
    pub fn single(value: i64) -> Self {
        Self::new_unchecked(Bound::Finite(value), Bound::Finite(value))
    }

    /// `(-inf, +inf)`
    #[inline]
    pub fn full() -> Self {
        Self::new_unchecked(Bound::NegInf, Bound::PosInf)
    }

    #[inline]
    pub fn min(&self) -> Bound {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Bound {
        self.max
    }

    #[inline]
    pub fn is_unbounded(&self) -> bool {
        !self.min.is_finite() || !self.max.is_finite()
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        let value = Bound::Finite(value);
        self.min <= value && value <= self.max
    }

    /// Number of integers in the range, `None` if it is unbounded.
    pub fn len(&self) -> Option<u128> {
        let min = self.min.finite()?;
        let max = self.max.finite()?;
        Some((max as i128 - min as i128) as u128 + 1)
    }

    pub(crate) fn set_min(&mut self, min: Bound) {
        debug_assert!(min <= self.max);
        self.min = min
    }

    pub(crate) fn set_max(&mut self, max: Bound) {
        debug_assert!(self.min <= max);
        self.max = max
    }
}


impl TryFrom<RangeInclusive<i64>> for Range {
    type Error = Error;

    fn try_from(value: RangeInclusive<i64>) -> Result<Self, Self::Error> {
        let (min, max) = value.into_inner();
        Self::new(min, max)
    }
}


impl TryFrom<(i64, i64)> for Range {
    type Error = Error;

    fn try_from(value: (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}


impl Display for Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.min, self.max) {
            (Bound::NegInf, Bound::PosInf) => f.write_str("-"),
            (Bound::NegInf, max) => write!(f, "-{}", max),
            (min, Bound::PosInf) => write!(f, "{}-", min),
            (min, max) if min == max => write!(f, "{}", min),
            (min, max) => write!(f, "{}-{}", min, max)
        }
    }
}


/// Brings an arbitrary list of ranges into canonical form:
/// sorted, disjoint and with no two ranges touching.
pub fn normalize(mut ranges: Vec<Range>) -> Vec<Range> {
    ranges.sort_unstable();
    arith::seal(ranges).collect()
}


/// Checks that `ranges` is in canonical form.
pub fn is_normalized(ranges: &[Range]) -> bool {
    ranges.windows(2).all(|w| w[0].max.succ() < w[1].min)
}


/// Whether `range` lies entirely inside one of the canonical `ranges`.
pub(crate) fn covers(ranges: &[Range], range: &Range) -> bool {
    let idx = ranges.partition_point(|r| r.max < range.min);
    ranges.get(idx).map_or(false, |r| r.min <= range.min && range.max <= r.max)
}
