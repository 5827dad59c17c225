use std::fmt::{Display, Formatter, Write};
use std::str::FromStr;

use tracing::trace;

use crate::bound::Bound;
use crate::error::Error;
use crate::initializer::Initializer;
use crate::iter::Iter;
use crate::options::{FormatOptions, ParseOptions};
use crate::range::arith::{difference, intersection, union};
use crate::range::{covers, Range};


/// Number of integers in a range set.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Length {
    Finite(u128),
    Infinite
}


impl Display for Length {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Length::Finite(n) => write!(f, "{}", n),
            Length::Infinite => f.write_str("inf")
        }
    }
}


/// A set of integers kept as a canonical list of ranges.
///
/// The list is always sorted, with no two ranges overlapping or touching,
/// so two sets holding the same integers compare equal and print the same.
///
/// `append`, `subtract` and `intersect` update the set in place and
/// return `&mut Self` for chaining. A failed call leaves the set as it was.
/// `union`, `difference` and `intersection` are their non-mutating
/// counterparts.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct MultiRange {
    ranges: Vec<Range>
}


/// Shorthand for [`MultiRange::try_from`].
pub fn multirange<'a>(init: impl Into<Initializer<'a>>) -> Result<MultiRange, Error> {
    MultiRange::try_from(init.into())
}


impl<'a> TryFrom<Initializer<'a>> for MultiRange {
    type Error = Error;

    fn try_from(value: Initializer<'a>) -> Result<Self, Self::Error> {
        Ok(Self {
            ranges: value.into_ranges(&ParseOptions::default())?
        })
    }
}


impl TryFrom<&str> for MultiRange {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse_with(value, &ParseOptions::default())
    }
}


impl FromStr for MultiRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &ParseOptions::default())
    }
}


impl From<Range> for MultiRange {
    fn from(value: Range) -> Self {
        Self {
            ranges: vec![value]
        }
    }
}


impl MultiRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Self, Error> {
        Ok(Self {
            ranges: crate::parse::parse(text, options)?
        })
    }

    fn operand<'a>(init: impl Into<Initializer<'a>>) -> Result<Vec<Range>, Error> {
        init.into().into_ranges(&ParseOptions::default())
    }

    fn replace(&mut self, op: &'static str, ranges: Vec<Range>) -> &mut Self {
        trace!(op, segments = ranges.len(), "range set updated");
        self.ranges = ranges;
        self
    }

    pub fn append<'a>(&mut self, init: impl Into<Initializer<'a>>) -> Result<&mut Self, Error> {
        let other = Self::operand(init)?;
        let ranges = union(self.ranges.iter().copied(), other).collect();
        Ok(self.replace("append", ranges))
    }

    pub fn subtract<'a>(&mut self, init: impl Into<Initializer<'a>>) -> Result<&mut Self, Error> {
        let other = Self::operand(init)?;
        let ranges = difference(self.ranges.iter().copied(), other).collect();
        Ok(self.replace("subtract", ranges))
    }

    pub fn intersect<'a>(&mut self, init: impl Into<Initializer<'a>>) -> Result<&mut Self, Error> {
        let other = Self::operand(init)?;
        let ranges = intersection(self.ranges.iter().copied(), other).collect();
        Ok(self.replace("intersect", ranges))
    }

    pub fn union<'a>(&self, init: impl Into<Initializer<'a>>) -> Result<Self, Error> {
        let mut result = self.clone();
        result.append(init)?;
        Ok(result)
    }

    pub fn difference<'a>(&self, init: impl Into<Initializer<'a>>) -> Result<Self, Error> {
        let mut result = self.clone();
        result.subtract(init)?;
        Ok(result)
    }

    pub fn intersection<'a>(&self, init: impl Into<Initializer<'a>>) -> Result<Self, Error> {
        let mut result = self.clone();
        result.intersect(init)?;
        Ok(result)
    }

    /// Whether every integer of `init` is a member of this set.
    pub fn has<'a>(&self, init: impl Into<Initializer<'a>>) -> Result<bool, Error> {
        let other = Self::operand(init)?;
        Ok(other.iter().all(|r| covers(&self.ranges, r)))
    }

    pub fn contains(&self, value: i64) -> bool {
        covers(&self.ranges, &Range::single(value))
    }

    pub fn equals<'a>(&self, init: impl Into<Initializer<'a>>) -> Result<bool, Error> {
        let other = Self::operand(init)?;
        Ok(self.ranges == other)
    }

    pub fn len(&self) -> Length {
        let mut len = 0;
        for r in self.ranges.iter() {
            match r.len() {
                Some(n) => len += n,
                None => return Length::Infinite
            }
        }
        Length::Finite(len)
    }

    /// Number of ranges in the canonical form.
    #[inline]
    pub fn segment_len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn is_unbounded(&self) -> bool {
        self.ranges.first().map_or(false, |r| r.min() == Bound::NegInf)
            || self.ranges.last().map_or(false, |r| r.max() == Bound::PosInf)
    }

    pub fn min(&self) -> Option<Bound> {
        self.ranges.first().map(|r| r.min())
    }

    pub fn max(&self) -> Option<Bound> {
        self.ranges.last().map(|r| r.max())
    }

    /// Removes and returns the smallest member.
    pub fn shift(&mut self) -> Result<Option<i64>, Error> {
        let Some(first) = self.ranges.first_mut() else {
            return Ok(None)
        };
        let range = *first;
        let value = Range::min(&range).finite().ok_or(Error::Unbounded)?;
        if Range::max(&range) == value {
            self.ranges.remove(0);
        } else {
            first.set_min(Bound::Finite(value + 1));
        }
        Ok(Some(value))
    }

    /// Removes and returns the largest member.
    pub fn pop(&mut self) -> Result<Option<i64>, Error> {
        let Some(last) = self.ranges.last_mut() else {
            return Ok(None)
        };
        let range = *last;
        let value = Range::max(&range).finite().ok_or(Error::Unbounded)?;
        if Range::min(&range) == value {
            self.ranges.pop();
        } else {
            last.set_max(Bound::Finite(value - 1));
        }
        Ok(Some(value))
    }

    /// The `index`-th smallest member, counting from zero.
    ///
    /// Returns `None` past the end or if the set has no smallest member.
    pub fn at(&self, index: usize) -> Option<i64> {
        let mut rest = index as u128;
        for r in self.ranges.iter() {
            let min = r.min().finite()?;
            match r.len() {
                Some(len) if rest >= len => rest -= len,
                _ => return i64::try_from(min as i128 + rest as i128).ok()
            }
        }
        None
    }

    /// Copy of the canonical range list.
    pub fn ranges(&self) -> Vec<Range> {
        self.ranges.clone()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Range] {
        &self.ranges
    }

    pub fn iter(&self) -> Result<Iter<'_>, Error> {
        Iter::new(&self.ranges)
    }

    pub fn to_vec(&self) -> Result<Vec<i64>, Error> {
        Ok(self.iter()?.collect())
    }

    /// Text form with custom formatting; see [`FormatOptions`].
    pub fn display_with<'a>(&'a self, options: &FormatOptions) -> DisplayWith<'a> {
        DisplayWith {
            set: self,
            options: *options
        }
    }

    pub fn to_string_with(&self, options: &FormatOptions) -> String {
        self.display_with(options).to_string()
    }

    fn write(&self, f: &mut Formatter<'_>, options: &FormatOptions) -> std::fmt::Result {
        let mut first = true;
        for r in self.ranges.iter() {
            let individual = r.len().map_or(false, |len| len <= options.individual_threshold as u128);
            match (r.min().finite(), r.max().finite()) {
                (Some(min), Some(max)) if individual => {
                    for value in min..=max {
                        separate(f, &mut first)?;
                        write!(f, "{}", Bound::Finite(value))?;
                    }
                },
                _ => {
                    separate(f, &mut first)?;
                    write!(f, "{}", r)?;
                }
            }
        }
        Ok(())
    }
}


fn separate(f: &mut Formatter<'_>, first: &mut bool) -> std::fmt::Result {
    if *first {
        *first = false;
        Ok(())
    } else {
        f.write_char(',')
    }
}


pub struct DisplayWith<'a> {
    set: &'a MultiRange,
    options: FormatOptions
}


impl<'a> Display for DisplayWith<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.set.write(f, &self.options)
    }
}


impl Display for MultiRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write(f, &FormatOptions::default())
    }
}
