use std::ops::RangeInclusive;

use crate::bound::Bound;
use crate::error::Error;
use crate::multirange::MultiRange;
use crate::options::ParseOptions;
use crate::parse::parse;
use crate::range::{normalize, Range};


/// Anything a [`MultiRange`] can be built from or combined with.
#[derive(Debug, Clone)]
pub enum Initializer<'a> {
    Text(&'a str),
    Int(i64),
    Range(Range),
    List(Vec<Item>),
    Set(&'a MultiRange)
}


/// Element of [`Initializer::List`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Item {
    Int(i64),
    Pair(Bound, Bound)
}


impl<'a> Initializer<'a> {
    /// Converts the input into an owned, normalized range list.
    pub fn into_ranges(self, options: &ParseOptions) -> Result<Vec<Range>, Error> {
        match self {
            Initializer::Text(text) => parse(text, options),
            Initializer::Int(value) => Ok(vec![Range::single(value)]),
            Initializer::Range(range) => Ok(vec![range]),
            Initializer::List(items) => {
                let ranges = items.into_iter().map(|item| match item {
                    Item::Int(value) => Ok(Range::single(value)),
                    Item::Pair(min, max) => Range::new(min, max)
                }).collect::<Result<Vec<_>, _>>()?;
                Ok(normalize(ranges))
            },
            Initializer::Set(set) => Ok(set.as_slice().to_vec())
        }
    }
}


impl<'a> From<&'a str> for Initializer<'a> {
    fn from(value: &'a str) -> Self {
        Initializer::Text(value)
    }
}


impl<'a> From<&'a String> for Initializer<'a> {
    fn from(value: &'a String) -> Self {
        Initializer::Text(value.as_str())
    }
}


impl From<i64> for Initializer<'_> {
    fn from(value: i64) -> Self {
        Initializer::Int(value)
    }
}


impl From<Range> for Initializer<'_> {
    fn from(value: Range) -> Self {
        Initializer::Range(value)
    }
}


impl From<Vec<Item>> for Initializer<'_> {
    fn from(value: Vec<Item>) -> Self {
        Initializer::List(value)
    }
}


impl From<&[Item]> for Initializer<'_> {
    fn from(value: &[Item]) -> Self {
        Initializer::List(value.to_vec())
    }
}


impl From<Vec<i64>> for Initializer<'_> {
    fn from(value: Vec<i64>) -> Self {
        Initializer::List(value.into_iter().map(Item::Int).collect())
    }
}


impl From<&[i64]> for Initializer<'_> {
    fn from(value: &[i64]) -> Self {
        Initializer::List(value.iter().copied().map(Item::Int).collect())
    }
}


impl From<Vec<(i64, i64)>> for Initializer<'_> {
    fn from(value: Vec<(i64, i64)>) -> Self {
        Initializer::List(value.into_iter().map(Item::from).collect())
    }
}


impl From<RangeInclusive<i64>> for Initializer<'_> {
    fn from(value: RangeInclusive<i64>) -> Self {
        let (min, max) = value.into_inner();
        Initializer::List(vec![Item::Pair(min.into(), max.into())])
    }
}


impl<'a> From<&'a MultiRange> for Initializer<'a> {
    fn from(value: &'a MultiRange) -> Self {
        Initializer::Set(value)
    }
}


impl From<i64> for Item {
    fn from(value: i64) -> Self {
        Item::Int(value)
    }
}


impl From<(i64, i64)> for Item {
    fn from(value: (i64, i64)) -> Self {
        Item::Pair(value.0.into(), value.1.into())
    }
}


impl From<(Bound, Bound)> for Item {
    fn from(value: (Bound, Bound)) -> Self {
        Item::Pair(value.0, value.1)
    }
}
