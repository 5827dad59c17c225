use std::iter::FusedIterator;

use crate::error::Error;
use crate::range::Range;


/// Ascending iterator over the integers of a bounded range set.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    ranges: std::slice::Iter<'a, Range>,
    current: Option<(i64, i64)>,
    remaining: u128
}


impl<'a> Iter<'a> {
    /// Fails with [`Error::Unbounded`] if any of `ranges` is unbounded.
    pub(crate) fn new(ranges: &'a [Range]) -> Result<Self, Error> {
        let mut remaining = 0;
        for r in ranges {
            remaining += r.len().ok_or(Error::Unbounded)?;
        }
        Ok(Self {
            ranges: ranges.iter(),
            current: None,
            remaining
        })
    }
}


impl<'a> Iterator for Iter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        loop {
            if let Some((next, last)) = self.current {
                self.current = if next < last {
                    Some((next + 1, last))
                } else {
                    None
                };
                self.remaining -= 1;
                return Some(next)
            }
            let range = self.ranges.next()?;
            self.current = range.min().finite().zip(range.max().finite());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None)
        }
    }
}


impl<'a> FusedIterator for Iter<'a> {}


#[cfg(test)]
mod test {
    use crate::bound::Bound;
    use crate::error::Error;
    use crate::range::Range;
    use super::Iter;


    #[test]
    fn walks_ranges_in_order() {
        let ranges = vec![
            Range::new(-2, 0).unwrap(),
            Range::single(3),
            Range::new(5, 6).unwrap()
        ];
        let iter = Iter::new(&ranges).unwrap();
        assert_eq!(iter.size_hint(), (6, Some(6)));
        assert_eq!(iter.collect::<Vec<_>>(), vec![-2, -1, 0, 3, 5, 6]);
    }

    #[test]
    fn restarts_independently() {
        let ranges = vec![Range::new(1, 3).unwrap()];
        let mut first = Iter::new(&ranges).unwrap();
        assert_eq!(first.next(), Some(1));
        let second = Iter::new(&ranges).unwrap();
        assert_eq!(second.collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(first.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn stops_at_the_last_integer() {
        let ranges = vec![Range::new(i64::MAX - 1, i64::MAX).unwrap()];
        let mut iter = Iter::new(&ranges).unwrap();
        assert_eq!(iter.next(), Some(i64::MAX - 1));
        assert_eq!(iter.next(), Some(i64::MAX));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn rejects_unbounded_sets() {
        let ranges = vec![Range::single(1), Range::new(5, Bound::PosInf).unwrap()];
        assert_eq!(Iter::new(&ranges).err(), Some(Error::Unbounded));
    }
}
