use std::cmp::{max, Ordering};

use crate::range::Range;


/// Merges overlapping or adjacent neighbours of a range list sorted by `min`.
pub fn seal<L>(ranges: L) -> impl Iterator<Item=Range>
where
    L: IntoIterator<Item=Range>,
{
    let mut list = ranges.into_iter().peekable();
    std::iter::from_fn(move || {
        let mut head = list.next()?;
        while let Some(next) = list.next_if(|next| next.min <= head.max.succ()) {
            head.max = max(head.max, next.max);
        }
        Some(head)
    })
}


pub fn union<L1, L2>(a: L1, b: L2) -> impl Iterator<Item=Range>
where
    L1: IntoIterator<Item=Range>,
    L2: IntoIterator<Item=Range>,
{
    let mut list1 = a.into_iter().peekable();
    let mut list2 = b.into_iter().peekable();
    seal(std::iter::from_fn(move || {
        match (list1.peek().copied(), list2.peek().copied()) {
            (Some(h1), Some(h2)) => {
                if h1 <= h2 {
                    list1.next()
                } else {
                    list2.next()
                }
            },
            (_, None) => list1.next(),
            (None, _) => list2.next()
        }
    }))
}


/// Ranges of `a` with everything covered by `b` cut out.
///
/// Both inputs must be normalized. Fragments of distinct `a` ranges
/// never touch, so the output is normalized as well.
pub fn difference<L1, L2>(a: L1, b: L2) -> impl Iterator<Item=Range>
where
    L1: IntoIterator<Item=Range>,
    L2: IntoIterator<Item=Range>,
{
    let mut list1 = a.into_iter();
    let mut list2 = b.into_iter().peekable();
    let mut rest: Option<Range> = None;
    std::iter::from_fn(move || {
        loop {
            let head = match rest.take() {
                Some(head) => head,
                None => list1.next()?
            };

            while list2.next_if(|cut| cut.max < head.min).is_some() {}

            match list2.peek() {
                Some(cut) if cut.min <= head.max => {
                    // a cut touching i64::MIN or i64::MAX leaves nothing beyond it
                    let above = cut.max.succ();
                    if cut.max < head.max && above.is_finite() {
                        rest = Some(Range::new_unchecked(above, head.max));
                    }
                    let below = cut.min.pred();
                    if head.min < cut.min && below.is_finite() {
                        return Some(Range::new_unchecked(head.min, below))
                    }
                },
                _ => return Some(head)
            }
        }
    })
}


pub fn intersection<L1, L2>(a: L1, b: L2) -> impl Iterator<Item=Range>
where
    L1: IntoIterator<Item=Range>,
    L2: IntoIterator<Item=Range>,
{
    let mut list1 = a.into_iter().peekable();
    let mut list2 = b.into_iter().peekable();
    std::iter::from_fn(move || {
        loop {
            match (list1.peek().copied(), list2.peek().copied()) {
                (Some(h1), Some(h2)) => {
                    let start = max(h1.min, h2.min);
                    let end = match h1.max.cmp(&h2.max) {
                        Ordering::Less => {
                            list1.next();
                            h1.max
                        }
                        Ordering::Equal => {
                            list1.next();
                            list2.next();
                            h1.max
                        }
                        Ordering::Greater => {
                            list2.next();
                            h2.max
                        }
                    };
                    if start <= end {
                        return Some(Range::new_unchecked(start, end))
                    }
                },
                (_, None) | (None, _) => return None
            }
        }
    })
}
