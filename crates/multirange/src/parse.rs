use std::cmp::{max, min};

use tracing::debug;

use crate::bound::Bound;
use crate::error::Error;
use crate::options::ParseOptions;
use crate::range::{normalize, Range};


/// Parses a comma separated list of ranges into canonical form.
///
/// Whitespace is insignificant anywhere in the input. An empty input
/// denotes the empty set.
pub fn parse(text: &str, options: &ParseOptions) -> Result<Vec<Range>, Error> {
    let text: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if text.is_empty() {
        return Ok(Vec::new())
    }

    let ranges = text.split(',').map(|segment| {
        parse_segment(segment, options).map_err(|reason| {
            debug!(segment, reason, "rejected range segment");
            Error::syntax(segment, reason)
        })
    }).collect::<Result<Vec<_>, _>>()?;

    Ok(normalize(ranges))
}


fn parse_segment(segment: &str, options: &ParseOptions) -> Result<Range, &'static str> {
    if segment.is_empty() {
        return Err("empty segment")
    }

    if let Some(tail) = segment.strip_prefix('-') {
        check_unbounded(options)?;
        if tail.is_empty() {
            return Ok(Range::full())
        }
        let (max, tail) = parse_number(tail, options)?;
        check_end(tail)?;
        return Ok(Range::new_unchecked(Bound::NegInf, Bound::Finite(max)))
    }

    let (first, tail) = parse_number(segment, options)?;

    let Some(tail) = tail.strip_prefix('-') else {
        check_end(tail)?;
        return Ok(Range::single(first))
    };

    if tail.is_empty() {
        check_unbounded(options)?;
        return Ok(Range::new_unchecked(Bound::Finite(first), Bound::PosInf))
    }

    let (second, tail) = parse_number(tail, options)?;
    check_end(tail)?;

    Ok(Range::new_unchecked(
        Bound::Finite(min(first, second)),
        Bound::Finite(max(first, second))
    ))
}


/// Reads a plain or parenthesized number off the front of `s`.
fn parse_number<'a>(s: &'a str, options: &ParseOptions) -> Result<(i64, &'a str), &'static str> {
    if let Some(inner) = s.strip_prefix('(') {
        if !options.parse_negative {
            return Err("parenthesized numbers are not allowed")
        }
        let close = inner.find(')').ok_or("unterminated parenthesis")?;
        let digits = &inner[..close];
        let unsigned = digits.strip_prefix('-').unwrap_or(digits);
        let value = parse_digits(unsigned, digits)?;
        Ok((value, &inner[close + 1..]))
    } else {
        let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let value = parse_digits(&s[..end], &s[..end])?;
        Ok((value, &s[end..]))
    }
}


fn parse_digits(unsigned: &str, literal: &str) -> Result<i64, &'static str> {
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err("expected a number")
    }
    literal.parse().map_err(|_| "number is out of range")
}


fn check_unbounded(options: &ParseOptions) -> Result<(), &'static str> {
    if options.parse_unbounded {
        Ok(())
    } else {
        Err("unbounded ranges are not allowed")
    }
}


fn check_end(tail: &str) -> Result<(), &'static str> {
    if tail.is_empty() {
        Ok(())
    } else {
        Err("unexpected trailing characters")
    }
}
