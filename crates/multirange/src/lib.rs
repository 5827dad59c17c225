//! Sets of integers written as comma separated ranges, e.g. `1-3,8-10`.
//!
//! ```
//! use multirange::multirange;
//!
//! let mut pages = multirange("1-3,8-10").unwrap();
//! pages.append("4-5").unwrap().subtract(9).unwrap();
//! assert_eq!(pages.to_string(), "1-5,8,10");
//! assert!(pages.contains(4));
//! ```
//!
//! Negative numbers are written in parentheses, `(-5)`, and a missing
//! bound makes a range open-ended: `5-`, `-3`, or `-` for all integers.

mod bound;
mod error;
mod initializer;
mod iter;
mod multirange;
mod options;
mod parse;
mod range;
#[cfg(feature = "serde")]
mod serde_text;


pub use bound::Bound;
pub use error::Error;
pub use initializer::{Initializer, Item};
pub use iter::Iter;
pub use multirange::{multirange, DisplayWith, Length, MultiRange};
pub use options::{FormatOptions, ParseOptions};
pub use parse::parse;
pub use range::{is_normalized, normalize, Range};
