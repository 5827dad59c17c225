use std::fmt::{Display, Formatter};

use crate::bound::Bound;


#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    /// Malformed textual initializer.
    Syntax {
        segment: String,
        reason: &'static str
    },
    /// A programmatic range whose bounds are out of order or point past infinity.
    InvalidRange {
        min: Bound,
        max: Bound
    },
    /// The operation would have to enumerate an infinite set.
    Unbounded
}


impl Error {
    pub(crate) fn syntax(segment: &str, reason: &'static str) -> Self {
        Error::Syntax {
            segment: segment.to_string(),
            reason
        }
    }
}


impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Syntax { segment, reason } => {
                write!(f, "invalid range segment `{}`: {}", segment, reason)
            },
            Error::InvalidRange { min, max } => {
                write!(f, "invalid range: {} is not below or equal to {}", min, max)
            },
            Error::Unbounded => {
                write!(f, "operation is not supported on an unbounded range set")
            }
        }
    }
}


impl std::error::Error for Error {}
