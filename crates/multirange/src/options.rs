/// Switches for the optional parts of the range grammar.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ParseOptions {
    /// Accept parenthesized numbers such as `(-5)`.
    pub parse_negative: bool,
    /// Accept open-ended segments such as `5-`, `-3` and `-`.
    pub parse_unbounded: bool
}


impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            parse_negative: true,
            parse_unbounded: true
        }
    }
}


impl ParseOptions {
    /// Plain `1-3,8` syntax: no negative numbers, no open ends.
    pub fn strict() -> Self {
        Self {
            parse_negative: false,
            parse_unbounded: false
        }
    }
}


#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FormatOptions {
    /// Finite ranges holding at most this many integers are written out
    /// as individual numbers, e.g. `1,2,3` instead of `1-3`.
    pub individual_threshold: u32
}
