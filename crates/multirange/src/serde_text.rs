use crate::multirange::MultiRange;


impl serde::ser::Serialize for MultiRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer
    {
        serializer.collect_str(self)
    }
}


impl<'de> serde::de::Deserialize<'de> for MultiRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>
    {
        deserializer.deserialize_str(MultiRangeVisitor)
    }
}


struct MultiRangeVisitor;


impl<'de> serde::de::Visitor<'de> for MultiRangeVisitor {
    type Value = MultiRange;

    fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "a string of comma separated integer ranges")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        v.parse().map_err(|err| {
            serde::de::Error::custom(
                format!("failed to deserialize `{}` as a range set: {}", v, err)
            )
        })
    }
}


#[cfg(test)]
mod test {
    use crate::multirange::{multirange, MultiRange};
    use crate::options::{FormatOptions, ParseOptions};


    #[test]
    fn serializes_as_canonical_text() {
        let set = multirange("8-10, 1,2,3, 15-").unwrap();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#""1-3,8-10,15-""#);
    }

    #[test]
    fn deserializes_from_text() {
        let set: MultiRange = serde_json::from_str(r#""(-3)-0, 7""#).unwrap();
        assert_eq!(set, multirange("(-3)-0,7").unwrap());
        let err = serde_json::from_str::<MultiRange>(r#""1,,2""#).unwrap_err();
        assert!(err.to_string().contains("failed to deserialize `1,,2`"));
    }

    #[test]
    fn options_fill_in_defaults() {
        let options: ParseOptions = serde_json::from_str(r#"{"parse_unbounded": false}"#).unwrap();
        assert_eq!(options, ParseOptions { parse_negative: true, parse_unbounded: false });
        let options: FormatOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, FormatOptions::default());
    }
}
