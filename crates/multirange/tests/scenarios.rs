use multirange::{multirange, Bound, Error, Item, Length, MultiRange, ParseOptions};
use rstest::rstest;


#[rstest]
#[case("", "")]
#[case("1-3,8-10", "1-3,8-10")]
#[case("1,2,3", "1-3")]
#[case("3-1", "1-3")]
#[case("3,\t8-3,2,3,\n10, 9 - 7 ", "2-10")]
#[case("(-5)", "(-5)")]
#[case("-5", "-5")]
#[case("(-5)-(-1), 0, 1", "(-5)-1")]
#[case("5-,1", "1,5-")]
#[case("-,3", "-")]
#[case("-3,5-", "-3,5-")]
#[case("-3,4-", "-")]
fn canonical_text(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(multirange(input).unwrap().to_string(), expected);
}


#[rstest]
#[case("", "1-2,6", "3-5", "1-6")]
#[case("5-10,15-", "0,11-14", "", "0,5-")]
#[case("1-3", "", "", "1-3")]
#[case("-", "1-100", "", "-")]
fn append(#[case] init: &str, #[case] first: &str, #[case] second: &str, #[case] expected: &str) {
    let mut set = multirange(init).unwrap();
    set.append(first).unwrap().append(second).unwrap();
    assert_eq!(set.to_string(), expected);
}


#[rstest]
#[case("1-10", "5-9", "1-4,10")]
#[case("-", "3-5,9", "-2,6-8,10-")]
#[case("1-10", "-", "")]
#[case("1-10", "0-", "")]
#[case("1-10", "-3", "4-10")]
#[case("1-3,5-7,9-11", "2-10", "1,11")]
#[case("(-10)-10", "(-5)-5", "(-10)-(-6),6-10")]
#[case("-", "(-9223372036854775808)-5", "6-")]
#[case("5-", "10-9223372036854775807", "5-9")]
#[case("-", "(-9223372036854775808),9223372036854775807", "(-9223372036854775807)-9223372036854775806")]
fn subtract(#[case] init: &str, #[case] other: &str, #[case] expected: &str) {
    let mut set = multirange(init).unwrap();
    set.subtract(other).unwrap();
    assert_eq!(set.to_string(), expected);
}


#[rstest]
#[case("1-5", "2-8", "2-5")]
#[case("1-5", "6-8", "")]
#[case("-", "3-5,9", "3-5,9")]
#[case("-10,20-", "5-25", "5-10,20-25")]
#[case("1-3,5-7", "3-5", "3,5")]
fn intersect(#[case] init: &str, #[case] other: &str, #[case] expected: &str) {
    let mut set = multirange(init).unwrap();
    set.intersect(other).unwrap();
    assert_eq!(set.to_string(), expected);
}


#[rstest]
#[case("1,,2")]
#[case("1-2-3")]
#[case("(-5")]
#[case("x")]
#[case("5,")]
#[case("--1")]
fn syntax_errors(#[case] input: &str) {
    assert!(matches!(multirange(input), Err(Error::Syntax { .. })));
}


#[test]
fn set_equal_initializers_agree() {
    let a = multirange("1,2,3").unwrap();
    let b = multirange("3-1").unwrap();
    let c = multirange(vec![Item::from(1), Item::from((2, 3))]).unwrap();
    assert_eq!(a.ranges(), b.ranges());
    assert_eq!(b.ranges(), c.ranges());
    assert_eq!(a.to_string(), c.to_string());
}


#[test]
fn negative_literal_parsing() {
    let single = multirange("(-5)").unwrap();
    assert_eq!(single.to_vec(), Ok(vec![-5]));
    let open = multirange("-5").unwrap();
    assert_eq!(open.min(), Some(Bound::NegInf));
    assert_eq!(open.max(), Some(Bound::Finite(5)));
    assert!(open.contains(-1_000_000));
    assert!(!open.contains(6));
}


#[test]
fn unbounded_materialization_fails() {
    for text in ["-", "5-", "-5", "1,10-"] {
        let set = multirange(text).unwrap();
        assert_eq!(set.to_vec(), Err(Error::Unbounded), "{}", text);
        assert!(matches!(set.iter(), Err(Error::Unbounded)), "{}", text);
        assert_eq!(set.len(), Length::Infinite);
    }
}


#[test]
fn strict_parsing() -> anyhow::Result<()> {
    let options = ParseOptions::strict();
    let set = MultiRange::parse_with("1-3, 7", &options)?;
    assert_eq!(set.to_string(), "1-3,7");
    assert!(MultiRange::parse_with("5-", &options).is_err());
    assert!(MultiRange::parse_with("(-1)", &options).is_err());
    Ok(())
}


#[test]
fn errors_work_with_anyhow() -> anyhow::Result<()> {
    let mut pages = MultiRange::new();
    pages.append("1-10")?.subtract("3")?;
    let err = pages.append("1,x").map(|_| ()).unwrap_err();
    let err = anyhow::Error::new(err).context("invalid page selection");
    assert_eq!(format!("{:#}", err), "invalid page selection: invalid range segment `x`: expected a number");
    assert_eq!(pages.to_string(), "1-2,4-10");
    Ok(())
}
