use float_inspect::*;

fn double(text: &str) -> f64 {
    match parse(text, FloatWidth::Double).unwrap().value() {
        Value::Double(v) => v,
        v => panic!("expected a double, got {v:?}"),
    }
}

fn single(text: &str) -> f32 {
    match parse(text, FloatWidth::Single).unwrap().value() {
        Value::Single(v) => v,
        v => panic!("expected a single, got {v:?}"),
    }
}

#[test]
fn decimal() {
    assert_eq!(double("1.5"), 1.5);
    assert_eq!(double("-0.25"), -0.25);
    assert_eq!(double("+2"), 2.0);
    assert_eq!(double(".5"), 0.5);
    assert_eq!(double("5."), 5.0);
    assert_eq!(double("1e3"), 1000.0);
    assert_eq!(double("2.5E-1"), 0.25);
    assert_eq!(single("0.1"), 0.1f32);
    assert!(double("-0").is_sign_negative());
}

#[test]
fn decimal_rounding() {
    // ties to even
    assert_eq!(single("16777217"), 16777216.0);
    assert_eq!(single("16777219"), 16777220.0);
    assert_eq!(double("9007199254740993"), 9007199254740992.0);

    assert_eq!(single("3.4028235e38"), f32::MAX);
    assert_eq!(single("1e39"), f32::INFINITY);
    assert_eq!(double("-1e400"), f64::NEG_INFINITY);
    assert_eq!(single("1e-50"), 0.0);
    assert_eq!(single("1e-45"), f32::from_bits(1));
    assert_eq!(double("4.9406564584124654e-324"), f64::from_bits(1));
}

#[test]
fn hexadecimal() {
    assert_eq!(double("0x1.8p1"), 3.0);
    assert_eq!(double("0X10"), 16.0);
    assert_eq!(double("-0x.8"), -0.5);
    assert_eq!(double("0x1p-1074"), f64::from_bits(1));
    assert_eq!(double("0x1p-1075"), 0.0);
    assert_eq!(double("0x1.8p-1075"), f64::from_bits(1));
    assert_eq!(double("0x1.fffffffffffffp1023"), f64::MAX);
    assert_eq!(double("0x1p1024"), f64::INFINITY);

    // ties to even
    assert_eq!(single("0x1.000001p0"), 1.0);
    assert_eq!(single("0x1.000003p0"), 1.0 + 2f32.powi(-22));
    assert_eq!(single("-0x1p128"), f32::NEG_INFINITY);
    assert_eq!(single("0x1p-149"), f32::from_bits(1));
}

#[test]
fn infinities() {
    for text in ["inf", "INF", "Infinity", "+infinity"] {
        assert_eq!(double(text), f64::INFINITY, "{text}");
        assert_eq!(single(text), f32::INFINITY, "{text}");
    }
    assert_eq!(double("-Inf"), f64::NEG_INFINITY);
}

#[test]
fn nans() {
    assert_eq!(double("nan").to_bits(), 0x7FF8_0000_0000_0000);
    assert_eq!(double("NaN").to_bits(), 0x7FF8_0000_0000_0000);
    assert_eq!(double("-nan").to_bits(), 0xFFF8_0000_0000_0000);
    assert_eq!(single("nan").to_bits(), 0x7FC0_0000);

    assert_eq!(double("nan(0x12345)").to_bits(), 0x7FF8_0000_0001_2345);
    assert_eq!(double("nan(42)").to_bits(), 0x7FF8_0000_0000_002A);
    assert_eq!(single("nan(0x7fffff)").to_bits(), 0x7FFF_FFFF);
    assert_eq!(single("nan(foo)").to_bits(), 0x7FC0_0000);
}

#[test]
fn permissive_prefixes() {
    assert_eq!(double("1.5xyz"), 1.5);
    assert_eq!(double("  \t1.5"), 1.5);
    assert_eq!(double("1e"), 1.0);
    assert_eq!(double("0x"), 0.0);
    assert_eq!(double("1.5.5"), 1.5);
    assert_eq!(double("infinite"), f64::INFINITY);

    // the original text is kept as is
    let value = parse("  1.5 ", FloatWidth::Double).unwrap();
    assert_eq!(value.text(), "  1.5 ");
    assert_eq!(value.width(), FloatWidth::Double);
}

#[test]
fn strict() {
    let options = InspectOptions::new().with_strict(true);
    assert!(parse_with("1.5", FloatWidth::Double, &options).is_ok());
    assert!(parse_with(" 1.5", FloatWidth::Double, &options).is_ok());
    assert_eq!(
        parse_with("1.5xyz", FloatWidth::Double, &options),
        Err(Error::TrailingCharacters {
            literal: "1.5xyz".to_string(),
            offset: 3,
        })
    );
    assert!(matches!(
        parse_with("0x", FloatWidth::Single, &options),
        Err(Error::TrailingCharacters { offset: 1, .. })
    ));
}

#[test]
fn not_numbers() {
    for text in ["", "abc", ".", "-", "e5", " ", "x1.5"] {
        assert_eq!(
            parse(text, FloatWidth::Double),
            Err(Error::Parse(text.to_string())),
            "{text:?}"
        );
    }
    assert_eq!(Error::Parse("abc".to_string()).to_string(), "not a number: \"abc\"");
}

#[test]
fn literals() {
    let options = InspectOptions::default();

    let literal = NumericLiteral::new("42", WidthSelector::Auto);
    assert_eq!(parse_literal(&literal, &options), Ok(None));

    let literal = NumericLiteral::new("42.5", WidthSelector::Auto);
    let value = parse_literal(&literal, &options).unwrap().unwrap();
    assert_eq!(value.value(), Value::Double(42.5));

    let literal = NumericLiteral::new("42", "float".parse().unwrap());
    let value = parse_literal(&literal, &options).unwrap().unwrap();
    assert_eq!(value.value(), Value::Single(42.0));

    // deduction only looks for a decimal point
    let literal = NumericLiteral::new("abc.", WidthSelector::Auto);
    assert!(parse_literal(&literal, &options).is_err());
}
