use float_inspect::*;
use proptest::prelude::*;

// 2^k for normal exponents
fn pow2(k: i32) -> f64 {
    f64::from_bits(((k + 1023) as u64) << 52)
}

proptest! {
    #[test]
    fn rendered_doubles_round_trip(bits in any::<u64>()) {
        let text = render(f64::from_bits(bits), InspectOptions::DEFAULT_PRECISION);
        let report = inspect(parse(&text, FloatWidth::Double).unwrap());
        prop_assert!(report.round_trips(), "{} does not round trip", text);
        if !f64::from_bits(bits).is_nan() {
            prop_assert_eq!(report.value().to_bits(), bits);
        }
    }

    #[test]
    fn rendered_singles_round_trip(bits in any::<u32>()) {
        let text = render(f32::from_bits(bits), InspectOptions::DEFAULT_PRECISION);
        let report = inspect(parse(&text, FloatWidth::Single).unwrap());
        prop_assert!(report.round_trips(), "{} does not round trip", text);
        if !f32::from_bits(bits).is_nan() {
            prop_assert_eq!(report.value().to_bits(), bits as u64);
        }
    }

    #[test]
    fn shortest_literals_parse_exactly(v in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        // `{:?}` prints the shortest literal that reads back as `v`
        let value = parse(&format!("{v:?}"), FloatWidth::Double).unwrap();
        prop_assert_eq!(value.value(), Value::Double(v));
    }

    #[test]
    fn fields_partition_the_bits(bits in any::<u64>(), canonical in any::<bool>()) {
        let order = if canonical { ByteOrder::Big } else { ByteOrder::Native };
        let options = InspectOptions::new().with_byte_order(order);
        let v = f64::from_bits(bits);
        let report = inspect_with(parse(&render(v, 100), FloatWidth::Double).unwrap(), &options);

        let joined = [report.sign_field(), report.exponent_field(), report.mantissa_field()]
            .into_iter()
            .map(to_bit_string)
            .collect::<String>();
        prop_assert_eq!(joined, report.bit_string());
        prop_assert_eq!(report.bits().len(), 64);
        if canonical && !v.is_nan() {
            prop_assert_eq!(report.bit_string(), format!("{bits:064b}"));
        }
    }

    #[test]
    fn adjacent_singles_are_nearest_toward_zero(bits in any::<u32>()) {
        let v = f32::from_bits(bits);
        prop_assume!(v.is_finite() && v != 0.0);
        let a = next_toward_zero(v);

        prop_assert!(a.abs() < v.abs());
        prop_assert!(a == 0.0 || a.is_sign_negative() == v.is_sign_negative());
        // the exact midpoint rounds back to one of the two
        let mid = ((a as f64 + v as f64) / 2.0) as f32;
        prop_assert!(mid == a || mid == v);
    }

    #[test]
    fn adjacent_doubles_are_nearest_toward_zero(v in -1e300f64..1e300) {
        prop_assume!(v.abs() > 1e-300);
        let a = next_toward_zero(v);

        prop_assert!(a.abs() < v.abs());
        prop_assert!(a.is_sign_negative() == v.is_sign_negative());
        let mid = a / 2.0 + v / 2.0;
        prop_assert!(mid == a || mid == v);
    }

    #[test]
    fn normalized_singles_rebuild_the_value(bits in any::<u32>()) {
        let v = f32::from_bits(bits);
        prop_assume!(v.is_finite() && v != 0.0);
        let (s, e) = frexp(v);
        let e = e.unwrap();

        prop_assert!((0.5..1.0).contains(&s.abs()));
        prop_assert_eq!(s as f64 * 2f64.powi(e), v as f64);
    }

    #[test]
    fn normalized_doubles_rebuild_the_value(bits in any::<u64>()) {
        let v = f64::from_bits(bits);
        prop_assume!(v.is_finite() && v != 0.0);
        let (s, e) = frexp(v);
        let e = e.unwrap();

        prop_assert!((0.5..1.0).contains(&s.abs()));
        let half = e / 2;
        prop_assert_eq!(s * pow2(half) * pow2(e - half), v);
    }

    #[test]
    fn epsilon_is_fixed(bits in any::<u64>()) {
        let text = render(f64::from_bits(bits), 100);
        prop_assert_eq!(
            inspect(parse(&text, FloatWidth::Double).unwrap()).epsilon(),
            Value::Double(f64::EPSILON)
        );
        prop_assert_eq!(
            inspect(parse(&text, FloatWidth::Single).unwrap()).epsilon(),
            Value::Single(f32::EPSILON)
        );
    }
}
