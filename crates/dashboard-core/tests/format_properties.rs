//! 고정 소수 포맷 속성 테스트.

use dashboard_core::{to_fixed_2, KeyOrder};
use proptest::prelude::*;

proptest! {
    #[test]
    fn fixed_has_two_decimals_and_stays_close(x in -1.0e9f64..1.0e9f64) {
        let text = to_fixed_2(x);
        let (_, decimals) = text.split_once('.').expect("소수점 포함");
        prop_assert_eq!(decimals.len(), 2);

        let parsed: f64 = text.parse().unwrap();
        prop_assert!((parsed - x).abs() <= 0.005 + 1e-6, "{} -> {}", x, text);
    }

    #[test]
    fn fixed_is_symmetric_for_negatives(x in 0.0001f64..1.0e6f64) {
        let positive = to_fixed_2(x);
        let negative = to_fixed_2(-x);
        prop_assert_eq!(negative, format!("-{}", positive));
    }

    #[test]
    fn huge_values_use_exact_exponent_form(x in 1.0e21f64..1.0e300f64) {
        let text = to_fixed_2(x);
        prop_assert!(text.contains("e+"), "{}", text);
        prop_assert_eq!(text.parse::<f64>().unwrap(), x);
    }

    #[test]
    fn lexical_within_matches_string_bounds(
        key in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
        start in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
        end in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
    ) {
        let expected = start.as_str() <= key.as_str() && key.as_str() <= end.as_str();
        prop_assert_eq!(KeyOrder::Lexical.within(&key, &start, &end), expected);
    }
}
