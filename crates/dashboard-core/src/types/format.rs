//! 소수점 고정 자릿수 포맷.
//!
//! 브라우저 대시보드가 표시하던 값과 바이트 단위로 같아야 하므로 JavaScript
//! `Number.prototype.toFixed`와 동일한 규칙을 따릅니다:
//! - 이진 부동소수점의 정확한 값을 기준으로 반올림하고, 정확히 중간이면
//!   0에서 먼 쪽으로 올림 (`1.005 → "1.00"`, `0.125 → "0.13"`)
//! - 음수는 0으로 반올림되어도 부호 유지 (`-0.001 → "-0.00"`)
//! - 무한대/NaN은 `Infinity`, `-Infinity`, `NaN`
//! - 절대값이 1e21 이상이면 지수 표기 (`1e+21`, `-1.5e+24`)

use rust_decimal::{Decimal, RoundingStrategy};

/// 이 값 이상은 고정 소수 대신 지수 표기로 출력됩니다.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// `x`를 소수점 `digits`자리 문자열로 변환합니다.
pub fn to_fixed(x: f64, digits: u32) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if x < 0.0 { "-" } else { "" };
    let magnitude = x.abs();

    if magnitude >= EXPONENT_THRESHOLD {
        return format!("{}{}", sign, exponent_form(magnitude));
    }

    let body = match Decimal::from_f64_retain(magnitude) {
        Some(exact) => {
            let mut rounded =
                exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(digits);
            rounded.to_string()
        }
        // Decimal로 표현되지 않는 값
        None => format!("{:.*}", digits as usize, magnitude),
    };

    format!("{}{}", sign, body)
}

/// 왕복 가능한 최단 자릿수의 지수 표기 (`1.5e+24`).
fn exponent_form(magnitude: f64) -> String {
    let shortest = format!("{:e}", magnitude);
    match shortest.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        Some((mantissa, exp)) => format!("{}e{}", mantissa, exp),
        None => shortest,
    }
}

/// 퍼센트 변화율 표시용 두 자리 포맷.
pub fn to_fixed_2(x: f64) -> String {
    to_fixed(x, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(to_fixed_2(20.0), "20.00");
        assert_eq!(to_fixed_2(50.0), "50.00");
        assert_eq!(to_fixed_2(0.0), "0.00");
        assert_eq!(to_fixed_2(-12.345678), "-12.35");
        assert_eq!(to_fixed_2(100.0), "100.00");
        assert_eq!(to_fixed_2(1234567.891), "1234567.89");
    }

    #[test]
    fn test_rounding_uses_exact_binary_value() {
        // 1.005는 실제로 1.00499999...이므로 내림
        assert_eq!(to_fixed_2(1.005), "1.00");
        // 0.125는 정확히 표현되는 중간값이므로 올림
        assert_eq!(to_fixed_2(0.125), "0.13");
        assert_eq!(to_fixed_2(-0.125), "-0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_negative_zero_keeps_sign() {
        assert_eq!(to_fixed_2(-0.001), "-0.00");
        assert_eq!(to_fixed_2(-0.0), "0.00");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(to_fixed_2(f64::INFINITY), "Infinity");
        assert_eq!(to_fixed_2(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(to_fixed_2(f64::NAN), "NaN");
    }

    #[test]
    fn test_large_values_use_exponent_form() {
        assert_eq!(to_fixed_2(1e21), "1e+21");
        assert_eq!(to_fixed_2(-1e22), "-1e+22");
        assert_eq!(to_fixed_2(1.5e24), "1.5e+24");
        assert_eq!(to_fixed_2(1e24), "1e+24");
        // 임계값 바로 아래는 고정 소수
        assert_eq!(to_fixed_2(999_999_999_999_999_900_000.0), "999999999999999868928.00");
    }

    #[test]
    fn test_tiny_values_round_to_zero() {
        assert_eq!(to_fixed_2(1e-30), "0.00");
        assert_eq!(to_fixed_2(0.004), "0.00");
    }
}
