//! 변화율 계산 전략.
//!
//! 두 전략은 시작값이 0 근처일 때 출력이 다르므로 하나로 합치지 않습니다.
//!
//! | 전략 | 시작값 처리 | 0 시작값 |
//! |------|-------------|----------|
//! | [`UnguardedChange`] | 그대로 나눔 | `Infinity` / `NaN` |
//! | [`FlooredChange`] | \|시작값\| < 하한이면 +하한으로 대체, 양수가 아니면 N/A | 하한으로 계산 |

use dashboard_core::{PerformanceValue, DEFAULT_MIN_START_VALUE};

/// 시작/끝 값으로부터 변화율을 계산하는 규칙.
pub trait ChangeStrategy: Send + Sync {
    /// 로그에 표시할 전략 이름.
    fn name(&self) -> &'static str;

    /// 한쪽이라도 값이 없으면 "사용 불가"입니다.
    fn change(&self, start: Option<f64>, end: Option<f64>) -> PerformanceValue;
}

/// `(end - start) / start × 100`. 0 나눗셈을 막지 않습니다.
///
/// 인덱스 비교 패널에서 사용합니다. 시작값이 0이면 무한대나 NaN이 그대로
/// 표시됩니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnguardedChange;

impl ChangeStrategy for UnguardedChange {
    fn name(&self) -> &'static str {
        "unguarded"
    }

    fn change(&self, start: Option<f64>, end: Option<f64>) -> PerformanceValue {
        match (start, end) {
            (Some(start), Some(end)) => PerformanceValue::Change((end - start) / start * 100.0),
            _ => PerformanceValue::NotAvailable,
        }
    }
}

/// 시작값 하한을 적용하는 전략.
///
/// 거래 성과 패널에서 사용합니다. 절대값이 하한보다 작은 시작값은 부호와
/// 상관없이 `+min_start_value`로 바뀌고, 그 후에도 시작값이 양수가 아니면
/// 결과는 "사용 불가"입니다.
#[derive(Debug, Clone, Copy)]
pub struct FlooredChange {
    pub min_start_value: f64,
}

impl FlooredChange {
    pub fn new(min_start_value: f64) -> Self {
        Self { min_start_value }
    }

    /// 하한이 적용된 시작값.
    pub fn floor(&self, start: f64) -> f64 {
        if start.abs() < self.min_start_value {
            self.min_start_value
        } else {
            start
        }
    }
}

impl Default for FlooredChange {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_START_VALUE)
    }
}

impl ChangeStrategy for FlooredChange {
    fn name(&self) -> &'static str {
        "floored"
    }

    fn change(&self, start: Option<f64>, end: Option<f64>) -> PerformanceValue {
        let (Some(start), Some(end)) = (start, end) else {
            return PerformanceValue::NotAvailable;
        };

        let start = self.floor(start);
        if start > 0.0 {
            PerformanceValue::Change((end - start) / start * 100.0)
        } else {
            PerformanceValue::NotAvailable
        }
    }
}
