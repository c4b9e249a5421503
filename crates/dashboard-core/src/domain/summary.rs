//! 성과 요약.
//!
//! 요약은 (시리즈, 선택 범위)의 순수 파생값이며 범위가 바뀔 때마다 통째로
//! 다시 만들어집니다. 부분 갱신은 없습니다.

use serde::{Deserialize, Serialize};

use crate::types::to_fixed_2;

/// "사용 불가" 표시 문자열.
pub const NOT_AVAILABLE: &str = "N/A";

/// 지표 하나의 변화율 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PerformanceValue {
    /// (끝 - 시작) / 시작 × 100. 무한대나 NaN일 수 있음.
    Change(f64),
    /// 빈 구간, 결측값, 또는 하한 전략의 양수 조건 미충족
    NotAvailable,
}

impl PerformanceValue {
    /// 두 자리 고정 소수 문자열. "사용 불가"면 `None`.
    pub fn fixed(&self) -> Option<String> {
        match self {
            PerformanceValue::Change(v) => Some(to_fixed_2(*v)),
            PerformanceValue::NotAvailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, PerformanceValue::Change(_))
    }

    /// 카드 색상 톤.
    ///
    /// 표시된 문자열을 다시 숫자로 읽었을 때 0 이상이면 상승입니다. 따라서
    /// `"-0.00"`은 상승, `"NaN"`과 "사용 불가"는 하락으로 표시됩니다.
    pub fn tone(&self) -> Tone {
        let shown = self
            .fixed()
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(f64::NAN);
        if shown >= 0.0 {
            Tone::Positive
        } else {
            Tone::Negative
        }
    }
}

impl std::fmt::Display for PerformanceValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.fixed() {
            Some(text) => write!(f, "{}", text),
            None => write!(f, "{}", NOT_AVAILABLE),
        }
    }
}

/// 카드 색상.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// 녹색
    Positive,
    /// 적색
    Negative,
}

impl Tone {
    /// 대시보드 팔레트의 색상 토큰.
    pub fn color_token(&self) -> &'static str {
        match self {
            Tone::Positive => "green.500",
            Tone::Negative => "red.500",
        }
    }
}

/// 지표별 결과 항목.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPerformance {
    pub metric: String,
    pub value: PerformanceValue,
}

/// 지표 이름 → 변화율 매핑. 지표 목록 순서를 유지합니다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceSummary {
    entries: Vec<MetricPerformance>,
}

impl PerformanceSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// 모든 지표가 "사용 불가"인 요약.
    pub fn not_available<S: AsRef<str>>(metrics: &[S]) -> Self {
        let mut summary = Self::new();
        for metric in metrics {
            summary.push(metric.as_ref(), PerformanceValue::NotAvailable);
        }
        summary
    }

    pub fn push(&mut self, metric: impl Into<String>, value: PerformanceValue) {
        self.entries.push(MetricPerformance {
            metric: metric.into(),
            value,
        });
    }

    /// 지표의 결과를 조회합니다. 목록에 없는 지표는 "사용 불가"입니다.
    pub fn get(&self, metric: &str) -> PerformanceValue {
        self.entries
            .iter()
            .find(|e| e.metric == metric)
            .map(|e| e.value)
            .unwrap_or(PerformanceValue::NotAvailable)
    }

    /// 표시 문자열 (`"20.00"` 또는 `"N/A"`).
    pub fn display(&self, metric: &str) -> String {
        self.get(metric).to_string()
    }

    pub fn entries(&self) -> &[MetricPerformance] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 요약 카드 하나.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCard {
    /// 카드 제목
    pub title: String,
    /// `"20.00%"` 또는 `"N/A"`
    pub text: String,
    pub tone: Tone,
}

impl SummaryCard {
    pub fn new(title: impl Into<String>, value: &PerformanceValue) -> Self {
        let text = match value.fixed() {
            Some(fixed) => format!("{}%", fixed),
            None => NOT_AVAILABLE.to_string(),
        };
        Self {
            title: title.into(),
            text,
            tone: value.tone(),
        }
    }
}
