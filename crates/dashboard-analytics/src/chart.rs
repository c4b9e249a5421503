//! 차트 데이터 구조
//!
//! 필터된 시리즈를 라인 차트용 데이터로 투영합니다. 렌더링은 외부 차트
//! 라이브러리의 몫이고, 여기서는 X축 레이블과 지표별 점 목록만 만듭니다.
//! 결측값은 `None`으로 남겨 선이 끊기도록 합니다.

use dashboard_core::Series;
use serde::{Deserialize, Serialize};

/// 팔레트가 비어 있을 때 쓰는 선 색상.
const FALLBACK_COLOR: &str = "#8884d8";

/// 차트 종류.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    /// 모든 지표를 겹쳐 그림
    Comparison,
    /// 지표 하나만 그림 (이름이 비어 있으면 선 없음)
    Single(String),
}

/// 지표 하나의 선.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLine {
    pub metric: String,
    pub color: String,
    pub points: Vec<Option<f64>>,
}

/// 라인 차트 데이터.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// X축 키 컬럼 이름
    pub x_key: String,
    /// X축 레이블 (시간 키)
    pub labels: Vec<String>,
    pub lines: Vec<ChartLine>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// 시리즈를 차트 데이터로 변환합니다.
///
/// 비교 차트는 지표 순서대로 팔레트 색을 쓰고(부족하면 순환), 단일 차트는
/// 팔레트 첫 색을 씁니다.
pub fn project_chart<S: AsRef<str>>(
    series: &Series,
    metrics: &[S],
    kind: &ChartKind,
    palette: &[String],
) -> ChartData {
    let color_at = |idx: usize| -> String {
        if palette.is_empty() {
            FALLBACK_COLOR.to_string()
        } else {
            palette[idx % palette.len()].clone()
        }
    };

    let line = |metric: &str, color: String| ChartLine {
        metric: metric.to_string(),
        color,
        points: series.iter().map(|r| r.metric(metric)).collect(),
    };

    let lines = match kind {
        ChartKind::Comparison => metrics
            .iter()
            .enumerate()
            .map(|(idx, metric)| line(metric.as_ref(), color_at(idx)))
            .collect(),
        ChartKind::Single(metric) if metric.is_empty() => Vec::new(),
        ChartKind::Single(metric) => vec![line(metric.as_str(), color_at(0))],
    };

    ChartData {
        x_key: series.key_column.clone(),
        labels: series.keys().map(str::to_string).collect(),
        lines,
    }
}
