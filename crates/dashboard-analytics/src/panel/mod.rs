//! 패널 상태
//!
//! 각 패널은 자신의 시리즈와 선택 범위를 소유하고, 범위가 바뀌는 즉시 필터된
//! 시리즈 → 요약 → 카드/차트를 다시 계산합니다. 숨은 의존성 추적은 없습니다.
//!
//! - [`IndexPanel`]: 번들된 월별 테이블, 사전순 키, 무보호 전략
//! - [`TradingPanel`]: 원격 CSV, 달력 날짜 키, 하한 전략
//! - [`Dashboard`]: 두 패널과 테마

mod dashboard;
mod index;
mod trading;

pub use dashboard::{Dashboard, DASHBOARD_TITLE};
pub use index::{IndexPanel, INDEX_SUMMARY_HEADING};
pub use trading::{TradingPanel, TRADING_SUMMARY_HEADING};

use dashboard_core::{
    KeyOrder, MetricColumn, PerformanceSummary, SelectedRange, Series, SummaryCard,
};
use serde::Serialize;

use crate::chart::{project_chart, ChartData, ChartKind};
use crate::filter::filter_range;
use crate::options::range_options;
use crate::performance::{summarize, summary_cards, ChangeStrategy};

/// 패널 하나의 파생값 묶음.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    /// 시작/끝 선택지 (전체 시리즈 기준)
    pub options: Vec<String>,
    /// 현재 선택 범위
    pub range: SelectedRange,
    /// 범위로 필터된 시리즈
    pub filtered: Series,
    pub summary: PerformanceSummary,
    pub cards: Vec<SummaryCard>,
    pub chart: ChartData,
}

/// 뷰 계산에 필요한 패널 설정.
struct ViewInputs<'a> {
    order: KeyOrder,
    metrics: &'a [MetricColumn],
    strategy: &'a dyn ChangeStrategy,
    chart_kind: &'a ChartKind,
    palette: &'a [String],
}

/// (시리즈, 범위)로부터 뷰 전체를 새로 만듭니다.
fn build_view(series: &Series, range: &SelectedRange, inputs: &ViewInputs<'_>) -> PanelView {
    let keys: Vec<&str> = inputs.metrics.iter().map(|m| m.key.as_str()).collect();

    let filtered = filter_range(series, range, inputs.order);
    let summary = summarize(&filtered, &keys, inputs.strategy);
    let cards = summary_cards(&summary, inputs.metrics);
    let chart = project_chart(&filtered, &keys, inputs.chart_kind, inputs.palette);

    PanelView {
        options: range_options(series),
        range: range.clone(),
        filtered,
        summary,
        cards,
        chart,
    }
}
