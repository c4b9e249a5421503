//! 인덱스 비교 패널.

use dashboard_core::{
    panel_span, IndexPanelConfig, KeyOrder, MetricColumn, SelectedRange, Series, ThemeConfig,
};

use super::{build_view, PanelView, ViewInputs};
use crate::chart::ChartKind;
use crate::performance::UnguardedChange;

/// 인덱스 패널 요약 제목.
pub const INDEX_SUMMARY_HEADING: &str = "Performance over Selected Range";

/// 번들된 월별 테이블을 보여주는 패널.
///
/// 월 레이블은 정렬 가능한 ISO 형태이므로 입력 순서를 그대로 신뢰하고
/// 사전순으로 비교합니다.
#[derive(Debug, Clone)]
pub struct IndexPanel {
    series: Series,
    range: SelectedRange,
    metrics: Vec<MetricColumn>,
    palette: Vec<String>,
    chart_kind: ChartKind,
    view: PanelView,
}

impl IndexPanel {
    /// 설정의 기본 범위로 패널을 생성합니다.
    pub fn new(series: Series, config: &IndexPanelConfig, theme: &ThemeConfig) -> Self {
        let metrics: Vec<MetricColumn> = config.metrics.iter().map(MetricColumn::plain).collect();
        let range = SelectedRange::new(&config.default_start, &config.default_end);
        let chart_kind = ChartKind::Comparison;
        let palette = theme.chart_colors.clone();

        let view = build_view(
            &series,
            &range,
            &ViewInputs {
                order: KeyOrder::Lexical,
                metrics: &metrics,
                strategy: &UnguardedChange,
                chart_kind: &chart_kind,
                palette: &palette,
            },
        );

        Self {
            series,
            range,
            metrics,
            palette,
            chart_kind,
            view,
        }
    }

    /// 시작 월을 선택합니다.
    pub fn select_start(&mut self, key: impl Into<String>) {
        self.range.start = key.into();
        self.recompute();
    }

    /// 끝 월을 선택합니다.
    pub fn select_end(&mut self, key: impl Into<String>) {
        self.range.end = key.into();
        self.recompute();
    }

    /// 범위 전체를 바꿉니다.
    pub fn set_range(&mut self, range: SelectedRange) {
        self.range = range;
        self.recompute();
    }

    /// 단일 지표 차트로 전환합니다.
    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        self.chart_kind = kind;
        self.recompute();
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn range(&self) -> &SelectedRange {
        &self.range
    }

    pub fn view(&self) -> &PanelView {
        &self.view
    }

    fn recompute(&mut self) {
        let _span = panel_span!("index_recompute", "index", self.range).entered();
        self.view = build_view(
            &self.series,
            &self.range,
            &ViewInputs {
                order: KeyOrder::Lexical,
                metrics: &self.metrics,
                strategy: &UnguardedChange,
                chart_kind: &self.chart_kind,
                palette: &self.palette,
            },
        );
    }
}
