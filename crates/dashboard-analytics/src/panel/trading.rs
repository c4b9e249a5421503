//! 거래 성과 패널.

use dashboard_core::{
    panel_span, FetchState, KeyOrder, MetricColumn, Record, SelectedRange, Series, ThemeConfig,
    TradingPanelConfig,
};
use dashboard_data::{fetch_records, CsvSource};
use tracing::{error, info, warn};

use super::{build_view, PanelView, ViewInputs};
use crate::chart::ChartKind;
use crate::normalize::{default_range, normalize_series};
use crate::performance::FlooredChange;

/// 거래 패널 요약 제목.
pub const TRADING_SUMMARY_HEADING: &str = "Performance Metrics over Selected Range";

/// 원격 거래 CSV를 보여주는 패널.
///
/// 상태는 `Loading`에서 시작해 한 번만 `Ready` 또는 `Failed`로 확정됩니다.
/// 확정 후의 로딩 요청은 무시됩니다.
#[derive(Debug, Clone)]
pub struct TradingPanel {
    key_column: String,
    state: FetchState<Series>,
    range: SelectedRange,
    metrics: Vec<MetricColumn>,
    palette: Vec<String>,
    strategy: FlooredChange,
    view: Option<PanelView>,
}

impl TradingPanel {
    /// 로딩 상태의 패널을 생성합니다.
    pub fn new(config: &TradingPanelConfig, theme: &ThemeConfig) -> Self {
        Self {
            key_column: config.key_column.clone(),
            state: FetchState::Loading,
            range: SelectedRange::default(),
            metrics: config.metrics.clone(),
            palette: theme.chart_colors.clone(),
            strategy: FlooredChange::new(config.min_start_value),
            view: None,
        }
    }

    /// 소스에서 CSV를 한 번 가져와 상태를 확정합니다.
    pub async fn load(&mut self, source: &dyn CsvSource) {
        if self.state.is_settled() {
            warn!(source = %source.describe(), "Trading data already settled, ignoring load");
            return;
        }

        info!(source = %source.describe(), "Loading trading performance data");
        let result = fetch_records(source, &self.key_column).await;
        self.settle(result);
    }

    /// 가져오기 결과로 상태를 확정합니다.
    ///
    /// 성공하면 키 기준으로 정렬하고 기본 범위를 (첫 키, 마지막 키)로 둡니다.
    pub fn settle<E: std::fmt::Display>(&mut self, result: Result<Vec<Record>, E>) {
        if self.state.is_settled() {
            warn!("Trading data already settled, ignoring result");
            return;
        }

        if let Err(err) = &result {
            error!(error = %err, "Trading data failed to load");
        }

        let key_column = self.key_column.clone();
        self.state =
            FetchState::settle(result).map(|records| normalize_series(key_column, records));

        if let FetchState::Ready(series) = &self.state {
            self.range = default_range(series);
            info!(rows = series.len(), range = %self.range, "Trading data ready");
            self.recompute();
        }
    }

    /// 시작 날짜를 선택합니다.
    pub fn select_start(&mut self, key: impl Into<String>) {
        self.range.start = key.into();
        self.recompute();
    }

    /// 끝 날짜를 선택합니다.
    pub fn select_end(&mut self, key: impl Into<String>) {
        self.range.end = key.into();
        self.recompute();
    }

    pub fn state(&self) -> &FetchState<Series> {
        &self.state
    }

    pub fn range(&self) -> &SelectedRange {
        &self.range
    }

    /// 데이터가 준비된 경우의 뷰.
    pub fn view(&self) -> Option<&PanelView> {
        self.view.as_ref()
    }

    pub fn metrics(&self) -> &[MetricColumn] {
        &self.metrics
    }

    fn recompute(&mut self) {
        let FetchState::Ready(series) = &self.state else {
            return;
        };

        let _span = panel_span!("trading_recompute", "trading", self.range).entered();
        self.view = Some(build_view(
            series,
            &self.range,
            &ViewInputs {
                order: KeyOrder::CalendarDate,
                metrics: &self.metrics,
                strategy: &self.strategy,
                chart_kind: &ChartKind::Comparison,
                palette: &self.palette,
            },
        ));
    }
}
