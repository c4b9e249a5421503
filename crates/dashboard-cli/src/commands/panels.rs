//! 패널 조회 명령어 구현.

use anyhow::Result;
use dashboard_analytics::{
    Dashboard, IndexPanel, PanelView, TradingPanel, DASHBOARD_TITLE, INDEX_SUMMARY_HEADING,
    TRADING_SUMMARY_HEADING,
};
use dashboard_core::{AppConfig, FetchState, ThemeConfig};
use dashboard_data::{index_series, CsvSource};
use serde::Serialize;
use tracing::info;

use super::render::{format_json, format_options, format_panel_table, OutputFormat};
use super::source::load_with_spinner;

/// 명령 실행 결과. `success`가 false면 프로세스는 0이 아닌 코드로 종료합니다.
#[derive(Debug)]
pub struct Report {
    pub body: String,
    pub success: bool,
}

impl Report {
    fn ok(body: String) -> Self {
        Self {
            body,
            success: true,
        }
    }
}

/// 시작/끝 키 인자. 지정하지 않은 쪽은 패널 기본값을 유지합니다.
#[derive(Debug, Clone, Default)]
pub struct RangeArgs {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// 선택지를 조회할 패널.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Index,
    Trading,
}

impl PanelKind {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "index" => Ok(Self::Index),
            "trading" => Ok(Self::Trading),
            _ => Err(anyhow::anyhow!("Invalid panel: {}. Use: index, trading", s)),
        }
    }
}

#[derive(Serialize)]
struct PanelSection<'a> {
    heading: &'a str,
    view: &'a PanelView,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum TradingSection<'a> {
    Loading,
    Ready {
        heading: &'a str,
        view: &'a PanelView,
    },
    Failed {
        error: &'a str,
    },
}

#[derive(Serialize)]
struct DashboardReport<'a> {
    title: &'a str,
    theme: &'a ThemeConfig,
    index: PanelSection<'a>,
    trading: TradingSection<'a>,
}

fn apply_index_range(panel: &mut IndexPanel, range: &RangeArgs) {
    if let Some(from) = &range.from {
        panel.select_start(from.clone());
    }
    if let Some(to) = &range.to {
        panel.select_end(to.clone());
    }
}

fn apply_trading_range(panel: &mut TradingPanel, range: &RangeArgs) {
    if let Some(from) = &range.from {
        panel.select_start(from.clone());
    }
    if let Some(to) = &range.to {
        panel.select_end(to.clone());
    }
}

fn trading_section(panel: &TradingPanel) -> TradingSection<'_> {
    match (panel.state(), panel.view()) {
        (FetchState::Failed(error), _) => TradingSection::Failed {
            error: error.as_str(),
        },
        (FetchState::Ready(_), Some(view)) => TradingSection::Ready {
            heading: TRADING_SUMMARY_HEADING,
            view,
        },
        _ => TradingSection::Loading,
    }
}

fn trading_table(panel: &TradingPanel) -> String {
    match trading_section(panel) {
        TradingSection::Ready { heading, view } => format_panel_table(heading, view),
        TradingSection::Failed { error } => format!("Error: {}\n", error),
        TradingSection::Loading => "Loading Trading Performance Data...\n".to_string(),
    }
}

/// 인덱스 패널을 출력합니다.
pub fn run_index(config: &AppConfig, range: &RangeArgs, format: OutputFormat) -> Result<Report> {
    let mut panel = IndexPanel::new(index_series()?, &config.index, &config.theme);
    apply_index_range(&mut panel, range);
    info!(range = %panel.range(), "Index panel computed");

    let body = match format {
        OutputFormat::Table => format_panel_table(INDEX_SUMMARY_HEADING, panel.view()),
        OutputFormat::Json => format_json(&PanelSection {
            heading: INDEX_SUMMARY_HEADING,
            view: panel.view(),
        })?,
    };
    Ok(Report::ok(body))
}

/// 거래 패널을 가져와 출력합니다. 가져오기에 실패하면 `success`가 false입니다.
pub async fn run_trading(
    config: &AppConfig,
    range: &RangeArgs,
    source: &dyn CsvSource,
    format: OutputFormat,
) -> Result<Report> {
    let mut panel = TradingPanel::new(&config.trading, &config.theme);
    load_with_spinner(&mut panel, source).await?;
    apply_trading_range(&mut panel, range);

    let body = match format {
        OutputFormat::Table => trading_table(&panel),
        OutputFormat::Json => format_json(&trading_section(&panel))?,
    };
    Ok(Report {
        body,
        success: panel.state().ready().is_some(),
    })
}

/// 두 패널을 모두 출력합니다. 거래 데이터 실패는 인덱스 패널에 영향을 주지 않습니다.
pub async fn run_show(
    config: &AppConfig,
    index_range: &RangeArgs,
    trading_range: &RangeArgs,
    source: &dyn CsvSource,
    format: OutputFormat,
) -> Result<Report> {
    let mut dashboard = Dashboard::from_config(config)?;
    apply_index_range(&mut dashboard.index, index_range);
    load_with_spinner(&mut dashboard.trading, source).await?;
    apply_trading_range(&mut dashboard.trading, trading_range);

    let body = match format {
        OutputFormat::Table => {
            let mut output = String::new();
            output.push_str(dashboard.title());
            output.push_str("\n\n");
            output.push_str(&format_panel_table(
                INDEX_SUMMARY_HEADING,
                dashboard.index.view(),
            ));
            output.push('\n');
            output.push_str(&trading_table(&dashboard.trading));
            output
        }
        OutputFormat::Json => format_json(&DashboardReport {
            title: DASHBOARD_TITLE,
            theme: &dashboard.theme,
            index: PanelSection {
                heading: INDEX_SUMMARY_HEADING,
                view: dashboard.index.view(),
            },
            trading: trading_section(&dashboard.trading),
        })?,
    };
    Ok(Report::ok(body))
}

/// 패널의 시작/끝 선택지를 출력합니다.
pub async fn run_options(
    config: &AppConfig,
    panel: PanelKind,
    source: &dyn CsvSource,
) -> Result<Report> {
    match panel {
        PanelKind::Index => {
            let panel = IndexPanel::new(index_series()?, &config.index, &config.theme);
            Ok(Report::ok(format_options(&panel.view().options)))
        }
        PanelKind::Trading => {
            let mut panel = TradingPanel::new(&config.trading, &config.theme);
            load_with_spinner(&mut panel, source).await?;
            match panel.view() {
                Some(view) => Ok(Report::ok(format_options(&view.options))),
                None => Ok(Report {
                    body: trading_table(&panel),
                    success: false,
                }),
            }
        }
    }
}
