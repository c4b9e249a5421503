//! 대시보드 통합 시나리오 테스트.
//!
//! 번들된 인덱스 테이블과 mockito로 흉내 낸 원격 거래 시트를 사용합니다.

use std::time::Duration;

use dashboard_analytics::{Dashboard, IndexPanel, TradingPanel};
use dashboard_core::{
    AppConfig, IndexPanelConfig, PerformanceValue, SelectedRange, ThemeConfig, Tone,
    TradingPanelConfig,
};
use dashboard_data::{index_series, FileCsvSource, HttpCsvSource};

const TRADING_SHEET: &str = "open,net gain,pct gain,combined percent gain,notes\n\
                             1/5/2024,250.5,2.5,0.004,late\n\
                             1/3/2024,100,0.005,-3,\n\
                             12/29/2023,0,,1.5,first\n\
                             , , , ,\n\
                             1/4/2024,180,1.1,0.2,\n";

fn index_panel() -> IndexPanel {
    IndexPanel::new(
        index_series().unwrap(),
        &IndexPanelConfig::default(),
        &ThemeConfig::default(),
    )
}

#[test]
fn test_index_full_span_tmi_1x() {
    let panel = index_panel();
    let view = panel.view();

    assert_eq!(view.range, SelectedRange::new("2023-03-31", "2024-07-31"));
    assert_eq!(view.filtered.len(), 17);
    assert_eq!(view.summary.display("TMI-1x"), "20.00");

    let card = &view.cards[0];
    assert_eq!(card.title, "TMI-1x");
    assert_eq!(card.text, "20.00%");
    assert_eq!(card.tone, Tone::Positive);
    assert_eq!(card.tone.color_token(), "green.500");
}

#[test]
fn test_index_single_month_is_zero() {
    let mut panel = index_panel();
    panel.set_range(SelectedRange::new("2023-03-31", "2023-03-31"));

    let view = panel.view();
    assert_eq!(view.filtered.len(), 1);
    for metric in ["TMI-1x", "TMI-2x", "TMI-3x", "S&P 500"] {
        assert_eq!(view.summary.display(metric), "0.00");
    }
}

#[test]
fn test_index_chart_covers_window() {
    let mut panel = index_panel();
    panel.select_start("2024-01-31");

    let chart = &panel.view().chart;
    assert_eq!(chart.x_key, "Month");
    assert_eq!(chart.labels.first().map(String::as_str), Some("2024-01-31"));
    assert_eq!(chart.labels.len(), 7);
    assert_eq!(chart.lines.len(), 4);
    assert_eq!(chart.lines[3].metric, "S&P 500");
    assert_eq!(chart.lines[3].color, "#ff7300");
}

#[tokio::test]
async fn test_trading_panel_from_remote_sheet() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/sheet.csv")
        .with_status(200)
        .with_body(TRADING_SHEET)
        .create_async()
        .await;

    let source =
        HttpCsvSource::new(format!("{}/sheet.csv", server.url()), Duration::from_secs(5)).unwrap();
    let mut panel = TradingPanel::new(&TradingPanelConfig::default(), &ThemeConfig::default());
    panel.load(&source).await;

    let series = panel.state().ready().expect("ready");
    assert_eq!(
        series.keys().collect::<Vec<_>>(),
        ["12/29/2023", "1/3/2024", "1/4/2024", "1/5/2024"]
    );
    assert_eq!(panel.range(), &SelectedRange::new("12/29/2023", "1/5/2024"));

    let view = panel.view().unwrap();
    // 0 → 하한 0.01: (250.5 - 0.01) / 0.01 × 100
    assert_eq!(view.summary.display("net gain"), "2504900.00");
    // 시작 레코드에 값 없음
    assert_eq!(view.summary.get("pct gain"), PerformanceValue::NotAvailable);
    // (0.004 - 1.5) / 1.5 × 100
    assert_eq!(view.summary.display("combined percent gain"), "-99.73");

    panel.select_start("1/3/2024");
    let view = panel.view().unwrap();
    assert_eq!(view.filtered.len(), 3);
    assert_eq!(view.summary.display("net gain"), "150.50");
    // 0.005 → 0.01: (2.5 - 0.01) / 0.01 × 100
    assert_eq!(view.summary.display("pct gain"), "24900.00");
    // 시작값 -3은 양수가 아니므로 N/A
    assert_eq!(view.summary.display("combined percent gain"), "N/A");
    assert_eq!(view.cards[2].text, "N/A");
}

#[tokio::test]
async fn test_trading_fetch_failure_leaves_index_intact() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/sheet.csv")
        .with_status(503)
        .create_async()
        .await;

    let source =
        HttpCsvSource::new(format!("{}/sheet.csv", server.url()), Duration::from_secs(5)).unwrap();
    let mut dashboard = Dashboard::from_config(&AppConfig::default()).unwrap();
    dashboard.load_trading(&source).await;

    let message = dashboard.trading.state().error().expect("failed");
    assert!(message.contains("503"), "{message}");
    assert!(dashboard.trading.view().is_none());
    assert_eq!(dashboard.index.view().summary.display("TMI-1x"), "20.00");
}

#[tokio::test]
async fn test_trading_load_is_one_shot() {
    let mut panel = TradingPanel::new(&TradingPanelConfig::default(), &ThemeConfig::default());
    panel.load(&FileCsvSource::new("/no/such/sheet.csv")).await;
    assert!(panel.state().error().is_some());

    // 두 번째 로딩은 무시됨
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/sheet.csv")
        .with_status(200)
        .with_body(TRADING_SHEET)
        .expect(0)
        .create_async()
        .await;
    let source =
        HttpCsvSource::new(format!("{}/sheet.csv", server.url()), Duration::from_secs(5)).unwrap();
    panel.load(&source).await;

    mock.assert_async().await;
    assert!(panel.state().error().is_some());
}
