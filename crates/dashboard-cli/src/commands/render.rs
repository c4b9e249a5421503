//! 패널 뷰 출력 형식.

use anyhow::{Context, Result};
use dashboard_analytics::{ChartData, PanelView};
use serde::Serialize;

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("Invalid format: {}. Use: table, json", s)),
        }
    }
}

/// 요약 카드와 차트 표를 하나의 텍스트 블록으로 만듭니다.
pub fn format_panel_table(heading: &str, view: &PanelView) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} ({})\n", heading, view.range));
    output.push_str(&"-".repeat(60));
    output.push('\n');

    for card in &view.cards {
        output.push_str(&format!(
            "{:<30} {:>14}  {}\n",
            truncate(&card.title, 30),
            card.text,
            card.tone.color_token()
        ));
    }

    output.push('\n');
    output.push_str(&format_chart_table(&view.chart));
    output
}

/// 차트 데이터를 행 단위 표로 출력합니다. 값이 없는 점은 `-`로 표시합니다.
pub fn format_chart_table(chart: &ChartData) -> String {
    if chart.is_empty() {
        return "(no data in selected range)\n".to_string();
    }

    let mut output = String::new();

    output.push_str(&format!("{:<12}", truncate(&chart.x_key, 12)));
    for line in &chart.lines {
        output.push_str(&format!(" {:>22}", truncate(&line.metric, 22)));
    }
    output.push('\n');

    for (row, label) in chart.labels.iter().enumerate() {
        output.push_str(&format!("{:<12}", truncate(label, 12)));
        for line in &chart.lines {
            let cell = match line.points.get(row).copied().flatten() {
                Some(value) => value.to_string(),
                None => "-".to_string(),
            };
            output.push_str(&format!(" {:>22}", cell));
        }
        output.push('\n');
    }

    output.push_str(&format!("Total: {} rows\n", chart.labels.len()));
    output
}

/// 범위 선택지를 한 줄에 하나씩 출력합니다.
pub fn format_options(options: &[String]) -> String {
    let mut output = String::new();
    for option in options {
        output.push_str(option);
        output.push('\n');
    }
    output.push_str(&format!("Total: {} options", options.len()));
    output
}

/// JSON 형식 출력.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize to JSON")
}

/// 문자열 자르기 (UTF-8 안전).
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
