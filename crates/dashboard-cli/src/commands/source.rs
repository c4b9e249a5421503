//! 거래 CSV 소스 선택과 로딩 표시.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use dashboard_analytics::TradingPanel;
use dashboard_core::RemoteConfig;
use dashboard_data::{CsvSource, FileCsvSource, HttpCsvSource};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// 소스 지정 인자. 둘 다 없으면 설정의 원격 URL을 사용합니다.
#[derive(Debug, Clone, Default)]
pub struct SourceArgs {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
}

/// 인자와 설정으로 CSV 소스를 만듭니다. 파일 경로가 URL보다 우선합니다.
pub fn build_source(args: &SourceArgs, remote: &RemoteConfig) -> Result<Box<dyn CsvSource>> {
    if let Some(path) = &args.file {
        debug!(path = %path.display(), "Using local CSV file");
        return Ok(Box::new(FileCsvSource::new(path.clone())));
    }

    let url = args.url.clone().unwrap_or_else(|| remote.csv_url.clone());
    let source = HttpCsvSource::new(url, Duration::from_secs(remote.timeout_secs))
        .context("Failed to build HTTP client")?;
    Ok(Box::new(source))
}

/// 스피너를 띄운 채 거래 데이터를 한 번 가져옵니다.
pub async fn load_with_spinner(panel: &mut TradingPanel, source: &dyn CsvSource) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message("Loading Trading Performance Data...");
    pb.enable_steady_tick(Duration::from_millis(100));

    panel.load(source).await;

    pb.finish_and_clear();
    Ok(())
}
