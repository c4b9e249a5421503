//! 설정 관리.
//!
//! 기본값 → TOML 파일 → `DASHBOARD__` 접두사 환경 변수 순서로 설정을 덮어씁니다.
//! 모든 섹션은 기본값을 가지므로 설정 파일이 없어도 대시보드가 동작합니다.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::DashboardResult;

/// 거래 성과 시트의 게시된 CSV 주소.
pub const DEFAULT_TRADING_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRO99iDZZiqlXeGXRUP1Aubm7Fs2LP0oeda-yoxajUFsILfuOngPU196aKNhCeYd9kBRhFRHQx4gA8l/pub?output=csv";

/// 하한 적용 전략에서 사용하는 최소 시작값.
pub const DEFAULT_MIN_START_VALUE: f64 = 0.01;

/// `--config`를 주지 않았을 때 읽는 설정 파일.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// 로깅 설정
    pub logging: LoggingConfig,
    /// 원격 데이터 소스 설정
    pub remote: RemoteConfig,
    /// 인덱스 비교 패널 설정
    pub index: IndexPanelConfig,
    /// 거래 성과 패널 설정
    pub trading: TradingPanelConfig,
    /// 색상 테마
    pub theme: ThemeConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 원격 CSV 소스 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RemoteConfig {
    /// CSV 문서 URL
    pub csv_url: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            csv_url: DEFAULT_TRADING_CSV_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// 인덱스 비교 패널 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexPanelConfig {
    /// 초기 시작 월
    pub default_start: String,
    /// 초기 종료 월
    pub default_end: String,
    /// 차트와 요약에 표시할 지표 컬럼
    pub metrics: Vec<String>,
}

impl Default for IndexPanelConfig {
    fn default() -> Self {
        Self {
            default_start: "2023-03-31".to_string(),
            default_end: "2024-07-31".to_string(),
            metrics: ["TMI-1x", "TMI-2x", "TMI-3x", "S&P 500"]
                .iter()
                .map(|m| m.to_string())
                .collect(),
        }
    }
}

/// 지표 컬럼과 카드 제목.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MetricColumn {
    /// CSV 헤더 이름
    pub key: String,
    /// 카드에 표시할 제목
    pub label: String,
}

impl MetricColumn {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }

    /// 헤더 이름을 그대로 제목으로 사용합니다.
    pub fn plain(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
        }
    }
}

/// 거래 성과 패널 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TradingPanelConfig {
    /// 시간 키 컬럼 이름
    pub key_column: String,
    /// 시작값 하한
    pub min_start_value: f64,
    /// 요약할 지표
    pub metrics: Vec<MetricColumn>,
}

impl Default for TradingPanelConfig {
    fn default() -> Self {
        Self {
            key_column: "open".to_string(),
            min_start_value: DEFAULT_MIN_START_VALUE,
            metrics: vec![
                MetricColumn::new("net gain", "Net Gain"),
                MetricColumn::new("pct gain", "Pct Gain"),
                MetricColumn::new("combined percent gain", "Combined Percent Gain"),
            ],
        }
    }
}

/// 차트 및 카드 색상 테마.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// 배경색
    pub background_color: String,
    /// 글자색
    pub font_color: String,
    /// 라인 색상 (지표 순서대로 사용)
    pub chart_colors: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            font_color: "#000000".to_string(),
            chart_colors: ["#8884d8", "#82ca9d", "#ffc658", "#ff7300"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 기본값과 환경 변수만 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> DashboardResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("DASHBOARD")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> DashboardResult<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }
}
