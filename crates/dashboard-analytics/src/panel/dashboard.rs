//! 대시보드 최상위 상태.

use dashboard_core::{AppConfig, DashboardResult, ThemeConfig};
use dashboard_data::{index_series, CsvSource};

use super::{IndexPanel, TradingPanel};

/// 대시보드 제목.
pub const DASHBOARD_TITLE: &str = "Financial Performance Dashboard";

/// 두 패널과 테마를 소유하는 페이지 단위 상태.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub theme: ThemeConfig,
    pub index: IndexPanel,
    pub trading: TradingPanel,
}

impl Dashboard {
    /// 번들된 인덱스 테이블을 읽고 거래 패널은 로딩 상태로 둡니다.
    pub fn from_config(config: &AppConfig) -> DashboardResult<Self> {
        let index = IndexPanel::new(index_series()?, &config.index, &config.theme);
        let trading = TradingPanel::new(&config.trading, &config.theme);

        Ok(Self {
            theme: config.theme.clone(),
            index,
            trading,
        })
    }

    /// 거래 데이터를 한 번 가져옵니다. 실패해도 인덱스 패널은 영향을 받지 않습니다.
    pub async fn load_trading(&mut self, source: &dyn CsvSource) {
        self.trading.load(source).await;
    }

    pub fn title(&self) -> &'static str {
        DASHBOARD_TITLE
    }
}
