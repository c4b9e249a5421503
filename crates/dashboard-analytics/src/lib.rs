//! 대시보드 분석 엔진.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 선택 범위 필터 (사전순 / 달력 날짜순)
//! - 원격 시리즈 정렬 정규화
//! - 두 가지 변화율 전략 (무보호 / 하한 적용)
//! - 시작/끝 선택지 목록
//! - 차트 데이터 투영
//! - 패널 상태 (인덱스 비교, 거래 성과) 및 대시보드
//!
//! 모든 파생값은 시리즈나 범위가 바뀔 때 호출자가 즉시 다시 계산하는 순수
//! 함수입니다.
//!
//! # Re-exports
//!
//! - [`performance`]: 변화율 전략과 요약 계산
//! - [`panel`]: 인덱스/거래 패널 및 [`Dashboard`]

pub mod chart;
pub mod filter;
pub mod normalize;
pub mod options;
pub mod panel;
pub mod performance;

pub use chart::{project_chart, ChartData, ChartKind, ChartLine};
pub use filter::filter_range;
pub use normalize::{default_range, normalize_series};
pub use options::range_options;
pub use panel::{
    Dashboard, IndexPanel, PanelView, TradingPanel, DASHBOARD_TITLE, INDEX_SUMMARY_HEADING,
    TRADING_SUMMARY_HEADING,
};
pub use performance::{
    summarize, summary_cards, ChangeStrategy, FlooredChange, UnguardedChange,
};
