//! 대시보드의 에러 타입.
//!
//! 집계 과정의 결측값이나 역전된 범위는 에러가 아니라 "N/A" 또는 빈 결과로
//! 처리되므로 여기에 포함되지 않습니다.

use thiserror::Error;

/// 핵심 대시보드 에러.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 네트워크 에러 (원격 CSV 전송 실패)
    #[error("네트워크 에러: {0}")]
    Network(String),

    /// 파싱 에러 (CSV 형식, 누락된 키 컬럼)
    #[error("파싱 에러: {0}")]
    Parse(String),

}

/// 대시보드 작업을 위한 Result 타입.
pub type DashboardResult<T> = Result<T, DashboardError>;

impl From<config::ConfigError> for DashboardError {
    fn from(err: config::ConfigError) -> Self {
        DashboardError::Config(err.to_string())
    }
}
