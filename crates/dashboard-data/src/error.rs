//! 데이터 모듈 오류 타입.

use dashboard_core::DashboardError;
use thiserror::Error;

/// 데이터 관련 오류.
#[derive(Debug, Error)]
pub enum DataError {
    /// 요청 전송 실패 (연결, 타임아웃, 본문 읽기)
    #[error("Fetch error: {0}")]
    FetchError(String),

    /// 성공이 아닌 HTTP 응답
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// CSV 형식 오류
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 시간 키 컬럼이 헤더에 없음
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// 로컬 파일 읽기 오류
    #[error("IO error: {0}")]
    Io(String),
}

impl DataError {
    /// 전송 단계 오류인지 확인합니다.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DataError::FetchError(_) | DataError::HttpStatus { .. } | DataError::Io(_)
        )
    }
}

impl From<reqwest::Error> for DataError {
    fn from(err: reqwest::Error) -> Self {
        DataError::FetchError(err.to_string())
    }
}

impl From<csv::Error> for DataError {
    fn from(err: csv::Error) -> Self {
        DataError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::Io(err.to_string())
    }
}

impl From<DataError> for DashboardError {
    fn from(err: DataError) -> Self {
        if err.is_transport() {
            DashboardError::Network(err.to_string())
        } else {
            DashboardError::Parse(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_dashboard_error() {
        let err: DashboardError = DataError::HttpStatus {
            status: 404,
            url: "http://x/sheet.csv".to_string(),
        }
        .into();
        assert!(matches!(err, DashboardError::Network(_)));
        assert_eq!(err.to_string(), "네트워크 에러: HTTP 404 from http://x/sheet.csv");

        let err: DashboardError = DataError::MissingColumn("open".to_string()).into();
        assert!(matches!(err, DashboardError::Parse(_)));
    }
}
