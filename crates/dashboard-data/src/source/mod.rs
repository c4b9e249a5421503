//! CSV 문서 소스.
//!
//! 원격 거래 데이터는 게시된 스프레드시트 CSV를 인증 없이 GET으로 한 번
//! 가져옵니다. 테스트와 오프라인 실행을 위해 로컬 파일 소스도 제공합니다.

mod file;
mod http;

pub use file::FileCsvSource;
pub use http::HttpCsvSource;

use async_trait::async_trait;
use dashboard_core::Record;
use tracing::{info, instrument};

use crate::error::Result;
use crate::parser::parse_csv;

/// CSV 텍스트를 제공하는 소스.
#[async_trait]
pub trait CsvSource: Send + Sync {
    /// 로그와 오류 메시지에 쓰일 소스 설명.
    fn describe(&self) -> String;

    /// CSV 문서 전체를 가져옵니다.
    async fn fetch_text(&self) -> Result<String>;
}

/// 소스에서 CSV를 가져와 레코드로 파싱합니다.
#[instrument(skip(source), fields(source = %source.describe()))]
pub async fn fetch_records(source: &dyn CsvSource, key_column: &str) -> Result<Vec<Record>> {
    let text = source.fetch_text().await?;
    let records = parse_csv(&text, key_column)?;
    info!(rows = records.len(), bytes = text.len(), "Fetched CSV");
    Ok(records)
}
