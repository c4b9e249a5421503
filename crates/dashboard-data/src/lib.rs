//! 대시보드 데이터 소스.
//!
//! 이 crate는 다음을 제공합니다:
//! - 헤더 행 + 동적 타입 추론 CSV 파서
//! - 번들된 월별 인덱스 비교 테이블
//! - 원격(HTTP) 및 로컬 파일 CSV 소스
//!
//! 정렬과 필터링은 `dashboard-analytics`에서 담당합니다.

pub mod bundled;
pub mod error;
pub mod parser;
pub mod source;

pub use bundled::{index_series, INDEX_KEY_COLUMN};
pub use error::{DataError, Result};
pub use parser::{infer_field, parse_csv};
pub use source::{fetch_records, CsvSource, FileCsvSource, HttpCsvSource};
