//! 번들된 월별 인덱스 비교 테이블.
//!
//! 세 가지 인덱스 추종 변형(TMI-1x/2x/3x)과 벤치마크(S&P 500)의 월말 지수입니다.
//! 컴파일 시점에 포함되며 외부 I/O가 없습니다. 행 순서는 그대로 신뢰합니다.

use dashboard_core::Series;

use crate::error::Result;
use crate::parser::parse_csv;

/// 월 레이블 컬럼 이름.
pub const INDEX_KEY_COLUMN: &str = "Month";

const INDEX_CSV: &str = include_str!("../data/index_performance.csv");

/// 번들된 인덱스 시리즈를 파싱합니다.
pub fn index_series() -> Result<Series> {
    let records = parse_csv(INDEX_CSV, INDEX_KEY_COLUMN)?;
    Ok(Series::new(INDEX_KEY_COLUMN, records))
}
