//! 헤더 행 기반 CSV 파서.
//!
//! 각 데이터 행은 레코드 하나가 되며, 필드 값은 동적 타입 추론을 거칩니다:
//! - `true`/`TRUE`/`false`/`FALSE` → 불리언
//! - 부동소수점 리터럴 (앞뒤 공백 허용, |값| < 2^53) → 숫자
//! - 빈 문자열 → null
//! - 그 외 → 문자열
//!
//! 시간 키 컬럼은 타입 추론 없이 앞뒤 공백만 제거합니다. 키가 비어 있는 행도
//! 그대로 반환하며, 제거 여부는 정규화 단계에서 결정합니다.

use std::sync::LazyLock;

use csv::ReaderBuilder;
use dashboard_core::{FieldValue, Record};
use regex::Regex;
use tracing::debug;

use crate::error::{DataError, Result};

static FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*-?(\d+\.?|\.\d+|\d+\.\d+)([eE][-+]?\d+)?\s*$").expect("valid float pattern")
});

/// 정수 정밀도를 잃지 않는 한계 (2^53).
const MAX_SAFE_MAGNITUDE: f64 = 9_007_199_254_740_992.0;

/// 원시 필드 문자열의 타입을 추론합니다.
pub fn infer_field(raw: &str) -> FieldValue {
    match raw {
        "true" | "TRUE" => return FieldValue::Bool(true),
        "false" | "FALSE" => return FieldValue::Bool(false),
        "" => return FieldValue::Null,
        _ => {}
    }

    if FLOAT.is_match(raw) {
        if let Ok(value) = raw.trim().parse::<f64>() {
            if value > -MAX_SAFE_MAGNITUDE && value < MAX_SAFE_MAGNITUDE {
                return FieldValue::Number(value);
            }
        }
    }

    FieldValue::Text(raw.to_string())
}

/// CSV 텍스트를 레코드 목록으로 파싱합니다.
///
/// `key_column`이 헤더에 없으면 [`DataError::MissingColumn`]을 반환합니다.
/// 필드 수가 헤더보다 적은 행은 부족한 컬럼이 없는 레코드가 됩니다.
pub fn parse_csv(text: &str, key_column: &str) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let key_idx = headers
        .iter()
        .position(|h| h == key_column)
        .ok_or_else(|| DataError::MissingColumn(key_column.to_string()))?;

    let mut records = Vec::new();
    for (line, row) in reader.records().enumerate() {
        let row = row.map_err(|e| DataError::ParseError(format!("row {}: {}", line + 1, e)))?;

        let key = row.get(key_idx).map(str::trim).unwrap_or_default();
        let mut record = Record::new(key);

        for (idx, name) in headers.iter().enumerate() {
            if idx == key_idx {
                continue;
            }
            if let Some(raw) = row.get(idx) {
                record.fields.insert(name.to_string(), infer_field(raw));
            }
        }

        records.push(record);
    }

    debug!(rows = records.len(), key_column, "Parsed CSV");
    Ok(records)
}
