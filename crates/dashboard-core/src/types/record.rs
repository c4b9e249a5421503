//! 시계열 레코드와 시리즈.
//!
//! 레코드는 시간 키(월 레이블 또는 날짜 레이블)와 컬럼 이름 → 필드 값 매핑으로
//! 구성됩니다. 필드 값은 CSV 동적 타입 추론 결과를 그대로 보존하며,
//! 지표 조회 시에는 숫자 필드만 값으로 인정됩니다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 동적 타입 추론이 적용된 필드 값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// 숫자로 인식된 값
    Number(f64),
    /// `true`/`false` 리터럴
    Bool(bool),
    /// 그 밖의 문자열
    Text(String),
    /// 빈 필드
    Null,
}

impl FieldValue {
    /// 숫자 값이면 반환합니다.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<Option<f64>> for FieldValue {
    fn from(v: Option<f64>) -> Self {
        v.map(FieldValue::Number).unwrap_or(FieldValue::Null)
    }
}

/// 시계열의 한 행.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// 시간 키 (표시 및 정렬/필터 기준)
    pub key: String,
    /// 컬럼 이름 → 값
    pub fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// 필드가 없는 레코드를 생성합니다.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            fields: BTreeMap::new(),
        }
    }

    /// 필드를 추가한 레코드를 반환합니다.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// 지표 값을 조회합니다.
    ///
    /// 컬럼이 없거나 숫자가 아닌 경우 `None`을 반환합니다.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.fields.get(name).and_then(FieldValue::as_number)
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}

/// 시간 순서로 정렬된(것으로 기대되는) 레코드의 시퀀스.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    /// 시간 키 컬럼 이름 (예: "Month", "open")
    pub key_column: String,
    records: Vec<Record>,
}

impl Series {
    pub fn new(key_column: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            key_column: key_column.into(),
            records,
        }
    }

    /// 같은 키 컬럼을 가진 빈 시리즈를 생성합니다.
    pub fn empty_like(&self) -> Self {
        Self::new(self.key_column.clone(), Vec::new())
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&Record> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// 시간 키를 시리즈 순서대로 반환합니다.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.key.as_str())
    }

    /// 첫 번째와 마지막 레코드의 키.
    pub fn key_bounds(&self) -> Option<(&str, &str)> {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => Some((first.key.as_str(), last.key.as_str())),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
