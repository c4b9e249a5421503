//! 선택 범위.

use serde::{Deserialize, Serialize};

/// 사용자가 고른 `[start, end]` 시간 키 쌍.
///
/// 시작과 끝 사이의 순서는 강제하지 않습니다. 시작이 끝보다 뒤에 있으면
/// 필터 결과가 비어 있을 뿐 에러가 아닙니다.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectedRange {
    pub start: String,
    pub end: String,
}

impl SelectedRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// 시작 키를 바꾼 범위를 반환합니다.
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = start.into();
        self
    }

    /// 끝 키를 바꾼 범위를 반환합니다.
    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = end.into();
        self
    }

    /// 아직 선택되지 않은 (빈 키) 범위인지 확인합니다.
    pub fn is_unset(&self) -> bool {
        self.start.is_empty() && self.end.is_empty()
    }
}

impl std::fmt::Display for SelectedRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ~ {}", self.start, self.end)
    }
}
