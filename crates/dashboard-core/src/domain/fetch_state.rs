//! 원격 데이터 로딩 상태.
//!
//! 페이지 로드마다 한 번만 가져오며 재시도, 폴링, 취소는 없습니다.
//! `Loading`에서 `Ready` 또는 `Failed`로 한 번 전이한 뒤에는 다시 바뀌지 않습니다.

use serde::{Deserialize, Serialize};

/// 일회성 비동기 로딩의 상태.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum FetchState<T> {
    /// 요청 진행 중
    #[default]
    Loading,
    /// 성공
    Ready(T),
    /// 실패 (사용자에게 보여줄 메시지)
    Failed(String),
}

impl<T> FetchState<T> {
    /// 로딩 결과로부터 확정 상태를 만듭니다.
    pub fn settle<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => FetchState::Ready(value),
            Err(err) => FetchState::Failed(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            FetchState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> FetchState<U> {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Ready(value) => FetchState::Ready(f(value)),
            FetchState::Failed(message) => FetchState::Failed(message),
        }
    }
}
