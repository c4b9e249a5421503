//! 대시보드 CLI 도구 모음.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 인덱스/거래 패널 조회
//! - 범위 선택지 목록
//! - 표/JSON 출력

pub mod commands;

pub use commands::*;
