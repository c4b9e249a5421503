//! # Dashboard Core
//!
//! 성과 대시보드의 핵심 도메인 모델 및 타입을 제공합니다.
//!
//! 이 크레이트는 대시보드 전반에서 사용되는 기본 타입을 제공합니다:
//! - 레코드/시계열 구조체 및 동적 타입 필드 값
//! - 시간 키 파싱 (월 레이블, 달력 날짜)
//! - 선택 범위와 성과 요약
//! - 원격 데이터 로딩 상태
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
pub use types::*;
