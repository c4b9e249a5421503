//! 변화율 요약 모듈
//!
//! 화면에 보이는 구간의 첫 레코드와 마지막 레코드 사이의 지표별 변화율을
//! 계산합니다. 중간 레코드는 결과에 영향을 주지 않습니다.
//!
//! # 모듈 구성
//!
//! - [`strategy`]: 시작값 처리 규칙이 다른 두 가지 전략
//! - [`summary`]: 시리즈 → 요약 및 카드

pub mod strategy;
pub mod summary;

pub use strategy::*;
pub use summary::*;
