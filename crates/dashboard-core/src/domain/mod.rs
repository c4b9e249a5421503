//! 대시보드 도메인 모델.
//!
//! - [`range`]: 사용자가 고른 시작/끝 시간 키
//! - [`summary`]: 지표별 변화율 요약과 카드
//! - [`fetch_state`]: 원격 시리즈 로딩 상태

pub mod fetch_state;
pub mod range;
pub mod summary;

pub use fetch_state::*;
pub use range::*;
pub use summary::*;
