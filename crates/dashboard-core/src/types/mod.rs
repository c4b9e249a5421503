//! 대시보드 전반에서 사용되는 핵심 타입.

pub mod format;
pub mod record;
pub mod time_key;

pub use format::*;
pub use record::*;
pub use time_key::*;
