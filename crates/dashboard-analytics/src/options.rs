//! 시작/끝 선택지 목록.

use dashboard_core::Series;

/// 시리즈의 시간 키를 순서대로 반환합니다.
///
/// 중복 제거나 검증은 하지 않으므로 중복 키는 중복 선택지로 나타납니다.
pub fn range_options(series: &Series) -> Vec<String> {
    series.keys().map(str::to_string).collect()
}
