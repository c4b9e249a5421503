//! 선택 범위 필터.

use dashboard_core::{KeyOrder, SelectedRange, Series};
use tracing::debug;

/// `[range.start, range.end]` 폐구간에 시간 키가 들어가는 레코드만 남깁니다.
///
/// 원래 순서를 유지하며, 범위 키가 시리즈에 없어도 됩니다. 시작이 끝보다
/// 뒤에 있으면 빈 시리즈가 됩니다.
pub fn filter_range(series: &Series, range: &SelectedRange, order: KeyOrder) -> Series {
    let records = series
        .iter()
        .filter(|r| order.within(&r.key, &range.start, &range.end))
        .cloned()
        .collect::<Vec<_>>();

    debug!(
        %range,
        %order,
        total = series.len(),
        kept = records.len(),
        "Filtered series"
    );

    Series::new(series.key_column.clone(), records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::Record;

    fn months() -> Series {
        Series::new(
            "Month",
            ["2023-03-31", "2023-04-30", "2023-05-31", "2023-06-30"]
                .iter()
                .map(|k| Record::new(*k))
                .collect(),
        )
    }

    fn keys(series: &Series) -> Vec<&str> {
        series.keys().collect()
    }

    #[test]
    fn test_inclusive_bounds() {
        let filtered = filter_range(
            &months(),
            &SelectedRange::new("2023-04-30", "2023-05-31"),
            KeyOrder::Lexical,
        );
        assert_eq!(keys(&filtered), ["2023-04-30", "2023-05-31"]);
        assert_eq!(filtered.key_column, "Month");
    }

    #[test]
    fn test_bounds_outside_series() {
        let filtered = filter_range(
            &months(),
            &SelectedRange::new("2020-01-01", "2023-04-15"),
            KeyOrder::Lexical,
        );
        assert_eq!(keys(&filtered), ["2023-03-31"]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let filtered = filter_range(
            &months(),
            &SelectedRange::new("2023-06-30", "2023-03-31"),
            KeyOrder::Lexical,
        );
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_calendar_order_uses_dates() {
        let series = Series::new(
            "open",
            ["9/29/2024", "9/30/2024", "10/1/2024", "10/2/2024"]
                .iter()
                .map(|k| Record::new(*k))
                .collect(),
        );
        let range = SelectedRange::new("9/30/2024", "10/1/2024");

        let by_date = filter_range(&series, &range, KeyOrder::CalendarDate);
        assert_eq!(keys(&by_date), ["9/30/2024", "10/1/2024"]);

        // 같은 범위를 사전순으로 비교하면 시작("9/...")이 끝("1...")보다 뒤
        let by_text = filter_range(&series, &range, KeyOrder::Lexical);
        assert!(by_text.is_empty());
    }

    #[test]
    fn test_unset_range_on_calendar_order_is_empty() {
        let series = Series::new("open", vec![Record::new("2024-01-02")]);
        let filtered = filter_range(&series, &SelectedRange::default(), KeyOrder::CalendarDate);
        assert!(filtered.is_empty());
    }
}
