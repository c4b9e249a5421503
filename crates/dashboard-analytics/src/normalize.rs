//! 원격 시리즈 정렬 정규화.
//!
//! 원격 CSV는 정렬을 보장하지 않으므로 시간 키를 달력 날짜로 해석해 오름차순
//! 정렬합니다. 키가 비어 있는 행은 에러 없이 제거됩니다.

use dashboard_core::{parse_calendar_date, Record, SelectedRange, Series};
use tracing::{debug, info};

/// 키를 다듬고 빈 키를 제거한 뒤 날짜순으로 정렬합니다.
///
/// 날짜로 해석할 수 없는 키는 해석 가능한 키 뒤에 입력 순서대로 놓입니다.
/// 같은 날짜끼리의 순서는 의미가 없습니다.
pub fn normalize_series(key_column: impl Into<String>, records: Vec<Record>) -> Series {
    let total = records.len();

    let mut kept: Vec<Record> = records
        .into_iter()
        .filter_map(|mut record| {
            let trimmed = record.key.trim();
            if trimmed.is_empty() {
                return None;
            }
            if trimmed.len() != record.key.len() {
                record.key = trimmed.to_string();
            }
            Some(record)
        })
        .collect();

    let dropped = total - kept.len();
    if dropped > 0 {
        info!(dropped, "Dropped rows with empty time key");
    }

    kept.sort_by_cached_key(|record| {
        let date = parse_calendar_date(&record.key);
        (date.is_none(), date)
    });

    let unparsed = kept
        .iter()
        .filter(|r| parse_calendar_date(&r.key).is_none())
        .count();
    if unparsed > 0 {
        debug!(unparsed, "Rows with non-date keys placed last");
    }

    Series::new(key_column, kept)
}

/// 정렬된 시리즈의 기본 선택 범위 (첫 키, 마지막 키).
///
/// 빈 시리즈면 빈 키 쌍입니다.
pub fn default_range(series: &Series) -> SelectedRange {
    series
        .key_bounds()
        .map(|(first, last)| SelectedRange::new(first, last))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(series: &Series) -> Vec<&str> {
        series.keys().collect()
    }

    #[test]
    fn test_sorts_by_calendar_date() {
        let records = ["10/1/2024", "9/30/2024", "2024-09-29", "10/15/2024"]
            .iter()
            .map(|k| Record::new(*k))
            .collect();
        let series = normalize_series("open", records);
        assert_eq!(
            keys(&series),
            ["2024-09-29", "9/30/2024", "10/1/2024", "10/15/2024"]
        );
    }

    #[test]
    fn test_drops_blank_keys_and_trims() {
        let records = vec![
            Record::new("  "),
            Record::new(" 2024-01-03 "),
            Record::new(""),
            Record::new("2024-01-02"),
        ];
        let series = normalize_series("open", records);
        assert_eq!(keys(&series), ["2024-01-02", "2024-01-03"]);
    }

    #[test]
    fn test_unparseable_keys_go_last() {
        let records = vec![
            Record::new("total"),
            Record::new("2024-01-03"),
            Record::new("2024-01-02"),
        ];
        let series = normalize_series("open", records);
        assert_eq!(keys(&series), ["2024-01-02", "2024-01-03", "total"]);
    }

    #[test]
    fn test_default_range() {
        let series = normalize_series(
            "open",
            vec![Record::new("2024-02-01"), Record::new("2024-01-01")],
        );
        assert_eq!(
            default_range(&series),
            SelectedRange::new("2024-01-01", "2024-02-01")
        );

        let empty = normalize_series("open", vec![Record::new(" ")]);
        assert!(empty.is_empty());
        assert_eq!(default_range(&empty), SelectedRange::default());
    }
}
