//! 시리즈 → 성과 요약.

use dashboard_core::{MetricColumn, PerformanceSummary, Series, SummaryCard};
use tracing::debug;

use super::strategy::ChangeStrategy;

/// 구간의 첫 레코드와 마지막 레코드로 지표별 변화율을 계산합니다.
///
/// 레코드가 하나뿐이면 그 레코드가 양 끝점이 되어 변화율은 0입니다.
/// 빈 시리즈는 모든 지표가 "사용 불가"입니다.
pub fn summarize<S: AsRef<str>>(
    series: &Series,
    metrics: &[S],
    strategy: &dyn ChangeStrategy,
) -> PerformanceSummary {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        debug!(strategy = strategy.name(), "Empty view, summary not available");
        return PerformanceSummary::not_available(metrics);
    };

    let mut summary = PerformanceSummary::new();
    for metric in metrics {
        let metric = metric.as_ref();
        let value = strategy.change(first.metric(metric), last.metric(metric));
        summary.push(metric, value);
    }

    debug!(
        strategy = strategy.name(),
        from = %first.key,
        to = %last.key,
        metrics = summary.len(),
        "Summary computed"
    );
    summary
}

/// 요약을 카드 목록으로 변환합니다. 카드 순서는 `columns` 순서입니다.
pub fn summary_cards(summary: &PerformanceSummary, columns: &[MetricColumn]) -> Vec<SummaryCard> {
    columns
        .iter()
        .map(|column| SummaryCard::new(&column.label, &summary.get(&column.key)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::performance::{FlooredChange, UnguardedChange};
    use dashboard_core::{FieldValue, PerformanceValue, Record, Tone};

    fn series(rows: Vec<Record>) -> Series {
        Series::new("Month", rows)
    }

    #[test]
    fn test_uses_only_endpoints() {
        let s = series(vec![
            Record::new("2023-03-31").with_field("TMI-1x", 100.0),
            Record::new("2023-04-30").with_field("TMI-1x", 5000.0),
            Record::new("2023-05-31").with_field("TMI-1x", FieldValue::Null),
            Record::new("2023-06-30").with_field("TMI-1x", 120.0),
        ]);
        let summary = summarize(&s, &["TMI-1x"], &UnguardedChange);
        assert_eq!(summary.display("TMI-1x"), "20.00");
    }

    #[test]
    fn test_single_record_is_zero_change() {
        let s = series(vec![Record::new("2023-03-31").with_field("TMI-1x", 100.0)]);
        let summary = summarize(&s, &["TMI-1x"], &UnguardedChange);
        assert_eq!(summary.display("TMI-1x"), "0.00");
    }

    #[test]
    fn test_null_endpoint_only_affects_its_metric() {
        let s = series(vec![
            Record::new("2023-03-31")
                .with_field("TMI-1x", 100.0)
                .with_field("S&P 500", FieldValue::Null),
            Record::new("2023-04-30")
                .with_field("TMI-1x", 110.0)
                .with_field("S&P 500", 105.0),
        ]);
        let summary = summarize(&s, &["TMI-1x", "S&P 500"], &UnguardedChange);
        assert_eq!(summary.display("TMI-1x"), "10.00");
        assert_eq!(summary.get("S&P 500"), PerformanceValue::NotAvailable);
    }

    #[test]
    fn test_empty_view_is_all_not_available() {
        let metrics = ["net gain", "pct gain", "combined percent gain"];
        for strategy in [&UnguardedChange as &dyn ChangeStrategy, &FlooredChange::default()] {
            let summary = summarize(&Series::default(), &metrics, strategy);
            assert_eq!(summary.len(), 3);
            for metric in metrics {
                assert_eq!(summary.display(metric), "N/A");
            }
        }
    }

    #[test]
    fn test_cards_use_labels_and_tone() {
        let s = series(vec![
            Record::new("2024-01-02")
                .with_field("net gain", 100.0)
                .with_field("pct gain", -5.0),
            Record::new("2024-01-03")
                .with_field("net gain", 90.0)
                .with_field("pct gain", 10.0),
        ]);
        let columns = vec![
            MetricColumn::new("net gain", "Net Gain"),
            MetricColumn::new("pct gain", "Pct Gain"),
        ];
        let summary = summarize(&s, &["net gain", "pct gain"], &FlooredChange::default());
        let cards = summary_cards(&summary, &columns);

        assert_eq!(cards[0].title, "Net Gain");
        assert_eq!(cards[0].text, "-10.00%");
        assert_eq!(cards[0].tone, Tone::Negative);
        assert_eq!(cards[1].title, "Pct Gain");
        assert_eq!(cards[1].text, "N/A");
        assert_eq!(cards[1].tone, Tone::Negative);
    }
}
