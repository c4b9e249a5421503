//! 시간 키 비교 규칙.
//!
//! 월 레이블("2023-03-31")은 문자열 그대로 정렬 가능한 형태이므로 사전순으로
//! 비교하고, 원격 거래 데이터의 날짜 레이블은 달력 날짜로 해석해 비교합니다.
//! 날짜로 해석할 수 없는 키는 어떤 값과도 비교되지 않습니다.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 날짜만 있는 레이블 형식.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"];

/// 시각이 포함된 레이블 형식.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// 레이블을 달력 날짜(시각)로 해석합니다.
///
/// 지원 형식: ISO 날짜, ISO 날짜-시각(오프셋 포함 가능), `M/D/YYYY`,
/// `YYYY/M/D`, `YYYY-MM`, 영문 월 이름.
pub fn parse_calendar_date(label: &str) -> Option<NaiveDateTime> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(label) {
        return Some(dt.naive_utc());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(label, fmt) {
            return Some(dt);
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(label, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    // "2024-01" 같은 연-월 레이블은 해당 월의 1일로 봅니다.
    NaiveDate::parse_from_str(&format!("{}-01", label), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// 시간 키 비교 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyOrder {
    /// 문자열 사전순 (월 레이블)
    #[default]
    Lexical,
    /// 달력 날짜순 (날짜 레이블)
    CalendarDate,
}

impl KeyOrder {
    /// 두 키를 비교합니다. 비교할 수 없으면 `None`.
    pub fn compare(&self, a: &str, b: &str) -> Option<Ordering> {
        match self {
            KeyOrder::Lexical => Some(a.cmp(b)),
            KeyOrder::CalendarDate => {
                let a = parse_calendar_date(a)?;
                let b = parse_calendar_date(b)?;
                Some(a.cmp(&b))
            }
        }
    }

    /// `start <= key <= end` 여부.
    ///
    /// 어느 한쪽이라도 비교할 수 없으면 `false`입니다.
    pub fn within(&self, key: &str, start: &str, end: &str) -> bool {
        let lower = self.compare(key, start);
        let upper = self.compare(key, end);
        matches!(lower, Some(Ordering::Greater | Ordering::Equal))
            && matches!(upper, Some(Ordering::Less | Ordering::Equal))
    }
}

impl std::fmt::Display for KeyOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyOrder::Lexical => write!(f, "lexical"),
            KeyOrder::CalendarDate => write!(f, "calendar_date"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_common_labels() {
        assert_eq!(parse_calendar_date("2024-01-05"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_calendar_date(" 1/5/2024 "), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_calendar_date("2024/01/05"), Some(ymd(2024, 1, 5)));
        assert_eq!(parse_calendar_date("2024-02"), Some(ymd(2024, 2, 1)));
        assert_eq!(parse_calendar_date("Jan 5, 2024"), Some(ymd(2024, 1, 5)));
        assert_eq!(
            parse_calendar_date("2024-01-05T09:30:00"),
            ymd(2024, 1, 5).date().and_hms_opt(9, 30, 0)
        );
        assert_eq!(
            parse_calendar_date("2024-01-05T09:30:00+09:00"),
            ymd(2024, 1, 5).date().and_hms_opt(0, 30, 0)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_calendar_date(""), None);
        assert_eq!(parse_calendar_date("   "), None);
        assert_eq!(parse_calendar_date("not a date"), None);
        assert_eq!(parse_calendar_date("2024-13-01"), None);
    }

    #[test]
    fn test_lexical_order() {
        let order = KeyOrder::Lexical;
        assert!(order.within("2023-05-31", "2023-03-31", "2024-07-31"));
        assert!(order.within("2023-03-31", "2023-03-31", "2023-03-31"));
        assert!(!order.within("2023-02-28", "2023-03-31", "2024-07-31"));
        // 시작이 끝보다 뒤면 어떤 키도 구간에 들지 않음
        assert!(!order.within("2023-05-31", "2024-07-31", "2023-03-31"));
    }

    #[test]
    fn test_calendar_order_differs_from_lexical() {
        // 사전순으로는 "10/1/2024" < "9/30/2024"
        assert_eq!(
            KeyOrder::Lexical.compare("10/1/2024", "9/30/2024"),
            Some(Ordering::Less)
        );
        assert_eq!(
            KeyOrder::CalendarDate.compare("10/1/2024", "9/30/2024"),
            Some(Ordering::Greater)
        );
    }

    #[test]
    fn test_calendar_order_unparseable_is_never_within() {
        let order = KeyOrder::CalendarDate;
        assert_eq!(order.compare("garbage", "2024-01-01"), None);
        assert!(!order.within("garbage", "2024-01-01", "2024-12-31"));
        assert!(!order.within("2024-06-01", "", "2024-12-31"));
    }
}
