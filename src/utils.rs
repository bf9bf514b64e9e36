/// Utility functions
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Parse a timestamp as the upstream API and query strings write them.
///
/// Accepts RFC 3339 (`2006-03-24T22:30:00.000Z`), `YYYY-MM-DD HH:MM:SS`
/// and bare dates (`YYYY-MM-DD`, read as UTC midnight).
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(Utc.from_utc_datetime(&ndt));
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)));
    }
    None
}

/// Last representable millisecond of the UTC calendar day containing `dt`
pub fn end_of_day(dt: DateTime<Utc>) -> DateTime<Utc> {
    let last = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    Utc.from_utc_datetime(&dt.date_naive().and_time(last))
}

/// Round to one decimal place, halves away from zero
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Split a comma-separated query value, dropping empty items
pub fn csv_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
