use chrono::{DateTime, Datelike, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// First instant (`00:00:00.000`, local clock) of the month containing `now`.
pub fn start_of_month(now: DateTime<Local>) -> DateTime<Local> {
    let first_day = now.date_naive().with_day(1).unwrap_or_else(|| now.date_naive());
    local_midnight(first_day)
}

/// Reads a backend timestamp.
///
/// Accepts RFC 3339 and `YYYY-MM-DD[ T]HH:MM:SS[.fff][offset]`. Date-times
/// without an offset are taken as local time. Bare `YYYY-MM-DD` dates are
/// midnight UTC, the way the dashboard's browser reads them.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Local>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Local));
    }

    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(value, format) {
            return Some(parsed.with_timezone(&Local));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(local_datetime(parsed));
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)).with_timezone(&Local))
}

fn local_midnight(date: NaiveDate) -> DateTime<Local> {
    local_datetime(date.and_time(NaiveTime::MIN))
}

fn local_datetime(naive: NaiveDateTime) -> DateTime<Local> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(datetime) => datetime,
        LocalResult::Ambiguous(earliest, _) => earliest,
        //NOTE: Wall clock time skipped by a DST transition, read it as UTC instead
        LocalResult::None => Local.from_utc_datetime(&naive)
    }
}
