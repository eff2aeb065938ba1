use chrono::{DateTime, FixedOffset, Utc};

/// Canonical offset for Indochina Time (ICT, UTC+7), the wall clock both
/// landing-page sites operate on. ICT has no daylight-saving rules, so a
/// fixed offset is exact for this zone.
const ICT_OFFSET_SECONDS: i32 = 7 * 3600;

fn ict() -> FixedOffset {
    FixedOffset::east_opt(ICT_OFFSET_SECONDS).expect("UTC+7 is a valid offset")
}

/// Formats an instant as ICT wall-clock time with millisecond precision,
/// e.g. `2024-01-01T07:00:00.000+07:00`. Independent of the host timezone.
pub fn format_ict(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&ict())
        .format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        .to_string()
}

/// Current time in ICT, used for the `created_at` column.
pub fn now_ict() -> String {
    format_ict(Utc::now())
}
