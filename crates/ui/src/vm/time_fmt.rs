use chrono::{DateTime, Datelike, Utc};

const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Human label for a publish date relative to `now`.
///
/// Day distance is the ceiling of the absolute difference, so anything
/// within the last 24 hours (but not the exact same instant) reads "Ayer".
#[must_use]
pub fn format_relative_date(value: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (now - value).num_milliseconds().abs();
    let days = (diff_ms + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY;

    match days {
        0 => "Hoy".to_owned(),
        1 => "Ayer".to_owned(),
        2..=6 => format!("Hace {days} días"),
        _ => format_short_date(value),
    }
}

/// `17 oct 2026`
#[must_use]
pub fn format_short_date(value: DateTime<Utc>) -> String {
    let month = MONTHS_ES[value.month0() as usize];
    format!("{} {month} {}", value.day(), value.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aula_core::time::fixed_now;
    use chrono::Duration;

    #[test]
    fn relative_labels() {
        let now = fixed_now();
        assert_eq!(format_relative_date(now, now), "Hoy");
        assert_eq!(format_relative_date(now - Duration::hours(3), now), "Ayer");
        assert_eq!(format_relative_date(now - Duration::days(1), now), "Ayer");
        assert_eq!(format_relative_date(now - Duration::hours(30), now), "Hace 2 días");
        assert_eq!(format_relative_date(now - Duration::days(6), now), "Hace 6 días");
    }

    #[test]
    fn older_dates_use_short_spanish_format() {
        let now = fixed_now();
        assert_eq!(format_relative_date(now - Duration::days(14), now), "31 oct 2023");
        assert_eq!(format_short_date(now), "14 nov 2023");
    }
}
