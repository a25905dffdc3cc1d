//! Auto-send schedule rules: preview strings, confirmation sentences,
//! validation and the next fire time.

use crate::domain::locale::{self, fill};
use crate::domain::{AutoSendSettings, DayOfWeek, DomainError, Frequency, LanguageCode};
use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};

pub const DISABLED_DESCRIPTION: &str = "Auto-send disabled";

const TIME_FORMAT: &str = "%H:%M";

/// Settings-screen preview ("Daily at 08:00", "Weekly on Monday, Friday at 18:30").
///
/// Settings that never fire (weekly with no days, unreadable send time)
/// read as disabled.
pub fn describe_schedule(settings: &AutoSendSettings) -> String {
    if !is_effective(settings) {
        return DISABLED_DESCRIPTION.to_string();
    }
    let time = settings.send_time.trim();
    match settings.frequency {
        Frequency::Daily => format!("Daily at {}", time),
        Frequency::Weekly => {
            let days = active_days(settings);
            let names: Vec<&str> = days.iter().map(|d| d.english_name()).collect();
            format!("Weekly on {} at {}", names.join(", "), time)
        }
    }
}

/// First-person sentence sent to the contact after auto-send is switched on.
pub fn describe_schedule_confirmation(settings: &AutoSendSettings, language: LanguageCode) -> String {
    if !is_effective(settings) {
        return locale::CONFIRM_DISABLED.get(language).to_string();
    }
    let time = settings.send_time.trim();
    match settings.frequency {
        Frequency::Daily => fill(locale::CONFIRM_DAILY.get(language), &[("time", time)]),
        Frequency::Weekly => {
            let days = active_days(settings);
            let names: Vec<&str> = days
                .iter()
                .map(|d| locale::day_name(*d, language))
                .collect();
            fill(
                locale::CONFIRM_WEEKLY.get(language),
                &[("days", &names.join(", ")), ("time", time)],
            )
        }
    }
}

/// Reject settings that cannot produce a meaningful schedule.
///
/// Checked even when auto-send is off so a later toggle cannot enable a
/// broken schedule.
pub fn validate(settings: &AutoSendSettings) -> Result<(), DomainError> {
    parse_send_time(&settings.send_time)?;
    if settings.frequency == Frequency::Weekly && settings.days_of_week.is_empty() {
        return Err(DomainError::InvalidSchedule(
            "weekly schedule needs at least one day".into(),
        ));
    }
    Ok(())
}

/// Parse "HH:MM" (24h).
pub fn parse_send_time(send_time: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(send_time.trim(), TIME_FORMAT).map_err(|e| {
        DomainError::InvalidSchedule(format!("send time '{}' is not HH:MM: {}", send_time, e))
    })
}

/// Next fire time strictly after `after`, in the same local clock.
///
/// `None` when auto-send is off or the settings do not validate.
pub fn next_occurrence(settings: &AutoSendSettings, after: NaiveDateTime) -> Option<NaiveDateTime> {
    if !is_effective(settings) {
        return None;
    }
    let time = parse_send_time(&settings.send_time).ok()?;
    let days = active_days(settings);

    // a week plus today covers every weekday once
    (0..=7)
        .map(|offset| (after.date() + Duration::days(offset)).and_time(time))
        .filter(|candidate| *candidate > after)
        .find(|candidate| match settings.frequency {
            Frequency::Daily => true,
            Frequency::Weekly => days.contains(&DayOfWeek::from(candidate.weekday())),
        })
}

/// Switched on and able to fire.
fn is_effective(settings: &AutoSendSettings) -> bool {
    settings.auto_send && validate(settings).is_ok()
}

/// Selected days in canonical order, without duplicates.
fn active_days(settings: &AutoSendSettings) -> Vec<DayOfWeek> {
    let mut days = settings.days_of_week.clone();
    days.sort();
    days.dedup();
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn weekly(days: &[DayOfWeek], time: &str) -> AutoSendSettings {
        AutoSendSettings {
            auto_send: true,
            send_time: time.into(),
            frequency: Frequency::Weekly,
            days_of_week: days.to_vec(),
            ..AutoSendSettings::default()
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_describe_daily() {
        let settings = AutoSendSettings {
            auto_send: true,
            ..AutoSendSettings::default()
        };
        assert_eq!(describe_schedule(&settings), "Daily at 08:00");
    }

    #[test]
    fn test_describe_weekly_canonical_order() {
        let settings = weekly(&[DayOfWeek::Friday, DayOfWeek::Monday, DayOfWeek::Friday], "18:30");
        assert_eq!(
            describe_schedule(&settings),
            "Weekly on Monday, Friday at 18:30"
        );
    }

    #[test]
    fn test_disabled_short_circuits() {
        let mut settings = weekly(&[], "not a time");
        settings.auto_send = false;
        assert_eq!(describe_schedule(&settings), "Auto-send disabled");
        assert_eq!(
            describe_schedule_confirmation(&settings, LanguageCode::Hindi),
            locale::CONFIRM_DISABLED.hindi
        );
    }

    #[test]
    fn test_weekly_without_days() {
        let settings = weekly(&[], "07:00");
        assert_eq!(describe_schedule(&settings), "Auto-send disabled");
        assert!(matches!(
            validate(&settings),
            Err(DomainError::InvalidSchedule(_))
        ));
        assert_eq!(next_occurrence(&settings, at(2024, 1, 1, 0, 0)), None);
    }

    #[test]
    fn test_unreadable_send_time_reads_as_disabled() {
        let daily = AutoSendSettings {
            auto_send: true,
            send_time: "25:99".into(),
            ..AutoSendSettings::default()
        };
        assert_eq!(describe_schedule(&daily), DISABLED_DESCRIPTION);
        assert_eq!(
            describe_schedule_confirmation(&daily, LanguageCode::Tamil),
            locale::CONFIRM_DISABLED.tamil
        );
        assert_eq!(next_occurrence(&daily, at(2024, 1, 1, 0, 0)), None);

        let weekly = weekly(&[DayOfWeek::Monday], "8 am");
        assert_eq!(describe_schedule(&weekly), DISABLED_DESCRIPTION);
        assert_eq!(
            describe_schedule_confirmation(&weekly, LanguageCode::English),
            locale::CONFIRM_DISABLED.english
        );
    }

    #[test]
    fn test_validate_send_time() {
        assert!(validate(&AutoSendSettings::default()).is_ok());
        for bad in ["25:00", "8 am", "", "12:60"] {
            let settings = AutoSendSettings {
                send_time: bad.into(),
                ..AutoSendSettings::default()
            };
            assert!(validate(&settings).is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_confirmation_localized_days() {
        let settings = weekly(&[DayOfWeek::Friday, DayOfWeek::Monday], "18:30");
        assert_eq!(
            describe_schedule_confirmation(&settings, LanguageCode::English),
            "✅ Auto-send is on. I will send you the list every Monday, Friday at 18:30."
        );
        let hindi = describe_schedule_confirmation(&settings, LanguageCode::Hindi);
        assert!(hindi.contains("सोमवार, शुक्रवार"));
        assert!(hindi.contains("18:30"));

        let daily = AutoSendSettings {
            auto_send: true,
            send_time: "07:15".into(),
            ..AutoSendSettings::default()
        };
        assert!(describe_schedule_confirmation(&daily, LanguageCode::Tamil).contains("07:15"));
    }

    #[test]
    fn test_next_occurrence_daily() {
        let settings = AutoSendSettings {
            auto_send: true,
            ..AutoSendSettings::default()
        };
        // 2024-01-01 is a Monday
        assert_eq!(
            next_occurrence(&settings, at(2024, 1, 1, 7, 0)),
            Some(at(2024, 1, 1, 8, 0))
        );
        // strictly after: exactly at fire time moves to tomorrow
        assert_eq!(
            next_occurrence(&settings, at(2024, 1, 1, 8, 0)),
            Some(at(2024, 1, 2, 8, 0))
        );
    }

    #[test]
    fn test_next_occurrence_weekly() {
        let settings = weekly(&[DayOfWeek::Friday, DayOfWeek::Monday], "18:30");
        assert_eq!(
            next_occurrence(&settings, at(2024, 1, 1, 19, 0)),
            Some(at(2024, 1, 5, 18, 30))
        );
        assert_eq!(
            next_occurrence(&settings, at(2024, 1, 5, 18, 30)),
            Some(at(2024, 1, 8, 18, 30))
        );
        let only_monday = weekly(&[DayOfWeek::Monday], "18:30");
        assert_eq!(
            next_occurrence(&only_monday, at(2024, 1, 1, 18, 30)),
            Some(at(2024, 1, 8, 18, 30))
        );
    }

    #[test]
    fn test_next_occurrence_disabled() {
        assert_eq!(
            next_occurrence(&AutoSendSettings::default(), at(2024, 1, 1, 0, 0)),
            None
        );
    }
}
