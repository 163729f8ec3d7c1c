//! Turns upstream day records into calendar events.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use uuid::Uuid;

use crate::models::{CalendarEvent, PrayerTimesDay, Vakit};
use crate::{Error, Result};

/// Fixed namespace for deriving event uids. Regenerating the feed for the
/// same timestamps must yield the same uids so subscribing clients update
/// entries instead of duplicating them.
const UID_NAMESPACE: Uuid = Uuid::from_u128(0x3ba9_46ef_8a1d_4c5e_9f27_6b90_d1c4_0a35);

/// Every prayer event spans a fixed 15-minute block.
const EVENT_MINUTES: i64 = 15;

/// Expand one upstream day record into its six calendar events.
///
/// Events come out in the fixed daily order: dawn, sunrise, midday,
/// afternoon, evening, night.
pub fn events_for_day(day: &PrayerTimesDay) -> Result<Vec<CalendarEvent>> {
    let base = parse_base_date(&day.date)?;

    Vakit::ALL
        .iter()
        .map(|vakit| {
            let start = event_start(base, vakit.time_of(day))?;
            Ok(CalendarEvent {
                uid: event_uid(&start),
                title: vakit.title(),
                start,
                end: start + Duration::minutes(EVENT_MINUTES),
            })
        })
        .collect()
}

/// Flatten a full upstream response into day-major, time-minor event order.
pub fn events_for_days(days: &[PrayerTimesDay]) -> Result<Vec<CalendarEvent>> {
    let mut events = Vec::with_capacity(days.len() * Vakit::ALL.len());
    for day in days {
        events.extend(events_for_day(day)?);
    }
    Ok(events)
}

/// Extract the civil date from the record's ISO-8601 date string.
///
/// Upstream sends a full datetime with offset ("2024-03-01T00:00:00+03:00");
/// only the date part matters, the time of day comes from the clock strings.
fn parse_base_date(raw: &str) -> Result<NaiveDate> {
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| Error::InvalidDate(raw.to_string()))
}

/// Add an "HH:MM" clock string to the base date as an offset from midnight.
///
/// The addition is naive civil time, the same calendar the record's date
/// lives in. An offset of 24 hours or more rolls into the next day.
fn event_start(base: NaiveDate, clock: &str) -> Result<NaiveDateTime> {
    let (hour, minute) = parse_clock(clock)?;
    Ok(base.and_time(NaiveTime::MIN)
        + Duration::hours(i64::from(hour))
        + Duration::minutes(i64::from(minute)))
}

fn parse_clock(raw: &str) -> Result<(u32, u32)> {
    let invalid = || Error::InvalidTimeFormat(raw.to_string());

    let (hour, minute) = raw.trim().split_once(':').ok_or_else(invalid)?;
    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;

    Ok((hour, minute))
}

/// Derive the stable uid for an event from its start timestamp.
fn event_uid(start: &NaiveDateTime) -> String {
    let name = start.format("%Y-%m-%dT%H:%M").to_string();
    Uuid::new_v5(&UID_NAMESPACE, name.as_bytes()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_day() -> PrayerTimesDay {
        PrayerTimesDay {
            date: "2024-03-01T00:00:00.0000000+03:00".to_string(),
            imsak: "05:12".to_string(),
            gunes: "07:44".to_string(),
            ogle: "13:23".to_string(),
            ikindi: "16:21".to_string(),
            aksam: "19:07".to_string(),
            yatsi: "20:29".to_string(),
        }
    }

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_six_events_in_fixed_order() {
        let events = events_for_day(&sample_day()).unwrap();

        assert_eq!(events.len(), 6);
        let titles: Vec<&str> = events.iter().map(|e| e.title).collect();
        assert_eq!(
            titles,
            vec![
                "Sabah Namazi",
                "Gunes Dogusu",
                "Ogle Namazi",
                "Ikindi Namazi",
                "Aksam Namazi",
                "Yatsi Namazi",
            ]
        );
    }

    #[test]
    fn test_dawn_event_start() {
        let events = events_for_day(&sample_day()).unwrap();
        assert_eq!(events[0].start, dt(2024, 3, 1, 5, 12));
    }

    #[test]
    fn test_event_end_is_fifteen_minutes_after_start() {
        let events = events_for_day(&sample_day()).unwrap();
        for event in &events {
            assert_eq!(event.end - event.start, Duration::minutes(15));
        }
    }

    #[test]
    fn test_uids_are_deterministic() {
        let first = events_for_day(&sample_day()).unwrap();
        let second = events_for_day(&sample_day()).unwrap();

        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.uid, b.uid);
        }
    }

    #[test]
    fn test_uids_are_distinct_within_a_day() {
        let events = events_for_day(&sample_day()).unwrap();
        for (i, a) in events.iter().enumerate() {
            for b in &events[i + 1..] {
                assert_ne!(a.start, b.start);
                assert_ne!(a.uid, b.uid);
            }
        }
    }

    #[test]
    fn test_day_major_ordering() {
        let mut second = sample_day();
        second.date = "2024-03-02T00:00:00.0000000+03:00".to_string();

        let events = events_for_days(&[sample_day(), second]).unwrap();
        assert_eq!(events.len(), 12);
        assert_eq!(events[0].start.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(events[6].start.date(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(events[6].title, "Sabah Namazi");
    }

    #[test]
    fn test_offset_rolls_into_next_day() {
        // Offset addition, not time-of-day assignment
        let start = event_start(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), "24:10").unwrap();
        assert_eq!(start, dt(2024, 3, 2, 0, 10));
    }

    #[test]
    fn test_lenient_minute_overflow() {
        let start = event_start(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(), "05:70").unwrap();
        assert_eq!(start, dt(2024, 3, 1, 6, 10));
    }

    #[test]
    fn test_malformed_clock_is_rejected() {
        let mut day = sample_day();
        day.ogle = "1pm".to_string();

        match events_for_day(&day) {
            Err(Error::InvalidTimeFormat(raw)) => assert_eq!(raw, "1pm"),
            other => panic!("expected InvalidTimeFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let mut day = sample_day();
        day.date = "01 Mart 2024".to_string();

        match events_for_day(&day) {
            Err(Error::InvalidDate(_)) => {}
            other => panic!("expected InvalidDate, got {:?}", other),
        }
    }
}
