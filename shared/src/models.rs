//! Shared data models.

use chrono::NaiveDateTime;
use serde::Deserialize;

/// One day of prayer times as returned by the upstream time-service.
///
/// The upstream payload carries many more fields (lunar-calendar strings,
/// qibla time, moon-phase URL); only the fields that map to calendar events
/// are deserialized and the rest are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PrayerTimesDay {
    /// Civil date of the record, ISO-8601
    #[serde(rename = "MiladiTarihUzunIso8601")]
    pub date: String,
    /// Dawn prayer, "HH:MM"
    #[serde(rename = "Imsak")]
    pub imsak: String,
    /// Sunrise, "HH:MM"
    #[serde(rename = "Gunes")]
    pub gunes: String,
    /// Midday prayer, "HH:MM"
    #[serde(rename = "Ogle")]
    pub ogle: String,
    /// Afternoon prayer, "HH:MM"
    #[serde(rename = "Ikindi")]
    pub ikindi: String,
    /// Evening prayer, "HH:MM"
    #[serde(rename = "Aksam")]
    pub aksam: String,
    /// Night prayer, "HH:MM"
    #[serde(rename = "Yatsi")]
    pub yatsi: String,
}

/// The six daily prayer times, in the order they occur within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vakit {
    Imsak,
    Gunes,
    Ogle,
    Ikindi,
    Aksam,
    Yatsi,
}

impl Vakit {
    /// All six times in daily order. Event emission follows this order.
    pub const ALL: [Vakit; 6] = [
        Vakit::Imsak,
        Vakit::Gunes,
        Vakit::Ogle,
        Vakit::Ikindi,
        Vakit::Aksam,
        Vakit::Yatsi,
    ];

    /// Event title shown in the subscriber's calendar.
    pub fn title(&self) -> &'static str {
        match self {
            Vakit::Imsak => "Sabah Namazi",
            Vakit::Gunes => "Gunes Dogusu",
            Vakit::Ogle => "Ogle Namazi",
            Vakit::Ikindi => "Ikindi Namazi",
            Vakit::Aksam => "Aksam Namazi",
            Vakit::Yatsi => "Yatsi Namazi",
        }
    }

    /// The raw clock string for this time within a day record.
    pub fn time_of<'a>(&self, day: &'a PrayerTimesDay) -> &'a str {
        match self {
            Vakit::Imsak => &day.imsak,
            Vakit::Gunes => &day.gunes,
            Vakit::Ogle => &day.ogle,
            Vakit::Ikindi => &day.ikindi,
            Vakit::Aksam => &day.aksam,
            Vakit::Yatsi => &day.yatsi,
        }
    }
}

/// A single calendar entry derived from one prayer time.
///
/// Timestamps are naive civil time: the upstream feed is already local to
/// the requested city and carries no zone information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    /// Stable identifier; regenerating the feed yields the same uid
    pub uid: String,
    pub title: &'static str,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}
