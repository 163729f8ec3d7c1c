//! iCalendar serialization of prayer-time events.

use icalendar::{Calendar, Component, EventLike};

use crate::models::CalendarEvent;

/// Serialize events into a single iCalendar document.
///
/// Event order in the output follows the input order. Timestamps are
/// emitted as floating local time, with no timezone attached.
pub fn to_ics(events: &[CalendarEvent]) -> String {
    let mut calendar = Calendar::new();
    calendar.name("Namaz Vakitleri");

    for event in events {
        let mut ics_event = icalendar::Event::new();
        ics_event.uid(&event.uid);
        ics_event.summary(event.title);
        ics_event.starts(event.start);
        ics_event.ends(event.end);
        ics_event.add_property("STATUS", "CONFIRMED");
        ics_event.add_property("X-MICROSOFT-CDO-BUSYSTATUS", "BUSY");
        calendar.push(ics_event.done());
    }

    calendar.done().to_string()
}
