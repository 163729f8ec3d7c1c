//! Shared library for the prayer-time calendar Lambda functions.
//!
//! This crate provides the configuration, upstream client, event
//! transformation, and iCalendar serialization used by the Lambda entry
//! points.

pub mod config;
pub mod error;
pub mod http;
pub mod ics;
pub mod models;
pub mod transform;
pub mod vakitler;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{CalendarEvent, PrayerTimesDay, Vakit};
pub use transform::{events_for_day, events_for_days};
pub use vakitler::VakitClient;
