//! Mock appointment booking. A confirmation is produced, nothing is stored.

use std::fmt;

use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use tracing::info;

use crate::error::ValidationError;
use crate::models::Doctor;

/// Date format accepted and displayed by the booking form.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Time format the booking form pre-fills.
pub const TIME_FORMAT: &str = "%H:%M";

/// An acknowledged (but never persisted) appointment.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub doctor_id: i64,
    pub doctor_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Appointment booked successfully with {} on {} at {}.",
            self.doctor_name,
            self.date.format(DATE_FORMAT),
            self.time.format("%H:%M:%S")
        )
    }
}

/// Confirm a booking with `doctor` at the given slot.
pub fn confirm(doctor: &Doctor, date: NaiveDate, time: NaiveTime) -> Appointment {
    let appointment = Appointment {
        doctor_id: doctor.id,
        doctor_name: doctor.name.clone(),
        date,
        time,
    };
    info!(doctor_id = doctor.id, %date, %time, "booking confirmed");
    appointment
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| ValidationError::InvalidDate)
}

/// Accepts `HH:MM` and `HH:MM:SS`.
pub fn parse_time(raw: &str) -> Result<NaiveTime, ValidationError> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, TIME_FORMAT))
        .map_err(|_| ValidationError::InvalidTime)
}

/// Current local date and minute, used to pre-fill the form.
pub fn default_slot() -> (NaiveDate, NaiveTime) {
    let now = Local::now().naive_local();
    let time = now
        .time()
        .with_second(0)
        .and_then(|time| time.with_nanosecond(0))
        .unwrap_or_else(|| now.time());
    (now.date(), time)
}
