use std::fmt;

use chrono::{Duration, NaiveDateTime, NaiveTime};
use log::debug;
use thiserror::Error;

use crate::config::BUFFER_MINUTES;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("Select a valid date.")]
    PastDate,
    #[error("Select a time at least {0} minutes in advance.")]
    TooSoon(i64),
    #[error("Select a valid time.")]
    UnreadableTime,
}

/// Bounds applied to the date and time inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleConstraint {
    pub min_date: String,
    /// Only set while today is the selected date.
    pub min_time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleHint {
    ToBeArranged,
    NoticeRequired(i64),
}

impl fmt::Display for ScheduleHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleHint::ToBeArranged => write!(f, "Times to be arranged."),
            ScheduleHint::NoticeRequired(minutes) => {
                write!(f, "Times require at least {} minutes' notice.", minutes)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleCheck {
    pub constraint: ScheduleConstraint,
    pub date: Result<(), ScheduleError>,
    pub time: Result<(), ScheduleError>,
    pub hint: ScheduleHint,
}

impl ScheduleCheck {
    /// The selected date is in the past and the field should be emptied.
    pub fn clears_date(&self) -> bool {
        self.date.is_err()
    }

    pub fn verdict(&self) -> Result<(), ScheduleError> {
        self.date.clone()?;
        self.time.clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleValidator {
    buffer: Duration,
}

impl Default for ScheduleValidator {
    fn default() -> Self {
        Self::new(BUFFER_MINUTES)
    }
}

impl ScheduleValidator {
    pub fn new(buffer_minutes: i64) -> Self {
        Self { buffer: Duration::minutes(buffer_minutes) }
    }

    pub fn buffer_minutes(&self) -> i64 {
        self.buffer.num_minutes()
    }

    /// Checks a selected date/time pair against the local wall clock `now`.
    /// Dates are compared as ISO strings, the same way the date input orders them.
    pub fn evaluate(&self, now: NaiveDateTime, date: &str, time: &str) -> ScheduleCheck {
        let today = now.date().format("%Y-%m-%d").to_string();
        let date = date.trim();
        let time = time.trim();

        if !date.is_empty() && date < today.as_str() {
            debug!("Rejecting past date {} (today {})", date, today);
            return ScheduleCheck {
                constraint: ScheduleConstraint { min_date: today, min_time: None },
                date: Err(ScheduleError::PastDate),
                time: Ok(()),
                hint: ScheduleHint::ToBeArranged,
            };
        }

        if date != today {
            return ScheduleCheck {
                constraint: ScheduleConstraint { min_date: today, min_time: None },
                date: Ok(()),
                time: Ok(()),
                hint: ScheduleHint::ToBeArranged,
            };
        }

        let earliest = now + self.buffer;
        let min_time = earliest.format("%H:%M").to_string();
        let crosses_midnight = earliest.date() > now.date();

        let time_result = if time.is_empty() {
            Ok(())
        } else {
            match parse_time(time) {
                None => Err(ScheduleError::UnreadableTime),
                Some(_) if crosses_midnight => Err(ScheduleError::TooSoon(self.buffer_minutes())),
                Some(selected) if selected.format("%H:%M").to_string() < min_time => {
                    Err(ScheduleError::TooSoon(self.buffer_minutes()))
                }
                Some(_) => Ok(()),
            }
        };

        let hint = if time_result.is_err() {
            ScheduleHint::NoticeRequired(self.buffer_minutes())
        } else {
            ScheduleHint::ToBeArranged
        };
        debug!("Same-day booking, earliest {} selected {:?} -> {:?}", min_time, time, time_result);

        ScheduleCheck {
            constraint: ScheduleConstraint { min_date: today, min_time: Some(min_time) },
            date: Ok(()),
            time: time_result,
            hint,
        }
    }
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(h, m, 0))
            .unwrap()
    }

    #[test]
    fn past_dates_are_rejected() {
        let validator = ScheduleValidator::default();
        for date in ["2024-04-30", "2023-12-31", "1999-01-01"] {
            let check = validator.evaluate(at(10, 0), date, "");
            assert!(check.clears_date(), "{} should be rejected", date);
            assert_eq!(check.verdict(), Err(ScheduleError::PastDate));
            assert_eq!(check.constraint.min_date, "2024-05-01");
            assert_eq!(check.constraint.min_time, None);
        }
    }

    #[test]
    fn same_day_needs_buffer() {
        let validator = ScheduleValidator::default();
        let check = validator.evaluate(at(10, 0), "2024-05-01", "10:19");
        assert_eq!(check.constraint.min_time.as_deref(), Some("10:20"));
        assert_eq!(check.time, Err(ScheduleError::TooSoon(20)));
        assert_eq!(check.hint, ScheduleHint::NoticeRequired(20));
        assert_eq!(
            check.time.unwrap_err().to_string(),
            "Select a time at least 20 minutes in advance."
        );

        let on_the_minute = validator.evaluate(at(10, 0), "2024-05-01", "10:20");
        assert_eq!(on_the_minute.verdict(), Ok(()));
        assert_eq!(on_the_minute.hint.to_string(), "Times to be arranged.");

        let later = validator.evaluate(at(10, 0), "2024-05-01", "17:45");
        assert_eq!(later.verdict(), Ok(()));
    }

    #[test]
    fn future_dates_have_no_floor() {
        let validator = ScheduleValidator::default();
        let check = validator.evaluate(at(23, 50), "2024-05-02", "00:00");
        assert_eq!(check.verdict(), Ok(()));
        assert_eq!(check.constraint.min_time, None);
        assert_eq!(check.hint, ScheduleHint::ToBeArranged);
    }

    #[test]
    fn empty_selection_is_fine() {
        let check = ScheduleValidator::default().evaluate(at(9, 0), "", "");
        assert_eq!(check.verdict(), Ok(()));
        assert_eq!(check.constraint.min_date, "2024-05-01");
        assert_eq!(check.constraint.min_time, None);
    }

    #[test]
    fn today_without_time_only_sets_floor() {
        let check = ScheduleValidator::default().evaluate(at(9, 5), "2024-05-01", "");
        assert_eq!(check.verdict(), Ok(()));
        assert_eq!(check.constraint.min_time.as_deref(), Some("09:25"));
    }

    #[test]
    fn late_evening_blocks_the_rest_of_today() {
        let validator = ScheduleValidator::default();
        let check = validator.evaluate(at(23, 50), "2024-05-01", "23:59");
        assert_eq!(check.constraint.min_time.as_deref(), Some("00:10"));
        assert_eq!(check.time, Err(ScheduleError::TooSoon(20)));
    }

    #[test]
    fn seconds_in_time_value_are_accepted() {
        let check = ScheduleValidator::default().evaluate(at(8, 0), "2024-05-01", "09:00:00");
        assert_eq!(check.verdict(), Ok(()));
    }

    #[test]
    fn garbage_time_on_today_is_rejected() {
        let check = ScheduleValidator::default().evaluate(at(8, 0), "2024-05-01", "soon");
        assert_eq!(check.time, Err(ScheduleError::UnreadableTime));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let validator = ScheduleValidator::default();
        let first = validator.evaluate(at(13, 37), "2024-05-01", "13:40");
        let second = validator.evaluate(at(13, 37), "2024-05-01", "13:40");
        assert_eq!(first, second);
    }

    #[test]
    fn buffer_is_configurable() {
        let validator = ScheduleValidator::new(45);
        let check = validator.evaluate(at(10, 0), "2024-05-01", "10:30");
        assert_eq!(check.constraint.min_time.as_deref(), Some("10:45"));
        assert_eq!(check.time, Err(ScheduleError::TooSoon(45)));
    }
}
