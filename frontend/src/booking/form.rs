use chrono::NaiveDateTime;
use thiserror::Error;

use crate::booking::message::BookingPayload;
use crate::booking::schedule::{ScheduleCheck, ScheduleError, ScheduleValidator};
use crate::booking::services::ServiceSelection;
use crate::config::NOTES_MAX_CHARS;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("Select at least one option.")]
    NoServiceSelected,
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Raw values of the booking form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub date: String,
    pub time: String,
    pub professional: String,
    pub payment: String,
    notes: String,
}

impl BookingForm {
    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Stores the notes, cut to the textarea's maxlength.
    pub fn set_notes(&mut self, notes: &str) {
        self.notes = truncate_utf16(notes, NOTES_MAX_CHARS).to_string();
    }

    pub fn notes_counter(&self) -> String {
        format!("{}/{}", utf16_len(&self.notes), NOTES_MAX_CHARS)
    }

    /// Re-runs the schedule check and empties a date that is now in the past.
    pub fn revalidate(&mut self, validator: &ScheduleValidator, now: NaiveDateTime) -> ScheduleCheck {
        let check = validator.evaluate(now, &self.date, &self.time);
        if check.clears_date() {
            self.date.clear();
        }
        check
    }

    /// Validates in the same order the fields are reported: date, time, services.
    pub fn submit(
        &mut self,
        services: &ServiceSelection,
        validator: &ScheduleValidator,
        now: NaiveDateTime,
    ) -> Result<BookingPayload, BookingError> {
        let check = self.revalidate(validator, now);
        check.verdict()?;

        if services.selected().is_empty() {
            return Err(BookingError::NoServiceSelected);
        }

        Ok(BookingPayload {
            name: String::new(),
            service: services.joined(),
            date: self.date.clone(),
            time: self.time.clone(),
            professional: self.professional.clone(),
            payment: self.payment.clone(),
            notes: self.notes.clone(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

fn truncate_utf16(value: &str, max: usize) -> &str {
    let mut units = 0;
    for (index, ch) in value.char_indices() {
        units += ch.len_utf16();
        if units > max {
            return &value[..index];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_opt(14, 0, 0))
            .unwrap()
    }

    fn services(checked: &[usize]) -> ServiceSelection {
        let mut selection = ServiceSelection::new(["Therapy", "Reiki", "Massage"]);
        for &index in checked {
            selection.set_checked(index, true);
        }
        selection
    }

    #[test]
    fn builds_payload_from_fields() {
        let mut form = BookingForm {
            date: "2024-05-03".into(),
            time: "10:00".into(),
            professional: "Dr. A".into(),
            payment: "Card".into(),
            ..Default::default()
        };
        form.set_notes("Bring ID");

        let payload = form
            .submit(&services(&[0, 2]), &ScheduleValidator::default(), now())
            .unwrap();
        assert_eq!(payload.service, "Therapy, Massage");
        assert_eq!(payload.date, "2024-05-03");
        assert_eq!(payload.notes, "Bring ID");
        assert_eq!(payload.name, "");
    }

    #[test]
    fn missing_service_blocks_submit() {
        let mut form = BookingForm::default();
        let err = form
            .submit(&services(&[]), &ScheduleValidator::default(), now())
            .unwrap_err();
        assert_eq!(err, BookingError::NoServiceSelected);
        assert_eq!(err.to_string(), "Select at least one option.");
    }

    #[test]
    fn schedule_errors_come_before_service_errors() {
        let mut form = BookingForm {
            date: "2024-05-01".into(),
            time: "14:05".into(),
            ..Default::default()
        };
        let err = form
            .submit(&services(&[]), &ScheduleValidator::default(), now())
            .unwrap_err();
        assert_eq!(err, BookingError::Schedule(ScheduleError::TooSoon(20)));
        assert_eq!(err.to_string(), "Select a time at least 20 minutes in advance.");
    }

    #[test]
    fn past_date_is_cleared_and_rejected() {
        let mut form = BookingForm { date: "2024-04-01".into(), ..Default::default() };
        let err = form
            .submit(&services(&[1]), &ScheduleValidator::default(), now())
            .unwrap_err();
        assert_eq!(err, BookingError::Schedule(ScheduleError::PastDate));
        assert_eq!(form.date, "");
    }

    #[test]
    fn notes_are_capped() {
        let mut form = BookingForm::default();
        form.set_notes(&"a".repeat(300));
        assert_eq!(form.notes().len(), NOTES_MAX_CHARS);
        assert_eq!(form.notes_counter(), "255/255");

        form.set_notes("olá");
        assert_eq!(form.notes_counter(), "3/255");
    }

    #[test]
    fn notes_cap_counts_utf16_units() {
        let mut form = BookingForm::default();
        // each emoji is two UTF-16 units
        form.set_notes(&"🙂".repeat(200));
        assert_eq!(form.notes().chars().count(), 127);
        assert_eq!(form.notes_counter(), "254/255");
    }

    #[test]
    fn reset_empties_everything() {
        let mut form = BookingForm { date: "2024-05-09".into(), ..Default::default() };
        form.set_notes("hi");
        form.reset();
        assert_eq!(form, BookingForm::default());
        assert_eq!(form.notes_counter(), "0/255");
    }
}
