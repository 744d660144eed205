use chrono::{Local, NaiveDateTime};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::motion::prefers_reduced_motion;

const DAY_MILLIS: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    pub fn padded(&self) -> (String, String, String) {
        (
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        )
    }
}

/// Time left until 23:59:59.999 of the day `now` falls on.
pub fn until_end_of_day(now: NaiveDateTime) -> Remaining {
    let mut millis = now
        .date()
        .and_hms_milli_opt(23, 59, 59, 999)
        .map_or(DAY_MILLIS, |end| (end - now).num_milliseconds());
    if millis < 0 {
        millis = DAY_MILLIS;
    }

    Remaining {
        hours: millis / (1000 * 60 * 60),
        minutes: (millis / (1000 * 60)) % 60,
        seconds: (millis / 1000) % 60,
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

#[function_component(Countdown)]
pub fn countdown() -> Html {
    let reduced_motion = use_memo(|_| prefers_reduced_motion(), ());
    let remaining = use_state(|| until_end_of_day(local_now()));

    {
        let remaining = remaining.clone();
        use_effect_with_deps(
            move |reduced_motion| {
                let interval = (!**reduced_motion).then(|| {
                    Interval::new(1000, move || remaining.set(until_end_of_day(local_now())))
                });
                move || drop(interval)
            },
            reduced_motion.clone(),
        );
    }

    if *reduced_motion {
        return html! {
            <div class="countdown" data-countdown="">{"Offer valid today"}</div>
        };
    }

    let (hours, minutes, seconds) = remaining.padded();
    html! {
        <div class="countdown" data-countdown="" aria-live="off">
            <span data-countdown-part="hours">{hours}</span>
            <span class="countdown-sep">{":"}</span>
            <span data-countdown-part="minutes">{minutes}</span>
            <span class="countdown-sep">{":"}</span>
            <span data-countdown-part="seconds">{seconds}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|d| d.and_hms_milli_opt(h, m, s, ms))
            .unwrap()
    }

    #[test]
    fn counts_down_to_midnight() {
        let left = until_end_of_day(at(20, 15, 30, 0));
        assert_eq!(left, Remaining { hours: 3, minutes: 44, seconds: 29 });
        assert_eq!(left.padded(), ("03".into(), "44".into(), "29".into()));
    }

    #[test]
    fn start_of_day_shows_almost_a_full_day() {
        let left = until_end_of_day(at(0, 0, 0, 0));
        assert_eq!(left, Remaining { hours: 23, minutes: 59, seconds: 59 });
    }

    #[test]
    fn last_millisecond_is_zero() {
        let left = until_end_of_day(at(23, 59, 59, 999));
        assert_eq!(left, Remaining { hours: 0, minutes: 0, seconds: 0 });
    }
}
