use chrono::{Datelike, Local, NaiveDate};
use storefront_core::Weekday;

/// Source of "today", injected so tests can pin arbitrary dates.
pub trait ClockSource: Send + Sync {
    fn now(&self) -> Weekday;
}

/// Reads the local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> Weekday {
        weekday_of(Local::now().date_naive())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedDateClock {
    date: NaiveDate,
}

impl FixedDateClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl ClockSource for FixedDateClock {
    fn now(&self) -> Weekday {
        weekday_of(self.date)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Weekday);

impl ClockSource for FixedClock {
    fn now(&self) -> Weekday {
        self.0
    }
}

fn weekday_of(date: NaiveDate) -> Weekday {
    match date.weekday() {
        chrono::Weekday::Sun => Weekday::Sunday,
        chrono::Weekday::Mon => Weekday::Monday,
        chrono::Weekday::Tue => Weekday::Tuesday,
        chrono::Weekday::Wed => Weekday::Wednesday,
        chrono::Weekday::Thu => Weekday::Thursday,
        chrono::Weekday::Fri => Weekday::Friday,
        chrono::Weekday::Sat => Weekday::Saturday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_dates_map_to_calendar_weekdays() {
        let day = |d| FixedDateClock::new(NaiveDate::from_ymd_opt(2021, 6, d).unwrap()).now();
        assert_eq!(day(6), Weekday::Sunday);
        assert_eq!(day(9), Weekday::Wednesday);
        assert_eq!(day(12), Weekday::Saturday);
    }
}
