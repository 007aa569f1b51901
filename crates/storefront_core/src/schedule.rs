use serde::{Deserialize, Serialize};

/// Day of week, numbered Sunday=1 through Saturday=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Returns `None` for anything outside `1..=7`.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=7 => Some(Self::ALL[usize::from(number - 1)]),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    /// The store does not open at all on this day.
    pub fn is_closed(self) -> bool {
        self == Weekday::Sunday
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    English,
    Portuguese,
}

/// Opening hours text for the given day.
///
/// The rule table is business configuration: Sunday closed, Saturday
/// half day, every other day full hours.
pub fn opening_info(weekday: Weekday, locale: Locale) -> &'static str {
    match (locale, weekday) {
        (Locale::English, Weekday::Sunday) => "We are closed",
        (Locale::English, Weekday::Saturday) => "Open from 08:00 to 12:00",
        (Locale::English, _) => "Open from 08:00 to 18:00",
        (Locale::Portuguese, Weekday::Sunday) => "Estamos fechados",
        (Locale::Portuguese, Weekday::Saturday) => "Aberto das 8:00h às 12:00h",
        (Locale::Portuguese, _) => "Aberto das 8:00h às 18:00h",
    }
}
