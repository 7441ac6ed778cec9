//! # Candidate Calendar
//!
//! Builds the fixed scheduling window offered to judges. The output is a pure
//! function of the compiled-in tables below: every call yields the same days,
//! the same classification and the same slot ids.
//!
//! Slot ids are composed from the day's calendar date and the range key
//! (`"3-6-morning"`), never from a list position, so they stay stable if the
//! day list is filtered or reordered by a consumer.

use crate::models::{
    calendar::{CalendarDay, Slot},
    response::AvailableTime,
};

struct WindowDate {
    label: &'static str,
    day_name: &'static str,
    day: u8,
    month: u8,
}

struct TimeRange {
    key: &'static str,
    time: &'static str,
    label: &'static str,
}

const SCHEDULING_WINDOW: [WindowDate; 20] = [
    // Mordad
    WindowDate { label: "۲۷ مرداد", day_name: "شنبه", day: 27, month: 5 },
    WindowDate { label: "۲۸ مرداد", day_name: "یکشنبه", day: 28, month: 5 },
    WindowDate { label: "۲۹ مرداد", day_name: "دوشنبه", day: 29, month: 5 },
    WindowDate { label: "۳۰ مرداد", day_name: "سه‌شنبه", day: 30, month: 5 },
    WindowDate { label: "۳۱ مرداد", day_name: "چهارشنبه", day: 31, month: 5 },
    // Shahrivar
    WindowDate { label: "۱ شهریور", day_name: "پنج‌شنبه", day: 1, month: 6 },
    WindowDate { label: "۲ شهریور", day_name: "جمعه", day: 2, month: 6 },
    WindowDate { label: "۳ شهریور", day_name: "شنبه", day: 3, month: 6 },
    WindowDate { label: "۴ شهریور", day_name: "یکشنبه", day: 4, month: 6 },
    WindowDate { label: "۵ شهریور", day_name: "دوشنبه", day: 5, month: 6 },
    WindowDate { label: "۶ شهریور", day_name: "سه‌شنبه", day: 6, month: 6 },
    WindowDate { label: "۷ شهریور", day_name: "چهارشنبه", day: 7, month: 6 },
    WindowDate { label: "۸ شهریور", day_name: "پنج‌شنبه", day: 8, month: 6 },
    WindowDate { label: "۹ شهریور", day_name: "جمعه", day: 9, month: 6 },
    WindowDate { label: "۱۰ شهریور", day_name: "شنبه", day: 10, month: 6 },
    WindowDate { label: "۱۱ شهریور", day_name: "یکشنبه", day: 11, month: 6 },
    WindowDate { label: "۱۲ شهریور", day_name: "دوشنبه", day: 12, month: 6 },
    WindowDate { label: "۱۳ شهریور", day_name: "سه‌شنبه", day: 13, month: 6 },
    WindowDate { label: "۱۴ شهریور", day_name: "چهارشنبه", day: 14, month: 6 },
    WindowDate { label: "۱۵ شهریور", day_name: "پنج‌شنبه", day: 15, month: 6 },
];

const WEEKEND_DAYS: [&str; 2] = ["پنج‌شنبه", "جمعه"];

/// (month, day) pairs closed in addition to the weekend
const EXTRA_HOLIDAYS: [(u8, u8); 2] = [(6, 2), (6, 10)];

const TIME_RANGES: [TimeRange; 3] = [
    TimeRange { key: "morning", time: "9-12", label: "ساعت ۹:۰۰ تا ۱۲:۰۰" },
    TimeRange { key: "noon", time: "12-15", label: "ساعت ۱۲:۰۰ تا ۱۵:۰۰" },
    TimeRange { key: "evening", time: "15-18", label: "ساعت ۱۵:۰۰ تا ۱۸:۰۰" },
];

fn slot_id(date: &WindowDate, range: &TimeRange) -> String {
    format!("{}-{}-{}", date.day, date.month, range.key)
}

/// Produces the ordered candidate days with their slots.
///
/// Holiday and weekend days still carry their slots; whether a day may be
/// chosen is answered by [`CalendarDay::is_selectable`].
pub fn generate() -> Vec<CalendarDay> {
    SCHEDULING_WINDOW
        .iter()
        .map(|date| {
            let is_weekend = WEEKEND_DAYS.contains(&date.day_name);
            let is_holiday = is_weekend || EXTRA_HOLIDAYS.contains(&(date.month, date.day));

            CalendarDay {
                date: date.label.to_string(),
                day_name: date.day_name.to_string(),
                is_weekend,
                is_holiday,
                slots: TIME_RANGES
                    .iter()
                    .map(|range| Slot {
                        id: slot_id(date, range),
                        time: range.time.to_string(),
                        label: range.label.to_string(),
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Generated calendar with slot lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calendar {
    days: Vec<CalendarDay>,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::generate()
    }
}

impl Calendar {
    pub fn generate() -> Self {
        Self { days: generate() }
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    /// Finds the day and slot for `slot_id`, selectable or not.
    pub fn resolve(&self, slot_id: &str) -> Option<(&CalendarDay, &Slot)> {
        self.days.iter().find_map(|day| {
            day.slots
                .iter()
                .find(|slot| slot.id == slot_id)
                .map(|slot| (day, slot))
        })
    }

    /// Maps a display tuple back to the slot it was expanded from.
    pub fn slot_id_for(&self, date: &str, time: &str) -> Option<&str> {
        self.days
            .iter()
            .filter(|day| day.date == date)
            .flat_map(|day| day.slots.iter())
            .find(|slot| slot.time == time)
            .map(|slot| slot.id.as_str())
    }

    pub fn expand(day: &CalendarDay, slot: &Slot) -> AvailableTime {
        AvailableTime {
            date: day.date.clone(),
            day_name: day.day_name.clone(),
            time: slot.time.clone(),
            label: slot.label.clone(),
        }
    }
}
