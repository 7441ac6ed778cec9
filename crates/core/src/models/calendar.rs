use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// Display label, e.g. "۳ شهریور"
    pub date: String,
    pub day_name: String,
    pub is_weekend: bool,
    pub is_holiday: bool,
    /// Always populated; only offered when the day is selectable.
    pub slots: Vec<Slot>,
}

impl CalendarDay {
    pub fn is_selectable(&self) -> bool {
        !(self.is_weekend || self.is_holiday)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// `{day}-{month}-{range}`, unique across the whole calendar
    pub id: String,
    /// Machine-readable range, e.g. "9-12"
    pub time: String,
    pub label: String,
}
