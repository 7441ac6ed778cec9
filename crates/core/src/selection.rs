//! Slot selection state for the availability form, modelled as a pure reducer
//! so it can be exercised without a rendering environment.

use serde::{Deserialize, Serialize};

use crate::{calendar::Calendar, models::response::Response};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Adds the slot if absent, removes it otherwise
    Toggle(String),
    Clear,
    Replace(Vec<String>),
}

/// Selected slot ids in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    slot_ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores the selection a judge previously submitted.
    ///
    /// Entries that no longer map to a slot in `calendar` are dropped.
    pub fn from_response(response: &Response, calendar: &Calendar) -> Self {
        let slot_ids = response
            .available_times
            .iter()
            .filter_map(|time| calendar.slot_id_for(&time.date, &time.time))
            .map(str::to_string)
            .collect();

        reduce(Self::new(), SelectionAction::Replace(slot_ids))
    }

    pub fn contains(&self, slot_id: &str) -> bool {
        self.slot_ids.iter().any(|id| id == slot_id)
    }

    pub fn slot_ids(&self) -> &[String] {
        &self.slot_ids
    }

    pub fn is_empty(&self) -> bool {
        self.slot_ids.is_empty()
    }

    pub fn into_slot_ids(self) -> Vec<String> {
        self.slot_ids
    }
}

pub fn reduce(mut selection: Selection, action: SelectionAction) -> Selection {
    match action {
        SelectionAction::Toggle(slot_id) => {
            match selection.slot_ids.iter().position(|id| *id == slot_id) {
                Some(index) => {
                    selection.slot_ids.remove(index);
                }
                None => selection.slot_ids.push(slot_id),
            }
        }
        SelectionAction::Clear => selection.slot_ids.clear(),
        SelectionAction::Replace(slot_ids) => {
            selection.slot_ids.clear();
            for slot_id in slot_ids {
                if !selection.contains(&slot_id) {
                    selection.slot_ids.push(slot_id);
                }
            }
        }
    }

    selection
}
