//! # Submission Service
//!
//! Validates a judge's slot selection against the generated calendar and the
//! roster, expands it into a [`Response`] and hands it to the store. This is
//! the only code path that writes to the [`ResponseStore`].
//!
//! Validation runs in a fixed order:
//!
//! 1. The selection must not be empty (`NoSlotsSelected`)
//! 2. Every id must name a slot on a selectable day (`InvalidSlot`)
//! 3. The judge must be on the roster (`UnknownJudge`)

use std::{collections::BTreeMap, sync::Arc};

use chrono::Utc;
use defensesync_core::{
    calendar::Calendar,
    errors::{ScheduleError, ScheduleResult, ValidationError},
    models::{
        judge::JudgeLink,
        response::{AvailableTime, Response, SubmissionRequest},
    },
    roster::Roster,
    store::ResponseStore,
};
use tracing::{info, warn};

#[derive(Clone)]
pub struct SubmissionService {
    store: Arc<dyn ResponseStore>,
    roster: Arc<Roster>,
    calendar: Calendar,
}

impl SubmissionService {
    pub fn new(store: Arc<dyn ResponseStore>, roster: Arc<Roster>) -> Self {
        Self {
            store,
            roster,
            calendar: Calendar::generate(),
        }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Validates and stores a judge's selection, replacing any earlier response.
    ///
    /// Repeated ids are kept once, at their first position.
    pub async fn submit(
        &self,
        judge_id: &str,
        judge_name: &str,
        judge_role: &str,
        selected_slot_ids: &[String],
        notes: Option<String>,
    ) -> ScheduleResult<Response> {
        let available_times = self
            .expand_selection(selected_slot_ids)
            .and_then(|times| {
                if self.roster.contains(judge_id) {
                    Ok(times)
                } else {
                    Err(ValidationError::UnknownJudge(judge_id.to_string()))
                }
            })
            .inspect_err(|err| warn!(judge_id, "Rejected submission: {}", err))?;

        let response = Response {
            judge_id: judge_id.to_string(),
            judge_name: judge_name.to_string(),
            judge_role: judge_role.to_string(),
            available_times,
            notes: notes.filter(|n| !n.trim().is_empty()),
            submitted_at: Utc::now(),
        };

        self.store
            .put(judge_id, &response)
            .await
            .map_err(ScheduleError::Storage)?;

        info!(
            judge_id,
            slots = response.available_times.len(),
            "Stored availability response"
        );

        Ok(response)
    }

    /// Accepts either explicit slot ids or the expanded display tuples a
    /// client echoed back.
    pub async fn submit_request(&self, request: SubmissionRequest) -> ScheduleResult<Response> {
        let slot_ids = if request.slot_ids.is_empty() {
            self.slot_ids_for(&request.available_times)
                .inspect_err(|err| warn!(judge_id = %request.judge_id, "Rejected submission: {}", err))?
        } else {
            request.slot_ids
        };

        self.submit(
            &request.judge_id,
            &request.judge_name,
            &request.judge_role,
            &slot_ids,
            request.notes,
        )
        .await
    }

    pub fn slot_ids_for(&self, times: &[AvailableTime]) -> Result<Vec<String>, ValidationError> {
        times
            .iter()
            .map(|time| {
                self.calendar
                    .slot_id_for(&time.date, &time.time)
                    .map(str::to_string)
                    .ok_or_else(|| {
                        ValidationError::InvalidSlot(format!("{} {}", time.date, time.time))
                    })
            })
            .collect()
    }

    fn expand_selection(&self, slot_ids: &[String]) -> Result<Vec<AvailableTime>, ValidationError> {
        if slot_ids.is_empty() {
            return Err(ValidationError::NoSlotsSelected);
        }

        let mut seen = Vec::with_capacity(slot_ids.len());
        let mut times = Vec::with_capacity(slot_ids.len());

        for slot_id in slot_ids {
            let (day, slot) = self
                .calendar
                .resolve(slot_id)
                .filter(|(day, _)| day.is_selectable())
                .ok_or_else(|| ValidationError::InvalidSlot(slot_id.clone()))?;

            if seen.contains(&slot_id) {
                continue;
            }
            seen.push(slot_id);
            times.push(Calendar::expand(day, slot));
        }

        Ok(times)
    }

    /// A store that cannot be read reports no prior response.
    pub async fn response_for(&self, judge_id: &str) -> ScheduleResult<Option<Response>> {
        Ok(self.store.get(judge_id).await.unwrap_or_else(|err| {
            warn!(judge_id, "Failed to read response, treating as absent: {:#}", err);
            None
        }))
    }

    pub async fn responses(&self) -> ScheduleResult<BTreeMap<String, Response>> {
        Ok(self.store.list().await.unwrap_or_else(|err| {
            warn!("Failed to list responses, treating as empty: {:#}", err);
            BTreeMap::new()
        }))
    }

    /// Roster entries with their personal form links and response status.
    pub async fn judge_links(&self, base_url: &str) -> ScheduleResult<Vec<JudgeLink>> {
        let responses = self.responses().await?;

        Ok(self
            .roster
            .iter()
            .map(|judge| JudgeLink {
                id: judge.id.clone(),
                name: judge.name.clone(),
                role: judge.role.clone(),
                link: format!("{}/judge/{}", base_url, judge.id),
                submitted_at: responses.get(&judge.id).map(|r| r.submitted_at),
            })
            .collect())
    }
}
