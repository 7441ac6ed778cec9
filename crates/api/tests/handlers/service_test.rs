use std::sync::Arc;

use defensesync_core::errors::{ScheduleError, ValidationError};
use defensesync_db::{JsonFileStore, mock::store::MockResponseStore};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::test_utils::{TestContext, ids};

fn rejecting_store() -> MockResponseStore {
    let mut store = MockResponseStore::new();
    store.expect_put().never();
    store
}

#[tokio::test]
async fn test_empty_selection_never_reaches_store() {
    let ctx = TestContext::with_store(Arc::new(rejecting_store()));

    let result = ctx.service().submit("J1", "Judge", "reader", &[], None).await;

    assert!(matches!(
        result,
        Err(ScheduleError::Validation(ValidationError::NoSlotsSelected))
    ));
}

#[rstest]
#[case("2-6-morning")] // designated holiday, also Friday
#[case("10-6-noon")] // designated holiday
#[case("1-6-evening")] // Thursday
#[case("3-6-midnight")]
#[case("99-9-morning")]
#[tokio::test]
async fn test_unselectable_slot_rejected(#[case] slot_id: &str) {
    let ctx = TestContext::with_store(Arc::new(rejecting_store()));

    let result = ctx
        .service()
        .submit("J1", "Judge", "reader", &ids(&["3-6-morning", slot_id]), None)
        .await;

    match result {
        Err(ScheduleError::Validation(ValidationError::InvalidSlot(id))) => assert_eq!(id, slot_id),
        other => panic!("Expected InvalidSlot, got: {:?}", other),
    }
}

#[tokio::test]
async fn test_unknown_judge_rejected() {
    let ctx = TestContext::with_store(Arc::new(rejecting_store()));

    let result = ctx
        .service()
        .submit("J9", "Judge", "reader", &ids(&["3-6-morning"]), None)
        .await;

    assert!(matches!(
        result,
        Err(ScheduleError::Validation(ValidationError::UnknownJudge(_)))
    ));
}

#[test_log::test(tokio::test)]
async fn test_valid_submission_is_stored_once() {
    let mut store = MockResponseStore::new();
    store
        .expect_put()
        .times(1)
        .withf(|judge_id, response| {
            judge_id.to_string() == "J1"
                && response.available_times.len() == 2
                && response.available_times[0].time == "12-15"
                && response.notes.as_deref() == Some("ok")
        })
        .returning(|_, _| Ok(()));
    let ctx = TestContext::with_store(Arc::new(store));

    let response = ctx
        .service()
        .submit(
            "J1",
            "Judge One",
            "reader",
            &ids(&["4-6-noon", "3-6-morning", "4-6-noon"]),
            Some("ok".to_string()),
        )
        .await
        .unwrap();

    let times: Vec<_> = response.available_times.iter().map(|t| t.time.as_str()).collect();
    assert_eq!(times, vec!["12-15", "9-12"]);
}

#[tokio::test]
async fn test_blank_notes_are_dropped() {
    let ctx = TestContext::new();

    let response = ctx
        .service()
        .submit("J1", "Judge", "reader", &ids(&["3-6-morning"]), Some("   ".to_string()))
        .await
        .unwrap();

    assert_eq!(response.notes, None);
}

#[tokio::test]
async fn test_storage_failure_surfaces() {
    let mut store = MockResponseStore::new();
    store
        .expect_put()
        .times(1)
        .returning(|_, _| Err(eyre::eyre!("disk full")));
    let ctx = TestContext::with_store(Arc::new(store));

    let result = ctx
        .service()
        .submit("J1", "Judge", "reader", &ids(&["3-6-morning"]), None)
        .await;

    assert!(matches!(result, Err(ScheduleError::Storage(_))));
}

#[tokio::test]
async fn test_scenario_single_slot_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = TestContext::with_store(Arc::new(JsonFileStore::new(dir.path().join("responses.json"))));
    let service = ctx.service();

    let submitted = service
        .submit("J1", "Judge One", "reader", &ids(&["3-6-morning"]), Some("ok".to_string()))
        .await
        .unwrap();
    let stored = service.response_for("J1").await.unwrap().unwrap();

    assert_eq!(stored, submitted);
    assert_eq!(stored.available_times.len(), 1);
    assert_eq!(stored.available_times[0].label, "ساعت ۹:۰۰ تا ۱۲:۰۰");
    assert_eq!(stored.notes.as_deref(), Some("ok"));

    let (day, _) = service.calendar().resolve("3-6-morning").unwrap();
    assert!(!day.is_holiday);
}

#[tokio::test]
async fn test_holiday_submission_leaves_store_unchanged() {
    let ctx = TestContext::new();
    let service = ctx.service();
    let first = service
        .submit("J1", "Judge One", "reader", &ids(&["3-6-morning"]), None)
        .await
        .unwrap();

    let result = service
        .submit("J1", "Judge One", "reader", &ids(&["2-6-morning"]), None)
        .await;

    assert!(matches!(
        result,
        Err(ScheduleError::Validation(ValidationError::InvalidSlot(_)))
    ));
    assert_eq!(service.response_for("J1").await.unwrap(), Some(first));
}

#[tokio::test]
async fn test_resubmission_replaces_previous_selection() {
    let ctx = TestContext::new();
    let service = ctx.service();

    service
        .submit("J1", "Judge", "reader", &ids(&["3-6-morning", "4-6-noon"]), Some("first".to_string()))
        .await
        .unwrap();
    service
        .submit("J1", "Judge", "reader", &ids(&["5-6-evening"]), None)
        .await
        .unwrap();

    let stored = service.response_for("J1").await.unwrap().unwrap();
    assert_eq!(stored.available_times.len(), 1);
    assert_eq!(stored.available_times[0].time, "15-18");
    assert_eq!(stored.notes, None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_submissions_for_two_judges_both_survive() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = TestContext::with_store(Arc::new(JsonFileStore::new(dir.path().join("responses.json"))));
    let service = ctx.service();

    let j1 = ids(&["3-6-morning"]);
    let j2 = ids(&["4-6-noon"]);
    let (first, second) = tokio::join!(
        service.submit("J1", "Judge One", "reader", &j1, None),
        service.submit("J2", "Judge Two", "reader", &j2, None),
    );
    first.unwrap();
    second.unwrap();

    assert_eq!(service.response_for("J1").await.unwrap().unwrap().available_times[0].time, "9-12");
    assert_eq!(service.response_for("J2").await.unwrap().unwrap().available_times[0].time, "12-15");
}

#[tokio::test]
async fn test_available_times_map_back_to_slot_ids() {
    let ctx = TestContext::new();
    let service = ctx.service();
    let (day, slot) = service.calendar().resolve("6-6-evening").unwrap();
    let time = defensesync_core::calendar::Calendar::expand(day, slot);

    assert_eq!(service.slot_ids_for(&[time.clone()]).unwrap(), vec!["6-6-evening"]);

    let mut stale = time;
    stale.time = "18-21".to_string();
    assert!(matches!(
        service.slot_ids_for(&[stale]),
        Err(ValidationError::InvalidSlot(_))
    ));
}
