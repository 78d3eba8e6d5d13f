//! In-memory integration tests for the activity log.

use crate::test_helpers::{Crm, sales_agent, start_of_day};
use chrono::Duration;
use leadbook::{
    activity::{
        domain::{ActivityContent, ActivityDomainError, ActivityKind, TaskStatus},
        services::{ActivityLogError, AppendActivityRequest},
    },
    lead::domain::{Lead, LeadInput},
    settings::CrmSettings,
};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn crm() -> Crm {
    Crm::default()
}

async fn seed_lead(crm: &Crm) -> Lead {
    crm.records
        .create(
            &sales_agent(),
            LeadInput::new("Arjun", "Das", "9000000001", "India", "Goa", "Margao"),
        )
        .await
        .expect("lead creation should succeed")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn transport_payloads_are_logged_per_kind(crm: Crm) {
    let lead = seed_lead(&crm).await;
    let caller = sales_agent();
    let payloads = [
        (ActivityKind::Call, json!({ "number": "9000000001" })),
        (ActivityKind::Sms, json!({ "to": "+919000000001", "message": "Hello" })),
        (ActivityKind::Whatsapp, json!({ "to": "9000000001", "message": "Brochure" })),
        (
            ActivityKind::Email,
            json!({ "to": "arjun@example.com", "subject": "Visit", "body": "Saturday 10am" }),
        ),
        (ActivityKind::Note, json!({ "text": "Prefers mornings" })),
    ];

    for (kind, payload) in payloads {
        let activity = crm
            .log
            .append(
                &caller,
                AppendActivityRequest::from_payload(lead.id(), kind, payload),
            )
            .await
            .expect("append should succeed");
        assert_eq!(activity.kind(), kind);
        crm.clock.advance(Duration::minutes(1));
    }

    let kinds: Vec<ActivityKind> = crm
        .log
        .activity_history(lead.id())
        .await
        .expect("history should load")
        .iter()
        .map(|activity| activity.kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            ActivityKind::Note,
            ActivityKind::Email,
            ActivityKind::Whatsapp,
            ActivityKind::Sms,
            ActivityKind::Call,
        ]
    );
}

#[rstest]
#[case(json!({ "note": "no time" }))]
#[case(json!({ "when": "next tuesday" }))]
#[tokio::test(flavor = "multi_thread")]
async fn bad_task_payload_leaves_log_untouched(crm: Crm, #[case] payload: serde_json::Value) {
    let lead = seed_lead(&crm).await;

    let result = crm
        .log
        .append(
            &sales_agent(),
            AppendActivityRequest::from_payload(lead.id(), ActivityKind::Task, payload),
        )
        .await;

    assert!(matches!(
        result,
        Err(ActivityLogError::Domain(
            ActivityDomainError::MissingTaskDue | ActivityDomainError::InvalidTaskDue(_)
        ))
    ));
    let stored = crm
        .log
        .list_by_lead(lead.id())
        .await
        .expect("list should succeed");
    assert!(stored.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_board_tracks_time_passing(crm: Crm) {
    let lead = seed_lead(&crm).await;
    let due = start_of_day() + Duration::hours(10);
    crm.log
        .append(
            &sales_agent(),
            AppendActivityRequest::new(lead.id(), ActivityContent::task(due, "site visit")),
        )
        .await
        .expect("append should succeed");

    let mut observed = Vec::new();
    for offset_hours in [-10_i64, -3, 0, 2] {
        crm.clock.set(due + Duration::hours(offset_hours));
        let board = crm
            .log
            .task_board(lead.id(), false)
            .await
            .expect("task board should load");
        observed.extend(board.iter().map(|entry| entry.status));
    }

    assert_eq!(
        observed,
        vec![
            TaskStatus::Upcoming,
            TaskStatus::DueToday,
            TaskStatus::DueToday,
            TaskStatus::Overdue,
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_window_changes_due_today(#[values(2, 12)] window_hours: u32) {
    let settings = CrmSettings {
        due_today_window_hours: window_hours,
        ..CrmSettings::default()
    };
    let crm = Crm::with_settings(settings);
    let lead = seed_lead(&crm).await;
    crm.log
        .append(
            &sales_agent(),
            AppendActivityRequest::new(
                lead.id(),
                ActivityContent::task(start_of_day() + Duration::hours(4), "call"),
            ),
        )
        .await
        .expect("append should succeed");

    let board = crm
        .log
        .task_board(lead.id(), false)
        .await
        .expect("task board should load");

    let expected = if window_hours > 4 {
        TaskStatus::DueToday
    } else {
        TaskStatus::Upcoming
    };
    assert_eq!(board.first().map(|entry| entry.status), Some(expected));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_stays_done_across_reads(crm: Crm) {
    let lead = seed_lead(&crm).await;
    let caller = sales_agent();
    let task = crm
        .log
        .append(
            &caller,
            AppendActivityRequest::new(
                lead.id(),
                ActivityContent::task(start_of_day() + Duration::days(1), "sign papers"),
            ),
        )
        .await
        .expect("append should succeed");

    crm.log
        .complete_task(&caller, task.id())
        .await
        .expect("completion should succeed");

    let active = crm
        .log
        .task_board(lead.id(), false)
        .await
        .expect("task board should load");
    let all = crm
        .log
        .task_board(lead.id(), true)
        .await
        .expect("task board should load");
    assert!(active.is_empty());
    assert_eq!(all.len(), 1);
    assert!(
        all.first()
            .and_then(|entry| entry.activity.as_task())
            .is_some_and(|content| content.is_done())
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_lead_rejects_further_activity(crm: Crm) {
    let lead = seed_lead(&crm).await;
    let caller = sales_agent();
    crm.records
        .delete(&caller, lead.id())
        .await
        .expect("delete should succeed");

    let append = crm
        .log
        .append(
            &caller,
            AppendActivityRequest::new(lead.id(), ActivityContent::note("too late")),
        )
        .await;
    let listing = crm.log.list_by_lead(lead.id()).await;

    assert!(matches!(append, Err(ActivityLogError::LeadNotFound(_))));
    assert!(matches!(listing, Err(ActivityLogError::LeadNotFound(_))));
}
