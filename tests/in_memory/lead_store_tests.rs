//! In-memory integration tests for the lead record store.

use crate::test_helpers::{Crm, sales_agent};
use leadbook::{
    caller::{Caller, UserId, UserRef},
    lead::{
        domain::{LeadId, LeadInput, LeadStage},
        services::LeadRecordError,
    },
};
use rstest::{fixture, rstest};

#[fixture]
fn crm() -> Crm {
    Crm::default()
}

fn full_input() -> LeadInput {
    LeadInput::new("Meera", "Nair", "9847012345", "India", "Kerala", "Thrissur")
        .with_salutation("Ms.")
        .with_email("meera@example.com")
        .with_country_code("+91")
        .with_whatsapp("9847012345")
        .with_lead_type("Buyer")
        .with_preferred_language("Malayalam")
        .with_company_name("Nair Estates")
        .with_assigned_to(UserRef::new(UserId::new(), "Ravi Menon", "ravi@example.com"))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_lead_round_trips_every_attribute(crm: Crm) {
    let created = crm
        .records
        .create(&sales_agent(), full_input())
        .await
        .expect("lead creation should succeed");
    let fetched = crm
        .records
        .get(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, created);
    assert_eq!(fetched.stage(), LeadStage::Lead);
    assert_eq!(fetched.display_name(), "Ms. Meera Nair");
    assert_eq!(fetched.lead_type(), Some("Buyer"));
    assert_eq!(fetched.preferred_language(), Some("Malayalam"));
    assert_eq!(fetched.whatsapp(), Some("9847012345"));
    assert_eq!(
        fetched.assigned_to().map(|user| user.name.as_str()),
        Some("Ravi Menon")
    );
}

#[rstest]
#[case(LeadInput::new("", "Nair", "98", "India", "Kerala", "Thrissur"), &["firstName"])]
#[case(LeadInput::new("Meera", "Nair", " ", "India", "Kerala", "Thrissur"), &["mobile"])]
#[case(
    LeadInput::new("Meera", "Nair", "98", "", "", "Thrissur").with_stage("Lost"),
    &["country", "state", "leadStage"]
)]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_input_names_the_offending_fields(
    crm: Crm,
    #[case] input: LeadInput,
    #[case] expected: &[&str],
) {
    let result = crm.records.create(&Caller::System, input).await;

    let Err(LeadRecordError::Validation(err)) = result else {
        panic!("expected a validation error, got {result:?}");
    };
    assert_eq!(err.field_names(), expected);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stage_moves_through_the_pipeline(crm: Crm) {
    let caller = sales_agent();
    let lead = crm
        .records
        .create(&caller, full_input())
        .await
        .expect("lead creation should succeed");

    for stage in ["Prospect", "Customer", "Disqualified", "Invalid", "Lead"] {
        let updated = crm
            .records
            .update(&caller, lead.id(), full_input().with_stage(stage))
            .await
            .expect("update should succeed");
        assert_eq!(updated.stage().as_str(), stage);
        assert_eq!(updated.created_at(), lead.created_at());
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_of_unknown_lead_is_not_found(crm: Crm) {
    let missing = LeadId::new();
    let result = crm.records.get(missing).await;
    assert!(matches!(result, Err(LeadRecordError::NotFound(id)) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_lead_disappears_from_list(crm: Crm) {
    let caller = sales_agent();
    let kept = crm
        .records
        .create(&caller, full_input())
        .await
        .expect("lead creation should succeed");
    let removed = crm
        .records
        .create(&caller, full_input())
        .await
        .expect("lead creation should succeed");

    crm.records
        .delete(&caller, removed.id())
        .await
        .expect("delete should succeed");

    let remaining = crm.records.list().await.expect("list should succeed");
    assert_eq!(remaining, vec![kept]);
}
