//! In-memory integration tests for dashboard and export reports.

use crate::test_helpers::{Crm, sales_agent, start_of_day};
use chrono::Duration;
use leadbook::{
    activity::{domain::ActivityContent, services::AppendActivityRequest},
    lead::domain::{LeadInput, LeadStage},
    reporting::domain::EXPORT_HEADERS,
    settings::CrmSettings,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_reflects_pipeline_and_schedule() {
    let crm = Crm::default();
    let caller = sales_agent();
    let prospect = crm
        .records
        .create(
            &caller,
            LeadInput::new("Lina", "Roy", "9000000002", "India", "Delhi", "Delhi")
                .with_stage("Prospect"),
        )
        .await
        .expect("lead creation should succeed");
    crm.records
        .create(
            &caller,
            LeadInput::new("Omar", "Ali", "9000000003", "India", "Delhi", "Delhi"),
        )
        .await
        .expect("lead creation should succeed");
    crm.log
        .append(
            &caller,
            AppendActivityRequest::new(
                prospect.id(),
                ActivityContent::task(start_of_day() + Duration::days(1), "demo"),
            ),
        )
        .await
        .expect("append should succeed");

    let summary = crm.reports.summary().await.expect("summary should load");

    assert_eq!(summary.total_leads, 2);
    assert_eq!(summary.active_stages(), 2);
    assert_eq!(
        summary
            .leads_by_stage
            .iter()
            .map(|entry| entry.stage)
            .collect::<Vec<_>>(),
        vec![LeadStage::Lead, LeadStage::Prospect]
    );
    assert_eq!(summary.recent_activities, 1);
    assert_eq!(summary.upcoming_tasks, 1);

    crm.clock.advance(Duration::days(8));
    let later = crm.reports.summary().await.expect("summary should load");
    assert_eq!(later.recent_activities, 0);
    assert_eq!(later.upcoming_tasks, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn export_uses_configured_date_format() {
    let settings = CrmSettings::from_toml_str("csv_date_format = \"%d/%m/%Y\"")
        .expect("settings should parse");
    let crm = Crm::with_settings(settings);
    crm.records
        .create(
            &sales_agent(),
            LeadInput::new("Lina", "Roy", "9000000002", "India", "Delhi", "Delhi")
                .with_salutation("Dr.")
                .with_email("lina@example.com"),
        )
        .await
        .expect("lead creation should succeed");

    let csv = crm
        .reports
        .export_leads_csv()
        .await
        .expect("export should render");

    let mut lines = csv.lines();
    let header = lines.next().unwrap_or_default();
    let row = lines.next().unwrap_or_default();
    assert_eq!(
        header,
        EXPORT_HEADERS
            .iter()
            .map(|column| format!("\"{column}\""))
            .collect::<Vec<_>>()
            .join(",")
    );
    assert_eq!(
        row,
        r#""Dr. Lina Roy","lina@example.com","9000000002","Lead","02/06/2025""#
    );
    assert_eq!(lines.next(), None);
}
