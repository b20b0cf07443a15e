mod common;

use chrono::NaiveDate;
use common::TestApp;
use rentmate::domain::models::lease::{LeaseContext, LeaseTemplate};
use rentmate::domain::services::{defaults, leasing};
use rentmate::infra::factory::seed_sample_portfolio;

fn context() -> LeaseContext {
    LeaseContext {
        tenant_name: "Alice Johnson".into(),
        tenant_email: "alice.johnson@email.com".into(),
        tenant_phone: "(555) 123-4567".into(),
        property_address: "123 Maple St, Boston, MA 02101".into(),
        unit_number: "Unit 4B".into(),
        monthly_rent: 1500.0,
        security_deposit: 3000.0,
        lease_start: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        lease_end: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
        landlord_name: "Test Landlord".into(),
        landlord_email: "landlord@test.local".into(),
        landlord_phone: "(555) 000-1111".into(),
        current_date: NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
    }
}

#[tokio::test]
async fn test_seeded_templates_render_completely() {
    let app = TestApp::new();
    seed_sample_portfolio(&app.state).await;

    let templates = app.state.lease_template_repo.list().await.unwrap();
    assert_eq!(templates.len(), defaults::DEFAULT_TEMPLATES.len());

    for template in &templates {
        let rendered = leasing::render_agreement(&template.body, &context()).unwrap();
        assert!(rendered.contains("Alice Johnson"), "{} missing tenant", template.name);
        assert!(rendered.contains("Unit 4B"), "{} missing unit", template.name);
        assert!(rendered.contains("1500.00"), "{} missing rent", template.name);
        assert!(!rendered.contains("{{"), "{} left merge fields behind", template.name);
    }
}

#[tokio::test]
async fn test_custom_template_upload_and_delete() {
    let app = TestApp::new();

    let template = LeaseTemplate::new(
        "Garage Lease".into(),
        "Parking-only agreement".into(),
        "{{ TENANT_NAME }} rents parking at {{ PROPERTY_ADDRESS }} for ${{ MONTHLY_RENT }}.".into(),
    )
    .unwrap();
    let template = app.state.lease_template_repo.create(&template).await.unwrap();

    let rendered = leasing::render_agreement(&template.body, &context()).unwrap();
    assert_eq!(
        rendered,
        "Alice Johnson rents parking at 123 Maple St, Boston, MA 02101 for $1500.00."
    );

    app.state.lease_template_repo.delete(&template.id).await.unwrap();
    assert!(app
        .state
        .lease_template_repo
        .find_by_id(&template.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_nameless_template_rejected() {
    assert!(LeaseTemplate::new("   ".into(), String::new(), "body".into()).is_err());
}

#[tokio::test]
async fn test_lease_term_merge_field_counts_whole_months() {
    let rendered = leasing::render_agreement("{{ LEASE_TERM }}", &context()).unwrap();
    assert_eq!(rendered, "12 months");
}
