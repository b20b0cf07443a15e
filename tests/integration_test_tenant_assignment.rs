mod common;

use chrono::NaiveDate;
use common::{fixture_property, fixture_unit, TestApp};
use rentmate::domain::services::tenant_form::TenantForm;

#[tokio::test]
async fn test_unit_choices_exclude_unavailable_units() {
    let p = fixture_property(
        "123 Maple Street",
        vec![fixture_unit("U1", 1500.0, true), fixture_unit("U2", 800.0, false)],
    );

    let mut form = TenantForm::new();
    form.select_property(&p);

    let choices = form.available_units(&p);
    assert_eq!(choices.len(), 1);
    assert_eq!(choices[0].unit_number, "U1");
}

#[tokio::test]
async fn test_cascade_fills_and_locks_then_property_change_clears() {
    let p = fixture_property("123 Maple Street", vec![fixture_unit("U1", 1500.0, true)]);
    // Q contains a unit with identical field values; only identity matters.
    let q = fixture_property("789 Oak Avenue", vec![fixture_unit("U1", 1500.0, true)]);
    let u1 = p.units[0].id.clone();

    let mut form = TenantForm::new();
    form.select_property(&p);
    form.select_unit(&p, &u1).unwrap();
    assert_eq!(form.rent(), "1500");
    assert_eq!(form.unit_type(), "2 Bedroom (1 Bathroom)");
    assert!(form.rent_is_derived());

    form.select_property(&q);
    assert!(form.selected_unit_id().is_none());
    assert_eq!(form.rent(), "");
    assert_eq!(form.unit_type(), "");
    assert!(!form.rent_is_derived());

    // The old unit id does not resolve against Q.
    assert!(form.select_unit(&q, &u1).is_err());
}

#[tokio::test]
async fn test_full_assignment_flow_marks_unit_occupied() {
    let app = TestApp::new();
    let p = fixture_property(
        "123 Maple Street",
        vec![fixture_unit("Unit 4B", 1500.0, true), fixture_unit("Unit 2A", 800.0, true)],
    );
    let p = app.state.property_repo.create(&p).await.unwrap();
    let unit_id = p.units[0].id.clone();

    let mut form = TenantForm::new();
    form.first_name = "Alice".into();
    form.last_name = "Johnson".into();
    form.email = "alice.johnson@email.com".into();
    form.phone = "(555) 123-4567".into();
    form.select_property(&p);
    form.select_unit(&p, &unit_id).unwrap();
    form.deposit = "3000".into();
    form.lease_start = NaiveDate::from_ymd_opt(2024, 1, 15);
    form.lease_end = NaiveDate::from_ymd_opt(2025, 1, 15);

    let application = form.submit(&p).unwrap();
    assert!(application.send_invitation);
    let tenant = app.state.tenant_repo.create(&application.tenant).await.unwrap();
    app.state.notifier.send_invitation(&tenant).await.unwrap();

    // Lease signed: the unit comes off the market.
    let mut p = p.clone();
    p.units.iter_mut().find(|u| u.id == unit_id).unwrap().is_available = false;
    let p = app.state.property_repo.update(&p).await.unwrap();

    // A second assignment session no longer sees Unit 4B.
    let mut second = TenantForm::new();
    second.select_property(&p);
    let remaining = second.available_units(&p);
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].unit_number, "Unit 2A");
    assert!(second.select_unit(&p, &unit_id).is_err());

    let stored = app.state.tenant_repo.find_by_id(&tenant.id).await.unwrap().unwrap();
    assert_eq!(stored.unit_label, "Unit 4B");
    assert_eq!(stored.monthly_rent, 1500.0);
    assert_eq!(stored.status, "active");
}

#[tokio::test]
async fn test_submit_requires_personal_fields_and_selection() {
    let p = fixture_property("123 Maple Street", vec![fixture_unit("U1", 1500.0, true)]);

    let mut form = TenantForm::new();
    form.first_name = "Alice".into();
    // last name, email, phone missing
    assert!(form.submit(&p).is_err());

    form.last_name = "Johnson".into();
    form.email = "alice@email.com".into();
    form.phone = "(555) 123-4567".into();
    // no property/unit selected
    assert!(form.submit(&p).is_err());
}
