mod common;

use common::TestApp;
use rentmate::domain::models::unit::UnitInput;
use rentmate::domain::services::property_form::PropertyForm;

fn unit_input(number: &str, rent: &str, available: bool) -> UnitInput {
    UnitInput {
        unit_number: number.into(),
        apartment_type: "2 Bedroom (1 Bathroom)".into(),
        bedrooms: 2,
        bathrooms: 1.0,
        square_footage: "800".into(),
        monthly_rent: rent.into(),
        security_deposit: "3000".into(),
        is_available: available,
    }
}

fn filled_form() -> PropertyForm {
    let mut form = PropertyForm::new();
    form.set_address("123 Maple Street");
    form.set_city("Boston");
    form.set_state("MA");
    form.set_zip_code("02101");
    form
}

#[tokio::test]
async fn test_property_created_through_form_and_persisted() {
    let app = TestApp::new();

    // 1. Build the draft through the form, one unit at a time.
    let mut form = filled_form();
    form.add_unit(unit_input("Unit A", "1500", true)).unwrap();
    form.add_unit(unit_input("Unit B", "800", false)).unwrap();

    // 2. Derived card values.
    let summary = form.summary();
    assert_eq!(summary.total_units, 2);
    assert_eq!(summary.available_units, 1);
    assert_eq!(summary.total_monthly_income, 2300.0);

    // 3. Submit and persist.
    let property = form.submit().unwrap();
    app.state.property_repo.create(&property).await.unwrap();

    let stored = app
        .state
        .property_repo
        .find_by_id(&property.id)
        .await
        .unwrap()
        .expect("property stored");
    assert_eq!(stored.unit_count(), 2);
    assert_eq!(stored.total_monthly_income(), 2300.0);
    assert_eq!(stored.available_unit_count(), 1);
}

#[tokio::test]
async fn test_empty_unit_collection_blocks_save() {
    let app = TestApp::new();

    let form = filled_form();
    let err = form.submit().unwrap_err();
    assert_eq!(
        err.user_message(),
        "Please add at least one unit/apartment to the property"
    );

    // The save callback is never reached.
    assert!(app.state.property_repo.list().await.unwrap().is_empty());

    // The same session recovers after correction.
    let mut form = form;
    form.add_unit(unit_input("Unit A", "900", true)).unwrap();
    let property = form.submit().unwrap();
    app.state.property_repo.create(&property).await.unwrap();
    assert_eq!(app.state.property_repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_unit_deletion_by_id_updates_all_derived_values() {
    let mut form = filled_form();
    form.add_unit(unit_input("Twin", "1000", true)).unwrap();
    let target = form.add_unit(unit_input("Twin", "1000", true)).unwrap().id.clone();
    form.add_unit(unit_input("Twin", "1000", false)).unwrap();

    form.remove_unit(&target).unwrap();

    let summary = form.summary();
    assert_eq!(summary.total_units, 2);
    assert_eq!(summary.available_units, 1);
    assert_eq!(summary.total_monthly_income, 2000.0);
    assert!(form.draft().units.iter().all(|u| u.id != target));
}

#[tokio::test]
async fn test_rerender_without_mutation_is_stable() {
    let mut form = filled_form();
    form.add_unit(unit_input("Unit A", "1499.99", true)).unwrap();
    form.add_unit(unit_input("Unit B", "0.01", true)).unwrap();

    let first = form.summary();
    for _ in 0..25 {
        assert_eq!(form.summary(), first);
    }
}

#[tokio::test]
async fn test_edit_mode_roundtrip_through_repository() {
    let app = TestApp::new();

    let mut form = filled_form();
    form.add_unit(unit_input("Unit A", "1500", true)).unwrap();
    let saved = form.submit().unwrap();
    app.state.property_repo.create(&saved).await.unwrap();

    // Re-open in edit mode, append a unit, persist the update.
    let loaded = app
        .state
        .property_repo
        .find_by_id(&saved.id)
        .await
        .unwrap()
        .unwrap();
    let mut edit = PropertyForm::edit(loaded);
    edit.add_unit(unit_input("Unit B", "800", true)).unwrap();
    let updated = edit.submit().unwrap();
    app.state.property_repo.update(&updated).await.unwrap();

    let stored = app
        .state
        .property_repo
        .find_by_id(&saved.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.unit_count(), 2);
    assert_eq!(stored.total_monthly_income(), 2300.0);
}
