use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::models::lease::LeaseTemplate;
use crate::domain::models::payment::{NewPaymentParams, Payment};
use crate::domain::models::property::Property;
use crate::domain::models::tenant::{NewTenantParams, Tenant};
use crate::domain::models::unit::Unit;
use crate::domain::services::defaults;
use crate::infra::notifier::LogNotifier;
use crate::infra::repositories::{
    memory_lease_repo::MemoryLeaseTemplateRepo, memory_maintenance_repo::MemoryMaintenanceRepo,
    memory_payment_repo::MemoryPaymentRepo, memory_property_repo::MemoryPropertyRepo,
    memory_tenant_repo::MemoryTenantRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let state = AppState {
        config: config.clone(),
        property_repo: Arc::new(MemoryPropertyRepo::new()),
        tenant_repo: Arc::new(MemoryTenantRepo::new()),
        payment_repo: Arc::new(MemoryPaymentRepo::new()),
        maintenance_repo: Arc::new(MemoryMaintenanceRepo::new()),
        lease_template_repo: Arc::new(MemoryLeaseTemplateRepo::new()),
        notifier: Arc::new(LogNotifier),
    };

    if config.seed_sample_data {
        info!("Seeding sample portfolio...");
        seed_sample_portfolio(&state).await;
    }

    state
}

fn unit(number: &str, apartment_type: &str, bedrooms: i32, bathrooms: f64, sqft: f64, rent: f64, deposit: f64, available: bool) -> Unit {
    Unit {
        id: Uuid::new_v4().to_string(),
        unit_number: number.to_string(),
        apartment_type: apartment_type.to_string(),
        bedrooms,
        bathrooms,
        square_footage: sqft,
        monthly_rent: rent,
        security_deposit: deposit,
        is_available: available,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

/// Demo portfolio, only loaded when `SEED_SAMPLE_DATA` is on; tests
/// build their own fixtures.
pub async fn seed_sample_portfolio(state: &AppState) {
    let mut maple = Property::new(
        "123 Maple Street".into(),
        "Boston".into(),
        "MA".into(),
        "02101".into(),
        "Apartment Building".into(),
        "Four-unit walk-up near the park, off-street parking".into(),
    );
    maple.units = vec![
        unit("Unit 4B", "2 Bedroom (1 Bathroom)", 2, 1.0, 800.0, 1500.0, 3000.0, false),
        unit("Unit 2A", "Single Self-Contain (Private Bathroom)", 1, 1.0, 450.0, 800.0, 1600.0, true),
        unit("Unit 5C", "1 Bedroom Self-Contain (Chamber & Hall)", 1, 1.0, 600.0, 1200.0, 2400.0, true),
    ];

    let mut oak = Property::new(
        "789 Oak Avenue".into(),
        "Boston".into(),
        "MA".into(),
        "02120".into(),
        "Apartment Building".into(),
        String::new(),
    );
    oak.units = vec![
        unit("Apt 2", "2 Bedroom (1 Bathroom)", 2, 1.0, 750.0, 1200.0, 2400.0, false),
        unit("Apt 101", "3 Bedroom (2 Bathrooms)", 3, 2.0, 1100.0, 2000.0, 4000.0, true),
        unit("Apt 205", "2 Bedroom (2 Bathrooms)", 2, 2.0, 900.0, 1800.0, 3600.0, true),
    ];

    let mut pine = Property::new(
        "456 Pine Lane".into(),
        "Cambridge".into(),
        "MA".into(),
        "02139".into(),
        "House".into(),
        "Single-family house with a fenced yard".into(),
    );
    pine.units = vec![unit("House", "4+ Bedroom", 4, 2.5, 2200.0, 2400.0, 4800.0, false)];

    let mut birch = Property::new(
        "321 Birch Road".into(),
        "Somerville".into(),
        "MA".into(),
        "02143".into(),
        "Condo".into(),
        String::new(),
    );
    birch.units = vec![unit("Unit 10", "2 Bedroom (2 Bathrooms)", 2, 2.0, 950.0, 1800.0, 3600.0, false)];

    let tenants = vec![
        (
            &maple,
            &maple.units[0],
            ("Alice", "Johnson", "alice.johnson@email.com", "(555) 123-4567"),
            (date(2024, 1, 15), date(2024, 10, 15)),
        ),
        (
            &oak,
            &oak.units[0],
            ("Bob", "Williams", "bob.williams@email.com", "(555) 234-5678"),
            (date(2024, 3, 1), date(2024, 10, 28)),
        ),
        (
            &pine,
            &pine.units[0],
            ("Charlie", "Brown", "charlie.brown@email.com", "(555) 345-6789"),
            (date(2024, 2, 5), date(2024, 11, 5)),
        ),
        (
            &birch,
            &birch.units[0],
            ("Diana", "Miller", "diana.miller@email.com", "(555) 456-7890"),
            (date(2024, 1, 12), date(2024, 11, 12)),
        ),
    ];

    let mut seeded_tenants = Vec::new();
    for (property, u, (first, last, email, phone), (start, end)) in tenants {
        let tenant = Tenant::new(NewTenantParams {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            property_id: property.id.clone(),
            unit_id: u.id.clone(),
            unit_label: u.unit_number.clone(),
            unit_type: u.apartment_type.clone(),
            monthly_rent: u.monthly_rent,
            security_deposit: u.security_deposit,
            lease_start: start,
            lease_end: end,
        });
        seeded_tenants.push((tenant, property.address.clone()));
    }

    for property in [&maple, &oak, &pine, &birch] {
        state
            .property_repo
            .create(property)
            .await
            .expect("seed property");
    }

    let payment_rows = [
        (0usize, 1500.0, date(2024, 10, 1), "Bank Transfer", "paid"),
        (1, 1200.0, date(2024, 10, 5), "Credit Card", "paid"),
        (2, 2400.0, date(2024, 10, 15), "Bank Transfer", "pending"),
        (3, 1800.0, date(2024, 9, 28), "Check", "overdue"),
    ];

    for (tenant, _) in &seeded_tenants {
        state.tenant_repo.create(tenant).await.expect("seed tenant");
    }

    for (idx, amount, payment_date, method, status) in payment_rows {
        let (tenant, address) = &seeded_tenants[idx];
        let mut payment = Payment::new(NewPaymentParams {
            tenant_id: tenant.id.clone(),
            tenant_name: tenant.full_name(),
            property_label: tenant.residence_label(address),
            amount,
            payment_date,
            method: method.to_string(),
            reference: None,
            notes: None,
        });
        payment.status = status.to_string();
        state.payment_repo.create(&payment).await.expect("seed payment");
    }

    for (key, name, description) in defaults::DEFAULT_TEMPLATES {
        let template = LeaseTemplate::new(
            name.to_string(),
            description.to_string(),
            defaults::get_default_template(key),
        )
        .expect("seed template");
        state
            .lease_template_repo
            .create(&template)
            .await
            .expect("seed template");
    }

    info!("Sample portfolio seeded: 4 properties, 4 tenants, 4 payments");
}
