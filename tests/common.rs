use std::sync::Arc;

use rentmate::config::Config;
use rentmate::domain::models::property::Property;
use rentmate::domain::models::unit::Unit;
use rentmate::infra::notifier::LogNotifier;
use rentmate::infra::repositories::{
    memory_lease_repo::MemoryLeaseTemplateRepo, memory_maintenance_repo::MemoryMaintenanceRepo,
    memory_payment_repo::MemoryPaymentRepo, memory_property_repo::MemoryPropertyRepo,
    memory_tenant_repo::MemoryTenantRepo,
};
use rentmate::state::AppState;
use uuid::Uuid;

pub struct TestApp {
    pub state: AppState,
}

impl TestApp {
    /// Empty in-memory state; tests build their own fixtures.
    pub fn new() -> Self {
        let config = Config {
            landlord_name: "Test Landlord".to_string(),
            landlord_email: "landlord@test.local".to_string(),
            landlord_phone: "(555) 000-1111".to_string(),
            seed_sample_data: false,
        };
        let state = AppState {
            config,
            property_repo: Arc::new(MemoryPropertyRepo::new()),
            tenant_repo: Arc::new(MemoryTenantRepo::new()),
            payment_repo: Arc::new(MemoryPaymentRepo::new()),
            maintenance_repo: Arc::new(MemoryMaintenanceRepo::new()),
            lease_template_repo: Arc::new(MemoryLeaseTemplateRepo::new()),
            notifier: Arc::new(LogNotifier),
        };
        Self { state }
    }
}

#[allow(dead_code)]
pub fn fixture_unit(number: &str, rent: f64, available: bool) -> Unit {
    Unit {
        id: Uuid::new_v4().to_string(),
        unit_number: number.to_string(),
        apartment_type: "2 Bedroom (1 Bathroom)".to_string(),
        bedrooms: 2,
        bathrooms: 1.0,
        square_footage: 800.0,
        monthly_rent: rent,
        security_deposit: rent * 2.0,
        is_available: available,
    }
}

#[allow(dead_code)]
pub fn fixture_property(address: &str, units: Vec<Unit>) -> Property {
    let mut property = Property::new(
        address.to_string(),
        "Boston".to_string(),
        "MA".to_string(),
        "02101".to_string(),
        "Apartment Building".to_string(),
        String::new(),
    );
    property.units = units;
    property
}
