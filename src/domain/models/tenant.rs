use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Tenant {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub property_id: String,
    pub unit_id: String,
    pub unit_label: String,
    pub unit_type: String,
    pub monthly_rent: f64,
    pub security_deposit: f64,
    pub lease_start: NaiveDate,
    pub lease_end: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

pub struct NewTenantParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub property_id: String,
    pub unit_id: String,
    pub unit_label: String,
    pub unit_type: String,
    pub monthly_rent: f64,
    pub security_deposit: f64,
    pub lease_start: NaiveDate,
    pub lease_end: NaiveDate,
}

impl Tenant {
    pub fn new(params: NewTenantParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            first_name: params.first_name,
            last_name: params.last_name,
            email: params.email,
            phone: params.phone,
            property_id: params.property_id,
            unit_id: params.unit_id,
            unit_label: params.unit_label,
            unit_type: params.unit_type,
            monthly_rent: params.monthly_rent,
            security_deposit: params.security_deposit,
            lease_start: params.lease_start,
            lease_end: params.lease_end,
            status: "active".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "123 Maple St, Unit 4B", the display label used in payment rows.
    pub fn residence_label(&self, property_address: &str) -> String {
        format!("{}, {}", property_address, self.unit_label)
    }
}
