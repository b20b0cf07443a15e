use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::models::unit::Unit;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Property {
    pub id: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub property_type: String,
    pub description: String,
    pub photos: Vec<String>,
    pub units: Vec<Unit>,
    pub created_at: DateTime<Utc>,
}

impl Property {
    pub fn new(
        address: String,
        city: String,
        state: String,
        zip_code: String,
        property_type: String,
        description: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            address,
            city,
            state,
            zip_code,
            property_type,
            description,
            photos: Vec::new(),
            units: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Sum of rents over all units, in insertion order. Recomputed on
    /// every read, never stored.
    pub fn total_monthly_income(&self) -> f64 {
        self.units.iter().map(|u| u.monthly_rent).sum()
    }

    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    pub fn available_unit_count(&self) -> usize {
        self.units.iter().filter(|u| u.is_available).count()
    }

    pub fn occupied_unit_count(&self) -> usize {
        self.units.iter().filter(|u| !u.is_available).count()
    }

    pub fn find_unit(&self, unit_id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == unit_id)
    }

    /// Lookup used by the tenant-assignment cascade: only units still
    /// available for rent are in scope.
    pub fn find_available_unit(&self, unit_id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == unit_id && u.is_available)
    }

    pub fn available_units(&self) -> Vec<&Unit> {
        self.units.iter().filter(|u| u.is_available).collect()
    }

    /// "123 Maple St, Boston, MA 02101"
    pub fn full_address(&self) -> String {
        format!("{}, {}, {} {}", self.address, self.city, self.state, self.zip_code)
    }
}
