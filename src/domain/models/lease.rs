use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::AppError;

/// A lease agreement template. The body carries `{{ MERGE_FIELD }}`
/// placeholders that are filled in at send time.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LeaseTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub body: String,
    pub uploaded_at: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
}

impl LeaseTemplate {
    pub fn new(name: String, description: String, body: String) -> Result<Self, AppError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation(
                "Please provide a template name and upload a file".into(),
            ));
        }
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            body,
            uploaded_at: now,
            last_modified: now,
        })
    }
}

/// Typed bag of merge values for one tenant/unit pairing.
#[derive(Debug, Clone)]
pub struct LeaseContext {
    pub tenant_name: String,
    pub tenant_email: String,
    pub tenant_phone: String,
    pub property_address: String,
    pub unit_number: String,
    pub monthly_rent: f64,
    pub security_deposit: f64,
    pub lease_start: NaiveDate,
    pub lease_end: NaiveDate,
    pub landlord_name: String,
    pub landlord_email: String,
    pub landlord_phone: String,
    pub current_date: NaiveDate,
}
