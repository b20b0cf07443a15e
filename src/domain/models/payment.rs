use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;
use rand::{distributions::Alphanumeric, Rng};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Payment {
    pub id: String,
    pub tenant_id: String,
    pub tenant_name: String,
    pub property_label: String,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub method: String,
    pub status: String,
    pub reference: Option<String>,
    pub receipt_number: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewPaymentParams {
    pub tenant_id: String,
    pub tenant_name: String,
    pub property_label: String,
    pub amount: f64,
    pub payment_date: NaiveDate,
    pub method: String,
    pub reference: Option<String>,
    pub notes: Option<String>,
}

impl Payment {
    pub fn new(params: NewPaymentParams) -> Self {
        let receipt_number: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(12)
            .map(char::from)
            .collect();

        Self {
            id: Uuid::new_v4().to_string(),
            tenant_id: params.tenant_id,
            tenant_name: params.tenant_name,
            property_label: params.property_label,
            amount: params.amount,
            payment_date: params.payment_date,
            method: params.method,
            status: "paid".to_string(),
            reference: params.reference,
            receipt_number,
            notes: params.notes,
            created_at: Utc::now(),
        }
    }
}
