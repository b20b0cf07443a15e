use chrono::NaiveDate;
use tracing::info;

use crate::domain::catalog::{self, PAYMENT_METHODS};
use crate::domain::models::payment::{NewPaymentParams, Payment};
use crate::domain::models::tenant::Tenant;
use crate::domain::models::unit::parse_numeric;
use crate::error::AppError;

/// The Record Payment modal. Choosing a tenant cascades their residence
/// and monthly rent into the form; unlike the tenant form's rent field,
/// the amount stays editable so partial payments can be recorded.
pub struct PaymentForm {
    tenant_id: Option<String>,
    tenant_name: String,
    property_label: String,
    pub amount: String,
    pub payment_date: NaiveDate,
    pub method: String,
    pub reference: String,
    pub notes: String,
}

impl PaymentForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            tenant_id: None,
            tenant_name: String::new(),
            property_label: String::new(),
            amount: String::new(),
            payment_date: today,
            method: "Bank Transfer".to_string(),
            reference: String::new(),
            notes: String::new(),
        }
    }

    pub fn selected_tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    /// Display-only; filled by the tenant cascade.
    pub fn property_label(&self) -> &str {
        &self.property_label
    }

    /// Cascades the tenant's residence and rent into the form. The
    /// amount is a default, not a lock.
    pub fn select_tenant(&mut self, tenant: &Tenant, property_address: &str) {
        self.tenant_id = Some(tenant.id.clone());
        self.tenant_name = tenant.full_name();
        self.property_label = tenant.residence_label(property_address);
        self.amount = tenant.monthly_rent.to_string();
    }

    pub fn submit(&self) -> Result<Payment, AppError> {
        let tenant_id = self
            .tenant_id
            .clone()
            .ok_or_else(|| AppError::Validation("Tenant is required".into()))?;

        let amount = parse_numeric(&self.amount, "Amount")?;
        if amount <= 0.0 {
            return Err(AppError::Validation("Amount must be positive".into()));
        }
        catalog::validate_member(PAYMENT_METHODS, &self.method, "payment method")?;

        let reference = match self.reference.trim() {
            "" => None,
            r => Some(r.to_string()),
        };
        let notes = match self.notes.trim() {
            "" => None,
            n => Some(n.to_string()),
        };

        let payment = Payment::new(NewPaymentParams {
            tenant_id,
            tenant_name: self.tenant_name.clone(),
            property_label: self.property_label.clone(),
            amount,
            payment_date: self.payment_date,
            method: self.method.clone(),
            reference,
            notes,
        });
        info!(
            "Payment of {} recorded for {} ({})",
            payment.amount, payment.tenant_name, payment.method
        );
        Ok(payment)
    }

    /// Back to the blank modal state.
    pub fn reset(&mut self, today: NaiveDate) {
        *self = PaymentForm::new(today);
    }
}
