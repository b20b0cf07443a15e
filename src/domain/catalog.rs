//! Fixed choice sets used across the forms. These are closed lists carried
//! as configuration; membership is validated, the values themselves are
//! never interpreted.

use crate::error::AppError;

pub const PROPERTY_TYPES: &[&str] = &[
    "Apartment Building",
    "House",
    "Condo",
    "Townhouse",
    "Commercial",
    "Other",
];

pub const APARTMENT_TYPES: &[&str] = &[
    "Single Room (Shared Bathroom)",
    "Single Self-Contain (Private Bathroom)",
    "1 Bedroom Self-Contain (Chamber & Hall)",
    "2 Bedroom (1 Bathroom)",
    "2 Bedroom (2 Bathrooms)",
    "3 Bedroom (1 Bathroom)",
    "3 Bedroom (2 Bathrooms)",
    "4+ Bedroom",
    "Studio",
    "Penthouse",
    "Other",
];

pub const PAYMENT_METHODS: &[&str] = &[
    "Bank Transfer",
    "Credit Card",
    "Debit Card",
    "Cash",
    "Check",
    "Mobile Money",
    "Other",
];

pub const PAYMENT_STATUSES: &[&str] = &["paid", "pending", "overdue"];

pub const TENANT_STATUSES: &[&str] = &["active", "notice", "former"];

pub const MAINTENANCE_PRIORITIES: &[&str] = &["low", "medium", "high"];

pub const MAINTENANCE_STATUSES: &[&str] = &["pending", "in-progress", "completed"];

pub const EXPORT_FORMATS: &[&str] = &["pdf", "csv", "excel"];

pub fn validate_member(set: &[&str], value: &str, field: &str) -> Result<(), AppError> {
    if set.contains(&value) {
        Ok(())
    } else {
        Err(AppError::Validation(format!("Invalid {}: {}", field, value)))
    }
}
