use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::catalog::{self, APARTMENT_TYPES};
use crate::error::AppError;

/// A single rentable unit. Belongs to exactly one property for its
/// lifetime; units are appended and removed, never edited in place.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Unit {
    pub id: String,
    pub unit_number: String,
    pub apartment_type: String,
    pub bedrooms: i32,
    pub bathrooms: f64,
    pub square_footage: f64,
    pub monthly_rent: f64,
    pub security_deposit: f64,
    pub is_available: bool,
}

/// Raw payload from the unit editor. The numeric fields arrive as the
/// free text the user typed; parsing happens in `Unit::try_from_input`.
#[derive(Debug, Deserialize, Clone)]
pub struct UnitInput {
    pub unit_number: String,
    pub apartment_type: String,
    pub bedrooms: i32,
    pub bathrooms: f64,
    pub square_footage: String,
    pub monthly_rent: String,
    pub security_deposit: String,
    pub is_available: bool,
}

impl Default for UnitInput {
    fn default() -> Self {
        Self {
            unit_number: String::new(),
            apartment_type: APARTMENT_TYPES[0].to_string(),
            bedrooms: 1,
            bathrooms: 1.0,
            square_footage: String::new(),
            monthly_rent: String::new(),
            security_deposit: String::new(),
            is_available: true,
        }
    }
}

/// Strict numeric parsing: malformed or empty text is rejected, never
/// coerced to zero.
pub fn parse_numeric(text: &str, field: &str) -> Result<f64, AppError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AppError::Validation(format!("{} must be a number", field)))
}

impl Unit {
    /// Validates the editor input and mints a unit with a fresh id.
    /// All-or-nothing: the first failing field rejects the whole input.
    pub fn try_from_input(input: UnitInput) -> Result<Self, AppError> {
        let unit_number = input.unit_number.trim().to_string();
        if unit_number.is_empty() {
            return Err(AppError::Validation("Unit number is required".into()));
        }
        catalog::validate_member(APARTMENT_TYPES, &input.apartment_type, "apartment type")?;

        if input.bedrooms < 0 {
            return Err(AppError::Validation("Bedrooms cannot be negative".into()));
        }
        if input.bathrooms < 0.0 || (input.bathrooms * 2.0).fract() != 0.0 {
            return Err(AppError::Validation("Bathrooms must be in half-bath steps".into()));
        }

        let square_footage = parse_numeric(&input.square_footage, "Square footage")?;
        if square_footage <= 0.0 {
            return Err(AppError::Validation("Square footage must be positive".into()));
        }
        let monthly_rent = parse_numeric(&input.monthly_rent, "Monthly rent")?;
        if monthly_rent <= 0.0 {
            return Err(AppError::Validation("Monthly rent must be positive".into()));
        }
        let security_deposit = parse_numeric(&input.security_deposit, "Security deposit")?;
        if security_deposit < 0.0 {
            return Err(AppError::Validation("Security deposit cannot be negative".into()));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            unit_number,
            apartment_type: input.apartment_type,
            bedrooms: input.bedrooms,
            bathrooms: input.bathrooms,
            square_footage,
            monthly_rent,
            security_deposit,
            is_available: input.is_available,
        })
    }
}
