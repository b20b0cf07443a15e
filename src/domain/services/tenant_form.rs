use chrono::NaiveDate;
use tracing::{info, warn};

use crate::domain::models::property::Property;
use crate::domain::models::tenant::{NewTenantParams, Tenant};
use crate::domain::models::unit::{parse_numeric, Unit};
use crate::error::AppError;

/// The tenant-assignment form. Property and unit selection cascade:
/// picking a property scopes the unit choices to its available units,
/// picking a unit copies its rent and type into the lease fields and
/// locks the rent until the property selection changes.
pub struct TenantForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    property_id: Option<String>,
    unit_id: Option<String>,
    unit_type: String,
    rent: String,
    rent_is_derived: bool,
    pub deposit: String,
    pub lease_start: Option<NaiveDate>,
    pub lease_end: Option<NaiveDate>,
    pub send_invitation: bool,
    pub send_lease_agreement: bool,
    pub lease_template_id: Option<String>,
}

/// What the form hands to the save callback: the structured tenant
/// record plus the delivery choices made in the form.
pub struct TenantApplication {
    pub tenant: Tenant,
    pub send_invitation: bool,
    pub send_lease_agreement: bool,
    pub lease_template_id: Option<String>,
}

impl TenantForm {
    pub fn new() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            property_id: None,
            unit_id: None,
            unit_type: String::new(),
            rent: String::new(),
            rent_is_derived: false,
            deposit: String::new(),
            lease_start: None,
            lease_end: None,
            send_invitation: true,
            send_lease_agreement: true,
            lease_template_id: None,
        }
    }

    pub fn selected_property_id(&self) -> Option<&str> {
        self.property_id.as_deref()
    }

    pub fn selected_unit_id(&self) -> Option<&str> {
        self.unit_id.as_deref()
    }

    pub fn unit_type(&self) -> &str {
        &self.unit_type
    }

    pub fn rent(&self) -> &str {
        &self.rent
    }

    pub fn rent_is_derived(&self) -> bool {
        self.rent_is_derived
    }

    /// Selecting a property always resets the dependent fields: the
    /// previously chosen unit is no longer in scope, even if the new
    /// property happens to contain an identical one.
    pub fn select_property(&mut self, property: &Property) {
        self.property_id = Some(property.id.clone());
        self.unit_id = None;
        self.unit_type.clear();
        self.rent.clear();
        self.rent_is_derived = false;
    }

    /// The unit choices offered for the active property: available
    /// units only. Occupied units are excluded outright, not disabled.
    pub fn available_units<'a>(&self, property: &'a Property) -> Vec<&'a Unit> {
        match &self.property_id {
            Some(id) if *id == property.id => property.available_units(),
            _ => Vec::new(),
        }
    }

    /// Copies the chosen unit's rent and type into the form and marks
    /// the rent derived. Requires the property to be the active
    /// selection and the unit to be one of its available units.
    pub fn select_unit(&mut self, property: &Property, unit_id: &str) -> Result<(), AppError> {
        match &self.property_id {
            Some(id) if *id == property.id => {}
            _ => {
                return Err(AppError::Validation("Select a property first".into()));
            }
        }
        let unit = property
            .find_available_unit(unit_id)
            .ok_or_else(|| AppError::NotFound(format!("Available unit not found: {}", unit_id)))?;

        self.unit_id = Some(unit.id.clone());
        self.unit_type = unit.apartment_type.clone();
        self.rent = unit.monthly_rent.to_string();
        self.rent_is_derived = true;
        info!("Unit {} selected; rent auto-filled at {}", unit.unit_number, unit.monthly_rent);
        Ok(())
    }

    /// Manual rent entry is only possible while no unit drives the
    /// field.
    pub fn set_rent(&mut self, text: &str) -> Result<(), AppError> {
        if self.rent_is_derived {
            warn!("Rejected manual rent edit while unit-derived");
            return Err(AppError::Validation(
                "Rent amount is set by the selected unit".into(),
            ));
        }
        self.rent = text.to_string();
        Ok(())
    }

    pub fn submit(&self, property: &Property) -> Result<TenantApplication, AppError> {
        for (value, field) in [
            (&self.first_name, "First name"),
            (&self.last_name, "Last name"),
            (&self.email, "Email address"),
            (&self.phone, "Phone number"),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{} is required", field)));
            }
        }

        match &self.property_id {
            Some(id) if *id == property.id => {}
            _ => return Err(AppError::Validation("Property is required".into())),
        }
        let unit_id = self
            .unit_id
            .as_deref()
            .ok_or_else(|| AppError::Validation("Unit is required".into()))?;
        let unit = property
            .find_available_unit(unit_id)
            .ok_or_else(|| AppError::NotFound(format!("Available unit not found: {}", unit_id)))?;

        let rent = parse_numeric(&self.rent, "Monthly rent")?;
        if rent <= 0.0 {
            return Err(AppError::Validation("Monthly rent must be positive".into()));
        }
        let deposit = parse_numeric(&self.deposit, "Security deposit")?;
        if deposit < 0.0 {
            return Err(AppError::Validation("Security deposit cannot be negative".into()));
        }

        let lease_start = self
            .lease_start
            .ok_or_else(|| AppError::Validation("Lease start date is required".into()))?;
        let lease_end = self
            .lease_end
            .ok_or_else(|| AppError::Validation("Lease end date is required".into()))?;
        if lease_end <= lease_start {
            return Err(AppError::Validation("Lease end date must be after start date".into()));
        }

        let tenant = Tenant::new(NewTenantParams {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            property_id: property.id.clone(),
            unit_id: unit.id.clone(),
            unit_label: unit.unit_number.clone(),
            unit_type: unit.apartment_type.clone(),
            monthly_rent: rent,
            security_deposit: deposit,
            lease_start,
            lease_end,
        });

        info!("Tenant application completed for {}", tenant.full_name());
        Ok(TenantApplication {
            tenant,
            send_invitation: self.send_invitation,
            send_lease_agreement: self.send_lease_agreement,
            lease_template_id: self.lease_template_id.clone(),
        })
    }
}

impl Default for TenantForm {
    fn default() -> Self {
        Self::new()
    }
}
