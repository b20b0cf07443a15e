use tracing::{info, warn};

use crate::domain::catalog::{self, PROPERTY_TYPES};
use crate::domain::models::property::Property;
use crate::domain::models::unit::{Unit, UnitInput};
use crate::error::AppError;

/// One property editing session: the add/edit form plus the embedded
/// unit editor. The form owns the draft; nothing is persisted until the
/// caller hands the submitted `Property` to a repository.
pub struct PropertyForm {
    draft: Property,
    edit_mode: bool,
}

/// Derived display values for the unit summary card. Recomputed from the
/// live collection on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSummary {
    pub total_units: usize,
    pub available_units: usize,
    pub total_monthly_income: f64,
}

impl PropertyForm {
    /// Add mode: empty draft, property type preselected to the first
    /// catalog entry, no units.
    pub fn new() -> Self {
        Self {
            draft: Property::new(
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                PROPERTY_TYPES[0].to_string(),
                String::new(),
            ),
            edit_mode: false,
        }
    }

    /// Edit mode: initialized from an existing record. The same
    /// invariants hold as in add mode.
    pub fn edit(property: Property) -> Self {
        Self { draft: property, edit_mode: true }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn draft(&self) -> &Property {
        &self.draft
    }

    pub fn set_address(&mut self, value: &str) {
        self.draft.address = value.trim().to_string();
    }

    pub fn set_city(&mut self, value: &str) {
        self.draft.city = value.trim().to_string();
    }

    pub fn set_state(&mut self, value: &str) {
        self.draft.state = value.trim().to_string();
    }

    pub fn set_zip_code(&mut self, value: &str) {
        self.draft.zip_code = value.trim().to_string();
    }

    pub fn set_description(&mut self, value: &str) {
        self.draft.description = value.to_string();
    }

    pub fn set_property_type(&mut self, value: &str) -> Result<(), AppError> {
        catalog::validate_member(PROPERTY_TYPES, value, "property type")?;
        self.draft.property_type = value.to_string();
        Ok(())
    }

    pub fn add_photo(&mut self, reference: &str) {
        self.draft.photos.push(reference.to_string());
    }

    /// The unit editor handoff. All-or-nothing: a failing field leaves
    /// the unit collection untouched.
    pub fn add_unit(&mut self, input: UnitInput) -> Result<&Unit, AppError> {
        let unit = Unit::try_from_input(input).map_err(|e| {
            warn!("Rejected unit input: {}", e.user_message());
            e
        })?;
        info!("Unit {} added to draft property", unit.unit_number);
        self.draft.units.push(unit);
        Ok(self.draft.units.last().unwrap())
    }

    /// Removal is by id, never by position; positions shift after a
    /// removal and must not be reused.
    pub fn remove_unit(&mut self, unit_id: &str) -> Result<Unit, AppError> {
        let idx = self
            .draft
            .units
            .iter()
            .position(|u| u.id == unit_id)
            .ok_or_else(|| AppError::NotFound(format!("Unit not found: {}", unit_id)))?;
        let removed = self.draft.units.remove(idx);
        info!("Unit {} removed from draft property", removed.unit_number);
        Ok(removed)
    }

    pub fn summary(&self) -> UnitSummary {
        UnitSummary {
            total_units: self.draft.unit_count(),
            available_units: self.draft.available_unit_count(),
            total_monthly_income: self.draft.total_monthly_income(),
        }
    }

    /// Validates and returns the completed property. On failure the
    /// draft is untouched and stays available for correction; the
    /// caller only persists on `Ok`.
    pub fn submit(&self) -> Result<Property, AppError> {
        for (value, field) in [
            (&self.draft.address, "Property address"),
            (&self.draft.city, "City"),
            (&self.draft.state, "State"),
            (&self.draft.zip_code, "ZIP code"),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{} is required", field)));
            }
        }
        catalog::validate_member(PROPERTY_TYPES, &self.draft.property_type, "property type")?;

        if self.draft.units.is_empty() {
            warn!("Property submission rejected: no units");
            return Err(AppError::Validation(
                "Please add at least one unit/apartment to the property".into(),
            ));
        }

        info!(
            "Property submitted: {} with {} unit(s)",
            self.draft.address,
            self.draft.unit_count()
        );
        Ok(self.draft.clone())
    }
}

impl Default for PropertyForm {
    fn default() -> Self {
        Self::new()
    }
}
