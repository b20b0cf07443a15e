use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::catalog::{self, MAINTENANCE_PRIORITIES, MAINTENANCE_STATUSES};
use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MaintenanceRequest {
    pub id: String,
    pub tenant_id: String,
    pub property_id: String,
    pub unit_id: String,
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewMaintenanceParams {
    pub tenant_id: String,
    pub property_id: String,
    pub unit_id: String,
    pub title: String,
    pub description: String,
    pub priority: String,
}

impl MaintenanceRequest {
    pub fn new(params: NewMaintenanceParams) -> Result<Self, AppError> {
        if params.title.trim().is_empty() {
            return Err(AppError::Validation("Title is required".into()));
        }
        if params.description.trim().is_empty() {
            return Err(AppError::Validation("Description is required".into()));
        }
        catalog::validate_member(MAINTENANCE_PRIORITIES, &params.priority, "priority")?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            tenant_id: params.tenant_id,
            property_id: params.property_id,
            unit_id: params.unit_id,
            title: params.title.trim().to_string(),
            description: params.description.trim().to_string(),
            priority: params.priority,
            status: "pending".to_string(),
            submitted_at: now,
            updated_at: now,
        })
    }

    pub fn set_status(&mut self, status: &str) -> Result<(), AppError> {
        catalog::validate_member(MAINTENANCE_STATUSES, status, "status")?;
        self.status = status.to_string();
        self.updated_at = Utc::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> NewMaintenanceParams {
        NewMaintenanceParams {
            tenant_id: "t-1".into(),
            property_id: "p-1".into(),
            unit_id: "u-1".into(),
            title: "Leaking faucet".into(),
            description: "Kitchen faucet drips constantly".into(),
            priority: "medium".into(),
        }
    }

    #[test]
    fn test_new_request_starts_pending() {
        let req = MaintenanceRequest::new(params()).unwrap();
        assert_eq!(req.status, "pending");
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut p = params();
        p.title = "  ".into();
        assert!(MaintenanceRequest::new(p).is_err());
    }

    #[test]
    fn test_status_transitions_validated() {
        let mut req = MaintenanceRequest::new(params()).unwrap();
        req.set_status("in-progress").unwrap();
        assert_eq!(req.status, "in-progress");
        assert!(req.set_status("done").is_err());
        assert_eq!(req.status, "in-progress");
    }
}
