use crate::domain::{models::maintenance::MaintenanceRequest, ports::MaintenanceRepository};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

pub struct MemoryMaintenanceRepo {
    rows: RwLock<Vec<MaintenanceRequest>>,
}

impl MemoryMaintenanceRepo {
    pub fn new() -> Self {
        Self { rows: RwLock::new(Vec::new()) }
    }
}

impl Default for MemoryMaintenanceRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MaintenanceRepository for MemoryMaintenanceRepo {
    async fn create(&self, request: &MaintenanceRequest) -> Result<MaintenanceRequest, AppError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|r| r.id == request.id) {
            return Err(AppError::Conflict(format!("Request already exists: {}", request.id)));
        }
        rows.push(request.clone());
        Ok(request.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MaintenanceRequest>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|r| r.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<MaintenanceRequest>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.clone())
    }

    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<MaintenanceRequest>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|r| r.tenant_id == tenant_id).cloned().collect())
    }

    async fn update_status(&self, id: &str, status: &str) -> Result<MaintenanceRequest, AppError> {
        let mut rows = self.rows.write().await;
        let request = rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Request not found: {}", id)))?;
        request.set_status(status)?;
        Ok(request.clone())
    }
}
