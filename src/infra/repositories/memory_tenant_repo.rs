use crate::domain::{models::tenant::Tenant, ports::TenantRepository};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

pub struct MemoryTenantRepo {
    rows: RwLock<Vec<Tenant>>,
}

impl MemoryTenantRepo {
    pub fn new() -> Self {
        Self { rows: RwLock::new(Vec::new()) }
    }
}

impl Default for MemoryTenantRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TenantRepository for MemoryTenantRepo {
    async fn create(&self, tenant: &Tenant) -> Result<Tenant, AppError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|t| t.id == tenant.id) {
            return Err(AppError::Conflict(format!("Tenant already exists: {}", tenant.id)));
        }
        rows.push(tenant.clone());
        Ok(tenant.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Tenant>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Tenant>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.clone())
    }

    async fn update(&self, tenant: &Tenant) -> Result<Tenant, AppError> {
        let mut rows = self.rows.write().await;
        let slot = rows
            .iter_mut()
            .find(|t| t.id == tenant.id)
            .ok_or_else(|| AppError::NotFound(format!("Tenant not found: {}", tenant.id)))?;
        *slot = tenant.clone();
        Ok(tenant.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|t| t.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound(format!("Tenant not found: {}", id)));
        }
        Ok(())
    }
}
