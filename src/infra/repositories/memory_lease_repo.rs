use crate::domain::{models::lease::LeaseTemplate, ports::LeaseTemplateRepository};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

pub struct MemoryLeaseTemplateRepo {
    rows: RwLock<Vec<LeaseTemplate>>,
}

impl MemoryLeaseTemplateRepo {
    pub fn new() -> Self {
        Self { rows: RwLock::new(Vec::new()) }
    }
}

impl Default for MemoryLeaseTemplateRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LeaseTemplateRepository for MemoryLeaseTemplateRepo {
    async fn create(&self, template: &LeaseTemplate) -> Result<LeaseTemplate, AppError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|t| t.id == template.id) {
            return Err(AppError::Conflict(format!("Template already exists: {}", template.id)));
        }
        rows.push(template.clone());
        Ok(template.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<LeaseTemplate>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|t| t.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<LeaseTemplate>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|t| t.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound(format!("Template not found: {}", id)));
        }
        Ok(())
    }
}
