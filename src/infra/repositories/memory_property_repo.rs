use crate::domain::{models::property::Property, ports::PropertyRepository};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

pub struct MemoryPropertyRepo {
    rows: RwLock<Vec<Property>>,
}

impl MemoryPropertyRepo {
    pub fn new() -> Self {
        Self { rows: RwLock::new(Vec::new()) }
    }
}

impl Default for MemoryPropertyRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PropertyRepository for MemoryPropertyRepo {
    async fn create(&self, property: &Property) -> Result<Property, AppError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|p| p.id == property.id) {
            return Err(AppError::Conflict(format!("Property already exists: {}", property.id)));
        }
        rows.push(property.clone());
        Ok(property.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Property>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Property>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.clone())
    }

    async fn update(&self, property: &Property) -> Result<Property, AppError> {
        let mut rows = self.rows.write().await;
        let slot = rows
            .iter_mut()
            .find(|p| p.id == property.id)
            .ok_or_else(|| AppError::NotFound(format!("Property not found: {}", property.id)))?;
        *slot = property.clone();
        Ok(property.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(AppError::NotFound(format!("Property not found: {}", id)));
        }
        Ok(())
    }
}
