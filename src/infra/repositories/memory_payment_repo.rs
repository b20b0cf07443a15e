use crate::domain::{models::payment::Payment, ports::PaymentRepository};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

pub struct MemoryPaymentRepo {
    rows: RwLock<Vec<Payment>>,
}

impl MemoryPaymentRepo {
    pub fn new() -> Self {
        Self { rows: RwLock::new(Vec::new()) }
    }
}

impl Default for MemoryPaymentRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentRepository for MemoryPaymentRepo {
    async fn create(&self, payment: &Payment) -> Result<Payment, AppError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|p| p.id == payment.id) {
            return Err(AppError::Conflict(format!("Payment already exists: {}", payment.id)));
        }
        rows.push(payment.clone());
        Ok(payment.clone())
    }

    async fn list(&self) -> Result<Vec<Payment>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.clone())
    }

    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<Payment>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|p| p.tenant_id == tenant_id).cloned().collect())
    }
}
