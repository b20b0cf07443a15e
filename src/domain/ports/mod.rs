use crate::domain::models::{
    lease::LeaseTemplate, maintenance::MaintenanceRequest, payment::Payment,
    property::Property, tenant::Tenant,
};
use crate::domain::services::reporting::PaymentReport;
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn create(&self, property: &Property) -> Result<Property, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Property>, AppError>;
    async fn list(&self) -> Result<Vec<Property>, AppError>;
    async fn update(&self, property: &Property) -> Result<Property, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait TenantRepository: Send + Sync {
    async fn create(&self, tenant: &Tenant) -> Result<Tenant, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Tenant>, AppError>;
    async fn list(&self) -> Result<Vec<Tenant>, AppError>;
    async fn update(&self, tenant: &Tenant) -> Result<Tenant, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn create(&self, payment: &Payment) -> Result<Payment, AppError>;
    async fn list(&self) -> Result<Vec<Payment>, AppError>;
    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<Payment>, AppError>;
}

#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    async fn create(&self, request: &MaintenanceRequest) -> Result<MaintenanceRequest, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<MaintenanceRequest>, AppError>;
    async fn list(&self) -> Result<Vec<MaintenanceRequest>, AppError>;
    async fn list_by_tenant(&self, tenant_id: &str) -> Result<Vec<MaintenanceRequest>, AppError>;
    async fn update_status(&self, id: &str, status: &str) -> Result<MaintenanceRequest, AppError>;
}

#[async_trait]
pub trait LeaseTemplateRepository: Send + Sync {
    async fn create(&self, template: &LeaseTemplate) -> Result<LeaseTemplate, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<LeaseTemplate>, AppError>;
    async fn list(&self) -> Result<Vec<LeaseTemplate>, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

/// Outbound side effects of the console. Nothing is actually delivered
/// anywhere; the default implementation writes log lines.
#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn send_invitation(&self, tenant: &Tenant) -> Result<(), AppError>;
    async fn send_lease_agreement(&self, tenant: &Tenant, rendered_body: &str) -> Result<(), AppError>;
    async fn payment_recorded(&self, payment: &Payment) -> Result<(), AppError>;
    async fn report_exported(&self, report: &PaymentReport, format: &str) -> Result<(), AppError>;
}
