use std::sync::Arc;
use crate::domain::ports::{
    LeaseTemplateRepository, MaintenanceRepository, NotificationService,
    PaymentRepository, PropertyRepository, TenantRepository,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub property_repo: Arc<dyn PropertyRepository>,
    pub tenant_repo: Arc<dyn TenantRepository>,
    pub payment_repo: Arc<dyn PaymentRepository>,
    pub maintenance_repo: Arc<dyn MaintenanceRepository>,
    pub lease_template_repo: Arc<dyn LeaseTemplateRepository>,
    pub notifier: Arc<dyn NotificationService>,
}
