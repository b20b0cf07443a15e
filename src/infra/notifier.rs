use async_trait::async_trait;
use tracing::info;

use crate::domain::models::{payment::Payment, tenant::Tenant};
use crate::domain::ports::NotificationService;
use crate::domain::services::reporting::PaymentReport;
use crate::error::AppError;

/// Stand-in for the real delivery channels. Every "send" is a log
/// line; nothing leaves the process.
pub struct LogNotifier;

#[async_trait]
impl NotificationService for LogNotifier {
    async fn send_invitation(&self, tenant: &Tenant) -> Result<(), AppError> {
        info!(
            "Invitation email queued for {} <{}>: portal access for {}",
            tenant.full_name(),
            tenant.email,
            tenant.unit_label
        );
        Ok(())
    }

    async fn send_lease_agreement(&self, tenant: &Tenant, rendered_body: &str) -> Result<(), AppError> {
        info!(
            "Lease agreement ({} chars) queued for {} <{}>",
            rendered_body.len(),
            tenant.full_name(),
            tenant.email
        );
        Ok(())
    }

    async fn payment_recorded(&self, payment: &Payment) -> Result<(), AppError> {
        info!(
            "Payment recorded successfully! {} paid {:.2} via {} (receipt {})",
            payment.tenant_name, payment.amount, payment.method, payment.receipt_number
        );
        Ok(())
    }

    async fn report_exported(&self, report: &PaymentReport, format: &str) -> Result<(), AppError> {
        info!(
            "Exporting {} report from {} to {} ({} rows, total {:.2})",
            format.to_uppercase(),
            report.date_from,
            report.date_to,
            report.rows.len(),
            report.total_amount
        );
        Ok(())
    }
}
