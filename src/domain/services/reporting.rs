use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::catalog::{self, EXPORT_FORMATS};
use crate::domain::models::payment::Payment;
use crate::domain::models::property::Property;
use crate::error::AppError;

/// Dashboard card values for the landlord console. Pure functions of the
/// current collections; recomputed on every read.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PortfolioStats {
    pub total_properties: usize,
    pub total_units: usize,
    pub occupied_units: usize,
    /// Percent, 0 when the portfolio has no units.
    pub occupancy_rate: f64,
    /// Sum of rents of occupied units.
    pub monthly_income: f64,
    /// Sum of rents of all units.
    pub potential_income: f64,
}

pub fn portfolio_stats(properties: &[Property]) -> PortfolioStats {
    let total_units: usize = properties.iter().map(|p| p.unit_count()).sum();
    let occupied_units: usize = properties.iter().map(|p| p.occupied_unit_count()).sum();
    let monthly_income: f64 = properties
        .iter()
        .flat_map(|p| p.units.iter())
        .filter(|u| !u.is_available)
        .map(|u| u.monthly_rent)
        .sum();
    let potential_income: f64 = properties.iter().map(|p| p.total_monthly_income()).sum();
    let occupancy_rate = if total_units == 0 {
        0.0
    } else {
        occupied_units as f64 / total_units as f64 * 100.0
    };

    PortfolioStats {
        total_properties: properties.len(),
        total_units,
        occupied_units,
        occupancy_rate,
        monthly_income,
        potential_income,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PaymentStats {
    pub total_collected: f64,
    pub pending_total: f64,
    pub pending_count: usize,
    pub overdue_total: f64,
    pub overdue_tenants: usize,
    pub collected_this_month: f64,
}

/// "This month" is relative to the injected `today`; the clock is never
/// read inside the computation.
pub fn payment_stats(payments: &[Payment], today: NaiveDate) -> PaymentStats {
    let mut stats = PaymentStats {
        total_collected: 0.0,
        pending_total: 0.0,
        pending_count: 0,
        overdue_total: 0.0,
        overdue_tenants: 0,
        collected_this_month: 0.0,
    };
    let mut overdue_seen: Vec<&str> = Vec::new();

    for payment in payments {
        match payment.status.as_str() {
            "paid" => {
                stats.total_collected += payment.amount;
                if payment.payment_date.year() == today.year()
                    && payment.payment_date.month() == today.month()
                {
                    stats.collected_this_month += payment.amount;
                }
            }
            "pending" => {
                stats.pending_total += payment.amount;
                stats.pending_count += 1;
            }
            "overdue" => {
                stats.overdue_total += payment.amount;
                if !overdue_seen.contains(&payment.tenant_id.as_str()) {
                    overdue_seen.push(&payment.tenant_id);
                }
            }
            _ => {}
        }
    }
    stats.overdue_tenants = overdue_seen.len();
    stats
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReportFilter {
    All,
    Status(String),
    Tenant(String),
    Property(String),
}

pub struct ExportRequest {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub format: String,
    pub filter: ReportFilter,
}

impl ExportRequest {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.date_from > self.date_to {
            return Err(AppError::Validation("Start date must be before end date".into()));
        }
        catalog::validate_member(EXPORT_FORMATS, &self.format, "export format")?;
        if let ReportFilter::Status(status) = &self.filter {
            catalog::validate_member(catalog::PAYMENT_STATUSES, status, "payment status")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub tenant: String,
    pub property: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub status: String,
    pub method: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentReport {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
    pub rows: Vec<ReportRow>,
    pub total_amount: f64,
}

pub fn filter_payments<'a>(payments: &'a [Payment], request: &ExportRequest) -> Vec<&'a Payment> {
    payments
        .iter()
        .filter(|p| p.payment_date >= request.date_from && p.payment_date <= request.date_to)
        .filter(|p| match &request.filter {
            ReportFilter::All => true,
            ReportFilter::Status(status) => p.status == *status,
            ReportFilter::Tenant(tenant_id) => p.tenant_id == *tenant_id,
            ReportFilter::Property(label) => p.property_label.contains(label.as_str()),
        })
        .collect()
}

pub fn build_report(payments: &[Payment], request: &ExportRequest) -> Result<PaymentReport, AppError> {
    request.validate()?;
    let rows: Vec<ReportRow> = filter_payments(payments, request)
        .into_iter()
        .map(|p| ReportRow {
            tenant: p.tenant_name.clone(),
            property: p.property_label.clone(),
            amount: p.amount,
            date: p.payment_date,
            status: p.status.clone(),
            method: p.method.clone(),
        })
        .collect();
    let total_amount = rows.iter().map(|r| r.amount).sum();

    Ok(PaymentReport {
        date_from: request.date_from,
        date_to: request.date_to,
        rows,
        total_amount,
    })
}

impl PaymentReport {
    /// Every export format shares this body; PDF and Excel differ only
    /// in the label the notifier reports.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("tenant,property,amount,date,status,method\n");
        for row in &self.rows {
            out.push_str(&format!(
                "{},{},{:.2},{},{},{}\n",
                csv_field(&row.tenant),
                csv_field(&row.property),
                row.amount,
                row.date,
                row.status,
                row.method
            ));
        }
        out.push_str(&format!("total,,{:.2},,,\n", self.total_amount));
        out
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
