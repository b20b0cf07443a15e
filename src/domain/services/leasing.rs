use chrono::{Datelike, NaiveDate};
use tera::{Context, Tera};

use crate::domain::models::lease::LeaseContext;
use crate::error::AppError;

/// Whole months between the lease dates, used for the `LEASE_TERM`
/// merge field.
pub fn lease_term_months(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut months =
        (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if end.day() < start.day() {
        months -= 1;
    }
    months.max(0)
}

/// Fills a template body's merge fields from the typed context. The
/// body is plain text with `{{ FIELD }}` placeholders.
pub fn render_agreement(body: &str, ctx: &LeaseContext) -> Result<String, AppError> {
    let mut context = Context::new();
    context.insert("TENANT_NAME", &ctx.tenant_name);
    context.insert("TENANT_EMAIL", &ctx.tenant_email);
    context.insert("TENANT_PHONE", &ctx.tenant_phone);
    context.insert("PROPERTY_ADDRESS", &ctx.property_address);
    context.insert("UNIT_NUMBER", &ctx.unit_number);
    context.insert("MONTHLY_RENT", &format!("{:.2}", ctx.monthly_rent));
    context.insert("SECURITY_DEPOSIT", &format!("{:.2}", ctx.security_deposit));
    context.insert("LEASE_START_DATE", &ctx.lease_start.to_string());
    context.insert("LEASE_END_DATE", &ctx.lease_end.to_string());
    context.insert(
        "LEASE_TERM",
        &format!("{} months", lease_term_months(ctx.lease_start, ctx.lease_end)),
    );
    context.insert("LANDLORD_NAME", &ctx.landlord_name);
    context.insert("LANDLORD_EMAIL", &ctx.landlord_email);
    context.insert("LANDLORD_PHONE", &ctx.landlord_phone);
    context.insert("CURRENT_DATE", &ctx.current_date.to_string());

    let rendered = Tera::one_off(body, &context, false)?;
    Ok(rendered)
}
