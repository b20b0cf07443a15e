//! Scripted console session exercising the landlord console and the
//! tenant portal against the seeded in-memory portfolio.

use chrono::{Duration, Utc};
use colored::*;

use rentmate::config::Config;
use rentmate::domain::models::lease::LeaseContext;
use rentmate::domain::models::maintenance::{MaintenanceRequest, NewMaintenanceParams};
use rentmate::domain::services::leasing::render_agreement;
use rentmate::domain::services::payment_form::PaymentForm;
use rentmate::domain::services::property_form::PropertyForm;
use rentmate::domain::services::reporting::{
    self, ExportRequest, ReportFilter,
};
use rentmate::domain::services::tenant_form::TenantForm;
use rentmate::domain::models::unit::UnitInput;
use rentmate::infra::factory::bootstrap_state;

#[tokio::main]
async fn main() {
    println!("{}", "RentMate Walkthrough".bold().green());

    let config = Config::from_env();
    let state = bootstrap_state(&config).await;
    let today = Utc::now().date_naive();

    // ----- Landlord console: portfolio dashboard -----
    println!("\n{}", "== Landlord: dashboard ==".cyan().bold());
    let properties = state.property_repo.list().await.unwrap();
    let stats = reporting::portfolio_stats(&properties);
    println!(
        "Properties: {}  Units: {}  Occupancy: {:.0}%  Monthly income: ${:.2}",
        stats.total_properties, stats.total_units, stats.occupancy_rate, stats.monthly_income
    );

    // ----- Landlord console: add a property -----
    println!("\n{}", "== Landlord: add property ==".cyan().bold());
    let mut form = PropertyForm::new();
    form.set_address("555 Cedar Avenue");
    form.set_city("Boston");
    form.set_state("MA");
    form.set_zip_code("02115");
    form.set_property_type("Apartment Building").unwrap();

    // Submitting without units is rejected, exactly as in the form.
    match form.submit() {
        Err(e) => println!("{} {}", "rejected:".red(), e.user_message()),
        Ok(_) => unreachable!(),
    }

    form.add_unit(UnitInput {
        unit_number: "Unit 3".into(),
        apartment_type: "2 Bedroom (1 Bathroom)".into(),
        bedrooms: 2,
        bathrooms: 1.0,
        square_footage: "850".into(),
        monthly_rent: "1600".into(),
        security_deposit: "3200".into(),
        is_available: true,
    })
    .unwrap();
    form.add_unit(UnitInput {
        unit_number: "Unit 4".into(),
        apartment_type: "Studio".into(),
        bedrooms: 0,
        bathrooms: 1.0,
        square_footage: "420".into(),
        monthly_rent: "1100".into(),
        security_deposit: "2200".into(),
        is_available: true,
    })
    .unwrap();

    let summary = form.summary();
    println!(
        "Units: {}  Available: {}  Total monthly income: ${:.2}",
        summary.total_units, summary.available_units, summary.total_monthly_income
    );

    let cedar = form.submit().unwrap();
    let cedar = state.property_repo.create(&cedar).await.unwrap();
    println!("{} {}", "saved:".green(), cedar.full_address());

    // ----- Landlord console: assign a tenant -----
    println!("\n{}", "== Landlord: add tenant ==".cyan().bold());
    let mut tenant_form = TenantForm::new();
    tenant_form.first_name = "Emma".into();
    tenant_form.last_name = "Davis".into();
    tenant_form.email = "emma.davis@email.com".into();
    tenant_form.phone = "(555) 567-8901".into();

    tenant_form.select_property(&cedar);
    let choices = tenant_form.available_units(&cedar);
    println!("Available units: {}", choices.len());
    let chosen = choices[0].id.clone();
    tenant_form.select_unit(&cedar, &chosen).unwrap();
    println!(
        "Auto-filled: {} at ${}/mo ({})",
        tenant_form.unit_type(),
        tenant_form.rent(),
        if tenant_form.rent_is_derived() { "read-only" } else { "editable" }
    );

    tenant_form.deposit = "3200".into();
    tenant_form.lease_start = Some(today);
    tenant_form.lease_end = Some(today + Duration::days(365));

    let application = tenant_form.submit(&cedar).unwrap();
    let tenant = state.tenant_repo.create(&application.tenant).await.unwrap();

    // Mark the unit occupied now that the lease is signed.
    let mut cedar = cedar.clone();
    if let Some(u) = cedar.units.iter_mut().find(|u| u.id == tenant.unit_id) {
        u.is_available = false;
    }
    let cedar = state.property_repo.update(&cedar).await.unwrap();

    if application.send_invitation {
        state.notifier.send_invitation(&tenant).await.unwrap();
        println!("{} invitation for {}", "sent:".green(), tenant.full_name());
    }
    if application.send_lease_agreement {
        let templates = state.lease_template_repo.list().await.unwrap();
        let body = &templates[0].body;
        let rendered = render_agreement(
            body,
            &LeaseContext {
                tenant_name: tenant.full_name(),
                tenant_email: tenant.email.clone(),
                tenant_phone: tenant.phone.clone(),
                property_address: cedar.full_address(),
                unit_number: tenant.unit_label.clone(),
                monthly_rent: tenant.monthly_rent,
                security_deposit: tenant.security_deposit,
                lease_start: tenant.lease_start,
                lease_end: tenant.lease_end,
                landlord_name: state.config.landlord_name.clone(),
                landlord_email: state.config.landlord_email.clone(),
                landlord_phone: state.config.landlord_phone.clone(),
                current_date: today,
            },
        )
        .unwrap();
        state.notifier.send_lease_agreement(&tenant, &rendered).await.unwrap();
        println!("{} lease agreement ({} chars)", "sent:".green(), rendered.len());
    }

    // ----- Landlord console: record a payment -----
    println!("\n{}", "== Landlord: record payment ==".cyan().bold());
    let mut payment_form = PaymentForm::new(today);
    payment_form.select_tenant(&tenant, &cedar.address);
    println!(
        "Auto-filled: {} / ${}",
        payment_form.property_label(),
        payment_form.amount
    );
    payment_form.reference = "TXN-10021".into();
    let payment = payment_form.submit().unwrap();
    let payment = state.payment_repo.create(&payment).await.unwrap();
    state.notifier.payment_recorded(&payment).await.unwrap();

    // ----- Landlord console: export report -----
    println!("\n{}", "== Landlord: export report ==".cyan().bold());
    let payments = state.payment_repo.list().await.unwrap();
    let request = ExportRequest {
        date_from: today - Duration::days(60),
        date_to: today,
        format: "csv".into(),
        filter: ReportFilter::All,
    };
    let report = reporting::build_report(&payments, &request).unwrap();
    state.notifier.report_exported(&report, &request.format).await.unwrap();
    println!("{}", report.to_csv());

    // ----- Tenant portal: maintenance request -----
    println!("\n{}", "== Tenant portal: maintenance ==".cyan().bold());
    let request = MaintenanceRequest::new(NewMaintenanceParams {
        tenant_id: tenant.id.clone(),
        property_id: cedar.id.clone(),
        unit_id: tenant.unit_id.clone(),
        title: "Leaking faucet".into(),
        description: "Kitchen faucet drips constantly".into(),
        priority: "medium".into(),
    })
    .unwrap();
    let request = state.maintenance_repo.create(&request).await.unwrap();
    println!("submitted: {} [{}]", request.title, request.status);

    let request = state
        .maintenance_repo
        .update_status(&request.id, "in-progress")
        .await
        .unwrap();
    println!("landlord update: {} [{}]", request.title, request.status);

    // ----- Tenant portal: payment history -----
    println!("\n{}", "== Tenant portal: payment history ==".cyan().bold());
    for p in state.payment_repo.list_by_tenant(&tenant.id).await.unwrap() {
        println!(
            "{}  ${:.2}  {}  {}",
            p.payment_date, p.amount, p.method, p.status
        );
    }

    println!("\n{}", "Walkthrough complete.".bold().green());
}
