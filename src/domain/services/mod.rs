pub mod defaults;
pub mod leasing;
pub mod payment_form;
pub mod property_form;
pub mod reporting;
pub mod tenant_form;
