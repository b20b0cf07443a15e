use std::env;

#[derive(Clone)]
pub struct Config {
    pub landlord_name: String,
    pub landlord_email: String,
    pub landlord_phone: String,
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            landlord_name: env::var("LANDLORD_NAME").unwrap_or_else(|_| "RentMate Property Management".to_string()),
            landlord_email: env::var("LANDLORD_EMAIL").unwrap_or_else(|_| "landlord@rentmate.local".to_string()),
            landlord_phone: env::var("LANDLORD_PHONE").unwrap_or_else(|_| "(555) 000-0000".to_string()),
            seed_sample_data: env::var("SEED_SAMPLE_DATA").map(|v| v != "0" && v != "false").unwrap_or(true),
        }
    }
}
