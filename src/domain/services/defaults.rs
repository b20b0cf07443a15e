pub fn get_default_template(name: &str) -> String {
    match name {
        "standard_residential" => include_str!("../../../templates/defaults/standard_residential.txt").to_string(),
        "month_to_month" => include_str!("../../../templates/defaults/month_to_month.txt").to_string(),
        "commercial" => include_str!("../../../templates/defaults/commercial.txt").to_string(),
        "student_housing" => include_str!("../../../templates/defaults/student_housing.txt").to_string(),
        _ => format!("Default lease template for {} not found.", name),
    }
}

pub const DEFAULT_TEMPLATES: &[(&str, &str, &str)] = &[
    ("standard_residential", "Standard Residential Lease", "Standard lease agreement for residential properties"),
    ("month_to_month", "Month-to-Month Agreement", "Flexible month-to-month rental agreement"),
    ("commercial", "Commercial Lease", "Lease agreement for commercial spaces"),
    ("student_housing", "Student Housing Lease", "Lease agreement tailored to student housing"),
];
