//! UAE job-market reference tables used by the recommendation scorer.
//! Company lists are matched by exact name.

pub const POPULAR_COMPANIES: &[&str] = &[
    "Emirates NBD",
    "ADCB",
    "Careem",
    "Talabat",
    "Noon",
    "Mashreq",
    "FAB",
    "Etisalat",
    "Du",
    "Aramex",
];

pub const VISA_FRIENDLY_COMPANIES: &[&str] =
    &["Careem", "Noon", "Talabat", "Mashreq Bank", "Emirates NBD"];

pub const REMOTE_WORK_COMPANIES: &[&str] =
    &["Careem", "Talabat", "Remote Year", "GitLab", "Automattic"];

/// Emirate → areas that count as the same emirate for location matching.
pub const EMIRATE_AREAS: &[(&str, &[&str])] = &[
    (
        "dubai",
        &["dubai", "deira", "bur dubai", "jumeirah", "marina", "downtown"],
    ),
    ("abu dhabi", &["abu dhabi", "al ain", "western region"]),
    ("sharjah", &["sharjah"]),
    ("ajman", &["ajman"]),
];

pub fn is_popular(company: &str) -> bool {
    POPULAR_COMPANIES.contains(&company)
}

pub fn is_visa_friendly(company: &str) -> bool {
    VISA_FRIENDLY_COMPANIES.contains(&company)
}

pub fn is_remote_friendly(company: &str) -> bool {
    REMOTE_WORK_COMPANIES.contains(&company)
}
