use serde::{Deserialize, Serialize};

/// Residency/visa situation of the searcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisaStatus {
    #[default]
    Sponsored,
    UaeNational,
    VisitVisa,
    Dependent,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerLevel {
    Entry,
    #[default]
    Mid,
    Senior,
    Executive,
}

/// The searcher's attributes. Missing fields in JSON take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub skills: Vec<String>,
    pub experience: u32,
    pub current_salary: Option<u32>,
    pub desired_salary: Option<u32>,
    pub preferred_locations: Vec<String>,
    pub job_types: Vec<String>,
    pub visa_status: VisaStatus,
    pub industries: Vec<String>,
    pub remote_preference: bool,
    pub career_level: CareerLevel,
    pub education: Vec<String>,
    pub languages: Vec<String>,
    pub certifications: Vec<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            skills: vec![],
            experience: 0,
            current_salary: None,
            desired_salary: None,
            preferred_locations: vec!["Dubai".to_string()],
            job_types: vec!["Full-time".to_string()],
            visa_status: VisaStatus::Sponsored,
            industries: vec![],
            remote_preference: false,
            career_level: CareerLevel::Mid,
            education: vec![],
            languages: vec!["English".to_string()],
            certifications: vec![],
        }
    }
}
