use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// A job opening as supplied by the caller. Engines only ever read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Free-text salary, e.g. "AED 18,000 - 25,000".
    pub salary: Option<String>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub visa_sponsorship: bool,
    pub uae_national: bool,
    pub remote: bool,
    /// ISO-like date, `2024-01-15` or a full RFC 3339 timestamp.
    pub posted_date: String,
    pub job_type: String,
    pub industry: String,
    pub experience_required: u32,
    pub skills: Vec<String>,
}

impl JobPosting {
    pub fn posted_on(&self) -> Option<NaiveDate> {
        parse_posted_date(&self.posted_date)
    }

    /// Whole days between the posting date and `today`, or `None` if the
    /// date does not parse.
    pub fn days_since_posted(&self, today: NaiveDate) -> Option<i64> {
        self.posted_on().map(|d| (today - d).num_days().abs())
    }

    /// `salary_max`, falling back to `salary_min`, then 0.
    pub fn headline_salary(&self) -> u32 {
        self.salary_max
            .filter(|v| *v > 0)
            .or(self.salary_min)
            .unwrap_or(0)
    }

    /// Salary text shown to the user: the free-text field if present,
    /// otherwise the numeric bounds.
    pub fn salary_display(&self) -> String {
        match (&self.salary, self.salary_min, self.salary_max) {
            (Some(text), _, _) if !text.trim().is_empty() => text.clone(),
            (_, Some(min), Some(max)) => format!("AED {min} - {max}"),
            (_, Some(min), None) => format!("AED {min}+"),
            (_, None, Some(max)) => format!("Up to AED {max}"),
            _ => "Salary not disclosed".to_string(),
        }
    }
}

pub fn parse_posted_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}
