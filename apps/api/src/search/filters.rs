//! Search criteria and the filter pass. Empty lists and unset options are
//! "no constraint"; nothing here can fail.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::JobPosting;

/// Reads an enum key as a string. Anything else (number, null, object) is
/// treated as an unrecognised key rather than an error.
fn lenient_key<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

/// Unrecognised values mean no age limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PostedWithin {
    Today,
    Week,
    Month,
    #[default]
    All,
}

impl PostedWithin {
    /// Maximum posting age in days, `None` for `All`.
    pub fn max_days(self) -> Option<i64> {
        match self {
            PostedWithin::Today => Some(1),
            PostedWithin::Week => Some(7),
            PostedWithin::Month => Some(30),
            PostedWithin::All => None,
        }
    }
}

impl<'de> Deserialize<'de> for PostedWithin {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match lenient_key(deserializer)?.as_deref() {
            Some("today") => PostedWithin::Today,
            Some("week") => PostedWithin::Week,
            Some("month") => PostedWithin::Month,
            _ => PostedWithin::All,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    #[default]
    Relevance,
    Salary,
    Date,
    Company,
    /// Any unrecognised key. Results keep index order.
    Unordered,
}

impl<'de> Deserialize<'de> for SortBy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match lenient_key(deserializer)?.as_deref() {
            Some("relevance") => SortBy::Relevance,
            Some("salary") => SortBy::Salary,
            Some("date") => SortBy::Date,
            Some("company") => SortBy::Company,
            _ => SortBy::Unordered,
        })
    }
}

/// Only an explicit `desc` keeps each key's natural direction; any other
/// present value reverses it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl<'de> Deserialize<'de> for SortOrder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match lenient_key(deserializer)?.as_deref() {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Entry,
    Junior,
    Mid,
    Senior,
    Executive,
}

impl ExperienceLevel {
    /// Entry ≤1 year, Junior ≤3, Mid ≤6, Senior ≤10, Executive above.
    pub fn from_years(years: u32) -> Self {
        match years {
            0..=1 => ExperienceLevel::Entry,
            2..=3 => ExperienceLevel::Junior,
            4..=6 => ExperienceLevel::Mid,
            7..=10 => ExperienceLevel::Senior,
            _ => ExperienceLevel::Executive,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExperienceLevel::Entry => "Entry",
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::Mid => "Mid",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Executive => "Executive",
        }
    }
}

/// Query criteria. Every field is optional in JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchFilters {
    pub query: String,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub locations: Vec<String>,
    pub skills: Vec<String>,
    pub companies: Vec<String>,
    pub job_types: Vec<String>,
    /// Level labels as produced by `ExperienceLevel::as_str`.
    pub experience_level: Vec<String>,
    pub visa_sponsorship: Option<bool>,
    pub remote_work: Option<bool>,
    pub uae_national: Option<bool>,
    pub industries: Vec<String>,
    pub posted_within: PostedWithin,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl SearchFilters {
    pub fn has_query(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

/// True when `job` satisfies every specified filter.
pub fn passes_filters(job: &JobPosting, filters: &SearchFilters, today: NaiveDate) -> bool {
    if let (Some(wanted), Some(offered)) = (nonzero(filters.salary_min), nonzero(job.salary_min)) {
        if offered < wanted {
            return false;
        }
    }
    if let (Some(cap), Some(offered)) = (nonzero(filters.salary_max), nonzero(job.salary_max)) {
        if offered > cap {
            return false;
        }
    }

    if !filters.locations.is_empty() {
        let location = job.location.to_lowercase();
        if !filters
            .locations
            .iter()
            .any(|loc| location.contains(&loc.to_lowercase()))
        {
            return false;
        }
    }

    if !filters.skills.is_empty() {
        let job_skills: Vec<String> = job.skills.iter().map(|s| s.to_lowercase()).collect();
        let any_skill = filters.skills.iter().any(|skill| {
            let skill = skill.to_lowercase();
            job_skills
                .iter()
                .any(|js| js.contains(skill.as_str()) || skill.contains(js.as_str()))
        });
        if !any_skill {
            return false;
        }
    }

    if !filters.companies.is_empty() {
        let company = job.company.to_lowercase();
        if !filters
            .companies
            .iter()
            .any(|c| company.contains(&c.to_lowercase()))
        {
            return false;
        }
    }

    if !filters.job_types.is_empty() && !filters.job_types.contains(&job.job_type) {
        return false;
    }

    if !filters.experience_level.is_empty() {
        let level = ExperienceLevel::from_years(job.experience_required).as_str();
        if !filters.experience_level.iter().any(|l| l == level) {
            return false;
        }
    }

    if filters.visa_sponsorship.is_some_and(|v| v != job.visa_sponsorship) {
        return false;
    }
    if filters.remote_work.is_some_and(|v| v != job.remote) {
        return false;
    }
    if filters.uae_national.is_some_and(|v| v != job.uae_national) {
        return false;
    }

    if !filters.industries.is_empty() && !filters.industries.contains(&job.industry) {
        return false;
    }

    if let Some(max_days) = filters.posted_within.max_days() {
        // Unknown posting dates are not excluded by age.
        if job.days_since_posted(today).is_some_and(|days| days > max_days) {
            return false;
        }
    }

    true
}

fn nonzero(value: Option<u32>) -> Option<u32> {
    value.filter(|v| *v > 0)
}
