use chrono::NaiveDate;

use crate::models::JobPosting;
use crate::search::filters::SearchFilters;
use crate::search::index::tokenize;
use crate::search::reference::is_popular_company;

const TITLE_POINTS: f64 = 20.0;
const COMPANY_POINTS: f64 = 15.0;
const DESCRIPTION_POINTS: f64 = 10.0;
const SKILL_POINTS: f64 = 25.0;
const SKILL_FILTER_BONUS: f64 = 30.0;
const POPULAR_COMPANY_BONUS: f64 = 15.0;
const MAX_RELEVANCE: f64 = 100.0;

/// Relevance in [0, 100] plus the posting fields a query word hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Relevance {
    pub score: f64,
    pub matched_fields: Vec<String>,
}

pub fn relevance(job: &JobPosting, filters: &SearchFilters, today: NaiveDate) -> Relevance {
    let mut score = 0.0;
    let mut matched_fields: Vec<String> = Vec::new();
    let mut mark = |field: &str| {
        if !matched_fields.iter().any(|f| f == field) {
            matched_fields.push(field.to_string());
        }
    };

    if filters.has_query() {
        let title = job.title.to_lowercase();
        let company = job.company.to_lowercase();
        let description = job.description.to_lowercase();
        let skills: Vec<String> = job.skills.iter().map(|s| s.to_lowercase()).collect();

        for word in tokenize(&filters.query) {
            let word = word.as_str();
            if title.contains(word) {
                score += TITLE_POINTS;
                mark("title");
            }
            if company.contains(word) {
                score += COMPANY_POINTS;
                mark("company");
            }
            if description.contains(word) {
                score += DESCRIPTION_POINTS;
                mark("description");
            }
            if skills.iter().any(|s| s.contains(word)) {
                score += SKILL_POINTS;
                mark("skills");
            }
        }
    }

    if !filters.skills.is_empty() {
        let skills: Vec<String> = job.skills.iter().map(|s| s.to_lowercase()).collect();
        let overlapping = filters
            .skills
            .iter()
            .filter(|wanted| {
                let wanted = wanted.to_lowercase();
                skills.iter().any(|s| s.contains(wanted.as_str()))
            })
            .count();
        score += overlapping as f64 / filters.skills.len() as f64 * SKILL_FILTER_BONUS;
    }

    match job.days_since_posted(today) {
        Some(days) if days <= 7 => score += 10.0,
        Some(days) if days <= 30 => score += 5.0,
        _ => {}
    }

    if is_popular_company(&job.company) {
        score += POPULAR_COMPANY_BONUS;
    }

    Relevance {
        score: score.min(MAX_RELEVANCE),
        matched_fields,
    }
}
