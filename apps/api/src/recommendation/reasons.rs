//! Human-readable rationale and urgency tagging for a scored posting.

use serde::{Deserialize, Serialize};

use crate::models::{JobPosting, UserProfile, VisaStatus};
use crate::recommendation::engine::SubScores;
use crate::recommendation::market;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

/// Builds the ordered reason list. Order is fixed: skills, salary, location,
/// experience, visa, company, remote. Reasons below threshold are omitted.
pub fn match_reasons(profile: &UserProfile, job: &JobPosting, scores: &SubScores) -> Vec<String> {
    let mut reasons = Vec::new();

    if scores.skills > 0.8 {
        reasons.push("Strong skills match - you have most required skills".to_string());
    } else if scores.skills > 0.6 {
        reasons.push("Good skills alignment with growth potential".to_string());
    }

    if scores.salary > 0.8 {
        reasons.push("Salary meets your expectations".to_string());
    } else if scores.salary > 0.6 {
        reasons.push("Competitive salary for UAE market".to_string());
    }

    if scores.location > 0.8 {
        reasons.push("Perfect location match".to_string());
    }

    if scores.experience {
        reasons.push("Your experience level fits perfectly".to_string());
    } else {
        reasons.push("Great opportunity to level up your career".to_string());
    }

    if job.visa_sponsorship && profile.visa_status != VisaStatus::UaeNational {
        reasons.push("Visa sponsorship available".to_string());
    }

    if market::is_popular(&job.company) {
        reasons.push("Top-tier company in UAE market".to_string());
    }

    if job.remote && profile.remote_preference {
        reasons.push("Remote work available".to_string());
    }

    reasons
}

/// Urgency from score and posting age. An unknown age falls through to medium.
pub fn urgency(match_score: u32, days_posted: Option<i64>) -> Urgency {
    let Some(days) = days_posted else {
        return Urgency::Medium;
    };

    if match_score > 85 && days < 7 {
        Urgency::High
    } else if match_score > 75 && days < 14 {
        Urgency::Medium
    } else if days > 30 {
        Urgency::Low
    } else {
        Urgency::Medium
    }
}
