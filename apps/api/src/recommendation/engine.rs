#![allow(dead_code)]
//! Recommendation Engine: weighted multi-factor match of postings against one profile.
//!
//! Algorithm per posting:
//! 1. Six sub-scores in [0, 1] (experience is a bool): skills, salary,
//!    location, experience, visa, company.
//! 2. match_score = round(Σ sub-score × weight) with weights expressed on the
//!    0–100 scale (defaults sum to 100).
//! 3. Reasons, insights, urgency derived from the sub-scores.
//!
//! Sorting is stable, so equal scores keep input order.

use std::sync::OnceLock;

use chrono::{NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::models::{JobPosting, UserProfile, VisaStatus};
use crate::recommendation::insights::{
    templated_insights, AiInsights, InsightContext, InsightProvider,
};
use crate::recommendation::market::{self, EMIRATE_AREAS};
use crate::recommendation::reasons::{match_reasons, urgency, Urgency};

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 20;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub salary: f64,
    pub location: f64,
    /// Points when the experience requirement is met.
    pub experience_fit: f64,
    /// Points when it is not.
    pub experience_stretch: f64,
    pub visa: f64,
    pub company: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 35.0,
            salary: 20.0,
            location: 15.0,
            experience_fit: 15.0,
            experience_stretch: 5.0,
            visa: 10.0,
            company: 5.0,
        }
    }
}

/// Per-factor scores for one posting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubScores {
    pub skills: f64,
    pub salary: f64,
    pub location: f64,
    pub experience: bool,
    pub visa: f64,
    pub company: f64,
}

impl SubScores {
    pub fn composite(&self, weights: &MatchWeights) -> u32 {
        let experience = if self.experience {
            weights.experience_fit
        } else {
            weights.experience_stretch
        };
        let total = self.skills * weights.skills
            + self.salary * weights.salary
            + self.location * weights.location
            + experience
            + self.visa * weights.visa
            + self.company * weights.company;
        total.round().max(0.0) as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecommendation {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub match_score: u32,
    pub match_reasons: Vec<String>,
    /// salary sub-score > 0.7
    pub salary_match: bool,
    /// location sub-score > 0.8
    pub location_match: bool,
    /// skills sub-score as a percentage
    pub skills_match: u32,
    pub experience_match: bool,
    pub visa_sponsorship: bool,
    pub uae_national: bool,
    pub remote: bool,
    pub posted_date: String,
    pub urgency: Urgency,
    pub ai_insights: AiInsights,
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

/// Stateless after construction: every method takes `&self` and nothing is
/// cached between calls.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    profile: UserProfile,
    weights: MatchWeights,
    limit: usize,
    today: NaiveDate,
}

impl RecommendationEngine {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile,
            weights: MatchWeights::default(),
            limit: DEFAULT_RECOMMENDATION_LIMIT,
            today: Utc::now().date_naive(),
        }
    }

    /// Pins "today" for posting-age calculations.
    pub fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_weights(mut self, weights: MatchWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Scores every posting and returns the top `limit` by match score.
    pub fn generate_recommendations(&self, postings: &[JobPosting]) -> Vec<JobRecommendation> {
        self.rank(postings).into_iter().map(|(_, rec)| rec).collect()
    }

    /// Same ranking as `generate_recommendations`, with insights for the
    /// returned postings produced by `provider`.
    pub async fn generate_with_provider(
        &self,
        postings: &[JobPosting],
        provider: &dyn InsightProvider,
    ) -> Result<Vec<JobRecommendation>, AppError> {
        let ranked = self.rank(postings);
        let mut recommendations = Vec::with_capacity(ranked.len());

        for (job, mut rec) in ranked {
            let context = InsightContext::from_recommendation(&rec);
            rec.ai_insights = provider.generate(&self.profile, job, &context).await?;
            recommendations.push(rec);
        }

        Ok(recommendations)
    }

    pub fn score_posting(&self, job: &JobPosting) -> JobRecommendation {
        let scores = self.sub_scores(job);
        let match_score = scores.composite(&self.weights);

        let context = InsightContext {
            salary_match: scores.salary > 0.7,
            experience_match: scores.experience,
        };

        JobRecommendation {
            id: job.id.clone(),
            title: job.title.clone(),
            company: job.company.clone(),
            location: job.location.clone(),
            salary: job.salary_display(),
            description: job.description.clone(),
            requirements: job.requirements.clone(),
            benefits: job.benefits.clone(),
            match_score,
            match_reasons: match_reasons(&self.profile, job, &scores),
            salary_match: context.salary_match,
            location_match: scores.location > 0.8,
            skills_match: (scores.skills * 100.0).round() as u32,
            experience_match: scores.experience,
            visa_sponsorship: job.visa_sponsorship,
            uae_national: job.uae_national,
            remote: job.remote,
            posted_date: job.posted_date.clone(),
            urgency: urgency(match_score, job.days_since_posted(self.today)),
            ai_insights: templated_insights(&self.profile, job, &context),
        }
    }

    pub fn sub_scores(&self, job: &JobPosting) -> SubScores {
        SubScores {
            skills: skills_match(&self.profile.skills, &job.skills),
            salary: salary_match(self.profile.desired_salary, job),
            location: location_match(&self.profile, &job.location),
            experience: experience_match(job.experience_required, self.profile.experience),
            visa: visa_match(self.profile.visa_status, job),
            company: company_match(&job.company),
        }
    }

    fn rank<'a>(&self, postings: &'a [JobPosting]) -> Vec<(&'a JobPosting, JobRecommendation)> {
        let mut scored: Vec<_> = postings
            .iter()
            .map(|job| (job, self.score_posting(job)))
            .collect();

        scored.sort_by(|a, b| b.1.match_score.cmp(&a.1.match_score));
        scored.truncate(self.limit);

        debug!(
            "Ranked {} postings, returning {} (top score {:?})",
            postings.len(),
            scored.len(),
            scored.first().map(|(_, rec)| rec.match_score)
        );

        scored
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sub-scores
// ────────────────────────────────────────────────────────────────────────────

/// Fraction of the posting's skills the user has. Exact (case-insensitive)
/// matches count 1.0, substring matches in either direction 0.6. A posting
/// with no skills listed scores a neutral 0.5.
pub fn skills_match(user_skills: &[String], job_skills: &[String]) -> f64 {
    if job_skills.is_empty() {
        return 0.5;
    }

    let user: Vec<String> = user_skills.iter().map(|s| s.to_lowercase()).collect();

    let mut exact = 0_usize;
    let mut partial = 0_usize;

    for job_skill in job_skills {
        let job_skill = job_skill.to_lowercase();
        if user.contains(&job_skill) {
            exact += 1;
        } else if user
            .iter()
            .any(|u| u.contains(job_skill.as_str()) || job_skill.contains(u.as_str()))
        {
            partial += 1;
        }
    }

    let total = job_skills.len() as f64;
    (exact as f64 / total + partial as f64 / total * 0.6).min(1.0)
}

fn salary_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\d+,?\d*").expect("salary pattern is valid"))
}

/// Posting salary bounds. Numeric fields win; otherwise the first two numbers
/// in the free-text salary are used. Best effort: locale formats other than
/// `18,000` may misparse.
pub fn salary_bounds(job: &JobPosting) -> Option<(f64, Option<f64>)> {
    let mut min = job.salary_min.filter(|v| *v > 0).map(f64::from);
    let mut max = job.salary_max.filter(|v| *v > 0).map(f64::from);

    if min.is_none() {
        if let Some(text) = job.salary.as_deref() {
            let numbers: Vec<f64> = salary_pattern()
                .find_iter(text)
                .filter_map(|m| m.as_str().replace(',', "").parse::<f64>().ok())
                .collect();
            if numbers.len() >= 2 {
                min = Some(numbers[0]);
                max = Some(numbers[1]);
            }
        }
    }

    let min = min.filter(|v| *v > 0.0)?;
    Some((min, max.filter(|v| *v > 0.0)))
}

pub fn salary_match(desired_salary: Option<u32>, job: &JobPosting) -> f64 {
    let Some(desired) = desired_salary.filter(|d| *d > 0).map(f64::from) else {
        return 0.7;
    };
    let Some((min, max)) = salary_bounds(job) else {
        return 0.5;
    };

    let midpoint = match max {
        Some(max) => (min + max) / 2.0,
        None => min,
    };

    if midpoint >= desired * 0.9 {
        1.0
    } else if midpoint >= desired * 0.8 {
        0.8
    } else if midpoint >= desired * 0.7 {
        0.6
    } else {
        0.3
    }
}

pub fn location_match(profile: &UserProfile, job_location: &str) -> f64 {
    let preferred: Vec<String> = profile
        .preferred_locations
        .iter()
        .map(|l| l.to_lowercase())
        .collect();
    let job_location = job_location.to_lowercase();

    if preferred.iter().any(|loc| job_location.contains(loc.as_str())) {
        return 1.0;
    }

    for (emirate, areas) in EMIRATE_AREAS {
        if preferred.iter().any(|loc| loc == emirate)
            && areas.iter().any(|area| job_location.contains(area))
        {
            return 0.9;
        }
    }

    if profile.remote_preference && job_location.contains("remote") {
        return 1.0;
    }

    0.4
}

/// Met when the requirement is zero, at most the user's experience, or a
/// stretch of no more than two years.
pub fn experience_match(required: u32, user_experience: u32) -> bool {
    required == 0 || required.saturating_sub(user_experience) <= 2
}

pub fn visa_match(visa_status: VisaStatus, job: &JobPosting) -> f64 {
    match visa_status {
        VisaStatus::UaeNational => 1.0,
        VisaStatus::Sponsored => 0.9,
        VisaStatus::VisitVisa | VisaStatus::Dependent => {
            if job.visa_sponsorship {
                1.0
            } else if market::is_visa_friendly(&job.company) {
                0.8
            } else {
                0.3
            }
        }
    }
}

pub fn company_match(company: &str) -> f64 {
    if market::is_popular(company) {
        1.0
    } else if market::is_visa_friendly(company) {
        0.8
    } else if market::is_remote_friendly(company) {
        0.7
    } else {
        0.5
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
