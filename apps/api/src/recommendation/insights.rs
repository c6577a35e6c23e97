//! Insight text attached to each recommendation.
//!
//! `templated_insights` is pure and deterministic. `InsightProvider` is the
//! seam for a model-backed generator; `AppState` carries an
//! `Arc<dyn InsightProvider>` and the scoring itself stays synchronous.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{JobPosting, UserProfile};
use crate::recommendation::engine::JobRecommendation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiInsights {
    pub why_good_match: Vec<String>,
    pub potential_concerns: Vec<String>,
    pub application_tips: Vec<String>,
    pub salary_negotiation: String,
}

/// Match flags the insight text depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsightContext {
    pub salary_match: bool,
    pub experience_match: bool,
}

impl InsightContext {
    pub fn from_recommendation(rec: &JobRecommendation) -> Self {
        Self {
            salary_match: rec.salary_match,
            experience_match: rec.experience_match,
        }
    }
}

#[async_trait]
pub trait InsightProvider: Send + Sync {
    async fn generate(
        &self,
        profile: &UserProfile,
        job: &JobPosting,
        context: &InsightContext,
    ) -> Result<AiInsights, AppError>;

    /// Backend label surfaced in responses.
    fn backend(&self) -> &'static str;
}

/// Default provider: string templates only, no network.
pub struct TemplateInsightProvider;

#[async_trait]
impl InsightProvider for TemplateInsightProvider {
    async fn generate(
        &self,
        profile: &UserProfile,
        job: &JobPosting,
        context: &InsightContext,
    ) -> Result<AiInsights, AppError> {
        Ok(templated_insights(profile, job, context))
    }

    fn backend(&self) -> &'static str {
        "template"
    }
}

pub fn templated_insights(
    profile: &UserProfile,
    job: &JobPosting,
    context: &InsightContext,
) -> AiInsights {
    let user_skills = if profile.skills.is_empty() {
        "professional".to_string()
    } else {
        join_first(&profile.skills, 3, ", ")
    };
    let job_skills = if job.skills.is_empty() {
        "the core requirements".to_string()
    } else {
        join_first(&job.skills, 2, " and ")
    };

    let mut potential_concerns = Vec::new();
    if !context.salary_match {
        potential_concerns
            .push("Salary might be below your expectations - consider negotiation".to_string());
    }
    if !context.experience_match {
        potential_concerns
            .push("Role might require learning new technologies quickly".to_string());
    }
    if !job.visa_sponsorship {
        potential_concerns.push("Visa sponsorship not explicitly mentioned".to_string());
    }

    let salary_negotiation = if context.salary_match {
        "The offered salary range aligns with UAE market standards for your experience level"
            .to_string()
    } else {
        "Consider negotiating based on UAE market rates - similar roles typically pay 10-15% higher"
            .to_string()
    };

    AiInsights {
        why_good_match: vec![
            format!("Your {user_skills} skills align perfectly with their tech stack"),
            format!(
                "{} is known for career growth opportunities in the UAE market",
                job.company
            ),
            "The role offers excellent exposure to cutting-edge technologies".to_string(),
        ],
        potential_concerns,
        application_tips: vec![
            format!("Highlight your experience with {job_skills} in your application"),
            format!(
                "Research {}'s recent projects and mention relevant insights",
                job.company
            ),
            "Emphasize your adaptability and UAE market knowledge".to_string(),
        ],
        salary_negotiation,
    }
}

fn join_first(items: &[String], n: usize, sep: &str) -> String {
    items
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(sep)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(salary_match: bool, experience_match: bool) -> InsightContext {
        InsightContext {
            salary_match,
            experience_match,
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "Node.js".to_string(),
                "GraphQL".to_string(),
            ],
            ..Default::default()
        }
    }

    fn job(visa_sponsorship: bool) -> JobPosting {
        JobPosting {
            company: "Careem".to_string(),
            skills: vec!["Python".to_string(), "AWS".to_string(), "Docker".to_string()],
            visa_sponsorship,
            ..Default::default()
        }
    }

    #[test]
    fn test_insights_reference_top_skills_and_company() {
        let insights = templated_insights(&profile(), &job(true), &context(true, true));
        assert!(insights.why_good_match[0].contains("React, TypeScript, Node.js"));
        assert!(!insights.why_good_match[0].contains("GraphQL"));
        assert!(insights.why_good_match[1].starts_with("Careem"));
        assert!(insights.application_tips[0].contains("Python and AWS"));
        assert!(insights.potential_concerns.is_empty());
        assert!(insights.salary_negotiation.contains("aligns"));
    }

    #[test]
    fn test_concerns_listed_for_unmet_flags() {
        let insights = templated_insights(&profile(), &job(false), &context(false, false));
        assert_eq!(insights.potential_concerns.len(), 3);
        assert!(insights.salary_negotiation.contains("10-15%"));
    }

    #[test]
    fn test_insights_are_deterministic() {
        let a = templated_insights(&profile(), &job(false), &context(true, false));
        let b = templated_insights(&profile(), &job(false), &context(true, false));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_skill_lists_still_render() {
        let insights = templated_insights(
            &UserProfile::default(),
            &JobPosting::default(),
            &context(true, true),
        );
        assert!(insights.application_tips[0].contains("the core requirements"));
    }

    #[tokio::test]
    async fn test_template_provider_matches_pure_function() {
        let provider = TemplateInsightProvider;
        let ctx = context(false, true);
        let generated = provider.generate(&profile(), &job(true), &ctx).await.unwrap();
        assert_eq!(generated, templated_insights(&profile(), &job(true), &ctx));
        assert_eq!(provider.backend(), "template");
    }
}
