//! Posting corpus loading. A JSON file when configured, otherwise the
//! built-in sample postings.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::posting::JobPosting;

/// Loads postings from a JSON array on disk.
pub fn load_postings(path: &Path) -> Result<Vec<JobPosting>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read postings file '{}'", path.display()))?;
    let postings: Vec<JobPosting> = serde_json::from_str(&raw)
        .with_context(|| format!("Postings file '{}' is not a JSON array of postings", path.display()))?;
    info!("Loaded {} postings from {}", postings.len(), path.display());
    Ok(postings)
}

pub fn sample_postings() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: "job-1".to_string(),
            title: "Senior React Developer".to_string(),
            company: "Emirates NBD".to_string(),
            location: "Dubai, UAE".to_string(),
            salary: Some("AED 18,000 - 25,000".to_string()),
            salary_min: Some(18_000),
            salary_max: Some(25_000),
            description:
                "Looking for experienced React developer to join our digital transformation team"
                    .to_string(),
            requirements: strings(&["React", "TypeScript", "Node.js", "5+ years experience"]),
            benefits: strings(&["Health Insurance", "Annual Bonus", "Training Budget"]),
            visa_sponsorship: true,
            uae_national: false,
            remote: false,
            posted_date: "2024-01-15".to_string(),
            job_type: "Full-time".to_string(),
            industry: "Banking".to_string(),
            experience_required: 5,
            skills: strings(&["React", "TypeScript", "Node.js", "REST APIs", "Git"]),
        },
        JobPosting {
            id: "job-2".to_string(),
            title: "Full Stack Developer".to_string(),
            company: "Careem".to_string(),
            location: "Dubai, UAE".to_string(),
            salary: Some("AED 15,000 - 22,000".to_string()),
            salary_min: Some(15_000),
            salary_max: Some(22_000),
            description: "Join our engineering team building the super app for the Middle East"
                .to_string(),
            requirements: strings(&["React", "Python", "AWS", "3+ years experience"]),
            benefits: strings(&["Stock Options", "Flexible Hours", "Remote Work"]),
            visa_sponsorship: true,
            uae_national: false,
            remote: true,
            posted_date: "2024-01-10".to_string(),
            job_type: "Full-time".to_string(),
            industry: "Technology".to_string(),
            experience_required: 3,
            skills: strings(&["React", "Python", "AWS", "Docker", "Kubernetes"]),
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
