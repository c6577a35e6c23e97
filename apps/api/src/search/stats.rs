//! Aggregate statistics over a result set, for the dashboard summary panel.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::search::engine::SearchResult;

const TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterStats {
    pub total_jobs: usize,
    /// Mean of max-or-min salary over postings that state one; 0 if none do.
    pub average_salary: f64,
    pub top_skills: Vec<NamedCount>,
    pub top_companies: Vec<NamedCount>,
    /// Counts per city (location text before the first comma).
    pub location_breakdown: Vec<NamedCount>,
}

pub fn filter_stats(results: &[SearchResult]) -> FilterStats {
    let salaries: Vec<f64> = results
        .iter()
        .map(|r| r.job.headline_salary())
        .filter(|s| *s > 0)
        .map(f64::from)
        .collect();
    let average_salary = if salaries.is_empty() {
        0.0
    } else {
        salaries.iter().sum::<f64>() / salaries.len() as f64
    };

    let mut skills = Tally::default();
    let mut companies = Tally::default();
    let mut locations = Tally::default();
    for result in results {
        for skill in &result.job.skills {
            skills.add(skill);
        }
        companies.add(&result.job.company);
        let city = result.job.location.split(',').next().unwrap_or_default();
        locations.add(city);
    }

    FilterStats {
        total_jobs: results.len(),
        average_salary,
        top_skills: skills.ranked(Some(TOP_N)),
        top_companies: companies.ranked(Some(TOP_N)),
        location_breakdown: locations.ranked(None),
    }
}

/// Counter that remembers first-seen order so ties rank stably.
#[derive(Default)]
struct Tally {
    order: Vec<NamedCount>,
    positions: HashMap<String, usize>,
}

impl Tally {
    fn add(&mut self, name: &str) {
        match self.positions.get(name) {
            Some(&i) => self.order[i].count += 1,
            None => {
                self.positions.insert(name.to_string(), self.order.len());
                self.order.push(NamedCount {
                    name: name.to_string(),
                    count: 1,
                });
            }
        }
    }

    fn ranked(self, limit: Option<usize>) -> Vec<NamedCount> {
        let mut ranked = self.order;
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }
}
