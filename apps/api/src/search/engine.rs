//! Search Engine: indexed text search, filtering, relevance ranking and
//! highlighting over a fixed posting corpus.
//!
//! Pipeline for `search`:
//! 1. Text search via the inverted index (skipped for a blank query)
//! 2. Filter pass
//! 3. Relevance scoring
//! 4. Stable sort by the requested key
//! 5. Highlight query words in title and description

use std::cmp::Ordering;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::JobPosting;
use crate::search::filters::{passes_filters, SearchFilters, SortBy, SortOrder};
use crate::search::highlight::highlight;
use crate::search::index::SearchIndex;
use crate::search::relevance::relevance;
use crate::search::suggestions::{suggestions, SearchSuggestion, SuggestionKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub job: JobPosting,
    pub relevance_score: f64,
    pub matched_fields: Vec<String>,
    pub highlighted_title: String,
    pub highlighted_description: String,
}

/// Owns a corpus snapshot and its index. Queries take `&self` and leave the
/// instance untouched, so one engine can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    postings: Vec<JobPosting>,
    index: SearchIndex,
    today: NaiveDate,
}

impl SearchEngine {
    pub fn new(postings: Vec<JobPosting>) -> Self {
        let index = SearchIndex::build(&postings);
        info!(
            "Search index built: {} postings, {} tokens",
            postings.len(),
            index.len()
        );
        Self {
            postings,
            index,
            today: Utc::now().date_naive(),
        }
    }

    /// Pins "today" for posting-age filters and recency bonuses.
    #[cfg(test)]
    pub fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn search(&self, filters: &SearchFilters) -> Vec<SearchResult> {
        let matching_ids = filters
            .has_query()
            .then(|| self.index.matching_ids(&filters.query));

        let mut results: Vec<SearchResult> = self
            .postings
            .iter()
            .filter(|job| {
                matching_ids
                    .as_ref()
                    .map_or(true, |ids| ids.contains(&job.id))
            })
            .filter(|job| passes_filters(job, filters, self.today))
            .map(|job| {
                let rel = relevance(job, filters, self.today);
                SearchResult {
                    job: job.clone(),
                    relevance_score: rel.score,
                    matched_fields: rel.matched_fields,
                    highlighted_title: job.title.clone(),
                    highlighted_description: job.description.clone(),
                }
            })
            .collect();

        sort_results(&mut results, filters.sort_by, filters.sort_order);

        if filters.has_query() {
            for result in &mut results {
                result.highlighted_title = highlight(&result.job.title, &filters.query);
                result.highlighted_description =
                    highlight(&result.job.description, &filters.query);
            }
        }

        debug!(
            "Search {:?} matched {} of {} postings",
            filters.query,
            results.len(),
            self.postings.len()
        );

        results
    }

    pub fn get_suggestions(
        &self,
        input: &str,
        kind: Option<SuggestionKind>,
    ) -> Vec<SearchSuggestion> {
        suggestions(&self.postings, input, kind)
    }
}

/// Orders results for `sort_by`. `Desc` is the natural direction of each key
/// (highest relevance, highest salary, newest first, company A→Z); `Asc`
/// reverses it. Ties keep their current order, and `Unordered` leaves the
/// slice untouched.
pub fn sort_results(results: &mut [SearchResult], sort_by: SortBy, order: SortOrder) {
    results.sort_by(|a, b| {
        let natural = match sort_by {
            SortBy::Relevance => b.relevance_score.total_cmp(&a.relevance_score),
            SortBy::Salary => b.job.headline_salary().cmp(&a.job.headline_salary()),
            SortBy::Date => b.job.posted_on().cmp(&a.job.posted_on()),
            SortBy::Company => compare_company(&a.job.company, &b.job.company),
            SortBy::Unordered => Ordering::Equal,
        };
        match order {
            SortOrder::Desc => natural,
            SortOrder::Asc => natural.reverse(),
        }
    });
}

fn compare_company(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::filters::PostedWithin;
    use crate::search::highlight::HIGHLIGHT_OPEN;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()
    }

    fn s(items: &[&str]) -> Vec<String> {
        items.iter().map(|i| i.to_string()).collect()
    }

    fn corpus() -> Vec<JobPosting> {
        vec![
            JobPosting {
                id: "react-1".to_string(),
                title: "Senior React Developer".to_string(),
                company: "Emirates NBD".to_string(),
                location: "Dubai, UAE".to_string(),
                salary_min: Some(18_000),
                salary_max: Some(25_000),
                description: "Build React interfaces for digital banking".to_string(),
                posted_date: "2024-01-15".to_string(),
                job_type: "Full-time".to_string(),
                industry: "Banking".to_string(),
                experience_required: 5,
                skills: s(&["React", "TypeScript"]),
                ..Default::default()
            },
            JobPosting {
                id: "react-2".to_string(),
                title: "Full Stack Developer".to_string(),
                company: "Careem".to_string(),
                location: "Dubai, UAE".to_string(),
                salary_min: Some(15_000),
                salary_max: Some(22_000),
                description: "Ship features across the super app".to_string(),
                posted_date: "2024-01-10".to_string(),
                job_type: "Full-time".to_string(),
                industry: "Technology".to_string(),
                experience_required: 3,
                remote: true,
                skills: s(&["React", "Python"]),
                ..Default::default()
            },
            JobPosting {
                id: "accountant".to_string(),
                title: "Accountant".to_string(),
                company: "Al Futtaim".to_string(),
                location: "Abu Dhabi".to_string(),
                salary_min: Some(9_000),
                description: "Manage ledgers and reporting".to_string(),
                posted_date: "2023-10-01".to_string(),
                job_type: "Contract".to_string(),
                industry: "Retail".to_string(),
                experience_required: 2,
                skills: s(&["Excel", "IFRS"]),
                ..Default::default()
            },
        ]
    }

    fn engine() -> SearchEngine {
        SearchEngine::new(corpus()).with_reference_date(today())
    }

    fn ids(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.job.id.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_scored() {
        let results = engine().search(&SearchFilters::default());
        assert_eq!(results.len(), 3);
        assert!(results
            .iter()
            .all(|r| (0.0..=100.0).contains(&r.relevance_score)));
        assert!(results
            .iter()
            .all(|r| r.highlighted_title == r.job.title));
    }

    #[test]
    fn test_react_query_with_skill_filter() {
        let filters = SearchFilters {
            query: "React".to_string(),
            skills: s(&["React"]),
            ..Default::default()
        };
        let results = engine().search(&filters);
        let mut found = ids(&results);
        found.sort();
        assert_eq!(found, vec!["react-1", "react-2"]);
    }

    #[test]
    fn test_unmatched_query_is_empty_not_error() {
        let filters = SearchFilters {
            query: "xylophone".to_string(),
            ..Default::default()
        };
        assert!(engine().search(&filters).is_empty());
    }

    #[test]
    fn test_exact_title_query_ranks_first() {
        let filters = SearchFilters {
            query: "Accountant".to_string(),
            ..Default::default()
        };
        let results = engine().search(&filters);
        assert_eq!(results[0].job.id, "accountant");
        assert!(results[0].matched_fields.contains(&"title".to_string()));
    }

    #[test]
    fn test_relevance_sorted_descending() {
        let filters = SearchFilters {
            query: "react developer".to_string(),
            ..Default::default()
        };
        let results = engine().search(&filters);
        assert!(results
            .windows(2)
            .all(|w| w[0].relevance_score >= w[1].relevance_score));
    }

    #[test]
    fn test_sort_by_salary_and_invert() {
        let mut filters = SearchFilters {
            sort_by: SortBy::Salary,
            ..Default::default()
        };
        assert_eq!(
            ids(&engine().search(&filters)),
            vec!["react-1", "react-2", "accountant"]
        );

        filters.sort_order = SortOrder::Asc;
        assert_eq!(
            ids(&engine().search(&filters)),
            vec!["accountant", "react-2", "react-1"]
        );
    }

    #[test]
    fn test_sort_by_date_newest_first() {
        let filters = SearchFilters {
            sort_by: SortBy::Date,
            ..Default::default()
        };
        assert_eq!(
            ids(&engine().search(&filters)),
            vec!["react-1", "react-2", "accountant"]
        );
    }

    #[test]
    fn test_sort_by_company_alphabetical() {
        let filters = SearchFilters {
            sort_by: SortBy::Company,
            ..Default::default()
        };
        assert_eq!(
            ids(&engine().search(&filters)),
            vec!["accountant", "react-2", "react-1"]
        );
    }

    #[test]
    fn test_filters_combine_with_query() {
        let filters = SearchFilters {
            query: "developer".to_string(),
            remote_work: Some(true),
            posted_within: PostedWithin::Month,
            ..Default::default()
        };
        assert_eq!(ids(&engine().search(&filters)), vec!["react-2"]);
    }

    #[test]
    fn test_highlighting_applied_and_deterministic() {
        let filters = SearchFilters {
            query: "react".to_string(),
            ..Default::default()
        };
        let first = engine().search(&filters);
        let second = engine().search(&filters);

        let top = first.iter().find(|r| r.job.id == "react-1").unwrap();
        assert!(top.highlighted_title.contains(HIGHLIGHT_OPEN));
        assert!(top.highlighted_description.contains(HIGHLIGHT_OPEN));
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_does_not_mutate_engine() {
        let engine = engine();
        let before = engine.postings().to_vec();
        let _ = engine.search(&SearchFilters {
            query: "react".to_string(),
            ..Default::default()
        });
        assert_eq!(engine.postings(), before.as_slice());
    }

    #[test]
    fn test_suggestions_use_corpus_counts() {
        let out = engine().get_suggestions("react", Some(SuggestionKind::Skill));
        assert_eq!(out[0].value, "React");
        assert_eq!(out[0].count, 2);
    }

    #[test]
    fn test_unrecognised_sort_key_keeps_index_order() {
        let filters = SearchFilters {
            sort_by: SortBy::Unordered,
            ..Default::default()
        };
        assert_eq!(
            ids(&engine().search(&filters)),
            vec!["react-1", "react-2", "accountant"]
        );
    }
}
