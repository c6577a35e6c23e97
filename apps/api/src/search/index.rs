#![allow(dead_code)]
//! Word-level inverted index over a fixed posting corpus.
//!
//! Tokens are lowercase runs of `[A-Za-z0-9_]`. The index is built once in
//! `SearchIndex::build` and never updated; a new corpus means a new index.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;

use crate::models::JobPosting;

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[A-Za-z0-9_]+").expect("word pattern is valid"))
}

/// Lowercases `text` and splits it into word tokens, in order, duplicates kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Text indexed for a posting: title, company, location, description,
/// skills, requirements, industry, job type.
pub fn searchable_text(job: &JobPosting) -> String {
    let mut parts: Vec<&str> = vec![
        job.title.as_str(),
        job.company.as_str(),
        job.location.as_str(),
        job.description.as_str(),
    ];
    parts.extend(job.skills.iter().map(String::as_str));
    parts.extend(job.requirements.iter().map(String::as_str));
    parts.push(&job.industry);
    parts.push(&job.job_type);
    parts.join(" ")
}

#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: HashMap<String, BTreeSet<String>>,
}

impl SearchIndex {
    pub fn build(postings: &[JobPosting]) -> Self {
        let mut entries: HashMap<String, BTreeSet<String>> = HashMap::new();
        for job in postings {
            for token in tokenize(&searchable_text(job)) {
                entries.entry(token).or_default().insert(job.id.clone());
            }
        }
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Posting ids indexed under exactly `token`.
    pub fn postings_for(&self, token: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(token)
    }

    /// Ids of postings matching any query word, exactly or by prefix in
    /// either direction ("reac" hits "react", "reactjs" hits "react").
    pub fn matching_ids(&self, query: &str) -> HashSet<String> {
        let mut ids = HashSet::new();
        for word in tokenize(query) {
            if let Some(exact) = self.entries.get(&word) {
                ids.extend(exact.iter().cloned());
            }
            for (indexed, postings) in &self.entries {
                if indexed.starts_with(word.as_str()) || word.starts_with(indexed.as_str()) {
                    ids.extend(postings.iter().cloned());
                }
            }
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(id: &str, title: &str, skills: &[&str]) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: title.to_string(),
            company: "Acme".to_string(),
            location: "Dubai, UAE".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            industry: "Technology".to_string(),
            job_type: "Full-time".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_tokenize_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize("Senior Node.js / C++ dev_ops"),
            vec!["senior", "node", "js", "c", "dev_ops"]
        );
    }

    #[test]
    fn test_every_indexed_token_maps_to_posting() {
        let job = posting("job-1", "Rust Engineer", &["Tokio"]);
        let index = SearchIndex::build(std::slice::from_ref(&job));
        for token in tokenize(&searchable_text(&job)) {
            let ids = index.postings_for(&token).expect("token indexed");
            assert!(ids.contains("job-1"), "{token} missing job-1");
        }
    }

    #[test]
    fn test_exact_and_prefix_matches() {
        let postings = vec![
            posting("a", "React Developer", &["React"]),
            posting("b", "Python Developer", &["Django"]),
        ];
        let index = SearchIndex::build(&postings);

        let ids = index.matching_ids("react");
        assert!(ids.contains("a"));
        assert!(!ids.contains("b"));

        // query is a prefix of an indexed token
        assert!(index.matching_ids("pyth").contains("b"));
        // indexed token is a prefix of the query
        assert!(index.matching_ids("reactjs").contains("a"));
    }

    #[test]
    fn test_union_across_query_words() {
        let postings = vec![
            posting("a", "React Developer", &[]),
            posting("b", "Python Engineer", &[]),
        ];
        let index = SearchIndex::build(&postings);
        let ids = index.matching_ids("react python");
        assert_eq!(ids.len(), 2);
    }

    #[test]
    fn test_unmatched_query_is_empty() {
        let index = SearchIndex::build(&[posting("a", "React Developer", &[])]);
        assert!(index.matching_ids("zzzz").is_empty());
        assert!(index.matching_ids("   ").is_empty());
    }

    #[test]
    fn test_empty_corpus() {
        let index = SearchIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}
