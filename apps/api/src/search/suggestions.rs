use serde::{Deserialize, Serialize};

use crate::models::JobPosting;
use crate::search::reference::{JOB_TITLES, LOCATIONS, POPULAR_COMPANIES, POPULAR_SKILLS};

const PER_KIND_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Skill,
    Company,
    Location,
    Title,
}

impl SuggestionKind {
    const ALL: [SuggestionKind; 4] = [
        SuggestionKind::Skill,
        SuggestionKind::Company,
        SuggestionKind::Location,
        SuggestionKind::Title,
    ];

    /// Parses a request's kind label. `None` for anything unrecognised.
    pub fn parse(raw: &str) -> Option<Self> {
        SuggestionKind::ALL
            .into_iter()
            .find(|kind| kind.label() == raw)
    }

    fn label(self) -> &'static str {
        match self {
            SuggestionKind::Skill => "skill",
            SuggestionKind::Company => "company",
            SuggestionKind::Location => "location",
            SuggestionKind::Title => "title",
        }
    }

    fn reference(self) -> &'static [&'static str] {
        match self {
            SuggestionKind::Skill => POPULAR_SKILLS,
            SuggestionKind::Company => POPULAR_COMPANIES,
            SuggestionKind::Location => LOCATIONS,
            SuggestionKind::Title => JOB_TITLES,
        }
    }

    fn is_popular(self) -> bool {
        matches!(self, SuggestionKind::Skill | SuggestionKind::Company)
    }

    /// Postings whose corresponding field contains `value` (case-insensitive).
    fn count_in(self, postings: &[JobPosting], value: &str) -> usize {
        let value = value.to_lowercase();
        postings
            .iter()
            .filter(|job| match self {
                SuggestionKind::Skill => job
                    .skills
                    .iter()
                    .any(|s| s.to_lowercase().contains(&value)),
                SuggestionKind::Company => job.company.to_lowercase().contains(&value),
                SuggestionKind::Location => job.location.to_lowercase().contains(&value),
                SuggestionKind::Title => job.title.to_lowercase().contains(&value),
            })
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub value: String,
    pub count: usize,
    pub popular: bool,
}

/// Up to five reference entries per kind containing `input`, each with a
/// live corpus count, ordered by count (stable within equal counts).
pub fn suggestions(
    postings: &[JobPosting],
    input: &str,
    kind: Option<SuggestionKind>,
) -> Vec<SearchSuggestion> {
    let input = input.to_lowercase();
    let mut out = Vec::new();

    for candidate in SuggestionKind::ALL {
        if kind.is_some_and(|k| k != candidate) {
            continue;
        }
        out.extend(
            candidate
                .reference()
                .iter()
                .filter(|value| value.to_lowercase().contains(&input))
                .take(PER_KIND_LIMIT)
                .map(|value| SearchSuggestion {
                    kind: candidate,
                    value: value.to_string(),
                    count: candidate.count_in(postings, value),
                    popular: candidate.is_popular(),
                }),
        );
    }

    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::sample_postings;

    #[test]
    fn test_at_most_five_per_kind() {
        let out = suggestions(&sample_postings(), "", Some(SuggestionKind::Skill));
        assert_eq!(out.len(), PER_KIND_LIMIT);
        assert!(out.iter().all(|s| s.kind == SuggestionKind::Skill && s.popular));
    }

    #[test]
    fn test_kind_filter_and_counts() {
        let out = suggestions(&sample_postings(), "care", Some(SuggestionKind::Company));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].value, "Careem");
        assert_eq!(out[0].count, 1);
    }

    #[test]
    fn test_sorted_by_count_desc() {
        let out = suggestions(&sample_postings(), "dubai", None);
        assert!(!out.is_empty());
        assert!(out.windows(2).all(|w| w[0].count >= w[1].count));
        // Both sample postings are in "Dubai, UAE"
        assert_eq!(out[0].value, "Dubai");
        assert_eq!(out[0].count, 2);
    }

    #[test]
    fn test_locations_and_titles_not_flagged_popular() {
        let out = suggestions(&sample_postings(), "developer", Some(SuggestionKind::Title));
        assert!(!out.is_empty());
        assert!(out.iter().all(|s| !s.popular));
    }

    #[test]
    fn test_unmatched_input_is_empty() {
        assert!(suggestions(&sample_postings(), "qwertyuiop", None).is_empty());
    }

    #[test]
    fn test_kind_serializes_as_type() {
        let s = SearchSuggestion {
            kind: SuggestionKind::Location,
            value: "Dubai".to_string(),
            count: 2,
            popular: false,
        };
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["type"], "location");
    }

    #[test]
    fn test_parse_kind_labels() {
        assert_eq!(SuggestionKind::parse("company"), Some(SuggestionKind::Company));
        assert_eq!(SuggestionKind::parse("title"), Some(SuggestionKind::Title));
        assert_eq!(SuggestionKind::parse("city"), None);
        assert_eq!(SuggestionKind::parse("Skill"), None);
    }
}
