//! Grouped suggestion report and exact-match filtering.

use std::collections::BTreeMap;

use serde::Serialize;

use veneer_types::{Category, Priority, Suggestion};

/// Suggestions for one category, bucketed by priority. Insertion order is
/// preserved within a bucket.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PriorityBuckets {
    pub high: Vec<Suggestion>,
    pub medium: Vec<Suggestion>,
    pub low: Vec<Suggestion>,
}

impl PriorityBuckets {
    fn push(&mut self, suggestion: Suggestion) {
        match suggestion.priority {
            Priority::High => self.high.push(suggestion),
            Priority::Medium => self.medium.push(suggestion),
            Priority::Low => self.low.push(suggestion),
        }
    }

    pub fn len(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The full engine output: the flat list plus the grouped view.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionReport {
    pub suggestions: Vec<Suggestion>,
    pub total_suggestions: usize,
    pub categories: BTreeMap<Category, PriorityBuckets>,
}

impl SuggestionReport {
    pub fn new(suggestions: Vec<Suggestion>) -> Self {
        let mut categories: BTreeMap<Category, PriorityBuckets> = BTreeMap::new();
        for suggestion in &suggestions {
            categories
                .entry(suggestion.category)
                .or_default()
                .push(suggestion.clone());
        }

        Self {
            total_suggestions: suggestions.len(),
            suggestions,
            categories,
        }
    }
}

/// Exact-match filter over the flat list. Either criterion may be absent;
/// a criterion with no matches yields an empty list, not an error.
pub fn filter(
    suggestions: &[Suggestion],
    category: Option<Category>,
    priority: Option<Priority>,
) -> Vec<Suggestion> {
    suggestions
        .iter()
        .filter(|s| category.is_none_or(|c| s.category == c))
        .filter(|s| priority.is_none_or(|p| s.priority == p))
        .cloned()
        .collect()
}
