//! Recently recognized queries.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// How many recognized queries are remembered.
pub const MAX_RECENT_QUERIES: usize = 8;

/// Most-recent-first list of recognized queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecentQueries {
    entries: VecDeque<String>,
}

impl RecentQueries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a query at the front, dropping the oldest past the cap.
    pub fn push(&mut self, query: impl Into<String>) {
        self.entries.push_front(query.into());
        self.entries.truncate(MAX_RECENT_QUERIES);
    }

    /// Iterate newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_newest_first() {
        let mut recent = RecentQueries::new();
        recent.push("Dolo 650");
        recent.push("Allegra");
        assert_eq!(recent.iter().collect::<Vec<_>>(), vec!["Allegra", "Dolo 650"]);
    }

    #[test]
    fn test_cap() {
        let mut recent = RecentQueries::new();
        for i in 0..12 {
            recent.push(format!("query {}", i));
        }
        assert_eq!(recent.len(), MAX_RECENT_QUERIES);
        assert_eq!(recent.iter().next(), Some("query 11"));
        assert_eq!(recent.iter().last(), Some("query 4"));
    }

    proptest! {
        #[test]
        fn prop_never_exceeds_cap(queries in prop::collection::vec(".{0,12}", 0..30)) {
            let mut recent = RecentQueries::new();
            for q in &queries {
                recent.push(q.clone());
            }
            prop_assert_eq!(recent.len(), queries.len().min(MAX_RECENT_QUERIES));
            if let Some(last) = queries.last() {
                prop_assert_eq!(recent.iter().next(), Some(last.as_str()));
            }
        }
    }
}
