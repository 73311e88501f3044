//! Parameters of a message page request.

use crate::data::FilterSet;

/// Default page size used by the dashboard.
pub const DEFAULT_PER_PAGE: u32 = 20;

/// A request for one page of messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageQuery {
    pub page: u32,
    pub per_page: u32,
    pub filters: FilterSet,
}

impl MessageQuery {
    pub fn new(page: u32, per_page: u32, filters: FilterSet) -> Self {
        Self {
            page,
            per_page,
            filters,
        }
    }

    /// Query string pairs. `page` and `per_page` are always present; filter
    /// parameters only when the filter is active.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        pairs.extend(self.filters.iter().map(|(key, value)| (key.param(), value.to_string())));
        pairs
    }
}

impl Default for MessageQuery {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE, FilterSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FilterControls;

    #[test]
    fn test_unfiltered_query() {
        let pairs = MessageQuery::default().to_pairs();
        assert_eq!(
            pairs,
            vec![("page", "1".to_string()), ("per_page", "20".to_string())]
        );
    }

    #[test]
    fn test_filtered_query_includes_only_active_filters() {
        let controls = FilterControls {
            decision: "buy".to_string(),
            channel: String::new(),
            min_confidence: "0.7".to_string(),
        };
        let query = MessageQuery::new(3, 20, FilterSet::from_controls(&controls));
        assert_eq!(
            query.to_pairs(),
            vec![
                ("page", "3".to_string()),
                ("per_page", "20".to_string()),
                ("decision", "buy".to_string()),
                ("min_confidence", "0.7".to_string()),
            ]
        );
    }
}
