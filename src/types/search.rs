//! Search request and result types.

use crate::pagination::PageItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Object domains a search can cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    /// Media assets.
    Assets,
    /// Collections.
    Collections,
    /// Timed segments.
    Segments,
    /// Files.
    Files,
}

/// One term of a search filter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterTerm {
    /// Field name.
    pub name: String,
    /// Exact value to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Any-of values to match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_in: Option<Vec<String>>,
    /// Range lower bound (exclusive), ISO-8601 for date fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_gt: Option<String>,
    /// Range upper bound (exclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_lt: Option<String>,
}

/// Boolean operator combining filter terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilterOperator {
    /// All terms must match.
    And,
    /// Any term may match.
    Or,
}

/// A search filter: terms under one operator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Combining operator.
    pub operator: FilterOperator,
    /// Filter terms.
    pub terms: Vec<FilterTerm>,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

/// One sort criterion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SortField {
    /// Field name to sort by.
    pub name: String,
    /// Direction.
    pub order: SortOrder,
}

/// A search request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Object domains to search.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doc_types: Vec<DocType>,
    /// Free-text query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Structured filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<SearchFilter>,
    /// Sort criteria, in priority order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<SortField>,
    /// Metadata view to resolve metadata fields against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_view_id: Option<String>,
    /// Restrict returned fields to these names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_fields: Vec<String>,
}

impl SearchRequest {
    /// Creates a free-text search over the given domains.
    pub fn text(query: impl Into<String>, doc_types: Vec<DocType>) -> Self {
        Self {
            doc_types,
            query: Some(query.into()),
            ..Default::default()
        }
    }
}

/// One search hit.
///
/// Hits are domain-heterogeneous, so the common envelope fields are typed
/// and the remainder stays available under `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchObject {
    /// Object identifier.
    pub id: String,
    /// Object domain.
    #[serde(default)]
    pub object_type: Option<String>,
    /// Display title.
    #[serde(default)]
    pub title: Option<String>,
    /// Creation timestamp; drives the date-continuation fallback.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    /// Remaining, domain-specific fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PageItem for SearchObject {
    fn date_created(&self) -> Option<DateTime<Utc>> {
        self.date_created
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_request_serializes_sparsely() {
        let request = SearchRequest::text("sunset", vec![DocType::Assets]);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"doc_types": ["assets"], "query": "sunset"})
        );
    }

    #[test]
    fn test_search_object_keeps_extra_fields() {
        let object: SearchObject = serde_json::from_value(json!({
            "id": "a1",
            "object_type": "assets",
            "title": "Sunset",
            "date_created": "2024-03-01T10:00:00Z",
            "media_type": "video"
        }))
        .unwrap();
        assert_eq!(object.extra["media_type"], json!("video"));
        assert!(PageItem::date_created(&object).is_some());
    }
}
