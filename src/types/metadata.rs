//! Metadata domain types: views, fields, and values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Data type of a metadata field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetadataFieldType {
    /// Free text.
    String,
    /// Long-form text.
    Text,
    /// Integer value.
    Integer,
    /// Floating-point value.
    Float,
    /// Boolean value.
    Boolean,
    /// ISO-8601 date.
    Date,
    /// ISO-8601 date-time.
    DateTime,
    /// One of a declared option set.
    Drop,
    /// Several of a declared option set.
    MultiSelect,
    /// A tag cloud.
    TagCloud,
}

/// One option of an enumerated metadata field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldOption {
    /// Stored value.
    pub value: String,
    /// Display label.
    #[serde(default)]
    pub label: Option<String>,
}

/// A metadata field definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataField {
    /// Field name (the map key in values payloads).
    pub name: String,
    /// Display label.
    #[serde(default)]
    pub label: Option<String>,
    /// Data type.
    #[serde(default)]
    pub field_type: Option<MetadataFieldType>,
    /// Options for enumerated types.
    #[serde(default)]
    pub options: Vec<FieldOption>,
    /// Whether a value is required.
    #[serde(default)]
    pub required: bool,
    /// Whether the field accepts multiple values.
    #[serde(default)]
    pub multi: bool,
    /// Whether the field is read-only.
    #[serde(default)]
    pub read_only: bool,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

/// A metadata view: an ordered subset of fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataView {
    /// View identifier.
    pub id: String,
    /// View name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// The fields shown by this view, in order.
    #[serde(default)]
    pub view_fields: Vec<MetadataField>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default)]
    pub date_modified: Option<DateTime<Utc>>,
}

/// One stored value of a metadata field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldValue {
    /// The stored value.
    pub value: serde_json::Value,
}

/// Values of one field (fields may be multi-valued).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldValues {
    /// The stored values.
    #[serde(default)]
    pub field_values: Vec<FieldValue>,
}

/// Metadata values of one object, keyed by field name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectMetadata {
    /// Identifier of the described object.
    #[serde(default)]
    pub object_id: Option<String>,
    /// Type of the described object.
    #[serde(default)]
    pub object_type: Option<String>,
    /// Stored values keyed by field name.
    #[serde(default)]
    pub metadata_values: HashMap<String, FieldValues>,
    /// Version identifier of the metadata document.
    #[serde(default)]
    pub version_id: Option<String>,
    /// Last modification timestamp.
    #[serde(default)]
    pub date_modified: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_metadata_round_trip() {
        let body = json!({
            "object_id": "a1",
            "object_type": "assets",
            "metadata_values": {
                "genre": {"field_values": [{"value": "documentary"}]}
            }
        });
        let metadata: ObjectMetadata = serde_json::from_value(body).unwrap();
        assert_eq!(
            metadata.metadata_values["genre"].field_values[0].value,
            json!("documentary")
        );
    }

    #[test]
    fn test_field_type_wire_names() {
        let field: MetadataField = serde_json::from_value(json!({
            "name": "rating",
            "field_type": "multi_select"
        }))
        .unwrap();
        assert_eq!(field.field_type, Some(MetadataFieldType::MultiSelect));
    }
}
