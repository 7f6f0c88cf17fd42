//! Request body handling: typed-or-raw inputs and dump policies.
//!
//! Endpoint methods accept either a typed request DTO or a raw JSON map.
//! [`Body`] is the tagged union of the two; dump policies apply only to the
//! typed arm, a raw map always passes through untouched.
//!
//! Policies:
//! - POST/PUT (and DELETE-with-body) serialize with [`DumpPolicy::create`],
//!   dropping fields equal to the DTO's declared default.
//! - PATCH serializes with [`DumpPolicy::patch`], additionally dropping
//!   fields the caller never assigned, so a partial update cannot reset
//!   server state to defaults. Unset tracking comes from [`Field`].

use crate::errors::{IconikError, IconikResult};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Rules deciding which fields are emitted on serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DumpPolicy {
    /// Omit fields whose value equals the declared default.
    pub exclude_defaults: bool,
    /// Omit fields the caller never assigned.
    pub exclude_unset: bool,
}

impl DumpPolicy {
    /// Emits every field.
    pub fn full() -> Self {
        Self::default()
    }

    /// Policy for POST/PUT bodies.
    pub fn create() -> Self {
        Self {
            exclude_defaults: true,
            exclude_unset: false,
        }
    }

    /// Policy for PATCH bodies.
    pub fn patch() -> Self {
        Self {
            exclude_defaults: true,
            exclude_unset: true,
        }
    }
}

/// A request body: a typed DTO or a raw JSON map.
#[derive(Debug, Clone)]
pub enum Body<T> {
    /// A typed request DTO, serialized under the method's dump policy.
    Typed(T),
    /// A raw map, passed through unchanged.
    Raw(Map<String, Value>),
}

impl<T> From<T> for Body<T> {
    fn from(value: T) -> Self {
        Body::Typed(value)
    }
}

impl<T: Serialize + Default> Body<T> {
    /// Serializes the body under the given policy.
    ///
    /// Typed bodies must serialize to a JSON object. `exclude_unset` is
    /// realized structurally: [`Field::Unset`] fields are skipped by serde,
    /// so they never reach the emitted map under any policy.
    pub fn serialize(&self, policy: DumpPolicy) -> IconikResult<Value> {
        match self {
            Body::Raw(map) => Ok(Value::Object(map.clone())),
            Body::Typed(value) => {
                let mut serialized = to_object(value)?;
                if policy.exclude_defaults {
                    let defaults = to_object(&T::default())?;
                    serialized.retain(|key, value| defaults.get(key) != Some(value));
                }
                Ok(Value::Object(serialized))
            }
        }
    }
}

fn to_object<T: Serialize>(value: &T) -> IconikResult<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(IconikError::invalid_parameter(format!(
            "Request body must serialize to a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// An optional DTO field that distinguishes "never assigned" from
/// "explicitly null".
///
/// Declare PATCH-style fields as
/// `#[serde(default, skip_serializing_if = "Field::is_unset")]`; a missing
/// key deserializes to `Unset`, a JSON null to `Null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field<T> {
    /// The caller never assigned the field.
    Unset,
    /// The caller explicitly set the field to null.
    Null,
    /// The caller assigned a value.
    Set(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> Field<T> {
    /// Returns true when the field was never assigned.
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    /// Returns the assigned value, if any.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Field::Set(value) => Some(value),
            _ => None,
        }
    }

    /// Converts an `Option` into an assigned field (`None` becomes `Null`).
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Set(v),
            None => Field::Null,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Unset fields are normally skipped via skip_serializing_if;
            // emitting null keeps behaviour sane if the skip is omitted.
            Field::Unset | Field::Null => serializer.serialize_none(),
            Field::Set(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Field::Set(value),
            None => Field::Null,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct UpdateWidget {
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        title: Field<String>,
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        external_id: Field<String>,
        #[serde(default)]
        is_online: bool,
    }

    #[test]
    fn test_full_dump_keeps_defaults() {
        let body = Body::Typed(UpdateWidget {
            title: Field::Set("Y".to_string()),
            ..Default::default()
        });
        let value = body.serialize(DumpPolicy::full()).unwrap();
        assert_eq!(value, json!({"title": "Y", "is_online": false}));
    }

    #[test]
    fn test_exclude_defaults_omits_exactly_default_valued_keys() {
        let body = Body::Typed(UpdateWidget {
            title: Field::Set("Y".to_string()),
            is_online: false,
            ..Default::default()
        });
        let value = body.serialize(DumpPolicy::create()).unwrap();
        // is_online equals the declared default and is dropped; title is not.
        assert_eq!(value, json!({"title": "Y"}));
    }

    #[test]
    fn test_exclude_unset_omits_exactly_unassigned_keys() {
        let body = Body::Typed(UpdateWidget {
            title: Field::Set("Y".to_string()),
            ..Default::default()
        });
        let value = body.serialize(DumpPolicy::patch()).unwrap();
        assert_eq!(value, json!({"title": "Y"}));

        // An explicit null survives a PATCH dump.
        let body = Body::Typed(UpdateWidget {
            external_id: Field::Null,
            ..Default::default()
        });
        let value = body.serialize(DumpPolicy::patch()).unwrap();
        assert_eq!(value, json!({"external_id": null}));
    }

    #[test]
    fn test_raw_body_ignores_policy() {
        let mut map = Map::new();
        map.insert("anything".to_string(), json!(false));
        let body: Body<UpdateWidget> = Body::Raw(map.clone());
        let value = body.serialize(DumpPolicy::patch()).unwrap();
        assert_eq!(value, Value::Object(map));
    }

    #[test]
    fn test_field_round_trip() {
        let original = UpdateWidget {
            title: Field::Set("Y".to_string()),
            external_id: Field::Unset,
            is_online: true,
        };
        let dumped = Body::Typed(original.clone())
            .serialize(DumpPolicy::full())
            .unwrap();
        let validated: UpdateWidget = serde_json::from_value(dumped).unwrap();
        assert_eq!(validated, original);
    }

    #[test]
    fn test_field_deserialize_distinguishes_null_from_missing() {
        let widget: UpdateWidget = serde_json::from_value(json!({"title": null})).unwrap();
        assert_eq!(widget.title, Field::Null);
        assert_eq!(widget.external_id, Field::Unset);
    }

    #[test]
    fn test_non_object_body_rejected() {
        let body: Body<Vec<u32>> = Body::Typed(vec![1, 2]);
        assert!(body.serialize(DumpPolicy::full()).is_err());
    }
}
