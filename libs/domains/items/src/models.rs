use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Unique identifier, generated at creation
    #[schema(example = "0b6f3f0e-6c1e-4f5b-9a51-3d2f0c8c2a11")]
    pub id: String,
    /// Free-form name, not unique
    #[schema(example = "widget")]
    pub name: String,
    /// Numeric value
    #[schema(example = 3.5)]
    pub value: f64,
}

/// DTO for creating a new item
///
/// Absent or `null` fields decode to their zero value (`""`, `0.0`); only
/// malformed JSON or a mistyped field is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateItem {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Item {
    /// Create a new item with a random (v4) UUID identifier
    pub fn new(input: CreateItem) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            value: input.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget() -> CreateItem {
        CreateItem {
            name: "widget".to_string(),
            value: 3.5,
        }
    }

    #[test]
    fn test_new_item_keeps_input_fields() {
        let item = Item::new(widget());
        assert_eq!(item.name, "widget");
        assert_eq!(item.value, 3.5);
    }

    #[test]
    fn test_new_item_id_is_uuid_v4() {
        let item = Item::new(widget());
        let id = Uuid::parse_str(&item.id).unwrap();
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn test_new_items_get_distinct_ids() {
        assert_ne!(Item::new(widget()).id, Item::new(widget()).id);
    }

    #[test]
    fn test_create_item_missing_fields_default_to_zero() {
        let input: CreateItem = serde_json::from_str("{}").unwrap();
        assert_eq!(input, CreateItem::default());

        let input: CreateItem = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert_eq!(input.name, "x");
        assert_eq!(input.value, 0.0);
    }

    #[test]
    fn test_create_item_null_fields_default_to_zero() {
        let input: CreateItem = serde_json::from_str(r#"{"name":null,"value":1}"#).unwrap();
        assert_eq!(input.name, "");
        assert_eq!(input.value, 1.0);
    }

    #[test]
    fn test_create_item_rejects_mistyped_field() {
        assert!(serde_json::from_str::<CreateItem>(r#"{"name":"x","value":"high"}"#).is_err());
        assert!(serde_json::from_str::<CreateItem>(r#"{"name":5}"#).is_err());
    }

    #[test]
    fn test_item_json_shape() {
        let item = Item {
            id: "abc".to_string(),
            name: "widget".to_string(),
            value: 3.5,
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({ "id": "abc", "name": "widget", "value": 3.5 })
        );
    }
}
