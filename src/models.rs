use serde::{Deserialize, Deserializer, Serialize};

/// A single record returned by the items endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    /// The backend allows a null description; it is kept as an empty string
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Item {
            id,
            name: name.into(),
            description: description.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Everything the renderer needs to know about the fetched data.
///
/// `loading` is true only between the start of a fetch and its settlement.
/// `error` is only set by a failed fetch and is cleared when the next one
/// starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub items: Vec<Item>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ViewState {
    /// Initial state at startup: a fetch is issued immediately, so we start
    /// out loading.
    fn default() -> Self {
        ViewState {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl ViewState {
    /// True once a fetch has settled without error and returned nothing
    pub fn is_empty_loaded(&self) -> bool {
        !self.loading && self.error.is_none() && self.items.is_empty()
    }

    /// True once a fetch has settled without error and returned items
    pub fn has_items_loaded(&self) -> bool {
        !self.loading && self.error.is_none() && !self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_array() {
        let body = r#"[{"id": 1, "name": "Widget", "description": "A widget"}]"#;
        let items: Vec<Item> = serde_json::from_str(body).unwrap();
        assert_eq!(items, vec![Item::new(1, "Widget", "A widget")]);
    }

    #[test]
    fn test_null_or_missing_description() {
        let body = r#"[{"id": 2, "name": "Bolt", "description": null}, {"id": 3, "name": "Nut"}]"#;
        let items: Vec<Item> = serde_json::from_str(body).unwrap();
        assert_eq!(items[0].description, "");
        assert_eq!(items[1].description, "");
    }

    #[test]
    fn test_initial_view_state_is_loading() {
        let view = ViewState::default();
        assert!(view.loading);
        assert!(view.items.is_empty());
        assert!(view.error.is_none());
        assert!(!view.is_empty_loaded());
    }
}
