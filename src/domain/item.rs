//! Item catalog types.
//! No GPUI dependencies - this is the domain layer.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(1);

/// Process-local identity of one item value on screen.
///
/// Never serialized. Assigned when the value is created and kept across
/// moves and edits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct InstanceId(u64);

impl InstanceId {
    pub fn next() -> Self {
        Self(NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        }
    }
}

/// A board or inventory item
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(skip, default = "InstanceId::next")]
    instance_id: InstanceId,
    pub item_id: u64,
    pub item_type: String,
    pub chain_id: String,
    pub item_level: u32,
    pub created_at: DateTime<Utc>,
    pub paused_until: Option<DateTime<Utc>>,
    pub visibility: Visibility,
    pub is_inside_bubble: bool,
}

impl Item {
    pub fn new(
        item_id: u64,
        item_type: impl Into<String>,
        chain_id: impl Into<String>,
        item_level: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            instance_id: InstanceId::next(),
            item_id,
            item_type: item_type.into(),
            chain_id: chain_id.into(),
            item_level,
            created_at,
            paused_until: None,
            visibility: Visibility::Visible,
            is_inside_bubble: false,
        }
    }

    pub fn instance_id(&self) -> InstanceId {
        self.instance_id
    }

    /// Same catalog fields under a fresh instance id
    pub fn duplicate(&self) -> Self {
        Self {
            instance_id: InstanceId::next(),
            ..self.clone()
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.visibility == Visibility::Hidden
    }

    /// Hidden items and items inside a bubble cannot be picked up
    pub fn is_locked(&self) -> bool {
        self.is_hidden() || self.is_inside_bubble
    }

    /// Apply a partial update. Instance id is kept.
    pub fn edited(&self, edit: &ItemEdit) -> Self {
        let mut item = self.clone();
        if let Some(item_id) = edit.item_id {
            item.item_id = item_id;
        }
        if let Some(item_type) = &edit.item_type {
            item.item_type = item_type.clone();
        }
        if let Some(chain_id) = &edit.chain_id {
            item.chain_id = chain_id.clone();
        }
        if let Some(level) = edit.item_level {
            item.item_level = level;
        }
        if let Some(created_at) = edit.created_at {
            item.created_at = created_at;
        }
        if let Some(paused_until) = edit.paused_until {
            item.paused_until = paused_until;
        }
        if let Some(visibility) = edit.visibility {
            item.visibility = visibility;
        }
        if let Some(in_bubble) = edit.is_inside_bubble {
            item.is_inside_bubble = in_bubble;
        }
        item
    }
}

/// Partial update of an item's catalog fields. `None` leaves a field alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemEdit {
    pub item_id: Option<u64>,
    pub item_type: Option<String>,
    pub chain_id: Option<String>,
    pub item_level: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub paused_until: Option<Option<DateTime<Utc>>>,
    pub visibility: Option<Visibility>,
    pub is_inside_bubble: Option<bool>,
}

impl ItemEdit {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("item id must be a whole number, got {0:?}")]
    InvalidItemId(String),
    #[error("level must be a whole number, got {0:?}")]
    InvalidLevel(String),
    #[error("{field} must be an RFC 3339 timestamp, got {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },
    #[error("visibility must be \"visible\" or \"hidden\", got {0:?}")]
    InvalidVisibility(String),
}

/// Text form of an item as typed into the edit panel
#[derive(Clone, Debug, PartialEq)]
pub struct ItemDraft {
    pub item_id: String,
    pub item_type: String,
    pub chain_id: String,
    pub item_level: String,
    pub created_at: String,
    pub paused_until: String,
    pub visibility: String,
    pub is_inside_bubble: bool,
}

impl ItemDraft {
    pub fn from_item(item: &Item) -> Self {
        Self {
            item_id: item.item_id.to_string(),
            item_type: item.item_type.clone(),
            chain_id: item.chain_id.clone(),
            item_level: item.item_level.to_string(),
            created_at: item.created_at.to_rfc3339(),
            paused_until: item
                .paused_until
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            visibility: item.visibility.as_str().to_string(),
            is_inside_bubble: item.is_inside_bubble,
        }
    }

    /// Parse the draft and keep only the fields that differ from `original`.
    /// An empty "paused until" clears the pause.
    pub fn to_edit(&self, original: &Item) -> Result<ItemEdit, DraftError> {
        let item_id = self
            .item_id
            .trim()
            .parse::<u64>()
            .map_err(|_| DraftError::InvalidItemId(self.item_id.clone()))?;
        let item_level = self
            .item_level
            .trim()
            .parse::<u32>()
            .map_err(|_| DraftError::InvalidLevel(self.item_level.clone()))?;
        let created_at = parse_timestamp("createdAt", &self.created_at)?;
        let paused_until = if self.paused_until.trim().is_empty() {
            None
        } else {
            Some(parse_timestamp("pausedUntil", &self.paused_until)?)
        };
        let visibility = match self.visibility.trim() {
            "visible" => Visibility::Visible,
            "hidden" => Visibility::Hidden,
            other => return Err(DraftError::InvalidVisibility(other.to_string())),
        };
        let item_type = self.item_type.trim();
        let chain_id = self.chain_id.trim();

        Ok(ItemEdit {
            item_id: (item_id != original.item_id).then_some(item_id),
            item_type: (item_type != original.item_type).then(|| item_type.to_string()),
            chain_id: (chain_id != original.chain_id).then(|| chain_id.to_string()),
            item_level: (item_level != original.item_level).then_some(item_level),
            created_at: (created_at != original.created_at).then_some(created_at),
            paused_until: (paused_until != original.paused_until).then_some(paused_until),
            visibility: (visibility != original.visibility).then_some(visibility),
            is_inside_bubble: (self.is_inside_bubble != original.is_inside_bubble)
                .then_some(self.is_inside_bubble),
        })
    }
}

fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, DraftError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| DraftError::InvalidTimestamp {
            field,
            value: value.to_string(),
        })
}

#[cfg(test)]
pub(crate) fn test_item(item_type: &str) -> Item {
    let created_at = DateTime::parse_from_rfc3339("2023-05-29T17:10:06.908Z")
        .map(|t| t.with_timezone(&Utc))
        .unwrap();
    Item::new(1, item_type, item_type, 1, created_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_source_shape() {
        let json = r#"{
            "itemId": 1177,
            "itemType": "BroomCabinet_08",
            "chainId": "BroomCabinet",
            "pausedUntil": null,
            "createdAt": "2023-05-29T17:10:06.9080000Z",
            "visibility": "hidden",
            "itemLevel": 8,
            "isInsideBubble": false
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.item_id, 1177);
        assert_eq!(item.item_type, "BroomCabinet_08");
        assert_eq!(item.chain_id, "BroomCabinet");
        assert_eq!(item.item_level, 8);
        assert_eq!(item.visibility, Visibility::Hidden);
        assert!(item.paused_until.is_none());
        assert!(item.is_locked());
    }

    #[test]
    fn test_instance_id_not_serialized() {
        let item = test_item("Axe");
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("instanceId").is_none());
        assert!(json.get("itemType").is_some());
    }

    #[test]
    fn test_deserialized_items_get_distinct_instances() {
        let json = serde_json::to_string(&test_item("Axe")).unwrap();
        let a: Item = serde_json::from_str(&json).unwrap();
        let b: Item = serde_json::from_str(&json).unwrap();
        assert_ne!(a.instance_id(), b.instance_id());
    }

    #[test]
    fn test_locked_flags() {
        let mut item = test_item("Axe");
        assert!(!item.is_locked());
        item.is_inside_bubble = true;
        assert!(item.is_locked());
        item.is_inside_bubble = false;
        item.visibility = Visibility::Hidden;
        assert!(item.is_locked());
    }

    #[test]
    fn test_duplicate_gets_new_instance() {
        let item = test_item("Axe");
        let copy = item.duplicate();
        assert_ne!(item.instance_id(), copy.instance_id());
        assert_eq!(copy.item_type, "Axe");
    }

    #[test]
    fn test_edit_touches_only_given_fields() {
        let item = test_item("Axe");
        let edit = ItemEdit {
            item_level: Some(4),
            is_inside_bubble: Some(true),
            ..Default::default()
        };
        let edited = item.edited(&edit);
        assert_eq!(edited.instance_id(), item.instance_id());
        assert_eq!(edited.item_level, 4);
        assert!(edited.is_inside_bubble);
        assert_eq!(edited.item_type, item.item_type);
        assert_eq!(edited.created_at, item.created_at);
        assert_eq!(edited.visibility, item.visibility);
    }

    #[test]
    fn test_unchanged_draft_is_empty_edit() {
        let item = test_item("Axe");
        let edit = ItemDraft::from_item(&item).to_edit(&item).unwrap();
        assert!(edit.is_empty());
    }

    #[test]
    fn test_draft_picks_up_changes() {
        let item = test_item("Axe");
        let mut draft = ItemDraft::from_item(&item);
        draft.item_level = " 3 ".to_string();
        draft.visibility = "hidden".to_string();
        draft.paused_until = "2024-01-01T00:00:00Z".to_string();

        let edit = draft.to_edit(&item).unwrap();
        assert_eq!(edit.item_level, Some(3));
        assert_eq!(edit.visibility, Some(Visibility::Hidden));
        assert!(matches!(edit.paused_until, Some(Some(_))));
        assert_eq!(edit.item_type, None);
        assert_eq!(edit.created_at, None);
    }

    #[test]
    fn test_draft_rejects_bad_input() {
        let item = test_item("Axe");
        let mut draft = ItemDraft::from_item(&item);
        draft.item_level = "three".to_string();
        assert_eq!(
            draft.to_edit(&item),
            Err(DraftError::InvalidLevel("three".to_string()))
        );

        let mut draft = ItemDraft::from_item(&item);
        draft.created_at = "yesterday".to_string();
        assert!(matches!(
            draft.to_edit(&item),
            Err(DraftError::InvalidTimestamp { field: "createdAt", .. })
        ));

        let mut draft = ItemDraft::from_item(&item);
        draft.visibility = "maybe".to_string();
        assert!(matches!(
            draft.to_edit(&item),
            Err(DraftError::InvalidVisibility(_))
        ));
    }
}
