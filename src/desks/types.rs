use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::memory::Resource;

/// Left- or right-handed desk configuration.
///
/// Any other wire value fails deserialization at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandConfig {
    Left,
    Right,
}

/// A stored desk record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Desk {
    pub id: Uuid,
    pub label: String,
    pub hand_config: HandConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The desk shape embedded inside a classroom record.
///
/// Embedded desks carry no timestamps, and a missing `id` is generated
/// during deserialization so every embedded desk ends up addressable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedDesk {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub label: String,
    pub hand_config: HandConfig,
}

/// Creation payload. A missing `id` is generated server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDeskRequest {
    pub id: Option<Uuid>,
    pub label: String,
    pub hand_config: HandConfig,
}

/// Partial update payload; only supplied fields change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDeskRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hand_config: Option<HandConfig>,
}

/// Exact-match list filters; absent fields impose no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeskQuery {
    pub label: Option<String>,
    pub hand_config: Option<HandConfig>,
}

/// Confirmation body returned by a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskDeleted {
    pub confirmation: String,
}

impl Desk {
    pub fn new(id: Uuid, payload: CreateDeskRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            label: payload.label,
            hand_config: payload.hand_config,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, patch: UpdateDeskRequest) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(hand_config) = patch.hand_config {
            self.hand_config = hand_config;
        }
    }

    /// Overwrites the payload fields wholesale, keeping id and creation time.
    pub fn replace_with(&mut self, payload: CreateDeskRequest) {
        self.label = payload.label;
        self.hand_config = payload.hand_config;
    }
}

impl Resource for Desk {
    const KIND: &'static str = "Desk";

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl DeskQuery {
    /// True when the desk satisfies every supplied filter.
    pub fn matches(&self, desk: &Desk) -> bool {
        if let Some(label) = &self.label {
            if &desk.label != label {
                return false;
            }
        }
        if let Some(hand_config) = self.hand_config {
            if desk.hand_config != hand_config {
                return false;
            }
        }
        true
    }
}
