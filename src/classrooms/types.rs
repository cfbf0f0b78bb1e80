use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::desks::types::{EmbeddedDesk, HandConfig};
use crate::storage::memory::Resource;

/// A stored classroom record.
///
/// The embedded `desks` are owned copies, not references into the desk
/// store; mutating one side never affects the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    pub id: Uuid,
    pub room_no: String,
    pub building: String,
    pub university: Option<String>,
    pub desks: Vec<EmbeddedDesk>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation payload. A missing `id` is generated server-side and a missing
/// `desks` list starts empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClassroomRequest {
    pub id: Option<Uuid>,
    pub room_no: String,
    pub building: String,
    pub university: Option<String>,
    #[serde(default)]
    pub desks: Vec<EmbeddedDesk>,
}

/// Partial update payload; only supplied fields change.
///
/// `university` distinguishes "omitted" (outer `None`, field untouched) from
/// "explicit null" (inner `None`, field cleared). A supplied `desks` list
/// replaces the embedded desks wholesale; there is no per-desk merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClassroomRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(
        default,
        deserialize_with = "double_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub university: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desks: Option<Vec<EmbeddedDesk>>,
}

/// Deserializes a present field into `Some(value_or_null)` so a patch can
/// tell an omitted field apart from an explicit `null`.
fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// List filters. `room_no`/`building`/`university` match the classroom's own
/// fields; `label` and `hand_config` match when any embedded desk has them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassroomQuery {
    pub room_no: Option<String>,
    pub building: Option<String>,
    pub university: Option<String>,
    pub label: Option<String>,
    pub hand_config: Option<HandConfig>,
}

/// Confirmation body returned by a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassroomDeleted {
    pub confirmation: String,
}

impl Classroom {
    pub fn new(id: Uuid, payload: CreateClassroomRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            room_no: payload.room_no,
            building: payload.building,
            university: payload.university,
            desks: payload.desks,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply_update(&mut self, patch: UpdateClassroomRequest) {
        if let Some(room_no) = patch.room_no {
            self.room_no = room_no;
        }
        if let Some(building) = patch.building {
            self.building = building;
        }
        if let Some(university) = patch.university {
            self.university = university;
        }
        if let Some(desks) = patch.desks {
            self.desks = desks;
        }
    }

    /// Overwrites the payload fields wholesale, keeping id and creation time.
    pub fn replace_with(&mut self, payload: CreateClassroomRequest) {
        self.room_no = payload.room_no;
        self.building = payload.building;
        self.university = payload.university;
        self.desks = payload.desks;
    }
}

impl Resource for Classroom {
    const KIND: &'static str = "Classroom";

    fn id(&self) -> Uuid {
        self.id
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl ClassroomQuery {
    /// True when the classroom satisfies every supplied filter.
    ///
    /// Desk-level filters are evaluated independently: a classroom with a
    /// left-handed "A1" and a right-handed "B2" matches `label=A1` combined
    /// with `hand_config=Right`, even though no single desk has both.
    pub fn matches(&self, classroom: &Classroom) -> bool {
        if let Some(room_no) = &self.room_no {
            if &classroom.room_no != room_no {
                return false;
            }
        }
        if let Some(building) = &self.building {
            if &classroom.building != building {
                return false;
            }
        }
        if let Some(university) = &self.university {
            if classroom.university.as_ref() != Some(university) {
                return false;
            }
        }
        if let Some(label) = &self.label {
            if !classroom.desks.iter().any(|desk| &desk.label == label) {
                return false;
            }
        }
        if let Some(hand_config) = self.hand_config {
            if !classroom
                .desks
                .iter()
                .any(|desk| desk.hand_config == hand_config)
            {
                return false;
            }
        }
        true
    }
}
