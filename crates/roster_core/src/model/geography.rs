//! State / district / city lookup records.
//!
//! # Invariants
//! - `District::state_id` points at `State::state_id` (business id).
//! - `City::district_id` points at `District::district_id` (business id).
//! - `State::state_id` is unique; district and city ids are only expected to
//!   be unique within their parent and are not enforced.

use super::SurrogateId;
use serde::{Deserialize, Serialize};

/// Top-level administrative region (`statet` table).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    /// Surrogate id; `None` until inserted.
    pub id: Option<SurrogateId>,
    /// Business id referenced by `District::state_id`.
    pub state_id: i32,
    pub state_name: Option<String>,
}

impl State {
    pub fn new(state_id: i32, state_name: impl Into<String>) -> Self {
        Self {
            id: None,
            state_id,
            state_name: Some(state_name.into()),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// District inside a state (`districtt` table).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct District {
    pub id: Option<SurrogateId>,
    /// Business id referenced by `City::district_id`.
    pub district_id: i32,
    pub district_name: Option<String>,
    /// Business id of the owning state.
    pub state_id: i32,
}

impl District {
    pub fn new(district_id: i32, district_name: impl Into<String>, state_id: i32) -> Self {
        Self {
            id: None,
            district_id,
            district_name: Some(district_name.into()),
            state_id,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// City inside a district (`cityt` table).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: Option<SurrogateId>,
    pub city_id: i32,
    pub city_name: Option<String>,
    /// Business id of the owning district.
    pub district_id: i32,
}

impl City {
    pub fn new(city_id: i32, city_name: impl Into<String>, district_id: i32) -> Self {
        Self {
            id: None,
            city_id,
            city_name: Some(city_name.into()),
            district_id,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Result of walking City -> District -> State by business ids.
///
/// References are not foreign keys, so either hop may dangle. A missing
/// district also leaves `state` empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityLocation {
    pub city: City,
    pub district: Option<District>,
    pub state: Option<State>,
}

impl CityLocation {
    /// Returns whether both hops resolved.
    pub fn is_complete(&self) -> bool {
        self.district.is_some() && self.state.is_some()
    }
}
