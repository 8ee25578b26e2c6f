use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered player. Created once; the name is validated before this
/// struct is ever constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Player {
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            created_at: Utc::now(),
        }
    }
}
