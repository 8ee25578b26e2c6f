use serde::{Deserialize, Serialize};

/// How often a species shows up in the wild. The wire format uses the
/// lowercase English tier names; `Display` renders the in-game Japanese
/// labels used by narrative text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[strum(serialize = "コモン")]
    Common,
    #[strum(serialize = "レア")]
    Rare,
    #[strum(serialize = "エピック")]
    Epic,
}

/// Read-only master data describing one monster species.
///
/// Seeded once at startup; every `OwnedMonster` and `WildMonster` must
/// reference one of these records by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterSpecies {
    pub id: String,
    pub name: String,
    pub base_hp: u16,
    pub rarity: Rarity,
}

impl MonsterSpecies {
    pub fn new(id: &str, name: &str, base_hp: u16, rarity: Rarity) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            base_hp,
            rarity,
        }
    }
}
