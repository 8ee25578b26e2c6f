//! Monster species master data.
//!
//! Read-only reference records seeded once at startup. Everything that
//! carries a species id (owned monsters, wild snapshots, battle state)
//! must resolve against this catalog.

use crate::errors::NotFoundError;
use once_cell::sync::Lazy;
use schema::{MonsterSpecies, Rarity};

/// Species granted to every newly created player.
pub const STARTER_SPECIES_ID: &str = "electric_mouse";

static CATALOG: Lazy<Vec<MonsterSpecies>> = Lazy::new(|| {
    vec![
        MonsterSpecies::new("electric_mouse", "でんきネズミ", 35, Rarity::Common),
        MonsterSpecies::new("fire_lizard", "ほのおトカゲ", 39, Rarity::Common),
        MonsterSpecies::new("water_turtle", "みずガメ", 44, Rarity::Common),
        MonsterSpecies::new("grass_mole", "くさモグラ", 40, Rarity::Common),
        MonsterSpecies::new("wind_hawk", "かぜタカ", 42, Rarity::Rare),
        MonsterSpecies::new("rock_golem", "いわゴーレム", 80, Rarity::Rare),
        MonsterSpecies::new("ice_fox", "こおりキツネ", 38, Rarity::Rare),
        MonsterSpecies::new("baby_dragon", "りゅうのこ", 55, Rarity::Epic),
    ]
});

/// Returns the full species catalog in seeding order.
pub fn all_species() -> &'static [MonsterSpecies] {
    &CATALOG
}

/// Looks up one species by id.
pub fn get_species_data(species_id: &str) -> Result<&'static MonsterSpecies, NotFoundError> {
    CATALOG
        .iter()
        .find(|species| species.id == species_id)
        .ok_or_else(|| NotFoundError::Species(species_id.to_string()))
}

/// Returns every species of the given rarity tier.
pub fn species_of_rarity(rarity: Rarity) -> Vec<&'static MonsterSpecies> {
    CATALOG
        .iter()
        .filter(|species| species.rarity == rarity)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_starter_species_is_the_35_hp_electric_mouse() {
        let starter = get_species_data(STARTER_SPECIES_ID).unwrap();
        assert_eq!(starter.name, "でんきネズミ");
        assert_eq!(starter.base_hp, 35);
        assert_eq!(starter.rarity, Rarity::Common);
    }

    #[test]
    fn unknown_species_ids_are_reported() {
        let err = get_species_data("missing_no").unwrap_err();
        assert_eq!(err, NotFoundError::Species("missing_no".to_string()));
    }

    #[test]
    fn every_rarity_tier_has_at_least_one_species() {
        for rarity in [Rarity::Common, Rarity::Rare, Rarity::Epic] {
            assert!(
                !species_of_rarity(rarity).is_empty(),
                "no species with rarity {:?}",
                rarity
            );
        }
    }

    #[test]
    fn catalog_ids_are_unique_and_hp_is_positive() {
        let mut ids: Vec<&str> = all_species().iter().map(|s| s.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all_species().len());
        assert!(all_species().iter().all(|s| s.base_hp >= 1));
    }
}
