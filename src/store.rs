//! In-process persistence.
//!
//! Players and owned monsters live in `RwLock`-guarded tables addressed by
//! primary key; live battle sessions sit in their own registry. Lock
//! poisoning is reported as an infrastructure error rather than a panic,
//! so one bad request cannot wedge the process.

use crate::battle::state::BattleInfo;
use crate::errors::InfrastructureError;
use crate::monster::OwnedMonster;
use crate::player::Player;
use std::collections::HashMap;
use std::sync::RwLock;

type StoreResult<T> = Result<T, InfrastructureError>;

fn lock_error<E: std::fmt::Display>(err: E) -> InfrastructureError {
    InfrastructureError::StoreUnavailable(err.to_string())
}

/// Shared tables for players and their monsters.
#[derive(Default)]
pub struct MemoryStore {
    players: RwLock<HashMap<String, Player>>,
    monsters: RwLock<HashMap<String, OwnedMonster>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cheap liveness check for the health endpoint.
    pub fn ping(&self) -> bool {
        self.players.read().is_ok() && self.monsters.read().is_ok()
    }

    pub fn insert_player(&self, player: Player) -> StoreResult<()> {
        let mut players = self.players.write().map_err(lock_error)?;
        players.insert(player.id.clone(), player);
        Ok(())
    }

    pub fn get_player(&self, player_id: &str) -> StoreResult<Option<Player>> {
        let players = self.players.read().map_err(lock_error)?;
        Ok(players.get(player_id).cloned())
    }

    pub fn insert_monster(&self, monster: OwnedMonster) -> StoreResult<()> {
        let mut monsters = self.monsters.write().map_err(lock_error)?;
        monsters.insert(monster.id.clone(), monster);
        Ok(())
    }

    pub fn get_monster(&self, monster_id: &str) -> StoreResult<Option<OwnedMonster>> {
        let monsters = self.monsters.read().map_err(lock_error)?;
        Ok(monsters.get(monster_id).cloned())
    }

    /// All monsters owned by a player, oldest capture first.
    pub fn monsters_for_player(&self, player_id: &str) -> StoreResult<Vec<OwnedMonster>> {
        let monsters = self.monsters.read().map_err(lock_error)?;
        let mut owned: Vec<OwnedMonster> = monsters
            .values()
            .filter(|monster| monster.player_id == player_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.captured_at.cmp(&b.captured_at).then(a.id.cmp(&b.id)));
        Ok(owned)
    }

    /// Applies `mutate` to the row if it exists and returns the updated copy.
    pub fn update_monster<F>(&self, monster_id: &str, mutate: F) -> StoreResult<Option<OwnedMonster>>
    where
        F: FnOnce(&mut OwnedMonster),
    {
        let mut monsters = self.monsters.write().map_err(lock_error)?;
        Ok(monsters.get_mut(monster_id).map(|monster| {
            mutate(monster);
            monster.clone()
        }))
    }
}

/// Live battle sessions keyed by battle id.
///
/// Concluded sessions stay in the registry so a late duplicate submission
/// gets a state-conflict answer instead of a 404.
#[derive(Default)]
pub struct BattleRegistry {
    battles: RwLock<HashMap<String, BattleInfo>>,
}

impl BattleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, battle: BattleInfo) -> StoreResult<()> {
        let mut battles = self.battles.write().map_err(lock_error)?;
        battles.insert(battle.battle_id.clone(), battle);
        Ok(())
    }

    pub fn get(&self, battle_id: &str) -> StoreResult<Option<BattleInfo>> {
        let battles = self.battles.read().map_err(lock_error)?;
        Ok(battles.get(battle_id).cloned())
    }

    /// Overwrites the stored session with the post-action state.
    pub fn save(&self, battle: BattleInfo) -> StoreResult<()> {
        self.insert(battle)
    }
}
