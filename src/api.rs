//! Typed API surface: request/response shapes plus the service functions
//! the HTTP routes delegate to.
//!
//! Every function here is callable without a running server, which is how
//! the end-to-end tests exercise the full flows. Randomness for battle
//! actions is injected so tests can script outcomes.

use crate::battle::engine;
use crate::battle::state::BattleInfo;
use crate::errors::{GameError, GameResult, NotFoundError, ValidationError};
use crate::ids::{IdGenerator, BATTLE_TOKEN_LEN};
use crate::monster::{OwnedMonster, WildMonster};
use crate::player::Player;
use crate::rng::GameRng;
use crate::species::{all_species, get_species_data, STARTER_SPECIES_ID};
use crate::store::{BattleRegistry, MemoryStore};
use crate::validation::{validate_battle_action, NICKNAME, PLAYER_NAME};
use chrono::{DateTime, Utc};
use schema::MonsterSpecies;
use serde::{Deserialize, Serialize};

/// Everything a request handler needs, shared across the process.
pub struct AppState {
    pub store: MemoryStore,
    pub battles: BattleRegistry,
    pub ids: IdGenerator,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
            battles: BattleRegistry::new(),
            ids: IdGenerator::detect(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// --- Request payloads ---

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateNicknameRequest {
    pub nickname: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartBattleRequest {
    pub player_id: String,
    pub wild_monster: WildMonster,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BattleActionRequest {
    pub action: String,
}

// --- Response payloads ---

/// The `{success: true, data}` envelope used by the CRUD endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ApiData<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiData<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// The `{success: false, error}` envelope every failure is reported with.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
}

impl ApiError {
    pub fn from_game_error(err: &GameError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub database: &'static str,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeciesList {
    pub success: bool,
    pub data: Vec<MonsterSpecies>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedPlayer {
    pub id: String,
    pub name: String,
    pub initial_monster_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMonsters {
    pub player: Player,
    pub monsters: Vec<OwnedMonster>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub battle_info: BattleInfo,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub captured_monster: Option<OwnedMonster>,
}

// --- Service operations ---

/// `GET /health`
pub fn health(state: &AppState) -> HealthStatus {
    HealthStatus {
        status: "ok",
        database: if state.store.ping() { "ok" } else { "down" },
        timestamp: Utc::now(),
    }
}

/// `GET /monster-species`
pub fn list_species() -> SpeciesList {
    let data = all_species().to_vec();
    let count = data.len();
    SpeciesList {
        success: true,
        data,
        count,
    }
}

/// `POST /players`: validates the name, persists the player, and grants
/// the starter monster at full HP.
pub fn create_player(state: &AppState, req: CreatePlayerRequest) -> GameResult<CreatedPlayer> {
    let name = PLAYER_NAME.validate(&req.name)?;
    let starter_species = get_species_data(STARTER_SPECIES_ID)?;

    let player = Player::new(state.ids.uuid()?, name);
    let starter = OwnedMonster::starter(state.ids.uuid()?, player.id.clone(), starter_species);

    state.store.insert_player(player.clone())?;
    state.store.insert_monster(starter.clone())?;
    log::info!("created player {} with starter {}", player.id, starter.id);

    Ok(CreatedPlayer {
        id: player.id,
        name: player.name,
        initial_monster_id: starter.id,
    })
}

/// `GET /players/<id>/monsters`
pub fn list_player_monsters(state: &AppState, player_id: &str) -> GameResult<PlayerMonsters> {
    let player = state
        .store
        .get_player(player_id)?
        .ok_or_else(|| NotFoundError::Player(player_id.to_string()))?;
    let monsters = state.store.monsters_for_player(player_id)?;
    Ok(PlayerMonsters { player, monsters })
}

/// `PATCH /monsters/<id>`
pub fn update_nickname(
    state: &AppState,
    monster_id: &str,
    req: UpdateNicknameRequest,
) -> GameResult<OwnedMonster> {
    let nickname = NICKNAME.validate(&req.nickname)?;

    let monster = state
        .store
        .get_monster(monster_id)?
        .ok_or_else(|| NotFoundError::Monster(monster_id.to_string()))?;
    // The owning player must still exist for the row to be addressable.
    state
        .store
        .get_player(&monster.player_id)?
        .ok_or_else(|| NotFoundError::Player(monster.player_id.clone()))?;

    let updated = state
        .store
        .update_monster(monster_id, |monster| {
            monster.nickname = Some(nickname);
        })?
        .ok_or_else(|| NotFoundError::Monster(monster_id.to_string()))?;
    Ok(updated)
}

/// `POST /battles`: opens a battle session for the submitted wild snapshot.
pub fn start_battle(state: &AppState, req: StartBattleRequest) -> GameResult<BattleInfo> {
    state
        .store
        .get_player(&req.player_id)?
        .ok_or_else(|| NotFoundError::Player(req.player_id.clone()))?;

    let species = get_species_data(&req.wild_monster.species_id)?;
    let wild = req.wild_monster;
    if wild.max_hp != species.base_hp || wild.current_hp == 0 || wild.current_hp > wild.max_hp {
        return Err(ValidationError::new(
            "wildMonster",
            "やせいモンスターのHPが不正です",
        )
        .into());
    }

    let battle = engine::start_battle(
        state.ids.short_id(BATTLE_TOKEN_LEN),
        req.player_id,
        wild,
    );
    state.battles.insert(battle.clone())?;
    log::debug!(
        "battle {} started against {}",
        battle.battle_id,
        battle.wild_monster.species_name
    );
    Ok(battle)
}

/// `POST /battles/<id>/actions`: applies one fight/capture/flee action.
///
/// The caller supplies the randomness so scripted outcomes are possible in
/// tests; the server passes `GameRng::new_random()`.
pub fn submit_action(
    state: &AppState,
    battle_id: &str,
    req: BattleActionRequest,
    rng: &mut GameRng,
) -> GameResult<ActionResponse> {
    let action = validate_battle_action(&req.action)?;
    let mut battle = state
        .battles
        .get(battle_id)?
        .ok_or_else(|| NotFoundError::Battle(battle_id.to_string()))?;

    // The lead monster is the oldest owned monster that can still fight.
    let mut lead = state
        .store
        .monsters_for_player(&battle.player_id)?
        .into_iter()
        .find(|monster| !monster.is_fainted());

    let events = engine::apply_action(&mut battle, lead.as_mut(), action, rng)
        .map_err(GameError::StateConflict)?;

    // Persist the counter-attack damage, if any landed.
    if let Some(lead) = &lead {
        state.store.update_monster(&lead.id, |stored| {
            stored.current_hp = lead.current_hp;
        })?;
    }

    let captured_monster = if battle.state == schema::BattlePhase::Capture {
        let species = get_species_data(&battle.wild_monster.species_id)?;
        let captured = OwnedMonster::from_capture(
            state.ids.uuid()?,
            battle.player_id.clone(),
            &battle.wild_monster,
            species,
        );
        state.store.insert_monster(captured.clone())?;
        log::info!(
            "player {} captured {} as {}",
            battle.player_id,
            captured.species_name,
            captured.id
        );
        Some(captured)
    } else {
        None
    };

    state.battles.save(battle.clone())?;

    let message = events
        .iter()
        .map(|event| event.format())
        .collect::<Vec<_>>()
        .join("\n");

    Ok(ActionResponse {
        battle_info: battle,
        message,
        captured_monster,
    })
}
