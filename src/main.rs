//! HTTP JSON server for the monster-quest backend.
//!
//! Routes are thin: deserialize, delegate to `api`, wrap the result in the
//! success/error envelope with the matching status code.

use monster_quest::api::{
    self, ActionResponse, ApiData, ApiError as ApiErrorBody, AppState, BattleActionRequest,
    CreatePlayerRequest, CreatedPlayer, HealthStatus, PlayerMonsters, SpeciesList,
    StartBattleRequest, UpdateNicknameRequest,
};
use monster_quest::{BattleInfo, GameError, GameRng, OwnedMonster};
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::{get, patch, post, routes, State};

/// Carries a `GameError` out of a route with the right status code.
struct ApiError(GameError);

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        ApiError(err)
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        let status = match &self.0 {
            GameError::Validation(_) => Status::BadRequest,
            GameError::NotFound(_) => Status::NotFound,
            GameError::StateConflict(_) => Status::Conflict,
            GameError::Infrastructure(_) => Status::InternalServerError,
        };
        if status == Status::InternalServerError {
            log::error!("request failed: {}", self.0);
        }
        let mut response = Json(ApiErrorBody::from_game_error(&self.0)).respond_to(req)?;
        response.set_status(status);
        Ok(response)
    }
}

#[get("/health")]
fn health(state: &State<AppState>) -> Json<HealthStatus> {
    Json(api::health(state))
}

#[get("/monster-species")]
fn list_species() -> Json<SpeciesList> {
    Json(api::list_species())
}

#[post("/players", data = "<req>")]
fn create_player(
    state: &State<AppState>,
    req: Json<CreatePlayerRequest>,
) -> Result<Json<ApiData<CreatedPlayer>>, ApiError> {
    let created = api::create_player(state, req.into_inner())?;
    Ok(Json(ApiData::new(created)))
}

#[get("/players/<id>/monsters")]
fn list_player_monsters(
    state: &State<AppState>,
    id: &str,
) -> Result<Json<ApiData<PlayerMonsters>>, ApiError> {
    let listing = api::list_player_monsters(state, id)?;
    Ok(Json(ApiData::new(listing)))
}

#[patch("/monsters/<id>", data = "<req>")]
fn update_nickname(
    state: &State<AppState>,
    id: &str,
    req: Json<UpdateNicknameRequest>,
) -> Result<Json<ApiData<OwnedMonster>>, ApiError> {
    let updated = api::update_nickname(state, id, req.into_inner())?;
    Ok(Json(ApiData::new(updated)))
}

#[post("/battles", data = "<req>")]
fn start_battle(
    state: &State<AppState>,
    req: Json<StartBattleRequest>,
) -> Result<Json<BattleInfo>, ApiError> {
    let battle = api::start_battle(state, req.into_inner())?;
    Ok(Json(battle))
}

#[post("/battles/<id>/actions", data = "<req>")]
fn submit_action(
    state: &State<AppState>,
    id: &str,
    req: Json<BattleActionRequest>,
) -> Result<Json<ActionResponse>, ApiError> {
    let mut rng = GameRng::new_random();
    let outcome = api::submit_action(state, id, req.into_inner(), &mut rng)?;
    Ok(Json(outcome))
}

#[rocket::main]
async fn main() -> Result<(), rocket::Error> {
    env_logger::init();
    log::info!("starting monster-quest server");

    let _ = rocket::build()
        .manage(AppState::new())
        .mount(
            "/",
            routes![
                health,
                list_species,
                create_player,
                list_player_monsters,
                update_nickname,
                start_battle,
                submit_action,
            ],
        )
        .launch()
        .await?;
    Ok(())
}
