//! End-to-end flows through the service layer: registration with a
//! starter, monster listing, nickname edits, and full battle sessions.

use monster_quest::api::{
    self, AppState, BattleActionRequest, CreatePlayerRequest, StartBattleRequest,
    UpdateNicknameRequest,
};
use monster_quest::{
    get_species_data, BattlePhase, GameError, GameRng, NotFoundError, WildMonster,
};
use pretty_assertions::assert_eq;

fn fight(action: &str) -> BattleActionRequest {
    BattleActionRequest {
        action: action.to_string(),
    }
}

fn registered_player(state: &AppState, name: &str) -> api::CreatedPlayer {
    api::create_player(
        state,
        CreatePlayerRequest {
            name: name.to_string(),
        },
    )
    .expect("player creation should succeed")
}

#[test]
fn creating_a_player_grants_one_starter_at_full_hp() {
    let state = AppState::new();
    let created = registered_player(&state, "テストプレイヤー");

    assert!(!created.id.is_empty());
    assert_eq!(created.name, "テストプレイヤー");

    let listing = api::list_player_monsters(&state, &created.id).unwrap();
    assert_eq!(listing.player.name, "テストプレイヤー");
    assert_eq!(listing.monsters.len(), 1);

    let starter = &listing.monsters[0];
    assert_eq!(starter.id, created.initial_monster_id);
    assert_eq!(starter.species_name, "でんきネズミ");
    assert_eq!(starter.current_hp, 35);
    assert_eq!(starter.max_hp, 35);
    assert!(starter.nickname.is_none());
}

#[test]
fn unknown_players_get_a_404_with_the_japanese_message() {
    let state = AppState::new();
    let err = api::list_player_monsters(&state, "non_existent_player").unwrap_err();
    assert!(matches!(err, GameError::NotFound(NotFoundError::Player(_))));
    assert!(err.to_string().contains("プレイヤーが見つかりません"));
}

#[test]
fn empty_and_overlong_names_fail_validation_with_the_length_rule() {
    let state = AppState::new();
    for bad_name in ["", &"あ".repeat(21)] {
        let err = api::create_player(
            &state,
            CreatePlayerRequest {
                name: bad_name.to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, GameError::Validation(_)), "{:?}", err);
        assert!(
            err.to_string().contains("3〜20文字"),
            "message was: {}",
            err
        );
    }
}

#[test]
fn nickname_updates_persist_and_reject_bad_input() {
    let state = AppState::new();
    let created = registered_player(&state, "ニックネーマー");

    let updated = api::update_nickname(
        &state,
        &created.initial_monster_id,
        UpdateNicknameRequest {
            nickname: "ピカまる".to_string(),
        },
    )
    .unwrap();
    assert_eq!(updated.nickname.as_deref(), Some("ピカまる"));

    let listing = api::list_player_monsters(&state, &created.id).unwrap();
    assert_eq!(listing.monsters[0].nickname.as_deref(), Some("ピカまる"));

    let err = api::update_nickname(
        &state,
        &created.initial_monster_id,
        UpdateNicknameRequest {
            nickname: "".to_string(),
        },
    )
    .unwrap_err();
    assert!(err.to_string().contains("1〜20文字"));

    let err = api::update_nickname(
        &state,
        "missing-monster",
        UpdateNicknameRequest {
            nickname: "ピカ".to_string(),
        },
    )
    .unwrap_err();
    assert!(matches!(
        err,
        GameError::NotFound(NotFoundError::Monster(_))
    ));
}

fn wild_at_hp(species_id: &str, current_hp: u16) -> WildMonster {
    let species = get_species_data(species_id).unwrap();
    let mut wild = WildMonster::from_species(species);
    wild.take_damage(wild.max_hp - current_hp);
    wild
}

#[test]
fn a_fight_against_a_one_hp_wild_ends_in_victory() {
    let state = AppState::new();
    let created = registered_player(&state, "バトルテスター");

    let battle = api::start_battle(
        &state,
        StartBattleRequest {
            player_id: created.id.clone(),
            wild_monster: wild_at_hp("fire_lizard", 1),
        },
    )
    .unwrap();
    assert_eq!(battle.state, BattlePhase::Battle);
    assert!(!battle.battle_id.is_empty());

    let mut rng = GameRng::new_for_test(vec![1]);
    let outcome = api::submit_action(&state, &battle.battle_id, fight("fight"), &mut rng).unwrap();

    assert_eq!(outcome.battle_info.state, BattlePhase::Victory);
    assert_eq!(outcome.battle_info.wild_monster.current_hp, 0);
    assert!(outcome.message.contains("をたおした！"));
    assert!(outcome.captured_monster.is_none());
}

#[test]
fn fleeing_concludes_the_battle_and_blocks_further_actions() {
    let state = AppState::new();
    let created = registered_player(&state, "にげるひと");

    let battle = api::start_battle(
        &state,
        StartBattleRequest {
            player_id: created.id.clone(),
            wild_monster: wild_at_hp("rock_golem", 80),
        },
    )
    .unwrap();

    let mut rng = GameRng::new_for_test(vec![]);
    let outcome = api::submit_action(&state, &battle.battle_id, fight("flee"), &mut rng).unwrap();
    assert_eq!(outcome.battle_info.state, BattlePhase::Escape);
    assert_eq!(outcome.message, "うまくにげきれた！");

    let mut rng = GameRng::new_for_test(vec![1, 1]);
    let err = api::submit_action(&state, &battle.battle_id, fight("fight"), &mut rng).unwrap_err();
    assert!(matches!(err, GameError::StateConflict(_)));
    assert!(err.to_string().contains("バトルはすでに終了しています"));
}

#[test]
fn a_forced_capture_persists_the_wild_monster_with_its_hp() {
    let state = AppState::new();
    let created = registered_player(&state, "キャプチャー");

    let battle = api::start_battle(
        &state,
        StartBattleRequest {
            player_id: created.id.clone(),
            wild_monster: wild_at_hp("water_turtle", 10),
        },
    )
    .unwrap();

    // Roll of 1 always lands under the capture chance.
    let mut rng = GameRng::new_for_test(vec![1]);
    let outcome =
        api::submit_action(&state, &battle.battle_id, fight("capture"), &mut rng).unwrap();

    assert_eq!(outcome.battle_info.state, BattlePhase::Capture);
    let captured = outcome.captured_monster.expect("capture emits the new row");
    assert_eq!(captured.current_hp, 10);
    assert_eq!(captured.max_hp, 44);
    assert_eq!(captured.player_id, created.id);
    assert_ne!(captured.id, created.initial_monster_id);
    assert_eq!(captured.id.len(), 36);

    let listing = api::list_player_monsters(&state, &created.id).unwrap();
    assert_eq!(listing.monsters.len(), 2);
    assert!(listing.monsters.iter().any(|m| m.id == captured.id));
}

#[test]
fn bad_action_tokens_and_unknown_battles_are_rejected() {
    let state = AppState::new();
    let mut rng = GameRng::new_for_test(vec![]);

    let err = api::submit_action(&state, "no-such-battle", fight("dance"), &mut rng).unwrap_err();
    assert!(matches!(err, GameError::Validation(_)));

    let err = api::submit_action(&state, "no-such-battle", fight("fight"), &mut rng).unwrap_err();
    assert!(matches!(
        err,
        GameError::NotFound(NotFoundError::Battle(_))
    ));
}

#[test]
fn starting_a_battle_rejects_unknown_players_and_broken_snapshots() {
    let state = AppState::new();
    let err = api::start_battle(
        &state,
        StartBattleRequest {
            player_id: "ghost".to_string(),
            wild_monster: wild_at_hp("fire_lizard", 10),
        },
    )
    .unwrap_err();
    assert!(matches!(err, GameError::NotFound(NotFoundError::Player(_))));

    let created = registered_player(&state, "スナップショット");
    let mut broken = wild_at_hp("fire_lizard", 10);
    broken.max_hp = 9999;
    let err = api::start_battle(
        &state,
        StartBattleRequest {
            player_id: created.id,
            wild_monster: broken,
        },
    )
    .unwrap_err();
    assert!(matches!(err, GameError::Validation(_)));
}

#[test]
fn a_map_encounter_feeds_straight_into_a_battle() {
    use monster_quest::{Direction, MapConfig, MapSession, StepOutcome};

    let state = AppState::new();
    let created = registered_player(&state, "たんけんか");

    let mut session = MapSession::new(MapConfig::default());
    // Miss the first encounter check, hit the second, land on a common pick.
    let mut rng = GameRng::new_for_test(vec![100, 15, 1, 2]);

    assert!(matches!(
        session.step(Direction::Right, &mut rng),
        StepOutcome::Moved(_)
    ));
    let StepOutcome::Encounter(wild) = session.step(Direction::Right, &mut rng) else {
        panic!("second step should produce an encounter");
    };
    assert!(session.status_message().contains("とびだしてきた"));

    let battle = api::start_battle(
        &state,
        StartBattleRequest {
            player_id: created.id,
            wild_monster: wild,
        },
    )
    .unwrap();
    assert_eq!(battle.state, BattlePhase::Battle);
    assert_eq!(
        battle.wild_monster.current_hp,
        battle.wild_monster.max_hp
    );
}

#[test]
fn wire_shapes_use_camel_case_field_names() {
    let state = AppState::new();
    let created = registered_player(&state, "シリアライザ");

    let value = serde_json::to_value(&created).unwrap();
    assert!(value.get("initialMonsterId").is_some());

    let battle = api::start_battle(
        &state,
        StartBattleRequest {
            player_id: created.id.clone(),
            wild_monster: wild_at_hp("electric_mouse", 35),
        },
    )
    .unwrap();
    let value = serde_json::to_value(&battle).unwrap();
    assert!(value.get("battleId").is_some());
    assert!(value.get("playerId").is_some());
    assert_eq!(value["state"], "battle");
    assert!(value["wildMonster"].get("currentHp").is_some());
    assert!(value["wildMonster"].get("maxHp").is_some());

    let species = serde_json::to_value(api::list_species()).unwrap();
    assert_eq!(species["success"], true);
    assert_eq!(species["count"], species["data"].as_array().unwrap().len());
    assert_eq!(species["data"][0]["rarity"], "common");
    assert!(species["data"][0].get("baseHp").is_some());
}
