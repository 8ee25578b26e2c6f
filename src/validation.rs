//! Payload validation schemas.
//!
//! Each schema is a plain value compiled once at startup and exposes a pure
//! `validate` method: same input, same verdict, no I/O. Messages are the
//! user-facing Japanese strings shown by the client as-is.

use crate::errors::{ValidationError, ValidationResult};
use once_cell::sync::Lazy;
use regex::Regex;
use schema::BattleAction;

/// Characters permitted in player names and nicknames: ASCII letters and
/// digits, hiragana, katakana (plus the long-vowel mark), CJK ideographs
/// (plus the iteration mark), hyphen, and whitespace.
static NAME_CHARACTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9ぁ-んァ-ヶー一-龠々\-\s]+$").expect("valid pattern"));

/// Length- and character-constrained display name rule.
pub struct NameSchema {
    field: &'static str,
    label: &'static str,
    min_chars: usize,
    max_chars: usize,
}

/// Player name rule: 3 to 20 characters.
pub static PLAYER_NAME: NameSchema = NameSchema {
    field: "name",
    label: "名前",
    min_chars: 3,
    max_chars: 20,
};

/// Nickname rule: 1 to 20 characters.
pub static NICKNAME: NameSchema = NameSchema {
    field: "nickname",
    label: "ニックネーム",
    min_chars: 1,
    max_chars: 20,
};

impl NameSchema {
    /// Checks length first (in characters, not bytes), then the character
    /// policy, returning the trimmed-as-given value on success.
    pub fn validate(&self, input: &str) -> ValidationResult<String> {
        let length = input.chars().count();
        if length < self.min_chars {
            return Err(ValidationError::new(
                self.field,
                format!(
                    "{}が短すぎます（{}〜{}文字で入力してください）",
                    self.label, self.min_chars, self.max_chars
                ),
            ));
        }
        if length > self.max_chars {
            return Err(ValidationError::new(
                self.field,
                format!(
                    "{}が長すぎます（{}〜{}文字で入力してください）",
                    self.label, self.min_chars, self.max_chars
                ),
            ));
        }
        if !NAME_CHARACTERS.is_match(input) {
            return Err(ValidationError::new(
                self.field,
                format!("{}に使用できない文字が含まれています", self.label),
            ));
        }
        Ok(input.to_string())
    }
}

/// Parses a battle action token; only `fight`, `capture`, and `flee` pass.
pub fn validate_battle_action(input: &str) -> ValidationResult<BattleAction> {
    input.parse::<BattleAction>().map_err(|_| {
        ValidationError::new(
            "action",
            "アクションはfight・capture・fleeのいずれかを指定してください",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("abc")]
    #[case("テストプレイヤー")]
    #[case("でんきネズミつかい")]
    #[case("勇者ヒロ")]
    #[case("Player-01")]
    #[case("山 田 太 郎")]
    #[case("ちょうど二十文字になるなまえをかんがえた")]
    fn player_names_in_policy_are_accepted(#[case] name: &str) {
        assert_eq!(PLAYER_NAME.validate(name), Ok(name.to_string()));
    }

    #[rstest]
    #[case("", "短すぎます")]
    #[case("ab", "短すぎます")]
    #[case("あ", "短すぎます")]
    fn too_short_player_names_name_the_length_rule(#[case] name: &str, #[case] rule: &str) {
        let err = PLAYER_NAME.validate(name).unwrap_err();
        assert!(err.message.contains(rule), "message: {}", err.message);
        assert!(err.message.contains("3〜20文字"), "message: {}", err.message);
    }

    #[test]
    fn twenty_one_character_name_is_too_long() {
        let name = "あ".repeat(21);
        let err = PLAYER_NAME.validate(&name).unwrap_err();
        assert!(err.message.contains("長すぎます"), "message: {}", err.message);
        assert!(err.message.contains("3〜20文字"), "message: {}", err.message);
    }

    #[rstest]
    #[case("abc!")]
    #[case("name@home")]
    #[case("たろう☆")]
    #[case("semi;colon")]
    fn disallowed_characters_are_rejected(#[case] name: &str) {
        let err = PLAYER_NAME.validate(name).unwrap_err();
        assert!(
            err.message.contains("使用できない文字"),
            "message: {}",
            err.message
        );
    }

    #[test]
    fn nicknames_allow_a_single_character() {
        assert_eq!(NICKNAME.validate("ピ"), Ok("ピ".to_string()));
        let err = NICKNAME.validate("").unwrap_err();
        assert!(err.message.contains("1〜20文字"), "message: {}", err.message);
    }

    #[rstest]
    #[case("fight", BattleAction::Fight)]
    #[case("capture", BattleAction::Capture)]
    #[case("flee", BattleAction::Flee)]
    fn the_three_action_tokens_parse(#[case] token: &str, #[case] expected: BattleAction) {
        assert_eq!(validate_battle_action(token), Ok(expected));
    }

    #[rstest]
    #[case("attack")]
    #[case("FIGHT")]
    #[case("")]
    #[case("run")]
    fn unknown_action_tokens_are_rejected(#[case] token: &str) {
        let err = validate_battle_action(token).unwrap_err();
        assert_eq!(err.field, "action");
    }

    #[test]
    fn validators_are_deterministic() {
        for _ in 0..3 {
            assert!(PLAYER_NAME.validate("テストプレイヤー").is_ok());
            assert!(PLAYER_NAME.validate("!!").is_err());
        }
    }
}
