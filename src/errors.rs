use schema::BattlePhase;
use std::fmt;

/// Main error type for the monster-quest game
///
/// Every failure surfaced at the API boundary is one of these four
/// categories; the HTTP layer maps them onto status codes (validation 400,
/// not-found 404, state-conflict 409, infrastructure 500).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Malformed input; always recoverable, reported with a field-specific message
    Validation(ValidationError),
    /// Unknown player/monster/battle/species id
    NotFound(NotFoundError),
    /// Action submitted against a battle that has already concluded
    StateConflict(StateConflictError),
    /// Persistence or randomness source unavailable
    Infrastructure(InfrastructureError),
}

/// A rejected payload field together with the user-facing reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Wire name of the offending field (e.g. "name", "nickname", "action")
    pub field: &'static str,
    /// User-facing Japanese message identifying which rule failed
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Errors for lookups that came back empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    Player(String),
    Monster(String),
    Battle(String),
    Species(String),
}

/// Errors for actions that are valid in shape but not in the current state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateConflictError {
    /// The battle reached a terminal phase and accepts no further actions
    BattleConcluded {
        battle_id: String,
        phase: BattlePhase,
    },
}

/// Errors signalling a broken environment rather than bad input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfrastructureError {
    /// The cryptographically strong randomness source is unavailable.
    /// Fatal for externally visible identifiers; never silently degraded.
    RandomnessUnavailable,
    /// The in-process store could not be read or written
    StoreUnavailable(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Validation(err) => write!(f, "{}", err),
            GameError::NotFound(err) => write!(f, "{}", err),
            GameError::StateConflict(err) => write!(f, "{}", err),
            GameError::Infrastructure(err) => write!(f, "{}", err),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundError::Player(id) => write!(f, "プレイヤーが見つかりません: {}", id),
            NotFoundError::Monster(id) => write!(f, "モンスターが見つかりません: {}", id),
            NotFoundError::Battle(id) => write!(f, "バトルが見つかりません: {}", id),
            NotFoundError::Species(id) => write!(f, "モンスター種が見つかりません: {}", id),
        }
    }
}

impl fmt::Display for StateConflictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateConflictError::BattleConcluded { battle_id, phase } => write!(
                f,
                "バトルはすでに終了しています (battle {}, phase {})",
                battle_id, phase
            ),
        }
    }
}

impl fmt::Display for InfrastructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InfrastructureError::RandomnessUnavailable => {
                write!(f, "安全な乱数源が利用できません")
            }
            InfrastructureError::StoreUnavailable(details) => {
                write!(f, "データストアにアクセスできません: {}", details)
            }
        }
    }
}

impl std::error::Error for GameError {}
impl std::error::Error for ValidationError {}
impl std::error::Error for NotFoundError {}
impl std::error::Error for StateConflictError {}
impl std::error::Error for InfrastructureError {}

impl From<ValidationError> for GameError {
    fn from(err: ValidationError) -> Self {
        GameError::Validation(err)
    }
}

impl From<NotFoundError> for GameError {
    fn from(err: NotFoundError) -> Self {
        GameError::NotFound(err)
    }
}

impl From<StateConflictError> for GameError {
    fn from(err: StateConflictError) -> Self {
        GameError::StateConflict(err)
    }
}

impl From<InfrastructureError> for GameError {
    fn from(err: InfrastructureError) -> Self {
        GameError::Infrastructure(err)
    }
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

/// Type alias for Results using ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
