use crate::battle::state::BattlerId;
use schema::Move;
use std::fmt;

/// Main error type for the battle engine.
///
/// Errors are reserved for programmer mistakes caught at registry load or
/// for structurally invalid calls (unknown battler slot). In-battle failure
/// — a missed move, a failed condition, an empty target set — is a routine
/// outcome and is reported through `MoveOutcome`, never through this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleEngineError {
    MoveData(MoveDataError),
    BattleState(BattleStateError),
}

/// Errors related to move registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveDataError {
    /// The specified move was not found in the registry
    MoveNotFound(Move),
    /// Move data failed registration-time validation
    MalformedData(String),
}

/// Errors related to battle state addressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleStateError {
    /// The referenced slot holds no battler
    NoBattler(BattlerId),
    /// The acting battler has no such move in its moveset
    MoveNotKnown(Move),
}

impl fmt::Display for BattleEngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleEngineError::MoveData(err) => write!(f, "Move data error: {}", err),
            BattleEngineError::BattleState(err) => write!(f, "Battle state error: {}", err),
        }
    }
}

impl fmt::Display for MoveDataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveDataError::MoveNotFound(move_) => write!(f, "Move not found: {:?}", move_),
            MoveDataError::MalformedData(details) => write!(f, "Malformed move data: {}", details),
        }
    }
}

impl fmt::Display for BattleStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleStateError::NoBattler(id) => {
                write!(f, "No battler at side {} slot {}", id.side, id.slot)
            }
            BattleStateError::MoveNotKnown(move_) => {
                write!(f, "Battler does not know move: {:?}", move_)
            }
        }
    }
}

impl std::error::Error for BattleEngineError {}
impl std::error::Error for MoveDataError {}
impl std::error::Error for BattleStateError {}

impl From<MoveDataError> for BattleEngineError {
    fn from(err: MoveDataError) -> Self {
        BattleEngineError::MoveData(err)
    }
}

impl From<BattleStateError> for BattleEngineError {
    fn from(err: BattleStateError) -> Self {
        BattleEngineError::BattleState(err)
    }
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;
