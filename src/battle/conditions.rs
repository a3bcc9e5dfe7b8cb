use schema::{Move, RampageEnd};
use serde::{Deserialize, Serialize};

/// Timed per-battler effect records.
///
/// A tag couples a kind-specific payload with a remaining-turn counter and
/// (where it matters) the move that originated it. Clauses add and remove
/// tags; the end-of-turn phase lapses them, firing expiry behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BattlerTag {
    Flinched,
    Confused { turns_remaining: u8 },
    Seeded,
    Trapped { turns_remaining: u8, source: Move },
    Disabled { move_: Move, turns_remaining: u8 },
    /// The next damaging move this battler uses is boosted by an ally.
    HelpingHand,
    /// Committed to releasing a charge move next turn.
    Charging { move_: Move },
    /// Semi-invulnerable during a charge turn.
    Airborne,
    /// Locked into repeating a rampage move.
    Rampaging {
        move_: Move,
        turns_remaining: u8,
        end: RampageEnd,
    },
    /// Shielded from incoming moves for the rest of the turn.
    Protected,
}

/// Tag kind without payload, used as the store key and for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TagKind {
    Flinched,
    Confused,
    Seeded,
    Trapped,
    Disabled,
    HelpingHand,
    Charging,
    Airborne,
    Rampaging,
    Protected,
}

impl BattlerTag {
    pub fn kind(&self) -> TagKind {
        match self {
            BattlerTag::Flinched => TagKind::Flinched,
            BattlerTag::Confused { .. } => TagKind::Confused,
            BattlerTag::Seeded => TagKind::Seeded,
            BattlerTag::Trapped { .. } => TagKind::Trapped,
            BattlerTag::Disabled { .. } => TagKind::Disabled,
            BattlerTag::HelpingHand => TagKind::HelpingHand,
            BattlerTag::Charging { .. } => TagKind::Charging,
            BattlerTag::Airborne => TagKind::Airborne,
            BattlerTag::Rampaging { .. } => TagKind::Rampaging,
            BattlerTag::Protected => TagKind::Protected,
        }
    }

    /// End-of-turn lapse. Returns false when the tag has expired and must be
    /// removed. Tags without a turn counter persist until removed explicitly
    /// or cleared by the single-turn sweep.
    pub fn lapse(&mut self) -> bool {
        match self {
            BattlerTag::Confused { turns_remaining }
            | BattlerTag::Trapped {
                turns_remaining, ..
            }
            | BattlerTag::Disabled {
                turns_remaining, ..
            } => {
                *turns_remaining = turns_remaining.saturating_sub(1);
                *turns_remaining > 0
            }
            // Cleared at the end of the turn they were applied.
            BattlerTag::Flinched | BattlerTag::Protected | BattlerTag::HelpingHand => false,
            // Persists until cured or the battler leaves the field.
            BattlerTag::Seeded => true,
            // Managed by the charge/rampage state machines, not the lapse sweep.
            BattlerTag::Charging { .. } | BattlerTag::Airborne | BattlerTag::Rampaging { .. } => {
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counted_tags_expire_at_zero() {
        let mut tag = BattlerTag::Confused { turns_remaining: 2 };
        assert!(tag.lapse());
        assert!(!tag.lapse());
    }

    #[test]
    fn test_single_turn_tags_expire_immediately() {
        assert!(!BattlerTag::Flinched.lapse());
        assert!(!BattlerTag::Protected.lapse());
    }

    #[test]
    fn test_state_machine_tags_survive_the_sweep() {
        let mut tag = BattlerTag::Charging { move_: Move::Fly };
        assert!(tag.lapse());
        let mut tag = BattlerTag::Rampaging {
            move_: Move::Thrash,
            turns_remaining: 1,
            end: RampageEnd::Confuse,
        };
        assert!(tag.lapse());
    }
}
