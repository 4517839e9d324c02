//! Player resource ledger.
//!
//! Mutated only by the two entity-lifecycle events from reconciliation;
//! never reads entity state. Kept in the sim crate beside the engine,
//! not as an ECS entity.

use serde::{Deserialize, Serialize};

use rampart_core::constants::{ESCAPE_PENALTY, INITIAL_CURRENCY, INITIAL_PLAYER_HEALTH};
use rampart_core::state::LedgerView;

/// Player health and currency. Both fields are unsigned and mutate
/// with saturating arithmetic, so neither can go negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResourceLedger {
    player_health: u32,
    currency: u32,
}

impl Default for ResourceLedger {
    fn default() -> Self {
        Self {
            player_health: INITIAL_PLAYER_HEALTH,
            currency: INITIAL_CURRENCY,
        }
    }
}

impl ResourceLedger {
    pub fn player_health(&self) -> u32 {
        self.player_health
    }

    pub fn currency(&self) -> u32 {
        self.currency
    }

    /// True once player health has been exhausted.
    pub fn is_depleted(&self) -> bool {
        self.player_health == 0
    }

    /// A mover was destroyed: credit its bounty.
    pub fn on_kill(&mut self, bounty: u32) {
        self.currency = self.currency.saturating_add(bounty);
    }

    /// A mover escaped: debit the fixed penalty, clamping at zero.
    pub fn on_escape(&mut self) {
        self.player_health = self.player_health.saturating_sub(ESCAPE_PENALTY);
    }

    pub fn view(&self) -> LedgerView {
        LedgerView {
            player_health: self.player_health,
            currency: self.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kill_credits_bounty() {
        let mut ledger = ResourceLedger::default();
        ledger.on_kill(5);
        ledger.on_kill(10);
        assert_eq!(ledger.currency(), INITIAL_CURRENCY + 15);
        assert_eq!(ledger.player_health(), INITIAL_PLAYER_HEALTH);
    }

    #[test]
    fn escape_debits_fixed_penalty() {
        let mut ledger = ResourceLedger::default();
        ledger.on_escape();
        assert_eq!(ledger.player_health(), INITIAL_PLAYER_HEALTH - ESCAPE_PENALTY);
        assert_eq!(ledger.currency(), INITIAL_CURRENCY);
    }

    #[test]
    fn health_clamps_at_zero() {
        let mut ledger = ResourceLedger::default();
        for _ in 0..(INITIAL_PLAYER_HEALTH + 50) {
            ledger.on_escape();
        }
        assert_eq!(ledger.player_health(), 0);
        assert!(ledger.is_depleted());
    }
}
