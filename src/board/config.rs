//! Rule toggles for the engine.

/// Switches for behavior that callers may want to relax.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RulesConfig {
    /// Only the side to move may drag pieces.
    pub enforce_turn_order: bool,
    /// Refuse all drags and drops once checkmate is declared.
    pub enforce_game_over: bool,
    /// Skip the "not in check, not through check" castling conditions and
    /// only require unmoved pieces and an empty path. The landing square is
    /// still checked like any other king destination.
    pub legacy_castling: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            enforce_turn_order: true,
            enforce_game_over: true,
            legacy_castling: false,
        }
    }
}

impl RulesConfig {
    /// Free-play board: anyone may move at any time.
    #[must_use]
    pub fn sandbox() -> Self {
        RulesConfig {
            enforce_turn_order: false,
            enforce_game_over: false,
            ..RulesConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enforce_rules() {
        let config = RulesConfig::default();
        assert!(config.enforce_turn_order);
        assert!(config.enforce_game_over);
        assert!(!config.legacy_castling);
    }

    #[test]
    fn test_sandbox_keeps_castling_rules() {
        let config = RulesConfig::sandbox();
        assert!(!config.enforce_turn_order);
        assert!(!config.enforce_game_over);
        assert!(!config.legacy_castling);
    }
}
