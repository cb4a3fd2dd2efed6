//! Turn sources: who is placing the next mark.
//!
//! The grid never decides whose turn it is. It asks a [`TurnSource`] once
//! per placement and trusts the answer.

use crate::config::ConfigError;
use crate::player::PlayerId;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Supplies the identity of the player making the current move.
pub trait TurnSource {
    /// Returns the player whose mark is being placed right now.
    fn current_player(&self) -> PlayerId;
}

impl<F> TurnSource for F
where
    F: Fn() -> PlayerId,
{
    fn current_player(&self) -> PlayerId {
        self()
    }
}

/// Cycles through a fixed, ordered list of players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternatingTurns {
    players: Vec<PlayerId>,
    cursor: usize,
}

impl AlternatingTurns {
    /// Creates a rotation over `players`, starting with the first.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the list is empty or names a player twice.
    #[instrument(skip(players), fields(count = players.len()))]
    pub fn new(players: Vec<PlayerId>) -> Result<Self, ConfigError> {
        if players.is_empty() {
            return Err(ConfigError::new("Turn order needs at least one player"));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = players.iter().find(|p| !seen.insert(**p)) {
            return Err(ConfigError::new(format!(
                "Player {} appears twice in turn order",
                dup
            )));
        }

        Ok(Self { players, cursor: 0 })
    }

    /// Classic two-player rotation: player 1, then player 2.
    pub fn two_player() -> Self {
        Self {
            players: vec![PlayerId::new(1), PlayerId::new(2)],
            cursor: 0,
        }
    }

    /// Passes the turn to the next player in order.
    #[instrument(skip(self))]
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.players.len();
        debug!(next = %self.players[self.cursor], "Turn advanced");
    }

    /// Hands the turn back to the first player.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Returns the turn order.
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }
}

impl TurnSource for AlternatingTurns {
    fn current_player(&self) -> PlayerId {
        self.players[self.cursor]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_turn_source() {
        let source = || PlayerId::new(7);
        assert_eq!(source.current_player(), PlayerId::new(7));
    }

    #[test]
    fn test_two_player_alternates() {
        let mut turns = AlternatingTurns::two_player();
        assert_eq!(turns.current_player(), PlayerId::new(1));
        turns.advance();
        assert_eq!(turns.current_player(), PlayerId::new(2));
        turns.advance();
        assert_eq!(turns.current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_three_players_wrap_around() {
        let ids: Vec<_> = [4, 5, 6].into_iter().map(PlayerId::new).collect();
        let mut turns = AlternatingTurns::new(ids.clone()).unwrap();
        let seen: Vec<_> = (0..4)
            .map(|_| {
                let p = turns.current_player();
                turns.advance();
                p
            })
            .collect();
        assert_eq!(seen, vec![ids[0], ids[1], ids[2], ids[0]]);
    }

    #[test]
    fn test_reset_returns_to_first() {
        let mut turns = AlternatingTurns::two_player();
        turns.advance();
        turns.reset();
        assert_eq!(turns.current_player(), PlayerId::new(1));
    }

    #[test]
    fn test_rejects_empty_and_duplicates() {
        assert!(AlternatingTurns::new(Vec::new()).is_err());
        let err = AlternatingTurns::new(vec![PlayerId::new(1), PlayerId::new(1)]).unwrap_err();
        assert!(err.message.contains("twice"));
    }
}
