//! Score and respawn gate
//!
//! Every score mutation goes through here so the UI hears about it.

use serde::{Deserialize, Serialize};

use super::event::GameEvent;

/// Score plus the respawn re-entrancy gate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// May go negative
    score: i64,
    /// Set while the player is dying; blocks gravity updates and contacts
    is_game_over: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    /// Label text for the current score
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Player fell into a vortex
    pub fn apply_vortex(&mut self, events: &mut Vec<GameEvent>) {
        self.add_score(-1, events);
    }

    /// Player picked up a star
    pub fn apply_star(&mut self, events: &mut Vec<GameEvent>) {
        self.add_score(1, events);
    }

    pub fn begin_respawn_gate(&mut self) {
        self.is_game_over = true;
    }

    pub fn end_respawn_gate(&mut self) {
        self.is_game_over = false;
    }

    fn add_score(&mut self, delta: i64, events: &mut Vec<GameEvent>) {
        self.score += delta;
        log::debug!("{}", self.score_text());
        events.push(GameEvent::ScoreChanged { score: self.score });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_goes_negative() {
        let mut state = GameState::new();
        let mut events = Vec::new();
        state.apply_vortex(&mut events);
        state.apply_vortex(&mut events);
        assert_eq!(state.score(), -2);
        assert_eq!(state.score_text(), "Score: -2");
        assert_eq!(
            events,
            vec![
                GameEvent::ScoreChanged { score: -1 },
                GameEvent::ScoreChanged { score: -2 },
            ]
        );
    }

    #[test]
    fn test_every_mutation_notifies() {
        let mut state = GameState::new();
        let mut events = Vec::new();
        state.apply_star(&mut events);
        state.apply_vortex(&mut events);
        state.apply_star(&mut events);
        assert_eq!(state.score(), 1);
        assert_eq!(events.len(), 3);
        assert_eq!(events[2].score_text().as_deref(), Some("Score: 1"));
    }

    #[test]
    fn test_gate() {
        let mut state = GameState::new();
        assert!(!state.is_game_over());
        state.begin_respawn_gate();
        assert!(state.is_game_over());
        state.end_respawn_gate();
        assert!(!state.is_game_over());
    }
}
