//! Scene pointer state machine
//!
//! Pure pointer bookkeeping for one scene: current turn, current player,
//! current stage. Invariant: `0 <= stage_idx <= pipeline_len`, and the scene
//! is terminal exactly when the two are equal. The turn index is monotonic
//! non-decreasing and increments only at rollover.

use super::stage::Stage;
use serde::{Deserialize, Serialize};

/// Turn/player/stage pointers of a running scene.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenePointers {
    turn: u64,
    player_idx: usize,
    stage_idx: usize,
}

impl ScenePointers {
    /// Initial state: turn 0, player 0, stage 0 (Running).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn player_idx(&self) -> usize {
        self.player_idx
    }

    pub fn stage_idx(&self) -> usize {
        self.stage_idx
    }

    /// Terminal iff the stage pointer has walked off the end of the pipeline.
    pub fn is_terminal(&self, pipeline_len: usize) -> bool {
        self.stage_idx == pipeline_len
    }

    /// The stage currently pointed at, or None in the terminal state.
    pub fn current_stage<'a>(&self, pipeline: &'a [Stage]) -> Option<&'a Stage> {
        pipeline.get(self.stage_idx)
    }

    /// Advance the stage pointer by one. Saturates at `pipeline_len` so the
    /// upper-bound invariant cannot be broken by a stray extra call.
    pub fn advance_stage(&mut self, pipeline_len: usize) {
        if self.stage_idx < pipeline_len {
            self.stage_idx += 1;
        }
    }

    /// Single-player-per-stage convention: the player pointer cycles back to
    /// the roster head after every stage.
    pub fn reset_player(&mut self) {
        self.player_idx = 0;
    }

    /// Terminal-transition: increment the turn, rewind the stage pointer.
    pub fn rollover(&mut self) {
        self.turn += 1;
        self.stage_idx = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::stage::day_cycle_pipeline;

    #[test]
    fn test_initial_state_is_running() {
        let p = ScenePointers::new();
        assert_eq!(p.turn(), 0);
        assert_eq!(p.stage_idx(), 0);
        assert!(!p.is_terminal(6));
    }

    #[test]
    fn test_stage_pointer_stays_in_bounds() {
        let pipeline = day_cycle_pipeline();
        let mut p = ScenePointers::new();
        for _ in 0..pipeline.len() + 3 {
            assert!(p.stage_idx() <= pipeline.len());
            p.advance_stage(pipeline.len());
        }
        assert_eq!(p.stage_idx(), pipeline.len());
        assert!(p.is_terminal(pipeline.len()));
    }

    #[test]
    fn test_current_stage_none_when_terminal() {
        let pipeline = day_cycle_pipeline();
        let mut p = ScenePointers::new();
        assert!(p.current_stage(&pipeline).is_some());
        for _ in 0..pipeline.len() {
            p.advance_stage(pipeline.len());
        }
        assert!(p.current_stage(&pipeline).is_none());
    }

    #[test]
    fn test_turn_increments_only_at_rollover() {
        let pipeline = day_cycle_pipeline();
        let mut p = ScenePointers::new();
        for _ in 0..pipeline.len() {
            p.advance_stage(pipeline.len());
            assert_eq!(p.turn(), 0);
        }
        p.rollover();
        assert_eq!(p.turn(), 1);
        assert_eq!(p.stage_idx(), 0);
        assert!(!p.is_terminal(pipeline.len()));
    }

    #[test]
    fn test_reset_player() {
        let mut p = ScenePointers::new();
        p.reset_player();
        assert_eq!(p.player_idx(), 0);
    }
}
