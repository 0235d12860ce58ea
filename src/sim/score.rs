//! Scoring and per-frame gameplay events

use serde::{Deserialize, Serialize};

use super::entity::Side;

/// Something notable that happened during an update pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the paddle on this side
    BallHitPaddle(Side),
    /// Ball bounced off the top or bottom wall
    BallHitWall,
    /// Ball left the screen; this side earns the point
    Scored(Side),
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Apply an event; only `Scored` changes the tally
    pub fn apply(&mut self, event: &GameEvent) {
        if let GameEvent::Scored(side) = event {
            self.award(*side);
        }
    }

    /// Scoreboard text, e.g. "3 : 1"
    pub fn label(&self) -> String {
        format!("{} : {}", self.left, self.right)
    }
}
