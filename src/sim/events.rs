//! Outbound game events
//!
//! Events are timestamped on the simulation clock and drained by the host
//! after each tick. Delayed cues (the wrong-catch double buzz) sit in the
//! queue until their due time instead of relying on host timers.

use serde::{Deserialize, Serialize};

/// Something collaborators may react to (sound, persistence, effects)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new recipe was drawn
    OrderStarted { recipe: String },
    /// Expected ingredient caught; `combo` is the updated combo
    CatchMatch { combo: u32 },
    CatchMismatch,
    /// Second buzz following a mismatch
    MismatchEcho,
    CatchRotten,
    CatchGolden,
    OrderComplete { recipe: String },
    LevelUp { level: u32 },
    PauseToggled { paused: bool },
    MuteToggled { muted: bool },
    GameOver { score: u64 },
    /// Persistence request: a new best score should be stored
    NewBestScore { score: u64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Scheduled {
    due: f64,
    seq: u64,
    event: GameEvent,
}

/// Deterministically ordered event queue
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventQueue {
    scheduled: Vec<Scheduled>,
    next_seq: u64,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event due at `now`
    pub fn push(&mut self, now: f64, event: GameEvent) {
        self.push_at(now, event);
    }

    /// Queue an event that becomes due at `due`
    pub fn push_at(&mut self, due: f64, event: GameEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.scheduled.push(Scheduled { due, seq, event });
    }

    /// Remove and return every event due at or before `now`, ordered by
    /// due time then insertion order
    pub fn drain_due(&mut self, now: f64) -> Vec<GameEvent> {
        let mut due: Vec<Scheduled> = Vec::new();
        self.scheduled.retain(|s| {
            if s.due <= now {
                due.push(s.clone());
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)));
        due.into_iter().map(|s| s.event).collect()
    }

    /// Drop scheduled cues that are not due yet. Events already due stay
    /// queued for the next drain.
    pub fn cancel_pending(&mut self, now: f64) {
        self.scheduled.retain(|s| s.due <= now);
    }

    /// Number of events not yet drained (due or pending)
    pub fn len(&self) -> usize {
        self.scheduled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scheduled.is_empty()
    }

    pub fn clear(&mut self) {
        self.scheduled.clear();
    }
}
