use crate::reveal::schedule::{RevealSchedule, RevealTiming};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Phase of a reveal run. Times are in milliseconds on the host clock.
pub enum Phase {
    /// Nothing scheduled. Also the terminal phase when there is nothing to reveal.
    Idle,
    /// Rects are being gathered; transient within a start.
    Collecting,
    /// Rects hidden and ordered; waiting for the settle delay to pass.
    Scheduled { settle_until: f64 },
    /// Timed window open since `started_at`.
    Running { started_at: f64 },
    /// Every rect visible; no more frames needed.
    Done,
}

#[derive(Clone, Debug, PartialEq)]
/// Pure reveal state. Transitions consume the state and return the next one.
pub struct RevealState {
    phase: Phase,
    timing: RevealTiming,
    schedule: RevealSchedule,
    revealed: usize,
}

impl RevealState {
    /// Idle state with no schedule.
    pub fn new(timing: RevealTiming) -> Self {
        Self {
            phase: Phase::Idle,
            timing,
            schedule: RevealSchedule::default(),
            revealed: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timing(&self) -> &RevealTiming {
        &self.timing
    }

    /// Offsets of the current run; empty outside a run.
    pub fn schedule(&self) -> &RevealSchedule {
        &self.schedule
    }

    /// Number of rects visible so far, as a prefix of the shuffled order.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Timestamp the timed window opened at, once running.
    pub fn start_time(&self) -> Option<f64> {
        match self.phase {
            Phase::Running { started_at } => Some(started_at),
            _ => None,
        }
    }

    /// Whether the host should keep delivering frames.
    pub fn wants_frame(&self) -> bool {
        matches!(self.phase, Phase::Scheduled { .. } | Phase::Running { .. })
    }

    /// Drop any previous run and enter [`Phase::Collecting`].
    ///
    /// Callers must cancel their pending frame first.
    pub fn begin(self) -> Self {
        Self {
            phase: Phase::Collecting,
            schedule: RevealSchedule::default(),
            revealed: 0,
            ..self
        }
    }

    /// Leave [`Phase::Collecting`] with `rect_count` rects gathered at `now`.
    ///
    /// Zero rects goes back to [`Phase::Idle`] for good.
    pub fn schedule_rects(self, rect_count: usize, now: f64) -> Self {
        if self.phase != Phase::Collecting {
            return self;
        }
        if rect_count == 0 {
            return Self {
                phase: Phase::Idle,
                ..self
            };
        }
        Self {
            phase: Phase::Scheduled {
                settle_until: now + self.timing.settle_ms,
            },
            schedule: RevealSchedule::new(rect_count, &self.timing),
            revealed: 0,
            ..self
        }
    }

    /// Step function: the state as of host time `now`.
    ///
    /// `revealed` never decreases within a run.
    pub fn advance(self, now: f64) -> Self {
        let mut next = self;
        if let Phase::Scheduled { settle_until } = next.phase {
            if now < settle_until {
                return next;
            }
            next.phase = Phase::Running { started_at: now };
        }

        let Phase::Running { started_at } = next.phase else {
            return next;
        };

        let elapsed = now - started_at;
        next.revealed = next.revealed.max(next.schedule.due_at(elapsed));
        if elapsed >= next.timing.duration_ms {
            next.revealed = next.schedule.len();
            next.phase = Phase::Done;
        }
        next
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/state.rs"]
mod tests;
